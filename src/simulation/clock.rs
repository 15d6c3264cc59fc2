//! Countdown driven purely by tick counting.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationClock {
    ticks: u32,
    seconds: i32,
    ticks_per_second: u32,
}

impl SimulationClock {
    pub fn new(seconds: i32, ticks_per_second: u32) -> Self {
        Self {
            ticks: 0,
            seconds,
            ticks_per_second,
        }
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn seconds(&self) -> i32 {
        self.seconds
    }

    /// Count one tick. Every `ticks_per_second` ticks a second comes off the
    /// countdown and the tick counter starts over. Returns true when that
    /// happened.
    pub fn advance(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= self.ticks_per_second {
            self.ticks = 0;
            self.seconds -= 1;
            return true;
        }
        false
    }

    /// The game keeps running while the countdown is above -1.
    pub fn is_running(&self) -> bool {
        self.seconds > -1
    }

    pub fn set_seconds(&mut self, seconds: i32) {
        self.seconds = seconds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundred_ticks_take_one_second() {
        let mut clock = SimulationClock::new(300, 100);
        for _ in 0..99 {
            assert!(!clock.advance());
        }
        assert_eq!(clock.seconds(), 300);
        assert_eq!(clock.ticks(), 99);
        assert!(clock.advance());
        assert_eq!(clock.seconds(), 299);
        assert_eq!(clock.ticks(), 0);
    }

    #[test]
    fn test_still_running_at_zero_seconds() {
        let mut clock = SimulationClock::new(0, 1);
        assert!(clock.is_running());
        clock.advance();
        assert_eq!(clock.seconds(), -1);
        assert!(!clock.is_running());
    }
}
