//! Watering-can meter.
//!
//! The level counts up from a negative "full" value toward 0. Anything below
//! 0 means water is left.

use crate::config::MeterRules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterMeter {
    fill_level: i32,
    full: i32,
    drain_step: i32,
}

impl WaterMeter {
    /// A meter that starts full.
    pub fn new(rules: &MeterRules) -> Self {
        Self {
            fill_level: rules.full,
            full: rules.full,
            drain_step: rules.drain_step,
        }
    }

    pub fn fill_level(&self) -> i32 {
        self.fill_level
    }

    pub fn fill(&mut self) {
        self.fill_level = self.full;
    }

    pub fn drain(&mut self) {
        if self.fill_level < 0 {
            self.fill_level = (self.fill_level + self.drain_step).min(0);
        }
    }

    pub fn has_water(&self) -> bool {
        self.fill_level < 0
    }

    /// 1.0 when full, 0.0 when empty.
    pub fn fraction_remaining(&self) -> f32 {
        self.fill_level as f32 / self.full as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_meter_is_full() {
        let meter = WaterMeter::new(&MeterRules::default());
        assert_eq!(meter.fill_level(), -200);
        assert!(meter.has_water());
        assert_eq!(meter.fraction_remaining(), 1.0);
    }

    #[test]
    fn test_ten_drains_empty_the_default_meter() {
        let mut meter = WaterMeter::new(&MeterRules::default());
        for _ in 0..9 {
            meter.drain();
            assert!(meter.has_water());
        }
        meter.drain();
        assert_eq!(meter.fill_level(), 0);
        assert!(!meter.has_water());
        assert_eq!(meter.fraction_remaining(), 0.0);
    }

    #[test]
    fn test_drain_never_overshoots() {
        let mut meter = WaterMeter::new(&MeterRules { full: -30, drain_step: 20 });
        meter.drain();
        assert_eq!(meter.fill_level(), -10);
        meter.drain();
        assert_eq!(meter.fill_level(), 0);
        meter.drain();
        assert_eq!(meter.fill_level(), 0);
    }

    #[test]
    fn test_fill_restores_full() {
        let mut meter = WaterMeter::new(&MeterRules::default());
        meter.drain();
        meter.drain();
        meter.fill();
        assert_eq!(meter.fill_level(), -200);
    }

    proptest! {
        #[test]
        fn level_stays_between_full_and_empty(ops in prop::collection::vec(any::<bool>(), 0..200)) {
            let rules = MeterRules::default();
            let mut meter = WaterMeter::new(&rules);
            for fill in ops {
                if fill {
                    meter.fill();
                } else {
                    let before = meter.fill_level();
                    meter.drain();
                    prop_assert!(meter.fill_level() >= before);
                }
                prop_assert!(meter.fill_level() <= 0);
                prop_assert!(meter.fill_level() >= rules.full);
            }
        }

        #[test]
        fn repeated_drains_settle_at_empty(full in -1000i32..-1, step in 1i32..100, extra in 0usize..20) {
            let mut meter = WaterMeter::new(&MeterRules { full, drain_step: step });
            let needed = (-full + step - 1) / step;
            for _ in 0..(needed as usize + extra) {
                meter.drain();
            }
            prop_assert_eq!(meter.fill_level(), 0);
        }
    }
}
