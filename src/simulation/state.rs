//! The aggregate root: everything one session owns.

use bevy::prelude::*;
use rand::Rng;

use crate::config::GameConfig;
use crate::farming::{TileGrid, WaterMeter};
use crate::ghosts::Ghost;
use crate::shared::*;
use super::SimulationClock;

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: TileGrid,
    /// Append-only.
    pub ghosts: Vec<Ghost>,
    pub seeds: u32,
    pub pumpkins: u32,
    pub score: u32,
    pub meter: WaterMeter,
    pub clock: SimulationClock,
}

impl GameState {
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let (x, y) = config.ghosts.initial;
        Self {
            grid: TileGrid::generate(config, rng),
            ghosts: vec![Ghost::new(Vec2::new(x, y))],
            seeds: config.starting_seeds,
            pumpkins: 0,
            score: 0,
            meter: WaterMeter::new(&config.meter),
            clock: SimulationClock::new(config.starting_seconds, config.ticks_per_second),
        }
    }

    /// Score is never stored independently of the harvest count.
    pub fn recompute_score(&mut self, points_per_pumpkin: u32) {
        self.score = self.pumpkins * points_per_pumpkin;
    }

    pub fn phase(&self) -> GamePhase {
        if self.clock.is_running() {
            GamePhase::Playing
        } else {
            GamePhase::GameOver
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fresh_state_matches_config() {
        let config = GameConfig::default();
        let state = GameState::new(&config, &mut StdRng::seed_from_u64(1));
        assert_eq!(state.grid.len(), 196);
        assert_eq!(state.ghosts.len(), 1);
        assert_eq!(state.ghosts[0].position, Vec2::new(-50.0, -50.0));
        assert_eq!(state.seeds, 1);
        assert_eq!(state.pumpkins, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.clock.seconds(), 300);
        assert_eq!(state.clock.ticks(), 0);
        assert!(state.meter.has_water());
        assert_eq!(state.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_score_tracks_pumpkins() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, &mut StdRng::seed_from_u64(2));
        state.pumpkins = 7;
        state.recompute_score(config.points_per_pumpkin);
        assert_eq!(state.score, 700);
    }

    #[test]
    fn test_phase_flips_below_zero_seconds() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, &mut StdRng::seed_from_u64(3));
        state.clock.set_seconds(0);
        assert_eq!(state.phase(), GamePhase::Playing);
        state.clock.set_seconds(-1);
        assert_eq!(state.phase(), GamePhase::GameOver);
    }
}
