//! The loop owner: one fixed step of the whole game, and restart.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::ghosts::spawn_due_ghosts;
use crate::shared::*;
use crate::shared::AudioSink;
use crate::ui::hud;
use super::{apply_pointer_release, GameState, PointerOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The old session was torn down and a fresh one built.
    Restarted,
    /// Tiles and ghosts advanced; carries what a pointer release did, if one
    /// was pending.
    Played(Option<PointerOutcome>),
    /// Countdown expired; only the summary was drawn.
    GameOver,
}

/// Owns the running session and the generator that rolls every new field.
///
/// Restart replaces the session in place, so there is never more than one
/// `GameState` being stepped.
#[derive(Resource, Debug)]
pub struct UpdateLoop {
    config: GameConfig,
    rng: StdRng,
    state: GameState,
    sessions: u32,
    game_over_seen: bool,
}

impl UpdateLoop {
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = GameState::new(&config, &mut rng);
        Self {
            config,
            rng,
            state,
            sessions: 1,
            game_over_seen: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Sessions started so far, counting the first.
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Advance the game by one fixed step.
    pub fn tick(
        &mut self,
        input: &mut TickInput,
        draw: &mut impl DrawSink,
        audio: &mut impl AudioSink,
    ) -> TickOutcome {
        if std::mem::take(&mut input.restart_requested) {
            input.pointer_released = false;
            self.restart(draw, audio);
            return TickOutcome::Restarted;
        }

        self.state.clock.advance();
        self.state.recompute_score(self.config.points_per_pumpkin);

        if !self.state.clock.is_running() {
            if !self.game_over_seen {
                self.game_over_seen = true;
                audio.stop_cue(CueId::Alert);
                info!(
                    "[Clock] Time is up: {} pumpkins, final score {}",
                    self.state.pumpkins, self.state.score
                );
            }
            hud::draw_game_over(&self.state, &self.config, draw);
            return TickOutcome::GameOver;
        }

        hud::draw_scene(&self.state, input.pointer, &self.config, draw);

        let pointer_outcome = if std::mem::take(&mut input.pointer_released) {
            Some(apply_pointer_release(&mut self.state, input.pointer, &self.config, audio))
        } else {
            None
        };

        for tile in self.state.grid.iter_mut() {
            tile.grow(&self.config.growth);
        }

        let GameState { grid, ghosts, .. } = &mut self.state;
        for ghost in ghosts.iter_mut() {
            ghost.search(grid, &self.config.ghosts, audio);
        }

        spawn_due_ghosts(&mut self.state.ghosts, self.state.pumpkins, &self.config.ghosts);

        TickOutcome::Played(pointer_outcome)
    }

    /// Stop every sound, wipe the screen and start a brand-new session with
    /// freshly rolled terrain.
    pub fn restart(&mut self, draw: &mut impl DrawSink, audio: &mut impl AudioSink) {
        for cue in CueId::ALL {
            audio.stop_cue(cue);
        }
        draw.clear_and_fill_background(BACKGROUND_COLOR);

        let mut session_rng = StdRng::seed_from_u64(self.rng.gen());
        self.state = GameState::new(&self.config, &mut session_rng);
        self.sessions += 1;
        self.game_over_seen = false;
        info!("[Session] Restarted, session {} begins", self.sessions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::farming::Tile;
    use crate::ui::audio::{AudioCommand, AudioQueue};
    use crate::ui::draw_list::DrawList;

    fn seeded_loop(seed: u64) -> UpdateLoop {
        UpdateLoop::new(GameConfig {
            rng_seed: Some(seed),
            ..Default::default()
        })
    }

    fn centre(tile: &Tile) -> Vec2 {
        tile.position + Vec2::splat(25.0)
    }

    fn first_empty(state: &GameState) -> (usize, usize) {
        let tile = state
            .grid
            .iter()
            .find(|t| t.state == TileState::Empty)
            .expect("seeded field has empty soil");
        (tile.col, tile.row)
    }

    struct Harness {
        game: UpdateLoop,
        input: TickInput,
        draw: DrawList,
        audio: AudioQueue,
    }

    impl Harness {
        fn new(seed: u64) -> Self {
            Self {
                game: seeded_loop(seed),
                input: TickInput::default(),
                draw: DrawList::default(),
                audio: AudioQueue::default(),
            }
        }

        fn tick(&mut self) -> TickOutcome {
            self.game.tick(&mut self.input, &mut self.draw, &mut self.audio)
        }

        fn release(&mut self, at: Vec2) -> TickOutcome {
            self.input.release_at(at);
            self.tick()
        }
    }

    #[test]
    fn test_hundred_ticks_cost_one_second() {
        let mut h = Harness::new(1);
        for _ in 0..99 {
            h.tick();
        }
        assert_eq!(h.game.state().clock.seconds(), 300);
        h.tick();
        assert_eq!(h.game.state().clock.seconds(), 299);
        assert_eq!(h.game.state().clock.ticks(), 0);
    }

    #[test]
    fn test_pointer_flag_cleared_after_each_branch() {
        let mut h = Harness::new(2);
        let outcome = h.release(Vec2::new(5.0, 5.0));
        assert_eq!(outcome, TickOutcome::Played(Some(PointerOutcome::OffGrid)));
        assert!(!h.input.pointer_released);
        assert_eq!(h.tick(), TickOutcome::Played(None));
    }

    #[test]
    fn test_grow_a_pumpkin_through_the_loop() {
        let mut h = Harness::new(3);
        let (col, row) = first_empty(h.game.state());
        let at = centre(h.game.state().grid.at(col, row).unwrap());

        assert_eq!(h.release(at), TickOutcome::Played(Some(PointerOutcome::Watered)));
        assert_eq!(h.release(at), TickOutcome::Played(Some(PointerOutcome::Planted)));
        assert_eq!(h.game.state().seeds, 0);

        // Keep the seed watered: rewater whenever it dries out.
        let mut ticks = 0;
        while h.game.state().grid.at(col, row).unwrap().state == TileState::HasSeed {
            if !h.game.state().grid.at(col, row).unwrap().is_watered {
                h.input.release_at(at);
            }
            h.tick();
            ticks += 1;
            assert!(ticks < 1_000, "seed never matured");
        }
        assert_eq!(h.game.state().grid.at(col, row).unwrap().state, TileState::HasPumpkin);

        assert_eq!(h.release(at), TickOutcome::Played(Some(PointerOutcome::Harvested)));
        let state = h.game.state();
        assert_eq!(state.seeds, 2);
        assert_eq!(state.pumpkins, 1);
        h.tick();
        assert_eq!(h.game.state().score, 100);
    }

    #[test]
    fn test_ghost_chases_while_pumpkin_stands() {
        let mut h = Harness::new(4);
        let (col, row) = first_empty(h.game.state());
        {
            let tile = h.game.state_mut().grid.at_mut(col, row).unwrap();
            tile.state = TileState::HasPumpkin;
            tile.growth = 100.0;
        }
        h.tick();
        assert_eq!(h.game.state().ghosts[0].position, Vec2::new(-48.0, -48.0));
        assert!(h.audio.pending().contains(&AudioCommand::Play(CueId::Alert)));
    }

    #[test]
    fn test_spawn_fires_on_the_tick_pumpkins_hit_25() {
        let mut h = Harness::new(5);
        h.game.state_mut().pumpkins = 24;
        h.tick();
        assert_eq!(h.game.state().ghosts.len(), 1);
        h.game.state_mut().pumpkins = 25;
        h.tick();
        assert_eq!(h.game.state().ghosts.len(), 2);
        h.tick();
        h.game.state_mut().pumpkins = 26;
        h.tick();
        assert_eq!(h.game.state().ghosts.len(), 2);
    }

    #[test]
    fn test_expired_clock_freezes_the_field() {
        let mut h = Harness::new(6);
        let (col, row) = first_empty(h.game.state());
        {
            let state = h.game.state_mut();
            let tile = state.grid.at_mut(col, row).unwrap();
            tile.state = TileState::HasSeed;
            tile.is_watered = true;
            tile.growth = 10.0;
            state.pumpkins = 3;
            state.clock.set_seconds(0);
        }
        for _ in 0..99 {
            assert!(matches!(h.tick(), TickOutcome::Played(_)));
        }
        let frozen_growth = h.game.state().grid.at(col, row).unwrap().growth;
        let frozen_ghosts = h.game.state().ghosts.clone();

        assert_eq!(h.tick(), TickOutcome::GameOver);
        assert_eq!(h.game.state().phase(), GamePhase::GameOver);
        assert!(h.draw.texts().any(|t| t == "Game Over"));
        assert!(h.draw.texts().any(|t| t.contains("300")));
        assert!(h.audio.pending().contains(&AudioCommand::Stop(CueId::Alert)));

        h.input.release_at(centre(h.game.state().grid.at(col, row).unwrap()));
        for _ in 0..50 {
            assert_eq!(h.tick(), TickOutcome::GameOver);
        }
        assert_eq!(h.game.state().grid.at(col, row).unwrap().growth, frozen_growth);
        assert_eq!(h.game.state().ghosts, frozen_ghosts);
    }

    #[test]
    fn test_restart_builds_a_fresh_session() {
        let mut h = Harness::new(7);
        {
            let state = h.game.state_mut();
            state.pumpkins = 30;
            state.seeds = 9;
            state.clock.set_seconds(-1);
        }
        h.tick();
        assert_eq!(h.game.state().phase(), GamePhase::GameOver);

        h.input.restart_requested = true;
        h.input.pointer_released = true;
        assert_eq!(h.tick(), TickOutcome::Restarted);
        assert!(!h.input.restart_requested);
        assert!(!h.input.pointer_released);
        assert_eq!(h.game.sessions(), 2);
        for cue in CueId::ALL {
            assert!(h.audio.pending().contains(&AudioCommand::Stop(cue)));
        }

        let state = h.game.state();
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.seeds, 1);
        assert_eq!(state.pumpkins, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.clock.seconds(), 300);
        assert_eq!(state.clock.ticks(), 0);
        assert_eq!(state.ghosts.len(), 1);
        assert_eq!(state.grid.len(), 196);
        assert_eq!(state.grid.count(TileState::IsWell), 1);
        assert!(state.grid.iter().all(|t| !t.is_watered && t.growth == 0.0));

        assert!(matches!(h.tick(), TickOutcome::Played(None)));
    }

    #[test]
    fn test_restart_rerolls_terrain() {
        let mut h = Harness::new(8);
        let before: Vec<TileState> = h.game.state().grid.iter().map(|t| t.state).collect();
        h.input.restart_requested = true;
        h.tick();
        let after: Vec<TileState> = h.game.state().grid.iter().map(|t| t.state).collect();
        assert_ne!(before, after);
    }
}
