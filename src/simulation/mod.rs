//! Simulation domain: the session state, the countdown and the fixed-step
//! loop that drives everything.
//!
//! The loop itself is plain Rust (`UpdateLoop::tick`). This plugin only wires
//! it into Bevy's `FixedUpdate` schedule and mirrors its phase into
//! `State<GamePhase>` for host systems that care.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::shared::*;
use crate::ui::audio::AudioQueue;
use crate::ui::draw_list::DrawList;

mod actions;
mod clock;
mod state;
mod update_loop;

pub use actions::{apply_pointer_release, PointerOutcome};
pub use clock::SimulationClock;
pub use state::GameState;
pub use update_loop::{TickOutcome, UpdateLoop};

pub struct SimulationPlugin {
    pub config: GameConfig,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(self.config.tick_hz))
            .insert_resource(Canvas {
                size: self.config.canvas_size,
            })
            .insert_resource(UpdateLoop::new(self.config.clone()))
            .init_resource::<TickInput>()
            .init_resource::<DrawList>()
            .init_resource::<AudioQueue>()
            .init_state::<GamePhase>()
            .add_systems(Startup, announce_session)
            .add_systems(FixedUpdate, (run_tick, sync_game_phase).chain())
            .add_systems(OnEnter(GamePhase::GameOver), log_game_over)
            .add_systems(OnExit(GamePhase::GameOver), announce_session);
    }
}

// ─── Systems ──────────────────────────────────────────────────────────────────

/// One fixed step. Holds every resource the tick touches, so no other system
/// ever sees a half-applied tick.
pub fn run_tick(
    mut update_loop: ResMut<UpdateLoop>,
    mut input: ResMut<TickInput>,
    mut draw_list: ResMut<DrawList>,
    mut audio: ResMut<AudioQueue>,
) {
    update_loop.tick(&mut input, &mut *draw_list, &mut *audio);
}

/// Mirror the session's phase into the Bevy state machine.
pub fn sync_game_phase(
    update_loop: Res<UpdateLoop>,
    phase: Res<State<GamePhase>>,
    mut next_phase: ResMut<NextState<GamePhase>>,
) {
    let current = update_loop.state().phase();
    if *phase.get() != current {
        next_phase.set(current);
    }
}

fn announce_session(update_loop: Res<UpdateLoop>) {
    let state = update_loop.state();
    info!(
        "[Session] Session {} on a {}x{} field: {} seeds, {} seconds",
        update_loop.sessions(),
        state.grid.columns(),
        state.grid.rows(),
        state.seeds,
        state.clock.seconds()
    );
}

fn log_game_over(update_loop: Res<UpdateLoop>) {
    let state = update_loop.state();
    info!(
        "[Session] Game over after session {}: score {} ({} ghosts roaming)",
        update_loop.sessions(),
        state.score,
        state.ghosts.len()
    );
}
