//! What a pointer release does to the tile under it.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::shared::*;
use crate::shared::AudioSink;
use super::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Planted,
    Harvested,
    RefilledMeter,
    Watered,
    /// Released over terrain, or the action was blocked by an empty seed
    /// bag, an empty meter or an already watered tile.
    Ignored,
    /// Released with no tile under the pointer.
    OffGrid,
}

/// Apply one pointer release at `pointer`. Exactly one branch runs.
pub fn apply_pointer_release(
    state: &mut GameState,
    pointer: Option<Vec2>,
    config: &GameConfig,
    audio: &mut impl AudioSink,
) -> PointerOutcome {
    let Some(index) = pointer.and_then(|p| state.grid.tile_under(p)) else {
        debug!("[Farm] Release at {:?} is off the field", pointer);
        return PointerOutcome::OffGrid;
    };
    let GameState { grid, seeds, pumpkins, meter, .. } = state;
    let Some(tile) = grid.get_mut(index) else {
        return PointerOutcome::OffGrid;
    };

    let outcome = if tile.state == TileState::Empty && tile.is_watered && *seeds > 0 {
        tile.plant();
        *seeds -= 1;
        PointerOutcome::Planted
    } else if tile.state == TileState::HasPumpkin {
        *seeds += config.seeds_per_harvest;
        *pumpkins += 1;
        tile.harvest();
        PointerOutcome::Harvested
    } else if tile.state == TileState::IsWell {
        meter.fill();
        audio.play_cue(CueId::Fill);
        PointerOutcome::RefilledMeter
    } else if !matches!(tile.state, TileState::HasTree | TileState::HasStone) {
        if meter.has_water() && !tile.is_watered {
            tile.water();
            audio.play_cue(CueId::Drop);
            meter.drain();
            PointerOutcome::Watered
        } else {
            PointerOutcome::Ignored
        }
    } else {
        PointerOutcome::Ignored
    };

    debug!(
        "[Farm] {:?} at ({}, {}): seeds {}, pumpkins {}, water {}",
        outcome,
        tile.col,
        tile.row,
        seeds,
        pumpkins,
        meter.fill_level()
    );
    outcome
}
