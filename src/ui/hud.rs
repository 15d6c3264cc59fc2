//! Frame composition: the field, the ghosts and the HUD strips, or the
//! game-over summary. Everything goes through a `DrawSink`.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::shared::*;
use crate::simulation::GameState;

const HUD_TEXT_SIZE: f32 = 16.0;
const GAUGE_X: f32 = 300.0;
const GAUGE_Y: f32 = 15.0;
const GAUGE_WIDTH: f32 = 200.0;
const GAUGE_HEIGHT: f32 = 20.0;

pub fn draw_scene(
    state: &GameState,
    pointer: Option<Vec2>,
    config: &GameConfig,
    sink: &mut impl DrawSink,
) {
    sink.clear_and_fill_background(BACKGROUND_COLOR);

    let size = state.grid.tile_size();
    for tile in state.grid.iter() {
        tile.draw(sink);
        if pointer.is_some_and(|p| tile.contains(p, size)) {
            sink.draw_rect_outline(tile.position.x, tile.position.y, size, size, HIGHLIGHT_COLOR);
        }
    }

    for ghost in &state.ghosts {
        ghost.draw(sink);
    }

    draw_top_strip(state, config, sink);
    draw_bottom_strip(state, config, sink);
}

/// Score, water gauge and countdown.
fn draw_top_strip(state: &GameState, config: &GameConfig, sink: &mut impl DrawSink) {
    sink.draw_text(&format!("Score: {}", state.score), 50.0, 35.0, HUD_TEXT_SIZE, TEXT_COLOR);

    let fill = GAUGE_WIDTH * state.meter.fraction_remaining().clamp(0.0, 1.0);
    if fill > 0.0 {
        sink.draw_rect(GAUGE_X, GAUGE_Y, fill, GAUGE_HEIGHT, WATER_COLOR);
    }
    sink.draw_rect_outline(GAUGE_X, GAUGE_Y, GAUGE_WIDTH, GAUGE_HEIGHT, TEXT_COLOR);

    sink.draw_text(
        &format_countdown(state.clock.seconds()),
        config.canvas_size - 200.0,
        35.0,
        HUD_TEXT_SIZE,
        TEXT_COLOR,
    );
}

/// Seed bag and harvest tally.
fn draw_bottom_strip(state: &GameState, config: &GameConfig, sink: &mut impl DrawSink) {
    let bottom = config.canvas_size;
    sink.draw_text(&format!("Seeds: {}", state.seeds), 50.0, bottom - 15.0, HUD_TEXT_SIZE, TEXT_COLOR);
    sink.draw_sprite(SpriteId::SeedBag, 0.0, bottom - 50.0);
    sink.draw_text(
        &format!("Pumpkins: {}", state.pumpkins),
        550.0,
        bottom - 15.0,
        HUD_TEXT_SIZE,
        TEXT_COLOR,
    );
    sink.draw_sprite(SpriteId::Pumpkin, 500.0, bottom - 40.0);
}

pub fn draw_game_over(state: &GameState, config: &GameConfig, sink: &mut impl DrawSink) {
    sink.clear_and_fill_background(BACKGROUND_COLOR);
    let mid = config.canvas_size / 2.0;
    let left = mid - 120.0;
    sink.draw_text("Game Over", left, mid - 60.0, 32.0, TEXT_COLOR);
    sink.draw_text(&format!("Final score: {}", state.score), left, mid, HUD_TEXT_SIZE, TEXT_COLOR);
    sink.draw_text(
        &format!("Pumpkins harvested: {}", state.pumpkins),
        left,
        mid + 30.0,
        HUD_TEXT_SIZE,
        TEXT_COLOR,
    );
    sink.draw_text("Press R to play again", left, mid + 80.0, 12.0, HIGHLIGHT_COLOR);
}

/// `m:ss`, clamped at zero for the final second.
pub fn format_countdown(seconds: i32) -> String {
    let seconds = seconds.max(0);
    format!("Time: {}:{:02}", seconds / 60, seconds % 60)
}
