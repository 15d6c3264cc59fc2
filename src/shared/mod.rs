//! Shared states, identifiers, sinks and input latch for Pumpkin Patch.
//!
//! This is the type contract. The simulation core draws and plays sound only
//! through `DrawSink` and `AudioSink`; the Bevy host implements both.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// GAME PHASE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

// ═══════════════════════════════════════════════════════════════════════
// CANVAS & PALETTE
// ═══════════════════════════════════════════════════════════════════════

pub const CANVAS_SIZE: f32 = 800.0;
pub const TILE_SIZE: f32 = 50.0;

/// Canvas text sizes are given in points; Bevy fonts are sized in pixels.
pub const PT_TO_PX: f32 = 4.0 / 3.0;

pub const BACKGROUND_COLOR: Color = Color::srgb(50.0 / 255.0, 41.0 / 255.0, 71.0 / 255.0); // #322947
pub const TEXT_COLOR: Color = Color::srgb(1.0, 181.0 / 255.0, 112.0 / 255.0); // #ffb570
pub const HIGHLIGHT_COLOR: Color = Color::srgb(1.0, 1.0, 235.0 / 255.0); // #ffffeb
pub const WATER_COLOR: Color = Color::srgb(0.35, 0.62, 0.95);

/// Side length of the square canvas the core draws onto, in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub size: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self { size: CANVAS_SIZE }
    }
}

impl Canvas {
    /// Canvas pixels (origin top-left, y down) to 2D world space
    /// (origin centre, y up) for a camera centred on the canvas.
    pub fn to_world(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x - self.size / 2.0, self.size / 2.0 - y)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// TILES
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TileState {
    #[default]
    Empty,
    HasSeed,
    HasPumpkin,
    HasTree,
    HasStone,
    IsWell,
}

impl TileState {
    /// Terrain never changes: it cannot be planted, watered or harvested.
    pub fn is_terrain(self) -> bool {
        matches!(self, TileState::HasTree | TileState::HasStone | TileState::IsWell)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SPRITES
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    DryDirt,
    WetDirt,
    Seed,
    Sprout,
    Vine,
    GreenPumpkin,
    Pumpkin,
    Tree,
    Stone,
    Well,
    Ghost,
    SeedBag,
}

impl SpriteId {
    pub const ALL: [SpriteId; 12] = [
        SpriteId::DryDirt,
        SpriteId::WetDirt,
        SpriteId::Seed,
        SpriteId::Sprout,
        SpriteId::Vine,
        SpriteId::GreenPumpkin,
        SpriteId::Pumpkin,
        SpriteId::Tree,
        SpriteId::Stone,
        SpriteId::Well,
        SpriteId::Ghost,
        SpriteId::SeedBag,
    ];

    pub fn asset_path(self) -> &'static str {
        match self {
            SpriteId::DryDirt => "sprites/dry_dirt.png",
            SpriteId::WetDirt => "sprites/wet_dirt.png",
            SpriteId::Seed => "sprites/seed.png",
            SpriteId::Sprout => "sprites/sprout.png",
            SpriteId::Vine => "sprites/vine.png",
            SpriteId::GreenPumpkin => "sprites/green_pumpkin.png",
            SpriteId::Pumpkin => "sprites/pumpkin.png",
            SpriteId::Tree => "sprites/tree.png",
            SpriteId::Stone => "sprites/stone.png",
            SpriteId::Well => "sprites/well.png",
            SpriteId::Ghost => "sprites/ghost.png",
            SpriteId::SeedBag => "sprites/seed_bag.png",
        }
    }

    /// Flat colour drawn when the image asset is missing.
    pub fn placeholder_color(self) -> Color {
        match self {
            SpriteId::DryDirt => Color::srgb(0.55, 0.42, 0.28),
            SpriteId::WetDirt => Color::srgb(0.30, 0.22, 0.15),
            SpriteId::Seed => Color::srgb(0.85, 0.80, 0.55),
            SpriteId::Sprout => Color::srgb(0.55, 0.80, 0.35),
            SpriteId::Vine => Color::srgb(0.30, 0.65, 0.25),
            SpriteId::GreenPumpkin => Color::srgb(0.45, 0.60, 0.20),
            SpriteId::Pumpkin => Color::srgb(0.95, 0.55, 0.10),
            SpriteId::Tree => Color::srgb(0.10, 0.40, 0.15),
            SpriteId::Stone => Color::srgb(0.50, 0.50, 0.55),
            SpriteId::Well => Color::srgb(0.25, 0.45, 0.75),
            SpriteId::Ghost => Color::srgba(0.92, 0.92, 1.0, 0.85),
            SpriteId::SeedBag => Color::srgb(0.70, 0.55, 0.35),
        }
    }

    /// Placeholder size in pixels.
    pub fn placeholder_size(self) -> Vec2 {
        match self {
            SpriteId::Seed | SpriteId::Sprout => Vec2::splat(20.0),
            SpriteId::Vine | SpriteId::GreenPumpkin | SpriteId::Pumpkin => Vec2::splat(30.0),
            _ => Vec2::splat(TILE_SIZE),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// AUDIO CUES
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueId {
    /// Well visited, water meter refilled.
    Fill,
    /// A tile was watered.
    Drop,
    /// A ghost is chasing a pumpkin. Loops until stopped.
    Alert,
}

impl CueId {
    pub const ALL: [CueId; 3] = [CueId::Fill, CueId::Drop, CueId::Alert];

    pub fn asset_path(self) -> &'static str {
        match self {
            CueId::Fill => "audio/fill.ogg",
            CueId::Drop => "audio/drop.ogg",
            CueId::Alert => "audio/alert.ogg",
        }
    }

    pub fn looping(self) -> bool {
        matches!(self, CueId::Alert)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SINKS — the only way the core reaches the screen and the speakers
// ═══════════════════════════════════════════════════════════════════════

/// Drawing surface. Coordinates are canvas pixels, origin top-left, y down.
pub trait DrawSink {
    fn clear_and_fill_background(&mut self, color: Color);
    fn draw_sprite(&mut self, id: SpriteId, x: f32, y: f32);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn draw_rect_outline(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
}

/// Sound output. Both calls must be idempotent and non-blocking.
pub trait AudioSink {
    fn play_cue(&mut self, id: CueId);
    fn stop_cue(&mut self, id: CueId);
}

// ═══════════════════════════════════════════════════════════════════════
// INPUT LATCH
// ═══════════════════════════════════════════════════════════════════════

/// Input latched by the host between ticks.
///
/// `pointer` keeps the last known cursor position. The two flags are
/// one-shot: the update loop clears them once consumed.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub pointer: Option<Vec2>,
    pub pointer_released: bool,
    pub restart_requested: bool,
}

impl TickInput {
    /// Move the pointer to `position` and latch a release there.
    pub fn release_at(&mut self, position: Vec2) {
        self.pointer = Some(position);
        self.pointer_released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_states() {
        assert!(TileState::HasTree.is_terrain());
        assert!(TileState::HasStone.is_terrain());
        assert!(TileState::IsWell.is_terrain());
        assert!(!TileState::Empty.is_terrain());
        assert!(!TileState::HasSeed.is_terrain());
        assert!(!TileState::HasPumpkin.is_terrain());
    }

    #[test]
    fn test_canvas_to_world_corners() {
        let canvas = Canvas::default();
        assert_eq!(canvas.to_world(0.0, 0.0), Vec2::new(-400.0, 400.0));
        assert_eq!(canvas.to_world(800.0, 800.0), Vec2::new(400.0, -400.0));
        assert_eq!(canvas.to_world(400.0, 400.0), Vec2::ZERO);
    }

    #[test]
    fn test_only_alert_loops() {
        let looping: Vec<CueId> = CueId::ALL.into_iter().filter(|c| c.looping()).collect();
        assert_eq!(looping, vec![CueId::Alert]);
    }

    #[test]
    fn test_release_at_latches_flag_and_position() {
        let mut input = TickInput::default();
        input.release_at(Vec2::new(75.0, 80.0));
        assert!(input.pointer_released);
        assert_eq!(input.pointer, Some(Vec2::new(75.0, 80.0)));
        assert!(!input.restart_requested);
    }
}
