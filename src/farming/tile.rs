//! Single grid cell: terrain, water and crop growth.

use bevy::prelude::*;

use crate::config::GrowthRules;
use crate::shared::*;

/// Pumpkins are smaller than a tile and drawn inset by this much.
const PUMPKIN_INSET: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub col: usize,
    pub row: usize,
    /// Top-left corner in canvas pixels.
    pub position: Vec2,
    pub is_watered: bool,
    pub state: TileState,
    pub growth: f32,
}

impl Tile {
    pub fn new(col: usize, row: usize, position: Vec2, state: TileState) -> Self {
        Self {
            col,
            row,
            position,
            is_watered: false,
            state,
            growth: 0.0,
        }
    }

    pub fn water(&mut self) {
        self.is_watered = true;
    }

    /// Callers check the tile is empty and watered and that a seed is
    /// available before planting.
    pub fn plant(&mut self) {
        self.is_watered = false;
        self.state = TileState::HasSeed;
    }

    /// Advance one tick of growth.
    ///
    /// Only a watered seed grows. The tile dries out when growth lands exactly
    /// on one of the dry-out marks, so a crop has to be watered again at each
    /// stage. Once growth reaches maturity the seed becomes a pumpkin whether
    /// or not it is still watered.
    pub fn grow(&mut self, rules: &GrowthRules) {
        if self.is_watered && self.state == TileState::HasSeed {
            self.growth += rules.step;
        }
        if rules.dry_out_marks.iter().any(|&mark| self.growth == mark) {
            self.is_watered = false;
        }
        if self.growth >= rules.mature_at {
            self.state = TileState::HasPumpkin;
        }
    }

    pub fn harvest(&mut self) {
        self.state = TileState::Empty;
        self.is_watered = false;
        self.growth = 0.0;
    }

    /// Inclusive on every edge, so a point on a shared border hits both
    /// neighbours; grid lookups take the first.
    pub fn contains(&self, point: Vec2, size: f32) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + size
            && point.y >= self.position.y
            && point.y <= self.position.y + size
    }

    /// Sprite for the soil layer, or the terrain itself.
    pub fn ground_sprite(&self) -> SpriteId {
        match self.state {
            TileState::HasTree => SpriteId::Tree,
            TileState::HasStone => SpriteId::Stone,
            TileState::IsWell => SpriteId::Well,
            _ if self.is_watered => SpriteId::WetDirt,
            _ => SpriteId::DryDirt,
        }
    }

    /// Sprite for whatever grows on the soil, by growth stage.
    pub fn crop_sprite(&self) -> Option<SpriteId> {
        match self.state {
            TileState::HasSeed => Some(match self.growth {
                g if g < 25.0 => SpriteId::Seed,
                g if g < 50.0 => SpriteId::Sprout,
                g if g < 75.0 => SpriteId::Vine,
                _ => SpriteId::GreenPumpkin,
            }),
            TileState::HasPumpkin => Some(SpriteId::Pumpkin),
            _ => None,
        }
    }

    pub fn draw(&self, sink: &mut impl DrawSink) {
        let Vec2 { x, y } = self.position;
        sink.draw_sprite(self.ground_sprite(), x, y);
        match self.crop_sprite() {
            Some(SpriteId::Pumpkin) => {
                sink.draw_sprite(SpriteId::Pumpkin, x + PUMPKIN_INSET, y + PUMPKIN_INSET)
            }
            Some(sprite) => sink.draw_sprite(sprite, x, y),
            None => {}
        }
    }
}
