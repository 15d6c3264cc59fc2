//! The field: a fixed arrangement of tiles with randomly rolled terrain.

use bevy::prelude::*;
use rand::Rng;

use crate::config::GameConfig;
use crate::shared::*;
use super::Tile;

#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    columns: usize,
    rows: usize,
    tile_size: f32,
}

/// Roll the terrain for one non-well tile: a third each of empty soil,
/// stone and trees.
pub fn roll_terrain(rng: &mut impl Rng) -> TileState {
    match rng.gen_range(0..3) {
        0 => TileState::Empty,
        1 => TileState::HasStone,
        _ => TileState::HasTree,
    }
}

impl TileGrid {
    /// Tiles are laid out column by column, which is also the order ghosts
    /// scan in when looking for a pumpkin.
    pub fn generate(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut tiles = Vec::with_capacity(config.columns * config.rows);
        for col in 0..config.columns {
            for row in 0..config.rows {
                let position = Vec2::new(
                    config.grid_offset + col as f32 * config.tile_size,
                    config.grid_offset + row as f32 * config.tile_size,
                );
                let state = if (col, row) == config.well_cell {
                    TileState::IsWell
                } else {
                    roll_terrain(rng)
                };
                tiles.push(Tile::new(col, row, position, state));
            }
        }
        Self {
            tiles,
            columns: config.columns,
            rows: config.rows,
            tile_size: config.tile_size,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    pub fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.columns && row < self.rows).then(|| col * self.rows + row)
    }

    pub fn at(&self, col: usize, row: usize) -> Option<&Tile> {
        self.index_of(col, row).and_then(|i| self.tiles.get(i))
    }

    pub fn at_mut(&mut self, col: usize, row: usize) -> Option<&mut Tile> {
        self.index_of(col, row).and_then(move |i| self.tiles.get_mut(i))
    }

    /// First tile in grid order under `point`, if any.
    pub fn tile_under(&self, point: Vec2) -> Option<usize> {
        self.tiles.iter().position(|t| t.contains(point, self.tile_size))
    }

    /// First tile in grid order holding a ripe pumpkin.
    pub fn first_pumpkin(&self) -> Option<usize> {
        self.tiles.iter().position(|t| t.state == TileState::HasPumpkin)
    }

    pub fn count(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|t| t.state == state).count()
    }
}
