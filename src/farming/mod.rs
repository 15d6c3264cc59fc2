//! Farming domain: tiles, the field they sit in, and the watering-can meter.
//!
//! Pure data and rules. Nothing here knows about Bevy schedules; the update
//! loop drives it.

mod grid;
mod meter;
mod tile;

pub use grid::{roll_terrain, TileGrid};
pub use meter::WaterMeter;
pub use tile::Tile;
