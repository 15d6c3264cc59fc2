//! Game configuration: every tunable constant of the simulation.
//!
//! Defaults reproduce the stock game. A RON file can override any subset of
//! fields; missing fields keep their default.

use std::fs;
use std::io;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::{CANVAS_SIZE, TILE_SIZE};

/// Where `main` looks for overrides, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/config/game.ron";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

// ═══════════════════════════════════════════════════════════════════════
// RULE GROUPS
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthRules {
    /// Growth added per tick while a seeded tile is watered.
    pub step: f32,
    /// Growth values at which a tile dries out. Compared for exact equality,
    /// so every mark must be a multiple of `step`.
    pub dry_out_marks: Vec<f32>,
    /// Growth at which a seed becomes a pumpkin.
    pub mature_at: f32,
}

impl Default for GrowthRules {
    fn default() -> Self {
        Self {
            step: 0.25,
            dry_out_marks: vec![25.0, 50.0, 75.0],
            mature_at: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterRules {
    /// Level after a well visit. Negative; 0 means empty.
    pub full: i32,
    /// Amount each watering moves the level toward 0.
    pub drain_step: i32,
}

impl Default for MeterRules {
    fn default() -> Self {
        Self {
            full: -200,
            drain_step: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GhostSpawn {
    /// Exact pumpkin count that triggers this spawn.
    pub pumpkins: u32,
    /// Spawn point, which also becomes the ghost's origin.
    pub at: (f32, f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GhostRules {
    pub chase_speed: f32,
    pub return_speed: f32,
    /// The ghost every session starts with, parked off-grid.
    pub initial: (f32, f32),
    /// Checked in order; entry `i` only fires while the roster holds fewer
    /// than `i + 2` ghosts.
    pub spawns: Vec<GhostSpawn>,
    pub max_roster: usize,
}

impl Default for GhostRules {
    fn default() -> Self {
        Self {
            chase_speed: 2.0,
            return_speed: 1.0,
            initial: (-50.0, -50.0),
            spawns: vec![
                GhostSpawn { pumpkins: 25, at: (850.0, 850.0) },
                GhostSpawn { pumpkins: 50, at: (850.0, 0.0) },
                GhostSpawn { pumpkins: 75, at: (0.0, 850.0) },
            ],
            max_roster: 4,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// GAME CONFIG
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_size: f32,
    pub tile_size: f32,
    /// Pixel offset of the first tile from the canvas top-left corner.
    pub grid_offset: f32,
    pub columns: usize,
    pub rows: usize,
    /// (column, row) of the single well tile.
    pub well_cell: (usize, usize),
    pub starting_seeds: u32,
    pub starting_seconds: i32,
    /// Ticks that make up one countdown second.
    pub ticks_per_second: u32,
    /// Fixed tick rate of the host loop.
    pub tick_hz: f64,
    pub seeds_per_harvest: u32,
    pub points_per_pumpkin: u32,
    /// Fixed seed for terrain generation; `None` draws from entropy.
    pub rng_seed: Option<u64>,
    pub growth: GrowthRules,
    pub meter: MeterRules,
    pub ghosts: GhostRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            tile_size: TILE_SIZE,
            grid_offset: TILE_SIZE,
            columns: 14,
            rows: 14,
            well_cell: (6, 6),
            starting_seeds: 1,
            starting_seconds: 300,
            ticks_per_second: 100,
            tick_hz: 100.0,
            seeds_per_harvest: 2,
            points_per_pumpkin: 100,
            rng_seed: None,
            growth: GrowthRules::default(),
            meter: MeterRules::default(),
            ghosts: GhostRules::default(),
        }
    }
}

/// How the running configuration was obtained. Reported once logging is up.
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum ConfigStatus {
    Loaded(String),
    Defaults,
    Fallback(String),
}

impl GameConfig {
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load `path`, falling back to defaults when it is absent or broken.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, ConfigStatus) {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => (config, ConfigStatus::Loaded(path.display().to_string())),
            Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                (Self::default(), ConfigStatus::Defaults)
            }
            Err(err) => (Self::default(), ConfigStatus::Fallback(err.to_string())),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::Invalid("grid must have at least one tile".into()));
        }
        let (well_col, well_row) = self.well_cell;
        if well_col >= self.columns || well_row >= self.rows {
            return Err(ConfigError::Invalid(format!(
                "well cell ({well_col}, {well_row}) is outside the {}x{} grid",
                self.columns, self.rows
            )));
        }
        if self.tile_size <= 0.0 {
            return Err(ConfigError::Invalid("tile_size must be positive".into()));
        }
        if self.ticks_per_second == 0 || self.tick_hz <= 0.0 {
            return Err(ConfigError::Invalid("tick rates must be positive".into()));
        }
        if self.growth.step <= 0.0 {
            return Err(ConfigError::Invalid("growth step must be positive".into()));
        }
        if self.meter.full >= 0 {
            return Err(ConfigError::Invalid("a full meter must be negative".into()));
        }
        if self.meter.drain_step <= 0 {
            return Err(ConfigError::Invalid("drain step must be positive".into()));
        }
        if self.ghosts.chase_speed <= 0.0 || self.ghosts.return_speed <= 0.0 {
            return Err(ConfigError::Invalid("ghost speeds must be positive".into()));
        }
        if self.ghosts.spawns.len() + 1 > self.ghosts.max_roster {
            return Err(ConfigError::Invalid(format!(
                "{} spawns plus the starting ghost exceed a roster of {}",
                self.ghosts.spawns.len(),
                self.ghosts.max_roster
            )));
        }
        Ok(())
    }
}

/// Startup system: the config is read before the app exists, so the outcome
/// is logged here once the log subscriber is installed.
pub fn report_config_status(status: Res<ConfigStatus>) {
    match &*status {
        ConfigStatus::Loaded(path) => info!("[Config] Loaded {}", path),
        ConfigStatus::Defaults => info!("[Config] No config file, using defaults"),
        ConfigStatus::Fallback(err) => warn!("[Config] {}, using defaults", err),
    }
}
