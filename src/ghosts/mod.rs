//! Ghosts: chase the first ripe pumpkin, flatten it, drift home when the
//! field is bare.

mod spawn;

pub use spawn::spawn_due_ghosts;

use bevy::prelude::*;

use crate::config::GhostRules;
use crate::farming::TileGrid;
use crate::shared::*;
use crate::shared::AudioSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostMode {
    /// Heading for the pumpkin at this tile index.
    Pursuing(usize),
    Returning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ghost {
    pub position: Vec2,
    pub origin: Vec2,
}

impl Ghost {
    /// A ghost whose origin is where it appears.
    pub fn new(at: Vec2) -> Self {
        Self {
            position: at,
            origin: at,
        }
    }

    /// One tick of behaviour.
    ///
    /// Movement is four independent axis checks rather than a normalised
    /// vector, so a ghost travels diagonally until one axis lines up. A
    /// pumpkin is destroyed only when the ghost sits exactly on the tile's
    /// corner.
    pub fn search(
        &mut self,
        grid: &mut TileGrid,
        rules: &GhostRules,
        audio: &mut impl AudioSink,
    ) -> GhostMode {
        let Some(index) = grid.first_pumpkin() else {
            audio.stop_cue(CueId::Alert);
            self.drift_home(rules.return_speed);
            return GhostMode::Returning;
        };

        audio.play_cue(CueId::Alert);
        let Some(target) = grid.get_mut(index) else {
            return GhostMode::Returning;
        };
        let goal = target.position;
        let step = rules.chase_speed;
        if self.position.x < goal.x {
            self.position.x += step;
        }
        if self.position.y < goal.y {
            self.position.y += step;
        }
        if self.position.x > goal.x {
            self.position.x -= step;
        }
        if self.position.y > goal.y {
            self.position.y -= step;
        }
        if self.position == goal {
            target.harvest();
        }
        GhostMode::Pursuing(index)
    }

    /// Ghosts from the positive quadrant only ever move up toward their
    /// origin; all others only move down. A ghost caught on the wrong side of
    /// its origin stays put on that axis.
    fn drift_home(&mut self, step: f32) {
        if self.origin.x > 0.0 && self.origin.y > 0.0 {
            if self.position.x < self.origin.x {
                self.position.x += step;
            }
            if self.position.y < self.origin.y {
                self.position.y += step;
            }
        } else {
            if self.position.x > self.origin.x {
                self.position.x -= step;
            }
            if self.position.y > self.origin.y {
                self.position.y -= step;
            }
        }
    }

    pub fn draw(&self, sink: &mut impl DrawSink) {
        sink.draw_sprite(SpriteId::Ghost, self.position.x, self.position.y);
    }
}
