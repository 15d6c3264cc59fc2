//! Reinforcements: new ghosts join as the harvest grows.

use bevy::prelude::*;

use crate::config::GhostRules;
use super::Ghost;

/// Append any ghost whose spawn threshold matches `pumpkins` exactly.
///
/// Entry `i` of the schedule only fires while the roster holds fewer than
/// `i + 2` ghosts, so each entry fires at most once per session. A pumpkin
/// count that skips past a threshold spawns nothing. Returns how many ghosts
/// joined.
pub fn spawn_due_ghosts(ghosts: &mut Vec<Ghost>, pumpkins: u32, rules: &GhostRules) -> usize {
    let mut spawned = 0;
    for (i, spawn) in rules.spawns.iter().enumerate() {
        if ghosts.len() >= rules.max_roster {
            break;
        }
        if ghosts.len() < i + 2 && pumpkins == spawn.pumpkins {
            let at = Vec2::new(spawn.at.0, spawn.at.1);
            ghosts.push(Ghost::new(at));
            spawned += 1;
            info!(
                "[Ghosts] Ghost #{} rises at ({}, {}) after {} pumpkins",
                ghosts.len(),
                at.x,
                at.y,
                pumpkins
            );
        }
    }
    spawned
}
