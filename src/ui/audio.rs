use std::collections::HashMap;

use bevy::prelude::*;
use crate::shared::*;
use crate::shared::AudioSink;

// ═══════════════════════════════════════════════════════════════════════
// AUDIO QUEUE — the core's AudioSink
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    Play(CueId),
    Stop(CueId),
}

/// Cue requests made by the core since the host last drained them.
#[derive(Resource, Debug, Default)]
pub struct AudioQueue {
    pending: Vec<AudioCommand>,
}

impl AudioQueue {
    pub fn pending(&self) -> &[AudioCommand] {
        &self.pending
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, AudioCommand> {
        self.pending.drain(..)
    }

    /// Ghosts re-request the alert every tick; back-to-back repeats collapse.
    fn push(&mut self, command: AudioCommand) {
        if self.pending.last() != Some(&command) {
            self.pending.push(command);
        }
    }
}

impl AudioSink for AudioQueue {
    fn play_cue(&mut self, id: CueId) {
        self.push(AudioCommand::Play(id));
    }

    fn stop_cue(&mut self, id: CueId) {
        self.push(AudioCommand::Stop(id));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLAYBACK
// ═══════════════════════════════════════════════════════════════════════

/// Looping cues currently playing, by id.
#[derive(Resource, Default)]
pub struct ActiveCues {
    pub looping: HashMap<CueId, Entity>,
}

/// Drain the queue into audio entities. One-shots despawn themselves;
/// a looping cue is spawned once and played again only after a stop.
pub fn play_audio_cues(
    mut commands: Commands,
    mut queue: ResMut<AudioQueue>,
    mut active: ResMut<ActiveCues>,
    asset_server: Res<AssetServer>,
) {
    for command in queue.drain() {
        match command {
            AudioCommand::Play(cue) if cue.looping() => {
                if active.looping.contains_key(&cue) {
                    continue;
                }
                let entity = commands
                    .spawn((
                        AudioPlayer::new(asset_server.load(cue.asset_path())),
                        PlaybackSettings::LOOP,
                    ))
                    .id();
                active.looping.insert(cue, entity);
                debug!("[Audio] Looping {:?}", cue);
            }
            AudioCommand::Play(cue) => {
                commands.spawn((
                    AudioPlayer::new(asset_server.load(cue.asset_path())),
                    PlaybackSettings::DESPAWN,
                ));
            }
            AudioCommand::Stop(cue) => {
                if let Some(entity) = active.looping.remove(&cue) {
                    commands.entity(entity).despawn_recursive();
                    debug!("[Audio] Stopped {:?}", cue);
                }
            }
        }
    }
}
