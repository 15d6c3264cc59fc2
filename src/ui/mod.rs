//! Presentation domain: turns what the core drew and played this frame into
//! Bevy sprites, text and audio.

pub mod audio;
pub mod draw_list;
pub mod hud;

use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<draw_list::SpriteAssets>()
            .init_resource::<audio::ActiveCues>()
            .add_systems(Startup, draw_list::load_sprite_assets)
            // ─── Runs after FixedUpdate has produced this frame's ticks ───
            .add_systems(
                Update,
                (draw_list::present_draw_list, audio::play_audio_cues),
            );
    }
}
