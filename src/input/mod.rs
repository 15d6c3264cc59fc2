use bevy::prelude::*;
use bevy::input::InputSystem;
use bevy::window::PrimaryWindow;
use crate::shared::*;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TickInput>()
            .add_systems(PreUpdate, latch_input.after(InputSystem));
    }
}

/// The single point where hardware input becomes tick input.
///
/// Only latches: the flags stay set until the update loop consumes them, so a
/// release between two fixed ticks is never lost.
pub fn latch_input(
    windows: Query<&Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<TickInput>,
) {
    // Off-window the cursor has no position; keep the last known one.
    if let Some(position) = windows.get_single().ok().and_then(|w| w.cursor_position()) {
        input.pointer = Some(position);
    }

    if mouse.just_released(MouseButton::Left) {
        input.pointer_released = true;
    }

    if keys.just_pressed(KeyCode::KeyR) {
        input.restart_requested = true;
    }
}
