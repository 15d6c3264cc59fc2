use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use pumpkin_patch::config::{report_config_status, GameConfig, CONFIG_PATH};
use pumpkin_patch::input::InputPlugin;
use pumpkin_patch::simulation::SimulationPlugin;
use pumpkin_patch::ui::UiPlugin;

fn main() {
    let (config, config_status) = GameConfig::load_or_default(CONFIG_PATH);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Pumpkin Patch".into(),
                        resolution: WindowResolution::new(config.canvas_size, config.canvas_size),
                        present_mode: PresentMode::AutoVsync,
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .insert_resource(config_status)
        // Domain plugins
        .add_plugins(SimulationPlugin { config })
        .add_plugins(InputPlugin)
        .add_plugins(UiPlugin)
        .add_systems(Startup, (report_config_status, setup_camera))
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
