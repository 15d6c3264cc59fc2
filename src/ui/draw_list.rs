//! Retained draw list: the core's immediate-mode drawing recorded per frame,
//! then replayed as Bevy sprites and text.

use std::collections::{HashMap, HashSet};

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::shared::*;

/// Painter's order: each later command sits this much closer to the camera.
const Z_STEP: f32 = 0.01;
const OUTLINE_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background(Color),
    Sprite {
        id: SpriteId,
        x: f32,
        y: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    RectOutline {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
}

/// The most recent frame drawn by the core. A background clear starts a new
/// frame.
#[derive(Resource, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
    frame: u64,
}

impl DrawList {
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Frames started so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSink for DrawList {
    fn clear_and_fill_background(&mut self, color: Color) {
        self.commands.clear();
        self.frame += 1;
        self.commands.push(DrawCommand::Background(color));
    }

    fn draw_sprite(&mut self, id: SpriteId, x: f32, y: f32) {
        self.commands.push(DrawCommand::Sprite { id, x, y });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            size,
            color,
        });
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, width, height, color });
    }

    fn draw_rect_outline(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::RectOutline { x, y, width, height, color });
    }
}

/// The four thin strips that make up an outline, as (x, y, width, height).
pub fn outline_edges(x: f32, y: f32, width: f32, height: f32) -> [(f32, f32, f32, f32); 4] {
    let w = OUTLINE_WIDTH;
    [
        (x, y, width, w),
        (x, y + height - w, width, w),
        (x, y, w, height),
        (x + width - w, y, w, height),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Assets
// ─────────────────────────────────────────────────────────────────────────────

/// Image handles for every sprite id, loaded once at startup.
#[derive(Resource, Default)]
pub struct SpriteAssets {
    pub images: HashMap<SpriteId, Handle<Image>>,
}

pub fn load_sprite_assets(asset_server: Res<AssetServer>, mut assets: ResMut<SpriteAssets>) {
    for id in SpriteId::ALL {
        assets.images.insert(id, asset_server.load(id.asset_path()));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Presentation
// ─────────────────────────────────────────────────────────────────────────────

/// Marker for entities spawned from the draw list; all of them are replaced
/// whenever a new frame is presented.
#[derive(Component)]
pub struct FrameItem;

/// Replay the latest frame as entities. Skips work when no new frame was
/// drawn since the last call.
pub fn present_draw_list(
    mut commands: Commands,
    draw_list: Res<DrawList>,
    canvas: Res<Canvas>,
    sprites: Res<SpriteAssets>,
    asset_server: Res<AssetServer>,
    mut clear_color: ResMut<ClearColor>,
    stale: Query<Entity, With<FrameItem>>,
    mut presented: Local<u64>,
    mut missing: Local<HashSet<SpriteId>>,
) {
    if draw_list.frame() == *presented {
        return;
    }
    *presented = draw_list.frame();

    for entity in stale.iter() {
        commands.entity(entity).despawn_recursive();
    }

    for (i, command) in draw_list.commands().iter().enumerate() {
        let z = i as f32 * Z_STEP;
        match command {
            DrawCommand::Background(color) => {
                clear_color.0 = *color;
            }
            DrawCommand::Sprite { id, x, y } => {
                let at = canvas.to_world(*x, *y).extend(z);
                match sprites.images.get(id) {
                    Some(handle) if !image_failed(&asset_server, handle) => {
                        commands.spawn((
                            Sprite {
                                image: handle.clone(),
                                anchor: Anchor::TopLeft,
                                ..default()
                            },
                            Transform::from_translation(at),
                            FrameItem,
                        ));
                    }
                    _ => {
                        if missing.insert(*id) {
                            warn!("[Render] {:?} failed to load, drawing a placeholder", id);
                        }
                        spawn_rect(&mut commands, at, id.placeholder_size(), id.placeholder_color());
                    }
                }
            }
            DrawCommand::Text { text, x, y, size, color } => {
                commands.spawn((
                    Text2d::new(text.clone()),
                    TextFont {
                        font_size: *size * PT_TO_PX,
                        ..default()
                    },
                    TextColor(*color),
                    Anchor::BottomLeft,
                    Transform::from_translation(canvas.to_world(*x, *y).extend(z)),
                    FrameItem,
                ));
            }
            DrawCommand::Rect { x, y, width, height, color } => {
                let at = canvas.to_world(*x, *y).extend(z);
                spawn_rect(&mut commands, at, Vec2::new(*width, *height), *color);
            }
            DrawCommand::RectOutline { x, y, width, height, color } => {
                for (ex, ey, ew, eh) in outline_edges(*x, *y, *width, *height) {
                    let at = canvas.to_world(ex, ey).extend(z);
                    spawn_rect(&mut commands, at, Vec2::new(ew, eh), *color);
                }
            }
        }
    }
}

fn image_failed(asset_server: &AssetServer, handle: &Handle<Image>) -> bool {
    matches!(asset_server.load_state(handle.id()), LoadState::Failed(_))
}

fn spawn_rect(commands: &mut Commands, top_left: Vec3, size: Vec2, color: Color) {
    commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            anchor: Anchor::TopLeft,
            ..default()
        },
        Transform::from_translation(top_left),
        FrameItem,
    ));
}
