//! Camera domain: dead-zone scrolling.
//!
//! The offset only moves when the player's leading edge crosses the scroll
//! margin while moving toward it, and it accumulates the player's velocity —
//! it is not clamped to the level bounds.

mod systems;

use bevy::prelude::*;

use crate::core::TickSet;

/// Render offset in level space. Subtracted from everything at draw time by
/// way of the camera transform.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CameraOffset {
    pub x: f32,
    pub y: f32,
}

#[derive(Resource, Debug, Clone)]
pub struct CameraTuning {
    /// Horizontal dead-zone margin from either screen edge.
    pub margin_x: f32,
    /// Vertical dead-zone margin from either screen edge.
    pub margin_y: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            margin_x: 350.0,
            margin_y: 250.0,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraOffset>()
            .init_resource::<CameraTuning>()
            .add_systems(Startup, systems::setup_camera)
            .add_systems(FixedUpdate, systems::scroll_camera.in_set(TickSet::Camera))
            .add_systems(Update, systems::apply_camera_offset);
    }
}
