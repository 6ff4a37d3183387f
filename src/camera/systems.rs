//! Camera domain: scroll rule and transform application.

use bevy::prelude::*;

use crate::camera::{CameraOffset, CameraTuning};
use crate::collision::Body;
use crate::core::{HEIGHT, WIDTH};
use crate::player::{Kinematics, Player};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Accumulate the player's velocity into the offset when the dead-zone margin
/// is crossed in the direction of motion.
pub(crate) fn scroll(
    offset: &mut CameraOffset,
    body: &Body,
    x_vel: f32,
    y_vel: f32,
    tuning: &CameraTuning,
) {
    if (body.right() - offset.x >= WIDTH - tuning.margin_x && x_vel > 0.0)
        || (body.left() - offset.x <= tuning.margin_x && x_vel < 0.0)
    {
        offset.x += x_vel;
    }

    if (body.top() - offset.y >= HEIGHT - tuning.margin_y && y_vel > 0.0)
        || (body.bottom() - offset.y <= tuning.margin_y && y_vel < 0.0)
    {
        offset.y += y_vel;
    }
}

pub(crate) fn scroll_camera(
    tuning: Res<CameraTuning>,
    mut offset: ResMut<CameraOffset>,
    players: Query<(&Body, &Kinematics), With<Player>>,
) {
    for (body, kin) in &players {
        scroll(&mut offset, body, kin.x_vel, kin.y_vel, &tuning);
    }
}

/// Position the camera so the visible window spans
/// `[offset.x, offset.x + WIDTH] x [offset.y, offset.y + HEIGHT]` in level
/// space (y-down, negated into world space).
pub(crate) fn apply_camera_offset(
    offset: Res<CameraOffset>,
    mut cameras: Query<&mut Transform, With<Camera2d>>,
) {
    for mut transform in &mut cameras {
        transform.translation.x = offset.x + WIDTH / 2.0;
        transform.translation.y = -(offset.y + HEIGHT / 2.0);
    }
}
