//! Player domain: tuning and input resources.

use bevy::prelude::*;

use crate::core::WIDTH;

#[derive(Resource, Debug, Clone)]
pub struct Tuning {
    /// Gravity ramp scale. Impulses are multiples of this.
    pub gravity: f32,
    /// Horizontal walk speed in pixels per tick.
    pub player_vel: f32,
    /// Ticks each animation frame is held for.
    pub animation_delay: u32,
    pub player_size: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            player_vel: 5.0,
            animation_delay: 3,
            player_size: 50.0,
            spawn_x: WIDTH / 2.0,
            spawn_y: 100.0,
        }
    }
}

/// Sampled each frame in `Update`; jump and shoot are edge-latched so a press
/// between fixed ticks is never lost.
#[derive(Resource, Debug, Default)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
    pub shoot_pressed: bool,
}
