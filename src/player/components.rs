//! Player domain: components for locomotion state.

use bevy::prelude::*;

use crate::collision::Body;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    /// Sign of horizontal motion in this direction.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Velocities and the counters that drive them. Velocities are in pixels per
/// tick. Invariant: `jump_count` never exceeds 2.
#[derive(Component, Debug, Clone, Default)]
pub struct Kinematics {
    pub x_vel: f32,
    pub y_vel: f32,
    /// Ticks since the player last touched ground; drives the gravity ramp.
    pub fall_count: u32,
    /// 0 grounded-or-walked-off, 1 after the jump, 2 after the double jump.
    pub jump_count: u8,
    pub hit: bool,
}

impl Kinematics {
    /// First jump. No-op once both jumps are spent.
    pub fn jump(&mut self, gravity: f32) -> bool {
        if self.jump_count >= 2 {
            return false;
        }
        self.y_vel = -gravity * 8.0;
        self.jump_count += 1;
        if self.jump_count == 1 {
            self.fall_count = 0;
        }
        true
    }

    /// Stronger mid-air impulse. Only available while airborne from the first
    /// jump.
    pub fn double_jump(&mut self, gravity: f32) -> bool {
        if self.jump_count != 1 {
            return false;
        }
        self.y_vel = -gravity * 14.0;
        self.jump_count += 1;
        true
    }

    /// Downward terrain contact: zero the fall, re-enable both jumps.
    pub fn landed(&mut self) {
        self.fall_count = 0;
        self.y_vel = 0.0;
        self.jump_count = 0;
    }

    /// One fixed tick: capped linear gravity ramp, then apply velocity.
    pub fn integrate(&mut self, body: &mut Body, fps: f32, gravity: f32) {
        self.y_vel += ((self.fall_count as f32 / fps) * gravity).min(1.0);
        body.x += self.x_vel;
        body.y += self.y_vel;
        self.fall_count += 1;
    }
}
