//! Projectile domain: the confetti entity.

use bevy::prelude::*;

use crate::collision::Body;

/// A fired confetto. Direction is baked into the sign of `x_vel` at spawn.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Projectile {
    /// Horizontal velocity in pixels per tick, signed by firing direction.
    pub x_vel: f32,
    /// Ticks since spawn.
    pub age: u32,
}

impl Projectile {
    pub fn new(x_vel: f32) -> Self {
        Self { x_vel, age: 0 }
    }

    /// One fixed tick of flight.
    pub fn advance(&mut self, body: &mut Body) {
        body.x += self.x_vel;
        self.age += 1;
    }

    pub fn expired(&self, max_age: u32) -> bool {
        self.age > max_age
    }
}
