//! Core domain: world constants, tick ordering, and the reset-on-fall flow.

mod messages;
mod systems;

use bevy::prelude::*;

pub use messages::PlayerFell;

/// Window and world width in pixels.
pub const WIDTH: f32 = 800.0;
/// Window and world height in pixels.
pub const HEIGHT: f32 = 600.0;
/// Fixed simulation rate. Velocities are expressed in pixels per tick.
pub const FPS: u32 = 60;
/// Terrain block edge length in pixels.
pub const BLOCK_SIZE: f32 = 96.0;

/// Ordering of the fixed-step simulation within one tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Consume latched jump/shoot input.
    Input,
    /// Gravity ramp and position integration.
    Physics,
    /// Animation state selection and frame advance.
    Animate,
    /// Projectile movement, aging, and terrain culling.
    Projectiles,
    /// Horizontal probe gating and vertical landing.
    Collisions,
    /// Dead-zone camera scrolling.
    Camera,
    /// Fall-through detection and level reset.
    Reset,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.25, 0.45, 0.85)))
            .add_message::<PlayerFell>()
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Input,
                    TickSet::Physics,
                    TickSet::Animate,
                    TickSet::Projectiles,
                    TickSet::Collisions,
                    TickSet::Camera,
                    TickSet::Reset,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                systems::handle_player_fell
                    .in_set(TickSet::Reset)
                    .after(crate::player::check_fall_off_level),
            )
            .add_systems(Update, systems::sync_transforms);
    }
}
