//! Projectile domain: confetti lifecycle from fire input to terrain impact.

mod components;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use components::Projectile;
pub use resources::{ConfettiRng, FireControl, ProjectileTuning};

use crate::core::TickSet;

pub struct ProjectilePlugin;

impl Plugin for ProjectilePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProjectileTuning>()
            .init_resource::<FireControl>()
            .init_resource::<ConfettiRng>()
            .add_systems(
                FixedUpdate,
                (
                    systems::fire_projectile.in_set(TickSet::Input),
                    (systems::advance_projectiles, systems::cull_on_terrain)
                        .chain()
                        .in_set(TickSet::Projectiles),
                ),
            );
    }
}
