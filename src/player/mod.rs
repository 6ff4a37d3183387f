//! Player domain: components, tuning, and the fixed-step locomotion systems.

mod bootstrap;
mod components;
mod resources;
mod systems;

use bevy::prelude::*;

pub use components::{Facing, Kinematics, Player};
pub use resources::{PlayerInput, Tuning};
pub(crate) use bootstrap::spawn_player;
pub(crate) use systems::check_fall_off_level;

use crate::core::TickSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Tuning>()
            .init_resource::<PlayerInput>()
            .add_systems(Startup, bootstrap::setup_player)
            .add_systems(Update, systems::sample_input)
            .add_systems(
                FixedUpdate,
                (
                    systems::apply_jump_input.in_set(TickSet::Input),
                    systems::integrate_player.in_set(TickSet::Physics),
                    (systems::steer_horizontal, systems::land_player)
                        .chain()
                        .in_set(TickSet::Collisions),
                    systems::check_fall_off_level.in_set(TickSet::Reset),
                ),
            );
    }
}
