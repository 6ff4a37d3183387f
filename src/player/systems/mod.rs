//! Player domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod respawn;

pub(crate) use collisions::{land_player, steer_horizontal};
pub(crate) use input::{apply_jump_input, sample_input};
pub(crate) use movement::integrate_player;
pub(crate) use respawn::check_fall_off_level;
