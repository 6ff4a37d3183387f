//! Player domain: fall-through detection.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::collision::Body;
use crate::core::{HEIGHT, PlayerFell};
use crate::player::Player;

/// The player's top edge passing the bottom of the screen ends the run.
pub(crate) fn check_fall_off_level(
    players: Query<&Body, With<Player>>,
    mut fell: MessageWriter<PlayerFell>,
) {
    for body in &players {
        if body.top() > HEIGHT {
            fell.write(PlayerFell);
        }
    }
}
