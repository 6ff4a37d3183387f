//! Player domain: fixed-step physics integration.

use bevy::prelude::*;

use crate::collision::Body;
use crate::core::FPS;
use crate::player::{Kinematics, Player, Tuning};

pub(crate) fn integrate_player(
    tuning: Res<Tuning>,
    mut players: Query<(&mut Body, &mut Kinematics), With<Player>>,
) {
    for (mut body, mut kin) in &mut players {
        kin.integrate(&mut body, FPS as f32, tuning.gravity);
    }
}
