//! Player domain: input sampling and the jump press.

use bevy::prelude::*;

use crate::player::{Kinematics, Player, PlayerInput, Tuning};

/// Runs every frame. Movement keys are level-sampled; jump and shoot latch
/// until the next fixed tick consumes them.
pub(crate) fn sample_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    input.left = keyboard.pressed(KeyCode::KeyA);
    input.right = keyboard.pressed(KeyCode::KeyD);

    if keyboard.just_pressed(KeyCode::KeyW) {
        input.jump_pressed = true;
    }
    if keyboard.just_pressed(KeyCode::Space) {
        input.shoot_pressed = true;
    }
}

/// Consume a latched jump press: first press jumps, a press while airborne
/// from the first jump double-jumps, anything after that is a no-op.
pub(crate) fn apply_jump_input(
    mut input: ResMut<PlayerInput>,
    tuning: Res<Tuning>,
    mut players: Query<&mut Kinematics, With<Player>>,
) {
    if !input.jump_pressed {
        return;
    }
    input.jump_pressed = false;

    for mut kin in &mut players {
        if kin.jump_count == 0 {
            kin.jump(tuning.gravity);
            debug!("Jump: y_vel={}, jump_count={}", kin.y_vel, kin.jump_count);
        } else if kin.jump_count == 1 {
            kin.double_jump(tuning.gravity);
            debug!(
                "Double jump: y_vel={}, jump_count={}",
                kin.y_vel, kin.jump_count
            );
        }
    }
}
