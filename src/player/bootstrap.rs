//! Player domain: player entity setup.

use bevy::prelude::*;

use crate::collision::{Body, Mask};
use crate::player::{Facing, Kinematics, Player, Tuning};
use crate::sprites::AnimationController;

pub(crate) fn setup_player(mut commands: Commands, tuning: Res<Tuning>) {
    spawn_player(&mut commands, &tuning);
}

pub(crate) fn spawn_player(commands: &mut Commands, tuning: &Tuning) {
    info!(
        "Spawning player at ({}, {})",
        tuning.spawn_x, tuning.spawn_y
    );

    commands.spawn((
        Player,
        Body::new(
            tuning.spawn_x,
            tuning.spawn_y,
            tuning.player_size,
            tuning.player_size,
        ),
        Mask::filled(tuning.player_size as u32, tuning.player_size as u32),
        Kinematics::default(),
        Facing::default(),
        AnimationController::default(),
        Sprite {
            color: Color::srgb(0.9, 0.3, 0.3),
            custom_size: Some(Vec2::splat(tuning.player_size)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 2.0),
    ));
}
