//! Projectile domain: firing, flight, and terrain culling systems.

use bevy::prelude::*;
use std::time::Duration;

use crate::collision::Body;
use crate::level::Block;
use crate::player::{Facing, Player, PlayerInput};
use crate::projectile::{ConfettiRng, FireControl, Projectile, ProjectileTuning};

/// Consume a latched shoot press. The press is spent even when the rate limit
/// suppresses the shot.
pub(crate) fn fire_projectile(
    mut commands: Commands,
    time: Res<Time<Real>>,
    mut input: ResMut<PlayerInput>,
    tuning: Res<ProjectileTuning>,
    mut fire: ResMut<FireControl>,
    mut rng: ResMut<ConfettiRng>,
    players: Query<(&Body, &Facing), With<Player>>,
) {
    if !input.shoot_pressed {
        return;
    }
    input.shoot_pressed = false;

    if !fire.try_fire(
        time.elapsed(),
        Duration::from_millis(tuning.firerate_ms),
    ) {
        debug!("Shot suppressed by firerate");
        return;
    }

    let Ok((body, facing)) = players.single() else {
        return;
    };

    let center = body.center();
    debug!("Firing confetti {:?} from ({}, {})", facing, center.x, center.y);

    commands.spawn((
        Projectile::new(facing.sign() * tuning.speed),
        Body::new(
            center.x - tuning.size / 2.0,
            center.y - tuning.size / 2.0,
            tuning.size,
            tuning.size,
        ),
        Sprite {
            color: rng.next_tint(),
            custom_size: Some(Vec2::splat(tuning.size)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));
}

pub(crate) fn advance_projectiles(
    mut commands: Commands,
    tuning: Res<ProjectileTuning>,
    mut projectiles: Query<(Entity, &mut Body, &mut Projectile)>,
) {
    for (entity, mut body, mut projectile) in &mut projectiles {
        projectile.advance(&mut body);
        if projectile.expired(tuning.max_age) {
            commands.entity(entity).despawn();
        }
    }
}

/// Confetti-vs-terrain is rectangle-based, unlike the player's mask tests.
pub(crate) fn cull_on_terrain(
    mut commands: Commands,
    blocks: Query<&Body, (With<Block>, Without<Projectile>)>,
    projectiles: Query<(Entity, &Body), With<Projectile>>,
) {
    for (entity, body) in &projectiles {
        if blocks.iter().any(|block| block.overlaps(body)) {
            commands.entity(entity).despawn();
        }
    }
}
