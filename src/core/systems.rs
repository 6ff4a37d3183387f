//! Core domain: reset orchestration and render-side glue.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::camera::CameraOffset;
use crate::collision::Body;
use crate::core::messages::PlayerFell;
use crate::level::{Block, LevelLayout};
use crate::player::{Player, Tuning};
use crate::projectile::{ConfettiRng, Projectile};

/// Tear the run down and rebuild it from the loaded layout. Falling off the
/// level is a normal gameplay event, not an error.
pub(crate) fn handle_player_fell(
    mut messages: MessageReader<PlayerFell>,
    mut commands: Commands,
    layout: Res<LevelLayout>,
    tuning: Res<Tuning>,
    mut offset: ResMut<CameraOffset>,
    mut rng: ResMut<ConfettiRng>,
    players: Query<Entity, With<Player>>,
    blocks: Query<Entity, With<Block>>,
    projectiles: Query<Entity, With<Projectile>>,
) {
    if messages.is_empty() {
        return;
    }
    messages.clear();

    info!("Player fell out of the level, resetting");

    for entity in players.iter().chain(blocks.iter()).chain(projectiles.iter()) {
        commands.entity(entity).despawn();
    }

    *offset = CameraOffset::default();
    rng.reseed(rand::rng().random());

    crate::level::spawn_blocks(&mut commands, &layout);
    crate::player::spawn_player(&mut commands, &tuning);
}

/// Map level-space bodies (y grows downward) onto Bevy world transforms.
pub(crate) fn sync_transforms(mut query: Query<(&Body, &mut Transform)>) {
    for (body, mut transform) in &mut query {
        transform.translation.x = body.x + body.w / 2.0;
        transform.translation.y = -(body.y + body.h / 2.0);
    }
}
