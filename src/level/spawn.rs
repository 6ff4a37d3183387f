//! Level domain: block entity spawning.

use bevy::prelude::*;
use std::path::Path;

use super::data::LevelLayout;
use super::loader;
use crate::collision::{Body, Mask};

/// Marker for static terrain.
#[derive(Component, Debug)]
pub struct Block;

/// Construction order of a block within the level. Collision scans sort by
/// this, so the first-hit block matches the layout order.
#[derive(Component, Debug)]
pub struct BlockIndex(pub usize);

pub(crate) fn setup_level(mut commands: Commands) {
    let layout = match loader::load_level(Path::new("assets/data/level.ron")) {
        Ok(def) => LevelLayout::new(def),
        Err(e) => {
            warn!("{}, using built-in layout", e);
            LevelLayout::default()
        }
    };

    spawn_blocks(&mut commands, &layout);
    commands.insert_resource(layout);
}

pub(crate) fn spawn_blocks(commands: &mut Commands, layout: &LevelLayout) {
    let blocks = layout.blocks();
    info!("Spawning {} terrain blocks", blocks.len());

    for (index, def) in blocks.iter().enumerate() {
        commands.spawn((
            Block,
            BlockIndex(index),
            Body::new(def.x, def.y, def.size, def.size),
            Mask::filled(def.size as u32, def.size as u32),
            Sprite {
                color: Color::srgb(0.55, 0.4, 0.25),
                custom_size: Some(Vec2::splat(def.size)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 0.0),
        ));
    }
}
