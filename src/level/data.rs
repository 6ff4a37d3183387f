//! Level domain: layout definitions.

use bevy::prelude::*;
use serde::Deserialize;

use crate::core::{BLOCK_SIZE, HEIGHT, WIDTH};

/// One static terrain block. Blocks are square.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BlockDef {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// The floor row: blocks `from..to` at `i * size`, all at height `y`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FloorDef {
    pub y: f32,
    pub from: i32,
    pub to: i32,
    pub size: f32,
}

/// Level description as loaded from `assets/data/level.ron`.
#[derive(Debug, Clone, Deserialize)]
pub struct LevelDef {
    pub floor: FloorDef,
    pub platforms: Vec<BlockDef>,
}

impl Default for LevelDef {
    fn default() -> Self {
        let size = BLOCK_SIZE as i32;
        Self {
            floor: FloorDef {
                y: HEIGHT - BLOCK_SIZE,
                from: (-(WIDTH as i32)).div_euclid(size),
                to: (2 * WIDTH as i32).div_euclid(size),
                size: BLOCK_SIZE,
            },
            platforms: vec![
                BlockDef {
                    x: 0.0,
                    y: HEIGHT - BLOCK_SIZE * 2.0,
                    size: BLOCK_SIZE,
                },
                BlockDef {
                    x: BLOCK_SIZE * 3.0,
                    y: HEIGHT - BLOCK_SIZE * 4.0,
                    size: BLOCK_SIZE,
                },
            ],
        }
    }
}

/// The loaded layout, kept as a resource so a reset rebuilds the exact same
/// level.
#[derive(Resource, Debug, Clone)]
pub struct LevelLayout {
    def: LevelDef,
}

impl LevelLayout {
    pub fn new(def: LevelDef) -> Self {
        Self { def }
    }

    /// Expand the layout into blocks: the floor row first, then the platforms.
    /// This order is the collision scan order.
    pub fn blocks(&self) -> Vec<BlockDef> {
        let floor = &self.def.floor;
        let mut blocks: Vec<BlockDef> = (floor.from..floor.to)
            .map(|i| BlockDef {
                x: i as f32 * floor.size,
                y: floor.y,
                size: floor.size,
            })
            .collect();
        blocks.extend(self.def.platforms.iter().copied());
        blocks
    }
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::new(LevelDef::default())
    }
}
