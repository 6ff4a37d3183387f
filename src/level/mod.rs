//! Level domain: static terrain blocks and the RON layout loader.

mod backdrop;
mod data;
mod loader;
mod spawn;

use bevy::prelude::*;

pub use backdrop::Backdrop;
pub use data::{BlockDef, FloorDef, LevelDef, LevelLayout};
pub use spawn::{Block, BlockIndex};
pub(crate) use spawn::spawn_blocks;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn::setup_level, backdrop::setup_backdrop))
            .add_systems(Update, backdrop::follow_camera);
    }
}
