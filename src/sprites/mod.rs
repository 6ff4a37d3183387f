//! Sprites module: animation state selection and frame playback.
//!
//! Character art is flat-colour frames driven by a fixed bank of states. The
//! state machine runs on the fixed tick so frame counts line up with physics;
//! colours are applied to the sprite in `Update`.

pub mod animation;
pub mod bank;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::{select_state, AnimationController, AnimationState};
pub use bank::{AnimationBank, AnimationBankDef};

use crate::core::TickSet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, bank::setup_animation_bank)
            .add_systems(FixedUpdate, animation::animate.in_set(TickSet::Animate))
            .add_systems(Update, animation::apply_frames);
    }
}
