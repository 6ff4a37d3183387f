//! Core domain: messages for the run flow.

use bevy::ecs::message::Message;

/// Fired when the player's top edge drops below the bottom of the screen.
/// The handler rebuilds the player, the level, and the camera offset.
#[derive(Debug)]
pub struct PlayerFell;

impl Message for PlayerFell {}
