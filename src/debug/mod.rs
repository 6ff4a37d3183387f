//! Debug info overlay for fast iteration and testing.
//!
//! F1 toggles a small text panel with the player's level-space position,
//! velocities, counters, and the camera offset.

use bevy::prelude::*;

use crate::camera::CameraOffset;
use crate::collision::Body;
use crate::player::{Kinematics, Player};
use crate::projectile::Projectile;
use crate::sprites::AnimationController;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the debug info overlay
    pub show_info: bool,
}

/// Marker for the debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_debug_info, update_debug_info_overlay).chain());
    }
}

/// Toggle the overlay with F1
fn toggle_debug_info(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        info!(
            "[DEBUG] Info overlay {}",
            if debug_state.show_info { "ON" } else { "OFF" }
        );
    }
}

/// Update the debug info overlay with current player state
fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    offset: Res<CameraOffset>,
    player_query: Query<(&Body, &Kinematics, &AnimationController), With<Player>>,
    projectile_query: Query<(), With<Projectile>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((body, kin, controller)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.1}, {:.1})\nFall: {} Jumps: {}\nAnim: {:?} ({})\nConfetti: {}\nScroll: ({:.0}, {:.0})",
            body.x,
            body.y,
            kin.x_vel,
            kin.y_vel,
            kin.fall_count,
            kin.jump_count,
            controller.state,
            controller.counter,
            projectile_query.iter().count(),
            offset.x,
            offset.y
        );
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
