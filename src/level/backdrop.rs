//! Level domain: tiled backdrop behind the terrain.
//!
//! The backdrop rides with the camera so the view is always covered; it never
//! participates in collision and survives a level reset.

use bevy::prelude::*;

use crate::camera::CameraOffset;
use crate::core::{BLOCK_SIZE, HEIGHT, WIDTH};

#[derive(Component, Debug)]
pub struct Backdrop;

pub(crate) fn setup_backdrop(mut commands: Commands) {
    let cols = (WIDTH / BLOCK_SIZE).ceil() as i32;
    let rows = (HEIGHT / BLOCK_SIZE).ceil() as i32;

    commands
        .spawn((
            Backdrop,
            Transform::from_xyz(WIDTH / 2.0, -HEIGHT / 2.0, -10.0),
            Visibility::default(),
        ))
        .with_children(|parent| {
            for col in 0..=cols {
                for row in 0..=rows {
                    let shade = if (col + row) % 2 == 0 {
                        Color::srgb(0.24, 0.44, 0.84)
                    } else {
                        Color::srgb(0.27, 0.47, 0.87)
                    };
                    parent.spawn((
                        Sprite {
                            color: shade,
                            custom_size: Some(Vec2::splat(BLOCK_SIZE)),
                            ..default()
                        },
                        Transform::from_xyz(
                            (col as f32 + 0.5) * BLOCK_SIZE - WIDTH / 2.0,
                            (row as f32 + 0.5) * BLOCK_SIZE - HEIGHT / 2.0,
                            0.0,
                        ),
                    ));
                }
            }
        });
}

pub(crate) fn follow_camera(
    offset: Res<CameraOffset>,
    mut backdrops: Query<&mut Transform, With<Backdrop>>,
) {
    for mut transform in &mut backdrops {
        transform.translation.x = offset.x + WIDTH / 2.0;
        transform.translation.y = -(offset.y + HEIGHT / 2.0);
    }
}
