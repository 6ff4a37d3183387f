mod camera;
mod collision;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod player;
mod projectile;
mod sprites;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platformer".to_string(),
            resolution: (core::WIDTH as u32, core::HEIGHT as u32).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(Time::<Fixed>::from_hz(core::FPS as f64))
    .add_plugins((
        core::CorePlugin,
        level::LevelPlugin,
        player::PlayerPlugin,
        projectile::ProjectilePlugin,
        camera::CameraPlugin,
        sprites::SpritesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
