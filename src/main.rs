use asteroids_shooter::constants::{FPS, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use asteroids_shooter::player::ControlsPlugin;
use asteroids_shooter::rendering::RenderingPlugin;
use asteroids_shooter::screens::ScreensPlugin;
use asteroids_shooter::world::GameplayPlugin;
use asteroids_shooter::{config, graphics};
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: WindowResolution::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // load_game_config overrides the rate if assets/game.toml sets `fps`.
        .insert_resource(Time::<Fixed>::from_hz(FPS))
        // Compiled defaults; load_game_config overwrites them from assets/game.toml
        // (if present) in the Startup schedule.
        .insert_resource(config::GameConfig::default())
        .add_plugins((GameplayPlugin, ControlsPlugin, ScreensPlugin, RenderingPlugin))
        .add_systems(
            Startup,
            (
                config::load_game_config,
                graphics::setup_camera.after(config::load_game_config),
            ),
        )
        .run();
}
