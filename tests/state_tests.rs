//! Headless tests for the [`GameState`] screen flow.
//!
//! These tests use [`MinimalPlugins`] (no window, no rendering) and drive the
//! screens through a hand-held `ButtonInput<KeyCode>` resource.
//!
//! Covered scenarios:
//! 1. Default initial state is `Title`, with the title UI spawned.
//! 2. Enter on the title screen starts a session with a fresh ship.
//! 3. Enter on the game-over screen starts a new session from level 1.
//! 4. Escape on the game-over screen requests a successful exit.

use asteroids_shooter::player::Player;
use asteroids_shooter::screens::{GameOverRoot, GameState, ScreensPlugin, TitleRoot};
use asteroids_shooter::world::{GameplayPlugin, Wave, WorldPhase};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Headless app with gameplay and screens; the clock is frozen so no fixed
/// tick runs unless a test asks for one.
fn app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO))
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins((GameplayPlugin, ScreensPlugin));
    app.update();
    app
}

fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn tap(app: &mut App, key: KeyCode) {
    {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.reset_all();
        keys.press(key);
    }
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .reset_all();
}

fn count<T: Component>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<T>>()
        .iter(app.world())
        .count()
}

/// Drive the app to the game-over screen by killing the ship.
fn reach_game_over(app: &mut App) {
    tap(app, KeyCode::Enter);
    let world = app.world_mut();
    let mut players = world.query::<&mut Player>();
    for mut player in players.iter_mut(world) {
        player.lives = 0;
    }
    world.resource_mut::<Wave>().phase = WorldPhase::PlayerDead;
    world
        .resource_mut::<NextState<GameState>>()
        .set(GameState::GameOver);
    app.update();
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn starts_on_title_screen() {
    let mut app = app();
    assert_eq!(state(&app), GameState::Title);
    assert_eq!(count::<TitleRoot>(&mut app), 1);
    assert_eq!(count::<Player>(&mut app), 0);
}

#[test]
fn title_ignores_other_keys() {
    let mut app = app();
    tap(&mut app, KeyCode::Escape);
    tap(&mut app, KeyCode::Space);
    assert_eq!(state(&app), GameState::Title);
    assert!(app.should_exit().is_none());
}

#[test]
fn enter_on_title_starts_session() {
    let mut app = app();
    tap(&mut app, KeyCode::Enter);

    assert_eq!(state(&app), GameState::Playing);
    assert_eq!(count::<TitleRoot>(&mut app), 0);

    let world = app.world_mut();
    let player = world.query::<&Player>().single(world).expect("one ship");
    assert_eq!(player.lives, 3);
    assert_eq!(*app.world().resource::<Wave>(), Wave::default());
}

#[test]
fn game_over_clears_field_and_shows_prompt() {
    let mut app = app();
    reach_game_over(&mut app);

    assert_eq!(state(&app), GameState::GameOver);
    assert_eq!(count::<GameOverRoot>(&mut app), 1);
    assert_eq!(count::<Player>(&mut app), 0);
}

#[test]
fn enter_on_game_over_restarts_from_level_one() {
    let mut app = app();
    reach_game_over(&mut app);
    app.world_mut().resource_mut::<Wave>().level = 7;

    tap(&mut app, KeyCode::Enter);

    assert_eq!(state(&app), GameState::Playing);
    assert_eq!(count::<GameOverRoot>(&mut app), 0);
    let wave = *app.world().resource::<Wave>();
    assert_eq!(wave.level, 1);
    assert_eq!(wave.phase, WorldPhase::Spawning);

    let world = app.world_mut();
    let player = world.query::<&Player>().single(world).expect("one ship");
    assert_eq!(player.lives, 3);
}

#[test]
fn escape_on_game_over_exits_successfully() {
    let mut app = app();
    reach_game_over(&mut app);

    tap(&mut app, KeyCode::Escape);

    assert_eq!(app.should_exit(), Some(AppExit::Success));
}
