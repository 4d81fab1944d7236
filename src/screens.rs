//! Title and game-over screens — `GameState` definition and `ScreensPlugin`.
//!
//! ## States
//!
//! | State      | Description                                    |
//! |------------|------------------------------------------------|
//! | `Title`    | Initial state; splash screen shown once        |
//! | `Playing`  | Session running; all gameplay systems active   |
//! | `GameOver` | Lives exhausted; retry or quit prompt          |
//!
//! ## Systems (registered by `ScreensPlugin`)
//!
//! | System                     | Schedule                  | Purpose                       |
//! |----------------------------|---------------------------|-------------------------------|
//! | `setup_title`              | `OnEnter(Title)`          | Spawn full-screen title UI    |
//! | `cleanup_title`            | `OnExit(Title)`           | Despawn title UI              |
//! | `title_input_system`       | `Update / in Title`       | Enter → Playing               |
//! | `setup_game_over`          | `OnEnter(GameOver)`       | Spawn game-over UI            |
//! | `cleanup_game_over`        | `OnExit(GameOver)`        | Despawn game-over UI          |
//! | `game_over_input_system`   | `Update / in GameOver`    | Enter → Playing, Esc → quit   |
//!
//! Closing the window quits from any state through Bevy's window plugin.

use bevy::prelude::*;

mod common;
mod game_over;
mod title;

use common::*;

pub use game_over::{cleanup_game_over, game_over_input_system, setup_game_over, GameOverRoot};
pub use title::{cleanup_title, setup_title, title_input_system, TitleRoot};

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level application state machine.
///
/// Every simulation system in [`crate::world::GameplayPlugin`] runs under
/// `.run_if(in_state(GameState::Playing))`, so it is fully inactive while a
/// screen is displayed.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Title splash; shown once on startup.
    #[default]
    Title,
    /// Active session.
    Playing,
    /// Player has exhausted all lives.
    GameOver,
}

/// What a key press on a screen asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// Start (or restart) a session.
    Play,
    /// Terminate the process.
    Quit,
}

/// Title screen only reacts to confirm.
pub fn title_action(keys: &ButtonInput<KeyCode>) -> Option<ScreenAction> {
    keys.just_pressed(KeyCode::Enter)
        .then_some(ScreenAction::Play)
}

/// Game-over screen: confirm retries, cancel quits.  Confirm wins a tie.
pub fn game_over_action(keys: &ButtonInput<KeyCode>) -> Option<ScreenAction> {
    if keys.just_pressed(KeyCode::Enter) {
        Some(ScreenAction::Play)
    } else if keys.just_pressed(KeyCode::Escape) {
        Some(ScreenAction::Quit)
    } else {
        None
    }
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers the screen UI setup/teardown and key handlers.
///
/// `GameState` itself is registered by [`crate::world::GameplayPlugin`], which
/// must be added first.
pub struct ScreensPlugin;

impl Plugin for ScreensPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Title), setup_title)
            .add_systems(OnExit(GameState::Title), cleanup_title)
            .add_systems(
                Update,
                title_input_system.run_if(in_state(GameState::Title)),
            )
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(OnExit(GameState::GameOver), cleanup_game_over)
            .add_systems(
                Update,
                game_over_input_system.run_if(in_state(GameState::GameOver)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(key: KeyCode) -> ButtonInput<KeyCode> {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(key);
        keys
    }

    #[test]
    fn title_waits_for_enter() {
        assert_eq!(title_action(&ButtonInput::default()), None);
        assert_eq!(title_action(&pressed(KeyCode::Escape)), None);
        assert_eq!(title_action(&pressed(KeyCode::Space)), None);
        assert_eq!(
            title_action(&pressed(KeyCode::Enter)),
            Some(ScreenAction::Play)
        );
    }

    #[test]
    fn game_over_enter_retries_escape_quits() {
        assert_eq!(game_over_action(&ButtonInput::default()), None);
        assert_eq!(
            game_over_action(&pressed(KeyCode::Enter)),
            Some(ScreenAction::Play)
        );
        assert_eq!(
            game_over_action(&pressed(KeyCode::Escape)),
            Some(ScreenAction::Quit)
        );
    }

    #[test]
    fn held_keys_do_not_repeat_actions() {
        let mut keys = pressed(KeyCode::Enter);
        keys.clear();
        assert!(keys.pressed(KeyCode::Enter));
        assert_eq!(game_over_action(&keys), None);
    }
}
