//! Player module: ship entity, input handling and firing.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | `Player` component and the `PlayerInput` resource |
//! | [`control`] | Input capture, and the ship's `Body` impl: face pointer, W/A/S/D movement, wrap |
//! | [`combat`] | Bullet firing from pending fire requests |
//!
//! All public items are re-exported at this level so that the rest of the crate
//! can use flat `crate::player::*` imports.

pub mod combat;
pub mod control;
pub mod state;

pub use combat::fire_system;
pub use control::capture_input_system;
pub use state::{Player, PlayerInput};

use crate::body::{arena, body_bundle, Body};
use crate::config::GameConfig;
use bevy::prelude::*;

// ── Plugin ─────────────────────────────────────────────────────────────────────

/// Device input sampling into [`PlayerInput`].
///
/// Needs `ButtonInput<KeyCode>`, `MouseButtonInput` messages and `GameState`;
/// `DefaultPlugins` plus [`crate::world::GameplayPlugin`] provide them.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, capture_input_system);
    }
}

// ── Ship spawn ─────────────────────────────────────────────────────────────────

/// Spawn the player's ship at the centre of the arena with a full set of lives.
pub fn spawn_player(commands: &mut Commands, config: &GameConfig) {
    let centre = arena() / 2.0;
    commands.spawn((
        Player::new(config.player_speed, config.player_lives),
        body_bundle(centre, Player::LAYER),
    ));
    info!("Player ship spawned at {centre} with {} lives", config.player_lives);
}
