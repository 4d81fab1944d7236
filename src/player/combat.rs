//! Bullet firing.
//!
//! Every pending primary-fire press spawns exactly one bullet at the ship's
//! centre with the ship's current facing angle.  There is no cooldown, so
//! several presses within one tick spawn several bullets.

use super::state::{Player, PlayerInput};
use crate::body::Position;
use crate::bullet::{bullet_bundle, Bullet};
use crate::config::GameConfig;
use bevy::prelude::*;

/// Consume `PlayerInput::fire_requests` and spawn the corresponding bullets.
///
/// Requests are drained even when no ship exists so they cannot leak into the
/// next session.
pub fn fire_system(
    mut commands: Commands,
    mut input: ResMut<PlayerInput>,
    players: Query<(&Player, &Position)>,
    config: Res<GameConfig>,
) {
    let requests = std::mem::take(&mut input.fire_requests);
    let Ok((player, position)) = players.single() else {
        return;
    };
    for _ in 0..requests {
        commands.spawn(bullet_bundle(
            position.0,
            Bullet::new(player.angle, config.bullet_speed),
        ));
    }
}
