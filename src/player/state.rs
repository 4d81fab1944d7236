//! Player components and resources.
//!
//! Systems that mutate this state are in the sibling modules:
//! - [`super::control`] — input capture + per-tick movement
//! - [`super::combat`] — bullet firing

use crate::constants::{PLAYER_LIVES, PLAYER_SPEED};
use bevy::prelude::*;

// ── Components ─────────────────────────────────────────────────────────────────

/// The player's ship.
///
/// `angle` and `velocity` are recomputed from scratch every tick by
/// [`crate::body::Body::advance`]; only `lives` carries over between ticks.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Facing angle in degrees (screen space), toward the pointer.
    pub angle: f32,
    /// Displacement applied during the last tick.
    pub velocity: Vec2,
    /// Per-axis displacement while a movement key is held.
    pub speed: f32,
    /// Remaining lives; the session ends when this reaches zero.
    pub lives: u32,
}

impl Player {
    pub fn new(speed: f32, lives: u32) -> Self {
        Self {
            angle: 0.0,
            velocity: Vec2::ZERO,
            speed,
            lives,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_SPEED, PLAYER_LIVES)
    }
}

// ── Input Abstraction ──────────────────────────────────────────────────────────

/// Aggregated player input, written by [`super::control::capture_input_system`]
/// every rendered frame and consumed by the fixed-rate simulation.
///
/// Tests can populate this directly to drive the ship without a real device.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct PlayerInput {
    /// Last known pointer position in screen space.
    pub pointer: Vec2,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Primary-fire presses not yet turned into bullets.
    pub fire_requests: u32,
}

impl PlayerInput {
    /// Held movement keys as a screen-space direction.
    ///
    /// Each axis checks both of its keys independently: holding both opposing
    /// keys cancels out to 0 on that axis.
    pub fn steer(&self) -> Vec2 {
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}
