//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place.  [`crate::config::GameConfig`] mirrors the gameplay
//! subset and uses these values as its compiled defaults; the screen geometry
//! and text layout below are fixed and not overridable.

use bevy::prelude::*;

// ── Window / Play-field ───────────────────────────────────────────────────────

/// Width of the window and of the toroidal play-field (logical pixels).
pub const SCREEN_WIDTH: f32 = 800.0;

/// Height of the window and of the toroidal play-field (logical pixels).
pub const SCREEN_HEIGHT: f32 = 600.0;

pub const WINDOW_TITLE: &str = "Asteroids Shooter - Retry on Game Over";

/// Simulation tick rate.  Every gameplay system runs once per tick in `FixedUpdate`.
pub const FPS: f64 = 60.0;

/// Highest tick rate an override file may request.
pub const MAX_FPS: f64 = 240.0;

/// Highest per-tick speed an override file may give the ship, bullets or asteroids.
pub const MAX_BODY_SPEED: f32 = 100.0;

/// Most asteroids an override file may add per level.
pub const MAX_ASTEROIDS_PER_LEVEL: u32 = 50;

// ── Player ────────────────────────────────────────────────────────────────────

/// Per-axis displacement (pixels per tick) while a movement key is held.
pub const PLAYER_SPEED: f32 = 5.0;

/// Lives granted at the start of every session.
pub const PLAYER_LIVES: u32 = 3;

/// Unrotated ship triangle size: nose along +x.
pub const SHIP_LENGTH: f32 = 40.0;
pub const SHIP_WIDTH: f32 = 20.0;

// ── Bullets ───────────────────────────────────────────────────────────────────

/// Bullet displacement per tick along its heading.
pub const BULLET_SPEED: f32 = 10.0;

pub const BULLET_LENGTH: f32 = 10.0;
pub const BULLET_WIDTH: f32 = 5.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Velocity bound for freshly spawned asteroids: each component is drawn from
/// `[-ASTEROID_BASE_SPEED, ASTEROID_BASE_SPEED]`.
pub const ASTEROID_BASE_SPEED: f32 = 2.0;

/// Diameters a level-start asteroid is drawn from.
pub const ASTEROID_SPAWN_SIZES: [u32; 2] = [40, 60];

/// Asteroids at or below this diameter are destroyed outright instead of splitting.
pub const MIN_SPLIT_SIZE: u32 = 20;

/// Seconds after a split before a shrunken asteroid snaps back to its original size.
pub const REGROW_DELAY_SECS: f32 = 5.0;

/// Each level spawns `level × ASTEROIDS_PER_LEVEL` asteroids.
pub const ASTEROIDS_PER_LEVEL: u32 = 3;

/// Segments used to approximate an asteroid disc.
pub const ASTEROID_SEGMENTS: usize = 32;

/// Colours a level-start asteroid is drawn from; split products inherit theirs.
pub const ASTEROID_PALETTE: [Color; 6] = [
    Color::srgb(1.0, 0.0, 0.0), // red
    Color::srgb(0.0, 1.0, 0.0), // green
    Color::srgb(0.0, 0.0, 1.0), // blue
    Color::srgb(1.0, 1.0, 0.0), // yellow
    Color::srgb(1.0, 0.0, 1.0), // magenta
    Color::srgb(0.0, 1.0, 1.0), // cyan
];

// ── Text ──────────────────────────────────────────────────────────────────────

pub const HUD_FONT_SIZE: f32 = 24.0;
pub const TITLE_FONT_SIZE: f32 = 48.0;

/// HUD inset from the top-left corner (lives) and top edge (level).
pub const HUD_MARGIN: f32 = 10.0;

/// Distance of the level counter's left edge from the right window edge.
pub const HUD_LEVEL_OFFSET: f32 = 120.0;
