//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the gameplay constants in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.player_speed`, `config.min_split_size`, etc.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{
    require_at_most, require_non_negative, require_positive, GameError, GameResult,
};
use bevy::prelude::*;
use serde::Deserialize;

/// Path of the optional override file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Timing ───────────────────────────────────────────────────────────────
    pub fps: f64,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_speed: f32,
    pub player_lives: u32,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_speed: f32,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub asteroid_base_speed: f32,
    pub asteroid_spawn_sizes: Vec<u32>,
    pub asteroids_per_level: u32,
    pub min_split_size: u32,
    pub regrow_delay_secs: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: FPS,
            player_speed: PLAYER_SPEED,
            player_lives: PLAYER_LIVES,
            bullet_speed: BULLET_SPEED,
            asteroid_base_speed: ASTEROID_BASE_SPEED,
            asteroid_spawn_sizes: ASTEROID_SPAWN_SIZES.to_vec(),
            asteroids_per_level: ASTEROIDS_PER_LEVEL,
            min_split_size: MIN_SPLIT_SIZE,
            regrow_delay_secs: REGROW_DELAY_SECS,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) TOML document and validate the result.
    pub fn from_toml_str(contents: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(contents).map_err(|e| GameError::ConfigParse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        const SPEED_RANGE: &str = "[0, 100]";

        require_positive("fps", self.fps)?;
        require_at_most("fps", self.fps, MAX_FPS, "(0, 240]")?;
        require_positive("player_lives", self.player_lives as f64)?;
        require_positive("asteroids_per_level", self.asteroids_per_level as f64)?;
        require_at_most(
            "asteroids_per_level",
            self.asteroids_per_level as f64,
            MAX_ASTEROIDS_PER_LEVEL as f64,
            "[1, 50]",
        )?;
        require_non_negative("regrow_delay_secs", self.regrow_delay_secs as f64)?;

        for (name, speed) in [
            ("player_speed", self.player_speed),
            ("bullet_speed", self.bullet_speed),
            ("asteroid_base_speed", self.asteroid_base_speed),
        ] {
            require_non_negative(name, speed as f64)?;
            require_at_most(name, speed as f64, MAX_BODY_SPEED as f64, SPEED_RANGE)?;
        }
        require_positive("bullet_speed", self.bullet_speed as f64)?;
        if self.asteroid_spawn_sizes.is_empty() {
            return Err(GameError::EmptySpawnSizes);
        }
        for &size in &self.asteroid_spawn_sizes {
            require_positive("asteroid_spawn_sizes", size as f64)?;
        }
        Ok(())
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Parse and validation errors are logged but do not abort the game.  A
/// missing file is silently ignored (defaults are already in place).  The
/// fixed-tick rate is re-applied from the final config.
pub fn load_game_config(mut config: ResMut<GameConfig>, mut fixed: ResMut<Time<Fixed>>) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match GameConfig::from_toml_str(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded game config from {CONFIG_PATH}");
            }
            Err(e) => warn!("{e}; using defaults"),
        },
        Err(_) => info!("No {CONFIG_PATH} found; using compiled defaults"),
    }
    fixed.set_timestep_hz(config.fps);
}
