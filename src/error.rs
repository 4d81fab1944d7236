//! Game-specific error types.
//!
//! The simulation itself has no failure modes: death and destruction are
//! ordinary state transitions.  Errors only arise while loading the optional
//! configuration override, and are logged rather than propagated to a crash.

use std::fmt;

/// Top-level error enum for the shooter.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// The override file exists but is not valid TOML for [`crate::config::GameConfig`].
    ConfigParse {
        /// Human-readable parser message.
        message: String,
    },

    /// A setting parsed correctly but is outside the range the game can run with.
    InvalidSetting {
        /// Name of the setting (matches the TOML key).
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// `asteroid_spawn_sizes` was set to an empty list.
    EmptySpawnSizes,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigParse { message } => {
                write!(f, "failed to parse game config: {}", message)
            }
            GameError::InvalidSetting {
                name,
                value,
                expected,
            } => write!(
                f,
                "setting '{}' = {} is outside accepted range {}",
                name, value, expected
            ),
            GameError::EmptySpawnSizes => {
                write!(f, "asteroid_spawn_sizes must list at least one size")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is finite and strictly positive.
pub fn require_positive(name: &'static str, value: f64) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidSetting {
            name,
            value,
            expected: "(0, ∞)",
        })
    }
}

/// Returns an error if `value` is negative or not finite.
pub fn require_non_negative(name: &'static str, value: f64) -> GameResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidSetting {
            name,
            value,
            expected: "[0, ∞)",
        })
    }
}

/// Returns an error if `value` exceeds `max`; `expected` describes the full range.
pub fn require_at_most(
    name: &'static str,
    value: f64,
    max: f64,
    expected: &'static str,
) -> GameResult<()> {
    if value <= max {
        Ok(())
    } else {
        Err(GameError::InvalidSetting {
            name,
            value,
            expected,
        })
    }
}
