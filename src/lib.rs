//! Asteroids shooter library
//!
//! A single-player arcade shooter on a wrap-around field: steer the ship with
//! W/A/S/D, aim with the mouse, and break up splitting, regrowing asteroids
//! through ever larger waves.

pub mod asteroid;
pub mod body;
pub mod body_rendering;
pub mod bullet;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod player;
pub mod rendering;
pub mod screens;
pub mod world;
