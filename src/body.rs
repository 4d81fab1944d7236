//! The shared contract of every live game object.
//!
//! Player, bullets and asteroids all carry a screen-space [`Position`] and a
//! component implementing [`Body`].  The ECS systems in [`crate::world`] and
//! [`crate::body_rendering`] are generic over `Body`, so each concern (motion,
//! collision rectangles, drawable outline) is written once and instantiated
//! per body type.

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::geometry::screen_to_world;
use crate::player::PlayerInput;
use bevy::math::Rect;
use bevy::prelude::*;

/// Centre of a body in screen space (origin top-left, +y down).
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

/// Marker inserted when a body's drawable changed shape; the renderer rebuilds
/// its mesh and removes the marker.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Redraw;

/// Outcome of one [`Body::advance`] step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Nothing visible changed beyond position/orientation.
    Alive,
    /// The drawable outline changed and must be rebuilt.
    Reshaped,
    /// The body removed itself (e.g. a bullet leaving the arena).
    Expired,
}

/// Per-tick inputs shared by every body's `advance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Pointer position in screen space.
    pub pointer: Vec2,
    /// Held movement keys as a per-axis direction, each component in {-1, 0, 1}.
    pub steer: Vec2,
    /// Seconds since app start on the simulation clock.
    pub now: f32,
    /// Play-field size.
    pub arena: Vec2,
}

impl Frame {
    pub fn new(input: &PlayerInput, now: f32) -> Self {
        Self {
            pointer: input.pointer,
            steer: input.steer(),
            now,
            arena: arena(),
        }
    }
}

/// The toroidal play-field size.
pub fn arena() -> Vec2 {
    Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// Position / advance / bounds / draw capability set.
pub trait Body {
    /// Draw order; larger values render on top.
    const LAYER: f32;

    /// Width and height of the collision rectangle, which is the bounding box
    /// of the drawable in its current orientation.
    fn extent(&self) -> Vec2;

    /// Advance one tick, mutating the body and its position.
    fn advance(&mut self, position: &mut Vec2, frame: &Frame) -> Fate;

    /// Local-space drawable polygon (screen orientation, unrotated, centred on 0).
    fn outline(&self) -> Vec<Vec2>;

    fn color(&self) -> Color;

    /// Drawable orientation in degrees (screen space).
    fn heading(&self) -> f32 {
        0.0
    }

    /// Axis-aligned collision rectangle centred on `center`.
    fn bounds(&self, center: Vec2) -> Rect {
        Rect::from_center_size(center, self.extent())
    }
}

/// Components every body entity needs besides its `Body` component.
pub fn body_bundle(position: Vec2, layer: f32) -> (Position, Transform, Visibility) {
    (
        Position(position),
        Transform::from_translation(screen_to_world(position, arena()).extend(layer)),
        Visibility::default(),
    )
}
