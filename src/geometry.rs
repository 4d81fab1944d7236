//! Screen-space math helpers.
//!
//! Gameplay runs in **screen space**: origin at the window's top-left corner,
//! +x right, +y down, angles in degrees measured from +x toward +y.  Only the
//! renderer converts to Bevy's centred, y-up world space via [`screen_to_world`].

use bevy::math::Rect;
use bevy::prelude::*;

/// Angle in degrees of the vector from `origin` to `target`.
pub fn calculate_angle(origin: Vec2, target: Vec2) -> f32 {
    let delta = target - origin;
    delta.y.atan2(delta.x).to_degrees()
}

/// Wrap `value` into `[0, extent)`.
///
/// `rem_euclid` can round a tiny negative value up to exactly `extent`, which
/// would break the half-open range, so that case folds back to zero.
pub fn wrap(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Wrap both axes of `position` into the arena (toroidal topology).
pub fn wrap_position(position: Vec2, arena: Vec2) -> Vec2 {
    Vec2::new(wrap(position.x, arena.x), wrap(position.y, arena.y))
}

/// `true` while `position` lies in `[0, arena.x] × [0, arena.y]` (edges included).
pub fn within_arena(position: Vec2, arena: Vec2) -> bool {
    (0.0..=arena.x).contains(&position.x) && (0.0..=arena.y).contains(&position.y)
}

/// Strict rectangle intersection: rectangles that only share an edge do not overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

/// Axis-aligned bounding box size of a `size` rectangle rotated by `degrees`.
pub fn rotated_extent(size: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    Vec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}

/// Convert a screen-space point to world space for a camera centred on the arena.
pub fn screen_to_world(position: Vec2, arena: Vec2) -> Vec2 {
    Vec2::new(position.x - arena.x / 2.0, arena.y / 2.0 - position.y)
}
