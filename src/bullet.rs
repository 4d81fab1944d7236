//! Bullets: fixed heading, fixed speed, gone once they leave the arena.

use crate::body::{body_bundle, Body, Fate, Frame, Position};
use crate::constants::{BULLET_LENGTH, BULLET_SPEED, BULLET_WIDTH};
use crate::geometry::within_arena;
use bevy::prelude::*;

/// A fired round.
///
/// Impact removal is decided by [`crate::world::bullet_asteroid_collision_system`];
/// the bullet itself only knows when it has left the arena.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    /// Heading in degrees (screen space), captured from the ship at fire time.
    pub angle: f32,
    /// Displacement per tick along the heading.
    pub speed: f32,
}

impl Bullet {
    pub fn new(angle: f32, speed: f32) -> Self {
        Self { angle, speed }
    }
}

impl Default for Bullet {
    fn default() -> Self {
        Self::new(0.0, BULLET_SPEED)
    }
}

impl Body for Bullet {
    const LAYER: f32 = 1.0;

    /// The drawable is an unrotated 10×5 bar regardless of heading.
    fn extent(&self) -> Vec2 {
        Vec2::new(BULLET_LENGTH, BULLET_WIDTH)
    }

    fn advance(&mut self, position: &mut Vec2, frame: &Frame) -> Fate {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        *position += Vec2::new(cos, sin) * self.speed;
        if within_arena(*position, frame.arena) {
            Fate::Alive
        } else {
            Fate::Expired
        }
    }

    fn outline(&self) -> Vec<Vec2> {
        let half = self.extent() / 2.0;
        vec![
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ]
    }

    fn color(&self) -> Color {
        Color::WHITE
    }
}

/// Everything a bullet entity is spawned with.
pub fn bullet_bundle(position: Vec2, bullet: Bullet) -> (Bullet, (Position, Transform, Visibility)) {
    (bullet, body_bundle(position, Bullet::LAYER))
}
