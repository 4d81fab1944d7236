//! Asteroid component, splitting and regrowth.
//!
//! ## Life cycle
//!
//! | Event | Effect |
//! |---|---|
//! | Level start | Spawned at a random point with a random size, colour and velocity |
//! | Bullet hit, size > `MIN_SPLIT_SIZE` | Removed; two half-size children spawned at its centre |
//! | Bullet hit, size ≤ `MIN_SPLIT_SIZE` | Removed with no children |
//! | Ship contact | Removed with no children (costs the player a life) |
//! | `REGROW_DELAY_SECS` after a split | A shrunken child snaps back to the size it split from |

use crate::body::{body_bundle, Body, Fate, Frame, Position};
use crate::config::GameConfig;
use crate::constants::{
    ASTEROID_PALETTE, ASTEROID_SEGMENTS, ASTEROID_SPAWN_SIZES, REGROW_DELAY_SECS,
};
use crate::geometry::wrap_position;
use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// A drifting, splittable rock.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Asteroid {
    /// Current diameter.
    pub size: u32,
    /// Diameter this asteroid regrows to; equals `size` for a fresh spawn.
    pub original_size: u32,
    pub color: Color,
    /// Per-tick displacement, fixed at construction.
    pub velocity: Vec2,
    /// Simulation time at which this asteroid was created by a spawn or a split.
    pub split_at: f32,
    /// Seconds after `split_at` before a shrunken asteroid regrows.
    pub regrow_delay: f32,
}

impl Asteroid {
    /// Create an asteroid whose velocity components are drawn independently and
    /// uniformly from `[-speed, speed]`.
    pub fn new<R: Rng>(size: u32, speed: f32, color: Color, now: f32, rng: &mut R) -> Self {
        let speed = speed.abs();
        Self {
            size,
            original_size: size,
            color,
            velocity: Vec2::new(rng.gen_range(-speed..=speed), rng.gen_range(-speed..=speed)),
            split_at: now,
            regrow_delay: REGROW_DELAY_SECS,
        }
    }

    /// Set the size this asteroid regrows to.
    pub fn with_parent_size(mut self, parent_size: u32) -> Self {
        self.original_size = parent_size;
        self
    }

    pub fn with_regrow_delay(mut self, secs: f32) -> Self {
        self.regrow_delay = secs;
        self
    }

    /// Products of a bullet hit: two half-size children above `min_split_size`,
    /// none at or below it.
    ///
    /// Children keep the colour, get a speed bound of `|velocity.x| + 1`, and
    /// regrow to this asteroid's current (pre-split) size.  `self` is left
    /// untouched; removing it is the caller's job.
    pub fn split<R: Rng>(&self, min_split_size: u32, now: f32, rng: &mut R) -> Vec<Asteroid> {
        if self.size <= min_split_size {
            return Vec::new();
        }
        let half = self.size / 2;
        let speed = self.velocity.x.abs() + 1.0;
        let mut child = || {
            Asteroid::new(half, speed, self.color, now, &mut *rng)
                .with_parent_size(self.size)
                .with_regrow_delay(self.regrow_delay)
        };
        vec![child(), child()]
    }

    /// `true` once a shrunken asteroid has waited out its regrow delay.
    pub fn ready_to_regrow(&self, now: f32) -> bool {
        self.size < self.original_size && now - self.split_at >= self.regrow_delay
    }
}

impl Body for Asteroid {
    const LAYER: f32 = 0.0;

    fn extent(&self) -> Vec2 {
        Vec2::splat(self.size as f32)
    }

    /// Drift, wrap, and regrow in one discrete step once the delay has passed.
    fn advance(&mut self, position: &mut Vec2, frame: &Frame) -> Fate {
        *position = wrap_position(*position + self.velocity, frame.arena);
        if self.ready_to_regrow(frame.now) {
            self.size = self.original_size;
            return Fate::Reshaped;
        }
        Fate::Alive
    }

    /// Regular polygon approximating a disc of diameter `size`.
    fn outline(&self) -> Vec<Vec2> {
        let radius = self.size as f32 / 2.0;
        (0..ASTEROID_SEGMENTS)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::TAU / ASTEROID_SEGMENTS as f32;
                Vec2::new(angle.cos(), angle.sin()) * radius
            })
            .collect()
    }

    fn color(&self) -> Color {
        self.color
    }
}

/// Everything an asteroid entity is spawned with.
pub fn asteroid_bundle(
    position: Vec2,
    asteroid: Asteroid,
) -> (Asteroid, (Position, Transform, Visibility)) {
    (asteroid, body_bundle(position, Asteroid::LAYER))
}

/// Roll a level-start asteroid: size from the configured set, base speed
/// bound, colour from the palette, uniform integer position in the arena.
pub fn random_asteroid<R: Rng>(
    config: &GameConfig,
    arena: Vec2,
    now: f32,
    rng: &mut R,
) -> (Vec2, Asteroid) {
    let size = config
        .asteroid_spawn_sizes
        .choose(rng)
        .copied()
        .unwrap_or(ASTEROID_SPAWN_SIZES[0]);
    let color = ASTEROID_PALETTE.choose(rng).copied().unwrap_or(Color::WHITE);
    let position = Vec2::new(
        rng.gen_range(0..=arena.x as u32) as f32,
        rng.gen_range(0..=arena.y as u32) as f32,
    );
    let asteroid = Asteroid::new(size, config.asteroid_base_speed, color, now, rng)
        .with_regrow_delay(config.regrow_delay_secs);
    (position, asteroid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::arena;
    use crate::constants::MIN_SPLIT_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn frame_at(now: f32) -> Frame {
        Frame {
            pointer: Vec2::ZERO,
            steer: Vec2::ZERO,
            now,
            arena: arena(),
        }
    }

    fn still(size: u32) -> Asteroid {
        Asteroid::new(size, 0.0, Color::WHITE, 0.0, &mut rng())
    }

    // ── construction ──────────────────────────────────────────────────────────

    #[test]
    fn velocity_stays_within_speed_bound() {
        let mut rng = rng();
        for _ in 0..200 {
            let a = Asteroid::new(40, 2.0, Color::WHITE, 0.0, &mut rng);
            assert!(a.velocity.x.abs() <= 2.0 && a.velocity.y.abs() <= 2.0);
        }
    }

    #[test]
    fn fresh_asteroid_regrows_to_its_own_size() {
        let a = still(60);
        assert_eq!(a.original_size, 60);
        assert!(!a.ready_to_regrow(1000.0));
    }

    // ── split ─────────────────────────────────────────────────────────────────

    #[test]
    fn split_above_minimum_yields_two_halves() {
        let mut rng = rng();
        for size in [21, 30, 40, 41, 60] {
            let parent = still(size);
            let children = parent.split(MIN_SPLIT_SIZE, 3.0, &mut rng);
            assert_eq!(children.len(), 2, "size {size}");
            for child in &children {
                assert_eq!(child.size, size / 2);
                assert_eq!(child.original_size, size);
                assert_eq!(child.color, parent.color);
                assert_eq!(child.split_at, 3.0);
            }
        }
    }

    #[test]
    fn split_at_or_below_minimum_yields_nothing() {
        let mut rng = rng();
        for size in [1, 10, 19, 20] {
            assert!(still(size).split(MIN_SPLIT_SIZE, 0.0, &mut rng).is_empty());
        }
    }

    #[test]
    fn split_does_not_touch_parent() {
        let parent = still(40);
        let before = parent;
        let _ = parent.split(MIN_SPLIT_SIZE, 1.0, &mut rng());
        assert_eq!(parent, before);
    }

    #[test]
    fn children_speed_bound_is_parent_x_speed_plus_one() {
        let mut rng = rng();
        let mut parent = still(60);
        parent.velocity = Vec2::new(-1.5, 0.25);
        for _ in 0..50 {
            for child in parent.split(MIN_SPLIT_SIZE, 0.0, &mut rng) {
                assert!(child.velocity.x.abs() <= 2.5);
                assert!(child.velocity.y.abs() <= 2.5);
            }
        }
    }

    // ── regrow ────────────────────────────────────────────────────────────────

    #[test]
    fn regrow_waits_for_full_delay() {
        let mut child = still(30).with_parent_size(60);
        let mut pos = Vec2::new(100.0, 100.0);

        assert_eq!(child.advance(&mut pos, &frame_at(4.99)), Fate::Alive);
        assert_eq!(child.size, 30);

        assert_eq!(child.advance(&mut pos, &frame_at(5.0)), Fate::Reshaped);
        assert_eq!(child.size, 60);

        // Already full size: nothing further happens.
        assert_eq!(child.advance(&mut pos, &frame_at(50.0)), Fate::Alive);
        assert_eq!(child.size, 60);
    }

    #[test]
    fn grandchildren_regrow_to_half_the_original() {
        let mut rng = rng();
        let original = still(60);
        let children = original.split(MIN_SPLIT_SIZE, 0.0, &mut rng);
        let grandchildren = children[0].split(MIN_SPLIT_SIZE, 1.0, &mut rng);
        assert_eq!(grandchildren.len(), 2);

        for mut g in grandchildren {
            assert_eq!(g.size, 15);
            let mut pos = Vec2::new(200.0, 200.0);
            g.advance(&mut pos, &frame_at(6.0));
            assert_eq!(g.size, 60 / 2, "regrows to its parent's size, not the grandparent's");
        }
    }

    // ── motion ────────────────────────────────────────────────────────────────

    #[test]
    fn drift_wraps_toroidally() {
        let mut a = still(40);
        a.velocity = Vec2::new(3.0, -4.0);
        let mut pos = Vec2::new(799.0, 2.0);
        a.advance(&mut pos, &frame_at(0.0));
        assert_eq!(pos, Vec2::new(2.0, 598.0));
    }

    #[test]
    fn bounds_are_size_square() {
        let r = still(40).bounds(Vec2::new(100.0, 100.0));
        assert_eq!(r.min, Vec2::new(80.0, 80.0));
        assert_eq!(r.max, Vec2::new(120.0, 120.0));
    }

    #[test]
    fn random_asteroid_uses_configured_sizes_and_palette() {
        let config = GameConfig::default();
        let mut rng = rng();
        for _ in 0..100 {
            let (pos, a) = random_asteroid(&config, arena(), 0.0, &mut rng);
            assert!(config.asteroid_spawn_sizes.contains(&a.size));
            assert!(ASTEROID_PALETTE.contains(&a.color));
            assert!((0.0..=800.0).contains(&pos.x) && (0.0..=600.0).contains(&pos.y));
            assert_eq!(pos, pos.round());
        }
    }
}
