//! Gameplay plugin: session lifecycle, per-tick simulation and the level rules.
//!
//! ## Tick pipeline (`FixedUpdate`, chained, only in [`GameState::Playing`])
//!
//! | # | System | Purpose |
//! |---|--------|---------|
//! | 1 | [`fire_system`] | One bullet per pending fire request |
//! | 2 | [`advance_system`]`::<Player / Bullet / Asteroid>` | Move every body; expired bullets are despawned |
//! | 3 | [`bullet_asteroid_collision_system`] | Destroy hit asteroids, spawn split products, consume bullets |
//! | 4 | [`player_asteroid_collision_system`] | Remove rocks touching the ship, take one life, detect game over |
//! | 5 | [`wave_system`] | Advance the level once the field is clear, spawn the next wave |
//!
//! Removals and insertions go through `Commands`, so each step sees the
//! previous step's results only after the automatic sync point between chained
//! systems.  Within a step, iteration is over a stable snapshot.
//!
//! ## Session lifecycle
//!
//! | Schedule | System | Effect |
//! |----------|--------|--------|
//! | `OnEnter(Playing)` | [`start_session`] | Fresh ship, level 1, input cleared |
//! | `OnExit(Playing)` | [`cleanup_session`] | Despawn every body |

use crate::asteroid::{asteroid_bundle, random_asteroid, Asteroid};
use crate::body::{arena, Body, Fate, Frame, Position, Redraw};
use crate::bullet::Bullet;
use crate::config::GameConfig;
use crate::geometry::overlaps;
use crate::player::{fire_system, spawn_player, Player, PlayerInput};
use crate::screens::GameState;
use bevy::ecs::component::Mutable;
use bevy::prelude::*;
use std::collections::HashSet;

// ── Level state ───────────────────────────────────────────────────────────────

/// Phase of the current session's level machine.
///
/// ```text
/// Spawning ──► Playing ──► LevelCleared ──► Spawning
///                 │
///                 └──► PlayerDead (terminal; GameState moves to GameOver)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorldPhase {
    /// The next wave must be spawned before play continues.
    #[default]
    Spawning,
    Playing,
    /// The last asteroid is gone; the level counter is about to advance.
    LevelCleared,
    /// Lives reached zero; the simulation is frozen until the session ends.
    PlayerDead,
}

/// Level counter and phase for the running session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wave {
    pub level: u32,
    pub phase: WorldPhase,
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            level: 1,
            phase: WorldPhase::Spawning,
        }
    }
}

impl Wave {
    /// Asteroids spawned at the start of the current level.
    pub fn asteroid_count(&self, per_level: u32) -> u32 {
        self.level * per_level
    }
}

/// Run condition: the session has not ended in this tick.
pub fn session_live(wave: Res<Wave>) -> bool {
    wave.phase != WorldPhase::PlayerDead
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `GameState`, the session resources, session setup/teardown, and
/// the fixed-rate simulation pipeline.
///
/// Contains no rendering or device input, so it runs headless under
/// `MinimalPlugins` in tests.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameConfig>()
            .init_resource::<PlayerInput>()
            .init_resource::<Wave>()
            .add_systems(OnEnter(GameState::Playing), start_session)
            .add_systems(OnExit(GameState::Playing), cleanup_session)
            .add_systems(
                FixedUpdate,
                (
                    fire_system,
                    advance_system::<Player>,
                    advance_system::<Bullet>,
                    advance_system::<Asteroid>,
                    bullet_asteroid_collision_system,
                    player_asteroid_collision_system,
                    wave_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing).and(session_live)),
            );
    }
}

// ── Session lifecycle ─────────────────────────────────────────────────────────

/// Begin a session: new ship with full lives, level 1, no stale input.
pub fn start_session(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut wave: ResMut<Wave>,
    mut input: ResMut<PlayerInput>,
) {
    *wave = Wave::default();
    // Keys and presses from before the session are dropped; the pointer stays.
    *input = PlayerInput {
        pointer: input.pointer,
        ..default()
    };
    spawn_player(&mut commands, &config);
    info!("Session started at level {}", wave.level);
}

/// Despawn every body so the next session starts from an empty field.
#[allow(clippy::type_complexity)]
pub fn cleanup_session(
    mut commands: Commands,
    bodies: Query<Entity, Or<(With<Player>, With<Bullet>, With<Asteroid>)>>,
) {
    for entity in bodies.iter() {
        commands.entity(entity).despawn();
    }
}

// ── Step 2: Advance ───────────────────────────────────────────────────────────

/// Advance every body of type `T` by one tick.
///
/// Expired bodies are despawned; reshaped ones are tagged [`Redraw`].
pub fn advance_system<T: Body + Component<Mutability = Mutable>>(
    mut commands: Commands,
    mut bodies: Query<(Entity, &mut T, &mut Position)>,
    input: Res<PlayerInput>,
    time: Res<Time>,
) {
    let frame = Frame::new(&input, time.elapsed_secs());
    for (entity, mut body, mut position) in bodies.iter_mut() {
        match body.advance(&mut position.0, &frame) {
            Fate::Alive => {}
            Fate::Reshaped => {
                commands.entity(entity).insert(Redraw);
            }
            Fate::Expired => {
                commands.entity(entity).despawn();
            }
        }
    }
}

// ── Step 3: Bullets vs asteroids ──────────────────────────────────────────────

/// Resolve bullet hits.
///
/// A bullet destroys every live asteroid its rectangle overlaps and is
/// consumed if it hit anything.  An asteroid destroyed earlier in the pass is
/// no longer a target.  Split products are spawned at the destroyed
/// asteroid's centre and join the field at the next sync point.
pub fn bullet_asteroid_collision_system(
    mut commands: Commands,
    bullets: Query<(Entity, &Bullet, &Position)>,
    asteroids: Query<(Entity, &Asteroid, &Position)>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    let now = time.elapsed_secs();
    let mut rng = rand::thread_rng();
    let mut destroyed: HashSet<Entity> = HashSet::new();

    for (bullet_entity, bullet, bullet_pos) in bullets.iter() {
        let hitbox = bullet.bounds(bullet_pos.0);
        let mut hit = false;

        for (asteroid_entity, asteroid, asteroid_pos) in asteroids.iter() {
            if destroyed.contains(&asteroid_entity)
                || !overlaps(hitbox, asteroid.bounds(asteroid_pos.0))
            {
                continue;
            }
            hit = true;
            destroyed.insert(asteroid_entity);
            commands.entity(asteroid_entity).despawn();
            for child in asteroid.split(config.min_split_size, now, &mut rng) {
                commands.spawn(asteroid_bundle(asteroid_pos.0, child));
            }
        }

        if hit {
            commands.entity(bullet_entity).despawn();
        }
    }
}

// ── Step 4: Ship vs asteroids ─────────────────────────────────────────────────

/// Remove every asteroid overlapping the ship; any contact costs exactly one life.
///
/// When the last life is gone the session phase becomes
/// [`WorldPhase::PlayerDead`] and the app moves to [`GameState::GameOver`].
pub fn player_asteroid_collision_system(
    mut commands: Commands,
    mut players: Query<(&mut Player, &Position)>,
    asteroids: Query<(Entity, &Asteroid, &Position)>,
    mut wave: ResMut<Wave>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok((mut player, position)) = players.single_mut() else {
        return;
    };
    let hitbox = player.bounds(position.0);

    let hits: Vec<Entity> = asteroids
        .iter()
        .filter(|(_, asteroid, asteroid_pos)| overlaps(hitbox, asteroid.bounds(asteroid_pos.0)))
        .map(|(entity, _, _)| entity)
        .collect();
    if hits.is_empty() {
        return;
    }

    for entity in &hits {
        commands.entity(*entity).despawn();
    }
    player.lives = player.lives.saturating_sub(1);
    info!(
        "Ship hit by {} asteroid(s); {} lives left",
        hits.len(),
        player.lives
    );

    if !player.is_alive() {
        wave.phase = WorldPhase::PlayerDead;
        next_state.set(GameState::GameOver);
        info!("Game over at level {}", wave.level);
    }
}

// ── Step 5: Level progression ─────────────────────────────────────────────────

/// Drive the [`WorldPhase`] machine: detect a cleared field, advance the level
/// and spawn `level × asteroids_per_level` asteroids.
pub fn wave_system(
    mut commands: Commands,
    mut wave: ResMut<Wave>,
    asteroids: Query<(), With<Asteroid>>,
    config: Res<GameConfig>,
    time: Res<Time>,
) {
    if wave.phase == WorldPhase::Playing && asteroids.is_empty() {
        wave.phase = WorldPhase::LevelCleared;
    }

    if wave.phase == WorldPhase::LevelCleared {
        wave.level += 1;
        wave.phase = WorldPhase::Spawning;
        info!("Level cleared; advancing to level {}", wave.level);
    }

    if wave.phase == WorldPhase::Spawning {
        let count = wave.asteroid_count(config.asteroids_per_level);
        let now = time.elapsed_secs();
        let mut rng = rand::thread_rng();
        for _ in 0..count {
            let (position, asteroid) = random_asteroid(&config, arena(), now, &mut rng);
            commands.spawn(asteroid_bundle(position, asteroid));
        }
        wave.phase = WorldPhase::Playing;
        info!("Spawned {count} asteroids for level {}", wave.level);
    }
}
