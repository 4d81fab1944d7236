//! Presentation layer: body meshes and the in-session HUD.
//!
//! ## Layer Model
//!
//! | Layer      | Technology | z   | Source                         |
//! |------------|------------|-----|--------------------------------|
//! | Asteroids  | `Mesh2d`   | 0   | 32-gon in the asteroid colour  |
//! | Bullets    | `Mesh2d`   | 1   | White rectangle                |
//! | Ship       | `Mesh2d`   | 2   | White triangle, faces pointer  |
//! | HUD        | Bevy UI    | —   | Lives and level text           |
//!
//! ## System Responsibilities
//!
//! | System                              | Schedule           | Purpose                    |
//! |-------------------------------------|--------------------|----------------------------|
//! | `setup_hud`                         | `OnEnter(Playing)` | Spawn lives/level text     |
//! | `cleanup_hud`                       | `OnExit(Playing)`  | Despawn HUD                |
//! | `hud_display_system`                | Update             | Refresh lives/level text   |
//! | `attach_body_mesh_system::<T>`      | Update             | Build meshes on spawn/regrow |
//! | `sync_body_transform_system::<T>`   | Update             | Position → Transform       |

use crate::asteroid::Asteroid;
use crate::body_rendering::{attach_body_mesh_system, sync_body_transform_system};
use crate::bullet::Bullet;
use crate::constants::{HUD_FONT_SIZE, HUD_LEVEL_OFFSET, HUD_MARGIN, SCREEN_WIDTH};
use crate::player::Player;
use crate::screens::GameState;
use crate::world::Wave;
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

/// Marker for the lives HUD root node.
#[derive(Component)]
pub struct HudLivesDisplay;

/// Marker for the level HUD root node.
#[derive(Component)]
pub struct HudLevelDisplay;

// ── Plugin ────────────────────────────────────────────────────────────────────

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), setup_hud)
            .add_systems(OnExit(GameState::Playing), cleanup_hud)
            .add_systems(
                Update,
                (
                    attach_body_mesh_system::<Asteroid>,
                    attach_body_mesh_system::<Bullet>,
                    attach_body_mesh_system::<Player>,
                    hud_display_system.run_if(in_state(GameState::Playing)),
                ),
            )
            .add_systems(
                Update,
                (
                    sync_body_transform_system::<Asteroid>,
                    sync_body_transform_system::<Bullet>,
                    sync_body_transform_system::<Player>,
                ),
            );
    }
}

// ── HUD ───────────────────────────────────────────────────────────────────────

pub fn lives_label(lives: u32) -> String {
    format!("Lives: {lives}")
}

pub fn level_label(level: u32) -> String {
    format!("Level: {level}")
}

fn hud_node(left: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        left: Val::Px(left),
        top: Val::Px(HUD_MARGIN),
        ..default()
    }
}

fn hud_text(text: String) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
    )
}

/// Spawn the lives counter at the top-left and the level counter near the
/// top-right corner.
pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn((hud_node(HUD_MARGIN), HudLivesDisplay))
        .with_children(|parent| {
            parent.spawn(hud_text(lives_label(0)));
        });
    commands
        .spawn((hud_node(SCREEN_WIDTH - HUD_LEVEL_OFFSET), HudLevelDisplay))
        .with_children(|parent| {
            parent.spawn(hud_text(level_label(1)));
        });
}

#[allow(clippy::type_complexity)]
pub fn cleanup_hud(
    mut commands: Commands,
    query: Query<Entity, Or<(With<HudLivesDisplay>, With<HudLevelDisplay>)>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Rewrite the HUD text from the ship's lives and the current level.
#[allow(clippy::type_complexity)]
pub fn hud_display_system(
    players: Query<&Player>,
    wave: Res<Wave>,
    lives_query: Query<&Children, With<HudLivesDisplay>>,
    level_query: Query<&Children, With<HudLevelDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    let lives = players.single().map(|player| player.lives).unwrap_or(0);
    let labels = [
        (lives_query.iter().collect::<Vec<_>>(), lives_label(lives)),
        (level_query.iter().collect::<Vec<_>>(), level_label(wave.level)),
    ];

    for (roots, label) in labels {
        for children in roots {
            for child in children.iter() {
                if let Ok(mut text) = text_query.get_mut(child) {
                    if text.0 != label {
                        text.0 = label.clone();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_labels() {
        assert_eq!(lives_label(3), "Lives: 3");
        assert_eq!(level_label(12), "Level: 12");
    }
}
