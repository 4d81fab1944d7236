use crate::constants::{HUD_FONT_SIZE, TITLE_FONT_SIZE};
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

pub(super) fn headline_color() -> Color {
    Color::WHITE
}
pub(super) fn game_over_color() -> Color {
    Color::srgb(1.0, 0.0, 0.0)
}
pub(super) fn prompt_color() -> Color {
    Color::WHITE
}

/// Full-screen black backdrop; headline sits at one third of the height and the
/// prompt at half height, both centred horizontally.
pub(super) fn screen_root() -> (Node, BackgroundColor) {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            flex_direction: FlexDirection::Column,
            ..default()
        },
        BackgroundColor(Color::BLACK),
    )
}

pub(super) fn headline(parent: &mut ChildSpawnerCommands<'_>, text: &str, color: Color) {
    parent.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(100.0 / 3.0),
            ..default()
        },
        Text::new(text),
        TextFont {
            font_size: TITLE_FONT_SIZE,
            ..default()
        },
        TextColor(color),
    ));
}

pub(super) fn prompt(parent: &mut ChildSpawnerCommands<'_>, text: &str) {
    parent.spawn((
        Node {
            position_type: PositionType::Absolute,
            top: Val::Percent(50.0),
            ..default()
        },
        Text::new(text),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(prompt_color()),
    ));
}
