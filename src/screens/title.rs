use super::*;

/// Root node of the title UI; entire tree is despawned on `OnExit(Title)`.
#[derive(Component)]
pub struct TitleRoot;

/// Spawn the full-screen title splash.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │                                             │
/// │             ASTEROIDS SHOOTER               │
/// │                                             │
/// │            Press ENTER to Play              │
/// │                                             │
/// └─────────────────────────────────────────────┘
/// ```
pub fn setup_title(mut commands: Commands) {
    commands
        .spawn((screen_root(), TitleRoot))
        .with_children(|root| {
            headline(root, "ASTEROIDS SHOOTER", headline_color());
            prompt(root, "Press ENTER to Play");
        });
}

/// Recursively despawn all title entities.
pub fn cleanup_title(mut commands: Commands, query: Query<Entity, With<TitleRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Enter → [`GameState::Playing`], which triggers `OnEnter(Playing)` to start a session.
pub fn title_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if title_action(&keys) == Some(ScreenAction::Play) {
        next_state.set(GameState::Playing);
    }
}
