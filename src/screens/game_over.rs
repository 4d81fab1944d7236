use super::*;

/// Root node of the game-over UI; despawned on `OnExit(GameOver)`.
#[derive(Component)]
pub struct GameOverRoot;

/// Spawn the game-over screen over a cleared field.
pub fn setup_game_over(mut commands: Commands) {
    commands
        .spawn((screen_root(), GameOverRoot))
        .with_children(|root| {
            headline(root, "GAME OVER", game_over_color());
            prompt(root, "Press ENTER to Retry or ESC to Quit");
        });
}

/// Recursively despawn all game-over entities.
pub fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle the retry / quit choice.
///
/// - **Enter** → [`GameState::Playing`]; `OnEnter(Playing)` starts a fresh session.
/// - **Esc** → sends [`AppExit::Success`] to shut down cleanly.
pub fn game_over_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    match game_over_action(&keys) {
        Some(ScreenAction::Play) => {
            info!("Retrying");
            next_state.set(GameState::Playing);
        }
        Some(ScreenAction::Quit) => {
            info!("Quit from game-over screen");
            exit.write(AppExit::Success);
        }
        None => {}
    }
}
