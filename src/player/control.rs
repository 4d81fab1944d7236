//! Player input capture and per-tick movement.
//!
//! ## Pipeline
//!
//! 1. [`capture_input_system`] (`Update`, every rendered frame while playing) — copies held
//!    W/A/S/D keys and the cursor position into [`PlayerInput`] and counts
//!    left-button presses into `fire_requests`.
//! 2. [`crate::world::advance_system::<Player>`] (`FixedUpdate`) — calls the
//!    [`Body`] implementation below: face the pointer, move, wrap.
//!
//! The **input abstraction layer** (`PlayerInput`) keeps the movement logic
//! testable: tests populate the resource directly and tick the simulation.

use super::state::{Player, PlayerInput};
use crate::body::{Body, Fate, Frame};
use crate::constants::{SHIP_LENGTH, SHIP_WIDTH};
use crate::geometry::{calculate_angle, rotated_extent, wrap_position};
use crate::screens::GameState;
use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

// ── Input capture ─────────────────────────────────────────────────────────────

/// Translate keyboard, mouse and cursor state into [`PlayerInput`].
///
/// - **W / S** → up / down
/// - **A / D** → left / right
/// - **Left click** → one fire request per press event
///
/// Outside [`GameState::Playing`] pending clicks are consumed and dropped, so
/// a click on a screen never turns into a shot.  The pointer keeps its last
/// known value while the cursor is outside the window.
pub fn capture_input_system(
    state: Res<State<GameState>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut clicks: MessageReader<MouseButtonInput>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut input: ResMut<PlayerInput>,
) {
    if *state.get() != GameState::Playing {
        clicks.clear();
        return;
    }

    input.up = keys.pressed(KeyCode::KeyW);
    input.down = keys.pressed(KeyCode::KeyS);
    input.left = keys.pressed(KeyCode::KeyA);
    input.right = keys.pressed(KeyCode::KeyD);

    if let Ok(window) = windows.single() {
        if let Some(cursor) = window.cursor_position() {
            input.pointer = cursor;
        }
    }

    input.fire_requests = input
        .fire_requests
        .saturating_add(fire_presses(clicks.read()));
}

/// Number of primary-button press events; releases and other buttons are ignored.
pub fn fire_presses<'a>(clicks: impl Iterator<Item = &'a MouseButtonInput>) -> u32 {
    clicks
        .filter(|click| click.button == MouseButton::Left && click.state == ButtonState::Pressed)
        .count() as u32
}

// ── Movement ──────────────────────────────────────────────────────────────────

impl Body for Player {
    const LAYER: f32 = 2.0;

    /// Bounding box of the ship triangle's 40×20 frame rotated by the facing angle.
    fn extent(&self) -> Vec2 {
        rotated_extent(Vec2::new(SHIP_LENGTH, SHIP_WIDTH), self.angle)
    }

    /// Face the pointer from the current centre, then move and wrap.
    fn advance(&mut self, position: &mut Vec2, frame: &Frame) -> Fate {
        self.angle = calculate_angle(*position, frame.pointer);
        self.velocity = frame.steer * self.speed;
        *position = wrap_position(*position + self.velocity, frame.arena);
        Fate::Alive
    }

    /// Nose along +x, tail corners at the back of the 40×20 frame.
    fn outline(&self) -> Vec<Vec2> {
        let (half_len, half_width) = (SHIP_LENGTH / 2.0, SHIP_WIDTH / 2.0);
        vec![
            Vec2::new(-half_len, -half_width),
            Vec2::new(half_len, 0.0),
            Vec2::new(-half_len, half_width),
        ]
    }

    fn color(&self) -> Color {
        Color::WHITE
    }

    fn heading(&self) -> f32 {
        self.angle
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::arena;

    fn click(button: MouseButton, state: ButtonState) -> MouseButtonInput {
        MouseButtonInput {
            button,
            state,
            window: Entity::PLACEHOLDER,
        }
    }

    #[test]
    fn only_left_presses_fire() {
        let clicks = [
            click(MouseButton::Left, ButtonState::Pressed),
            click(MouseButton::Left, ButtonState::Released),
            click(MouseButton::Right, ButtonState::Pressed),
            click(MouseButton::Left, ButtonState::Pressed),
        ];
        assert_eq!(fire_presses(clicks.iter()), 2);
        assert_eq!(fire_presses(std::iter::empty()), 0);
    }

    fn frame(pointer: Vec2, steer: Vec2) -> Frame {
        Frame {
            pointer,
            steer,
            now: 0.0,
            arena: arena(),
        }
    }

    #[test]
    fn faces_pointer_before_moving() {
        let mut player = Player::default();
        let mut pos = Vec2::new(400.0, 300.0);
        // Pointer straight below the pre-move centre.
        player.advance(&mut pos, &frame(Vec2::new(400.0, 500.0), Vec2::new(1.0, 0.0)));
        assert!((player.angle - 90.0).abs() < 1e-4, "angle {}", player.angle);
        assert_eq!(pos, Vec2::new(405.0, 300.0));
    }

    #[test]
    fn velocity_is_speed_per_held_axis() {
        let mut player = Player::default();
        let mut pos = Vec2::new(100.0, 100.0);
        player.advance(&mut pos, &frame(Vec2::ZERO, Vec2::new(-1.0, 1.0)));
        assert_eq!(player.velocity, Vec2::new(-5.0, 5.0));
        assert_eq!(pos, Vec2::new(95.0, 105.0));
    }

    #[test]
    fn position_wraps_across_every_edge() {
        let cases = [
            (Vec2::new(798.0, 300.0), Vec2::new(1.0, 0.0), Vec2::new(3.0, 300.0)),
            (Vec2::new(2.0, 300.0), Vec2::new(-1.0, 0.0), Vec2::new(797.0, 300.0)),
            (Vec2::new(400.0, 598.0), Vec2::new(0.0, 1.0), Vec2::new(400.0, 3.0)),
            (Vec2::new(400.0, 2.0), Vec2::new(0.0, -1.0), Vec2::new(400.0, 597.0)),
        ];
        for (start, steer, expected) in cases {
            let mut player = Player::default();
            let mut pos = start;
            player.advance(&mut pos, &frame(Vec2::ZERO, steer));
            assert_eq!(pos, expected, "from {start:?} steering {steer:?}");
        }
    }

    #[test]
    fn position_is_always_inside_arena_after_advance() {
        for start in [
            Vec2::new(-3000.0, 9000.0),
            Vec2::new(800.0, 600.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(-0.001, -0.001),
        ] {
            let mut player = Player::default();
            let mut pos = start;
            player.advance(&mut pos, &frame(Vec2::ZERO, Vec2::ZERO));
            assert!((0.0..800.0).contains(&pos.x), "x={} from {start:?}", pos.x);
            assert!((0.0..600.0).contains(&pos.y), "y={} from {start:?}", pos.y);
        }
    }

    #[test]
    fn extent_follows_rotation() {
        let mut player = Player::default();
        assert_eq!(player.extent(), Vec2::new(40.0, 20.0));
        player.angle = 90.0;
        let e = player.extent();
        assert!((e.x - 20.0).abs() < 1e-3 && (e.y - 40.0).abs() < 1e-3);
    }
}
