use std::collections::HashMap;

use tank_ngin::input::{KeyboardState, TankAction, TankInput};
use winit::{event::ElementState, keyboard::KeyCode};

#[test]
fn should_map_default_keys() {
    let mut keyboard = KeyboardState::new();

    assert!(keyboard.process_key(KeyCode::ArrowUp, ElementState::Pressed));
    assert!(keyboard.process_key(KeyCode::KeyK, ElementState::Pressed));
    assert!(keyboard.process_key(KeyCode::Space, ElementState::Pressed));

    let expected = TankInput {
        forward: true,
        turret_right: true,
        fire: true,
        ..TankInput::none()
    };
    assert_eq!(keyboard.snapshot(), expected);
}

#[test]
fn should_ignore_unbound_keys() {
    let mut keyboard = KeyboardState::new();

    assert!(!keyboard.process_key(KeyCode::KeyW, ElementState::Pressed));
    assert_eq!(keyboard.snapshot(), TankInput::none());
}

#[test]
fn should_stay_held_until_released() {
    let mut keyboard = KeyboardState::new();

    keyboard.process_key(KeyCode::KeyU, ElementState::Pressed);
    assert!(keyboard.is_held(TankAction::BarrelUp));
    assert!(keyboard.snapshot().barrel_up);
    assert!(keyboard.snapshot().barrel_up);

    keyboard.process_key(KeyCode::KeyU, ElementState::Released);
    assert!(!keyboard.is_held(TankAction::BarrelUp));
    assert_eq!(keyboard.snapshot(), TankInput::none());
}

#[test]
fn should_use_custom_bindings() {
    let bindings = HashMap::from([(KeyCode::KeyF, TankAction::Fire)]);
    let mut keyboard = KeyboardState::with_bindings(bindings);

    assert!(!keyboard.process_key(KeyCode::Space, ElementState::Pressed));
    assert!(keyboard.process_key(KeyCode::KeyF, ElementState::Pressed));
    assert_eq!(keyboard.snapshot(), TankInput::none().with(TankAction::Fire));
}

#[test]
fn should_set_and_clear_flags() {
    let mut input = TankInput::none().with(TankAction::RotateLeft);
    assert!(input.rotate_left);

    input.set(TankAction::RotateLeft, false);
    input.set(TankAction::BarrelDown, true);
    assert_eq!(input, TankInput::none().with(TankAction::BarrelDown));
}

#[test]
fn should_release_everything_on_focus_loss() {
    let mut keyboard = KeyboardState::new();
    keyboard.process_key(KeyCode::ArrowLeft, ElementState::Pressed);
    keyboard.process_key(KeyCode::KeyH, ElementState::Pressed);

    keyboard.handle_window_events(&winit::event::WindowEvent::Focused(false));

    assert_eq!(keyboard.snapshot(), TankInput::none());
}
