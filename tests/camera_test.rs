use std::time::Duration;

use approx::assert_relative_eq;
use cgmath::{Deg, Rad, Vector3};
use tank_ngin::{
    camera::{CameraState, MAX_FOVY, MIN_FOVY, PITCH_LIMIT},
    config::CameraConfig,
};
use winit::{event::ElementState, keyboard::KeyCode};

mod common;

use crate::common::test_utils::*;

fn camera_state() -> CameraState {
    CameraState::new(&CameraConfig::default(), 800, 600)
}

fn position(state: &CameraState) -> Vector3<f32> {
    let p = state.camera.position;
    Vector3::new(p.x, p.y, p.z)
}

#[test]
fn should_look_down_negative_z_by_default() {
    let state = camera_state();

    assert_vec3_eq(state.camera.front(), -Vector3::unit_z());
    assert_vec3_eq(state.camera.right(), Vector3::unit_x());
    assert_vec3_eq(position(&state), Vector3::new(0.0, 0.0, 5.0));
}

#[test]
fn should_move_forward_at_speed() {
    let mut state = camera_state();

    assert!(state
        .controller
        .process_keyboard(KeyCode::KeyW, ElementState::Pressed));
    state.update(Duration::from_secs(1));

    assert_vec3_eq(position(&state), Vector3::new(0.0, 0.0, 2.5));

    state
        .controller
        .process_keyboard(KeyCode::KeyW, ElementState::Released);
    state.update(Duration::from_secs(1));
    assert_vec3_eq(position(&state), Vector3::new(0.0, 0.0, 2.5));
}

#[test]
fn should_strafe_right() {
    let mut state = camera_state();

    state
        .controller
        .process_keyboard(KeyCode::KeyD, ElementState::Pressed);
    state.update(Duration::from_millis(500));

    assert_vec3_eq(position(&state), Vector3::new(1.25, 0.0, 5.0));
}

#[test]
fn should_ignore_unbound_keys() {
    let mut state = camera_state();

    assert!(!state
        .controller
        .process_keyboard(KeyCode::ArrowUp, ElementState::Pressed));
    state.update(Duration::from_secs(1));

    assert_eq!(state.camera, camera_state().camera);
}

#[test]
fn should_only_look_around_while_looking() {
    let mut state = camera_state();

    state.controller.handle_mouse(100.0, 0.0);
    state.update(Duration::from_millis(16));
    assert_eq!(state.camera.yaw, Rad::from(Deg(-90.0)));

    state.controller.set_looking(true);
    state.controller.handle_mouse(100.0, 0.0);
    state.update(Duration::from_millis(16));
    assert_relative_eq!(
        state.camera.yaw.0,
        Rad::from(Deg(-80.0_f32)).0,
        epsilon = EPSILON
    );
}

#[test]
fn should_clamp_pitch() {
    let mut state = camera_state();
    state.controller.set_looking(true);

    state.controller.handle_mouse(0.0, -10_000.0);
    state.update(Duration::from_millis(16));
    assert_relative_eq!(
        state.camera.pitch.0,
        Rad::from(PITCH_LIMIT).0,
        epsilon = EPSILON
    );

    state.controller.handle_mouse(0.0, 20_000.0);
    state.update(Duration::from_millis(16));
    assert_relative_eq!(
        state.camera.pitch.0,
        -Rad::from(PITCH_LIMIT).0,
        epsilon = EPSILON
    );
}

#[test]
fn should_clamp_zoom() {
    let mut state = camera_state();

    state.controller.process_scroll(5.0);
    state.update(Duration::from_millis(16));
    assert_relative_eq!(state.projection.fovy().0, 40.0, epsilon = 1e-3);

    state.controller.process_scroll(100.0);
    state.update(Duration::from_millis(16));
    assert_relative_eq!(state.projection.fovy().0, MIN_FOVY.0, epsilon = 1e-3);

    state.controller.process_scroll(-200.0);
    state.update(Duration::from_millis(16));
    assert_relative_eq!(state.projection.fovy().0, MAX_FOVY.0, epsilon = 1e-3);
}

#[test]
fn should_keep_aspect_on_zero_height_resize() {
    let mut state = camera_state();
    assert_relative_eq!(state.projection.aspect(), 800.0 / 600.0);

    state.projection.resize(1920, 1080);
    assert_relative_eq!(state.projection.aspect(), 1920.0 / 1080.0);

    state.projection.resize(1920, 0);
    assert_relative_eq!(state.projection.aspect(), 1920.0 / 1080.0);
}
