#![allow(dead_code)]

use approx::assert_relative_eq;
use cgmath::{Matrix4, Vector3};
use tank_ngin::{
    input::TankInput,
    world::{World, WorldEvent},
};

pub const EPSILON: f32 = 1e-5;

pub fn assert_vec3_eq(actual: Vector3<f32>, expected: Vector3<f32>) {
    assert_relative_eq!(actual.x, expected.x, epsilon = EPSILON);
    assert_relative_eq!(actual.y, expected.y, epsilon = EPSILON);
    assert_relative_eq!(actual.z, expected.z, epsilon = EPSILON);
}

pub fn assert_matrix_eq(actual: Matrix4<f32>, expected: Matrix4<f32>) {
    let actual: [[f32; 4]; 4] = actual.into();
    let expected: [[f32; 4]; 4] = expected.into();
    for (a, e) in actual.iter().flatten().zip(expected.iter().flatten()) {
        assert_relative_eq!(*a, *e, epsilon = EPSILON);
    }
}

pub fn transform_point(m: Matrix4<f32>, p: Vector3<f32>) -> Vector3<f32> {
    (m * p.extend(1.0)).truncate()
}

/// Step `world` with the same input until `event` shows up or `max_frames` pass.
///
/// Returns the frame (1-based) the event happened on and every event seen.
pub fn run_until(
    world: &mut World,
    input: &TankInput,
    event: WorldEvent,
    max_frames: usize,
) -> (Option<usize>, Vec<WorldEvent>) {
    let mut seen = Vec::new();
    for frame in 1..=max_frames {
        let events = world.update(input, 1.0 / 60.0);
        let hit = events.contains(&event);
        seen.extend(events);
        if hit {
            return (Some(frame), seen);
        }
    }
    (None, seen)
}
