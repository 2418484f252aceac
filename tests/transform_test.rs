use std::f32::consts::{FRAC_PI_2, PI};

use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4};
use tank_ngin::data_structures::transform::{Transform, TransformRaw};

mod common;

use crate::common::test_utils::*;

#[test]
fn should_be_identity_by_default() {
    assert_matrix_eq(Transform::default().to_matrix(), Matrix4::identity());
}

#[test]
fn should_translate_after_rotating() {
    let transform = Transform::from(Vector3::new(1.0, 2.0, 3.0))
        .with_rotation(Vector3::new(FRAC_PI_2, 0.0, 0.0));

    #[rustfmt::skip]
    let expected = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, -1.0, 0.0, 0.0,
        1.0, 2.0, 3.0, 1.0,
    );
    assert_matrix_eq(transform.to_matrix(), expected);
}

#[test]
fn should_rotate_about_x_then_y_then_z() {
    let transform = Transform::new().with_rotation(Vector3::new(FRAC_PI_2, FRAC_PI_2, 0.0));

    let forward = (transform.to_matrix() * Vector4::unit_z()).truncate();
    assert_vec3_eq(forward, Vector3::unit_x());

    let swapped = Matrix4::from_angle_y(cgmath::Rad(FRAC_PI_2))
        * Matrix4::from_angle_x(cgmath::Rad(FRAC_PI_2));
    let other = (swapped * Vector4::unit_z()).truncate();
    assert_vec3_eq(other, -Vector3::unit_y());
}

#[test]
fn should_rotate_about_pivot() {
    let transform = Transform::new()
        .with_pivot(Vector3::new(0.0, 0.0, 1.0))
        .with_rotation(Vector3::new(0.0, PI, 0.0));
    let matrix = transform.to_matrix();

    // the pivot stays put, everything else swings around it
    assert_vec3_eq(
        transform_point(matrix, Vector3::new(0.0, 0.0, 1.0)),
        Vector3::new(0.0, 0.0, 1.0),
    );
    assert_vec3_eq(
        transform_point(matrix, Vector3::new(0.0, 0.0, 0.0)),
        Vector3::new(0.0, 0.0, 2.0),
    );
    assert_vec3_eq(
        transform_point(matrix, Vector3::new(0.0, 0.0, -1.0)),
        Vector3::new(0.0, 0.0, 3.0),
    );
}

#[test]
fn should_swing_the_far_end_around_a_rear_pivot() {
    let transform = Transform::new()
        .with_pivot(Vector3::new(0.0, 0.0, -1.0))
        .with_rotation(Vector3::new(0.0, PI, 0.0));

    assert_vec3_eq(
        transform_point(transform.to_matrix(), Vector3::new(0.0, 0.0, 1.0)),
        Vector3::new(0.0, 0.0, -3.0),
    );
}

#[test]
fn should_keep_a_breech_pivot_fixed_while_pitching() {
    let pivot = Vector3::new(0.0, 0.0, -1.0);
    let transform = Transform::from(Vector3::new(0.0, 0.4, 1.0))
        .with_pivot(pivot)
        .with_rotation(Vector3::new(-0.5, 0.0, 0.0));
    let matrix = transform.to_matrix();

    assert_vec3_eq(transform_point(matrix, pivot), Vector3::new(0.0, 0.4, 0.0));

    let tip = transform_point(matrix, Vector3::new(0.0, 0.0, 1.0));
    assert_vec3_eq(tip, Vector3::new(0.0, 0.4 + 2.0 * 0.5_f32.sin(), 2.0 * 0.5_f32.cos()));
}

#[test]
fn should_differ_from_plain_rotation_only_when_pivot_is_off_origin() {
    let rotation = Vector3::new(0.3, -0.7, 1.1);
    let position = Vector3::new(4.0, 5.0, 6.0);
    let plain = Transform::from(position).with_rotation(rotation);
    let centred = plain.with_pivot(Vector3::new(0.0, 0.0, 0.0));

    assert_matrix_eq(centred.to_matrix(), plain.to_matrix());
}

#[test]
fn should_look_along_direction() {
    for direction in [
        Vector3::new(0.0, 0.0, 1.0),
        Vector3::new(1.0, 2.0, 2.0) / 3.0,
        Vector3::new(-0.6, 0.0, 0.8),
        Vector3::new(0.0, -0.6, 0.8),
    ] {
        let transform = Transform::looking_along(Vector3::new(1.0, 1.0, 1.0), direction);
        let forward = (transform.to_matrix() * Vector4::unit_z()).truncate();

        assert_vec3_eq(forward, direction.normalize());
        assert_vec3_eq(transform.position, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(transform.rotation.z, 0.0);
    }
}

#[test]
fn should_store_model_matrix_in_raw_form() {
    let transform = Transform::from(Vector3::new(-2.0, 0.5, 7.0))
        .with_rotation(Vector3::new(0.1, 0.2, 0.3));
    let raw = transform.to_raw();

    assert_matrix_eq(raw.model(), transform.to_matrix());
    assert_matrix_eq(TransformRaw::default().model(), Matrix4::identity());
    assert_eq!(
        std::mem::size_of::<TransformRaw>(),
        std::mem::size_of::<[f32; 16 + 9]>()
    );
}
