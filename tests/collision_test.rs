use cgmath::Vector3;
use tank_ngin::collision::{overlaps, BoundedObject};

fn cube_at(x: f32, y: f32, z: f32, size: f32) -> BoundedObject {
    BoundedObject::at(Vector3::new(x, y, z), Vector3::new(size, size, size))
}

#[test]
fn should_overlap_when_boxes_intersect() {
    let a = cube_at(0.0, 0.0, 0.0, 2.0);
    let b = cube_at(1.0, 1.0, 1.0, 2.0);

    assert!(overlaps(&a, &b));
    assert!(overlaps(&b, &a));
    assert!(a.overlaps(&b));
}

#[test]
fn should_not_overlap_when_apart() {
    let a = cube_at(0.0, 0.0, 0.0, 2.0);
    let c = cube_at(5.0, 5.0, 5.0, 1.0);

    assert!(!overlaps(&a, &c));
    assert!(!overlaps(&c, &a));
}

#[test]
fn should_count_touching_faces_as_overlap() {
    let a = cube_at(0.0, 0.0, 0.0, 1.0);
    let b = cube_at(1.0, 0.0, 0.0, 1.0);

    assert!(overlaps(&a, &b));
}

#[test]
fn should_need_overlap_on_every_axis() {
    let a = cube_at(0.0, 0.0, 0.0, 1.0);

    assert!(!overlaps(&a, &cube_at(0.5, 0.5, 1.5, 1.0)));
    assert!(!overlaps(&a, &cube_at(0.5, 1.5, 0.5, 1.0)));
    assert!(!overlaps(&a, &cube_at(1.5, 0.5, 0.5, 1.0)));
    assert!(overlaps(&a, &cube_at(0.5, 0.5, 0.5, 1.0)));
}

#[test]
fn should_extend_boxes_in_the_positive_direction_only() {
    let origin = cube_at(0.0, 0.0, 0.0, 2.0);

    // reaches [-1.5, -0.5]: no overlap although the centres are 1.5 apart
    assert!(!overlaps(&origin, &cube_at(-1.5, 0.0, 0.0, 1.0)));
    // reaches [-1.5, 0.5]
    assert!(overlaps(&origin, &cube_at(-1.5, 0.0, 0.0, 2.0)));
    // reaches [-2.5, -0.5]
    assert!(!overlaps(&origin, &cube_at(-2.5, 0.0, 0.0, 2.0)));
    // the upper side reaches all the way to position + size
    assert!(overlaps(&origin, &cube_at(1.9, 0.0, 0.0, 0.1)));
}

#[test]
fn should_ignore_rotation() {
    let mut a = cube_at(0.0, 0.0, 0.0, 1.0);
    let b = cube_at(1.2, 0.0, 0.0, 1.0);
    assert!(!overlaps(&a, &b));

    a.transform.rotation = Vector3::new(0.0, std::f32::consts::FRAC_PI_4, 0.0);
    assert!(!overlaps(&a, &b));
}

#[test]
fn should_report_bounds() {
    let a = BoundedObject::at(Vector3::new(1.0, -2.0, 3.0), Vector3::new(2.0, 1.0, 0.5));
    let (min, max) = a.bounds();

    assert_eq!(min, Vector3::new(1.0, -2.0, 3.0));
    assert_eq!(max, Vector3::new(3.0, -1.0, 3.5));
}
