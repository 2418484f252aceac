use std::f32::consts::PI;

use approx::assert_relative_eq;
use tank_ngin::primitives::{Cube, Cylinder, Primitive, Shape, Sphere, VertexLayout};

mod common;

use crate::common::test_utils::EPSILON;

fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[test]
fn should_generate_one_vertex_per_ring_and_column() {
    let mesh = Sphere::new(1.0, 36, 18, true).build().unwrap();

    assert_eq!(mesh.vertex_count(), 19 * 37);
    assert_eq!(mesh.attributes().len(), 19 * 37 * 8);
    assert_eq!(mesh.layout(), VertexLayout::PositionNormalUv);
}

#[test]
fn should_keep_sphere_indices_in_range() {
    let mesh = Sphere::new(1.0, 12, 7, true).build().unwrap();

    assert_eq!(mesh.indices().len() % 3, 0);
    let vertex_count = mesh.vertex_count() as u32;
    assert!(mesh.indices().iter().all(|&i| i < vertex_count));
    // pole rings contribute one triangle per sector, inner rings two
    assert_eq!(mesh.triangle_count(), 12 * (7 - 1) * 2);
}

#[test]
fn should_place_sphere_vertices_on_radius() {
    let radius = 2.5;
    let mesh = Sphere::new(radius, 24, 12, true).build().unwrap();

    for position in mesh.positions() {
        assert_relative_eq!(length(position), radius, epsilon = EPSILON);
    }
    for (position, normal) in mesh.positions().zip(mesh.normals()) {
        assert_relative_eq!(length(normal), 1.0, epsilon = EPSILON);
        for axis in 0..3 {
            assert_relative_eq!(normal[axis], position[axis] / radius, epsilon = EPSILON);
        }
    }
}

#[test]
fn should_use_ring_and_column_as_sphere_tex_coords() {
    let mesh = Sphere::new(1.0, 4, 2, true).build().unwrap();
    let uvs: Vec<[f32; 2]> = mesh.tex_coords().collect();

    assert_eq!(uvs[0], [0.0, 0.0]);
    assert_eq!(uvs[4], [1.0, 0.0]);
    assert_eq!(uvs[5], [0.0, 0.5]);
    assert_eq!(uvs[14], [1.0, 1.0]);
}

#[test]
fn should_span_half_the_sectors_for_a_half_sphere() {
    let half = Sphere::new(1.0, 36, 18, false).build().unwrap();

    let mut max_angle: f32 = 0.0;
    for [x, y, _] in half.positions() {
        assert!(y >= -EPSILON, "half sphere vertex below the cut: y = {y}");
        if x.abs() > EPSILON || y.abs() > EPSILON {
            let angle = y.max(0.0).atan2(x);
            assert!((0.0..=PI + EPSILON).contains(&angle));
            max_angle = max_angle.max(angle);
        }
    }
    assert_relative_eq!(max_angle, PI, epsilon = 1e-4);
}

#[test]
fn should_span_all_sectors_for_a_full_sphere() {
    let full = Sphere::new(1.0, 36, 18, true).build().unwrap();

    assert!(full.positions().any(|[_, y, _]| y < -0.5));
    assert_eq!(Sphere::default().sector_range(), 2.0 * PI);
    assert_eq!(Sphere::new(1.0, 36, 18, false).sector_range(), PI);
}

#[test]
fn should_give_cylinder_sides_radial_normals() {
    let cylinder = Cylinder::new(0.5, 2.0, 16);
    let mesh = cylinder.build().unwrap();
    let side_vertices = 2 * (16 + 1);

    for normal in mesh.normals().take(side_vertices) {
        assert_eq!(normal[2], 0.0);
        assert_relative_eq!(
            (normal[0] * normal[0] + normal[1] * normal[1]).sqrt(),
            1.0,
            epsilon = EPSILON
        );
    }
}

#[test]
fn should_give_cylinder_caps_axis_normals() {
    let cylinder = Cylinder::new(0.5, 2.0, 16);
    let mesh = cylinder.build().unwrap();
    let normals: Vec<[f32; 3]> = mesh.normals().collect();
    let base = cylinder.base_center_index() as usize;
    let top = cylinder.top_center_index() as usize;

    assert_eq!(normals.len(), top + 16 + 1);
    for normal in &normals[base..top] {
        assert_eq!(*normal, [0.0, 0.0, -1.0]);
    }
    for normal in &normals[top..] {
        assert_eq!(*normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn should_build_four_triangles_per_cylinder_sector() {
    for sectors in [3, 8, 36] {
        let mesh = Cylinder::new(1.0, 1.0, sectors).build().unwrap();

        assert_eq!(mesh.triangle_count(), 4 * sectors as usize);
        let vertex_count = mesh.vertex_count() as u32;
        assert!(mesh.indices().iter().all(|&i| i < vertex_count));
    }
}

#[test]
fn should_center_cylinder_on_its_axis() {
    let mesh = Cylinder::new(1.0, 3.0, 12).build().unwrap();

    for [_, _, z] in mesh.positions() {
        assert!(z == -1.5 || z == 1.5, "unexpected height {z}");
    }
    let cylinder = Cylinder::new(1.0, 3.0, 12);
    let centre = mesh.vertex(cylinder.top_center_index() as usize).unwrap();
    assert_eq!(&centre[..3], &[0.0, 0.0, 1.5]);
    assert_eq!(&centre[6..], &[0.5, 0.5]);
}

#[test]
fn should_wrap_cylinder_cap_fans() {
    let cylinder = Cylinder::new(1.0, 1.0, 4);
    let mesh = cylinder.build().unwrap();
    let triangles = mesh.triangles();
    let base = cylinder.base_center_index();
    let top = cylinder.top_center_index();

    // 8 side triangles, then 4 bottom, then 4 top
    assert_eq!(triangles[8], [base, base + 2, base + 1]);
    assert_eq!(triangles[11], [base, base + 1, base + 4]);
    assert_eq!(triangles[12], [top, top + 1, top + 2]);
    assert_eq!(triangles[15], [top, top + 4, top + 1]);
}

#[test]
fn should_build_an_unindexed_cube() {
    let mesh = Cube::new(2.0, 4.0, 6.0).build().unwrap();

    assert_eq!(mesh.vertex_count(), Cube::VERTEX_COUNT);
    assert!(mesh.indices().is_empty());
    assert!(!mesh.is_indexed());
    assert_eq!(mesh.layout(), VertexLayout::PositionUv);
    assert_eq!(mesh.attributes().len(), 36 * 5);
    assert_eq!(mesh.normals().count(), 0);
    for [x, y, z] in mesh.positions() {
        assert_eq!(x.abs(), 1.0);
        assert_eq!(y.abs(), 2.0);
        assert_eq!(z.abs(), 3.0);
    }
}

#[test]
fn should_share_one_edge_between_the_triangles_of_each_face() {
    let mesh = Cube::new(1.0, 1.0, 1.0).build().unwrap();
    let positions: Vec<[f32; 3]> = mesh.positions().collect();

    for face in positions.chunks_exact(6) {
        let (first, second) = face.split_at(3);
        let shared = first.iter().filter(|p| second.contains(p)).count();
        assert_eq!(shared, 2);
    }
}

#[test]
fn should_reject_degenerate_parameters() {
    assert!(Sphere::new(0.0, 36, 18, true).build().is_err());
    assert!(Sphere::new(1.0, 2, 18, true).build().is_err());
    assert!(Sphere::new(1.0, 36, 1, true).build().is_err());
    assert!(Cylinder::new(-1.0, 1.0, 36).build().is_err());
    assert!(Cylinder::new(1.0, 0.0, 36).build().is_err());
    assert!(Cylinder::new(1.0, 1.0, 2).build().is_err());
    assert!(Cube::new(0.0, 1.0, 1.0).build().is_err());
}

#[test]
fn should_reject_counts_beyond_u32_indices() {
    assert!(Sphere::new(1.0, u32::MAX, 2, true).build().is_err());
    assert!(Sphere::new(1.0, 70_000, 70_000, true).build().is_err());
    assert!(Cylinder::new(1.0, 1.0, u32::MAX).build().is_err());
    assert!(Cylinder::new(1.0, 1.0, 1 << 30).build().is_err());
}

#[test]
fn should_dispatch_through_shape() {
    let shapes: [Shape; 3] = [
        Sphere::default().into(),
        Cylinder::default().into(),
        Cube::default().into(),
    ];
    let layouts: Vec<VertexLayout> = shapes.iter().map(Primitive::vertex_layout).collect();

    assert_eq!(
        layouts,
        [
            VertexLayout::PositionNormalUv,
            VertexLayout::PositionNormalUv,
            VertexLayout::PositionUv
        ]
    );
    for shape in shapes {
        let mesh = shape.build().unwrap();
        assert_eq!(mesh.layout(), shape.vertex_layout());
    }
}
