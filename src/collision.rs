//! Axis aligned bounding box overlap.
//!
//! Boxes are described by a position and a size. The box covers
//! `[position, position + size]` on every axis: the size extends in the
//! positive direction only, it is not centred on the position. Meshes are
//! generated centred at their origin, so the box is offset from the geometry
//! by half its size. Overlap is a plain boolean, there is no response.

use cgmath::Vector3;

use crate::data_structures::transform::Transform;

/// A transform with 3D extents, used for collision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundedObject {
    pub transform: Transform,
    pub size: Vector3<f32>,
}

impl BoundedObject {
    pub fn new(transform: Transform, size: Vector3<f32>) -> Self {
        Self { transform, size }
    }

    pub fn at(position: Vector3<f32>, size: Vector3<f32>) -> Self {
        Self::new(Transform::from(position), size)
    }

    pub fn position(&self) -> Vector3<f32> {
        self.transform.position
    }

    /// Lower and upper corner of the box.
    pub fn bounds(&self) -> (Vector3<f32>, Vector3<f32>) {
        let min = self.position();
        (min, min + self.size)
    }

    pub fn overlaps(&self, other: &BoundedObject) -> bool {
        overlaps(self, other)
    }
}

fn overlaps_on_axis(a_pos: f32, a_size: f32, b_pos: f32, b_size: f32) -> bool {
    a_pos + a_size >= b_pos && b_pos + b_size >= a_pos
}

/// True if the boxes of `a` and `b` touch or intersect on all three axes.
///
/// Rotation is ignored. Touching faces count as overlapping.
pub fn overlaps(a: &BoundedObject, b: &BoundedObject) -> bool {
    let (a_pos, b_pos) = (a.position(), b.position());
    overlaps_on_axis(a_pos.x, a.size.x, b_pos.x, b.size.x)
        && overlaps_on_axis(a_pos.y, a.size.y, b_pos.y, b.size.y)
        && overlaps_on_axis(a_pos.z, a.size.z, b_pos.z, b.size.z)
}
