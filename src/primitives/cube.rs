use anyhow::ensure;

use crate::primitives::{MeshData, Primitive, VertexLayout};

/// An axis aligned box centred at the origin.
///
/// The mesh is 36 unindexed `[pos3, uv2]` vertices, two triangles per face in
/// the order back, front, left, right, bottom, top. It carries no normals and
/// is drawn unlit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Cube {
    pub const VERTEX_COUNT: usize = 36;

    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn size(&self) -> cgmath::Vector3<f32> {
        cgmath::Vector3::new(self.width, self.height, self.depth)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl Primitive for Cube {
    fn build(&self) -> anyhow::Result<MeshData> {
        ensure!(
            self.width > 0.0 && self.height > 0.0 && self.depth > 0.0,
            "cube extents must be positive, got {}x{}x{}",
            self.width,
            self.height,
            self.depth
        );

        let w = self.width / 2.0;
        let h = self.height / 2.0;
        let d = self.depth / 2.0;

        #[rustfmt::skip]
        let attributes = vec![
            // back
            -w, -h, -d,  0.0, 0.0,
             w, -h, -d,  1.0, 0.0,
             w,  h, -d,  1.0, 1.0,
             w,  h, -d,  1.0, 1.0,
            -w,  h, -d,  0.0, 1.0,
            -w, -h, -d,  0.0, 0.0,
            // front
            -w, -h,  d,  0.0, 0.0,
             w, -h,  d,  1.0, 0.0,
             w,  h,  d,  1.0, 1.0,
             w,  h,  d,  1.0, 1.0,
            -w,  h,  d,  0.0, 1.0,
            -w, -h,  d,  0.0, 0.0,
            // left
            -w,  h,  d,  1.0, 0.0,
            -w,  h, -d,  1.0, 1.0,
            -w, -h, -d,  0.0, 1.0,
            -w, -h, -d,  0.0, 1.0,
            -w, -h,  d,  0.0, 0.0,
            -w,  h,  d,  1.0, 0.0,
            // right
             w,  h,  d,  1.0, 0.0,
             w,  h, -d,  1.0, 1.0,
             w, -h, -d,  0.0, 1.0,
             w, -h, -d,  0.0, 1.0,
             w, -h,  d,  0.0, 0.0,
             w,  h,  d,  1.0, 0.0,
            // bottom
            -w, -h, -d,  0.0, 1.0,
             w, -h, -d,  1.0, 1.0,
             w, -h,  d,  1.0, 0.0,
             w, -h,  d,  1.0, 0.0,
            -w, -h,  d,  0.0, 0.0,
            -w, -h, -d,  0.0, 1.0,
            // top
            -w,  h, -d,  0.0, 1.0,
             w,  h, -d,  1.0, 1.0,
             w,  h,  d,  1.0, 0.0,
             w,  h,  d,  1.0, 0.0,
            -w,  h,  d,  0.0, 0.0,
            -w,  h, -d,  0.0, 1.0,
        ];

        Ok(MeshData::new(attributes, Vec::new(), VertexLayout::PositionUv))
    }

    fn vertex_layout(&self) -> VertexLayout {
        VertexLayout::PositionUv
    }
}
