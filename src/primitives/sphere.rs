use std::f32::consts::PI;

use anyhow::ensure;

use crate::primitives::{MeshData, Primitive, VertexLayout};

/// A UV sphere centred at the origin with its poles on the Z axis.
///
/// With `full == false` only the sectors from `0` to `π` are generated, which
/// is the half with `y >= 0` (a dome when viewed with +Y up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub sector_count: u32,
    pub stack_count: u32,
    pub full: bool,
}

impl Sphere {
    pub fn new(radius: f32, sector_count: u32, stack_count: u32, full: bool) -> Self {
        Self {
            radius,
            sector_count,
            stack_count,
            full,
        }
    }

    /// Sector angle covered by the mesh: `2π` for a full sphere, `π` for a half.
    pub fn sector_range(&self) -> f32 {
        if self.full { 2.0 * PI } else { PI }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(1.0, 36, 18, true)
    }
}

impl Primitive for Sphere {
    fn build(&self) -> anyhow::Result<MeshData> {
        ensure!(
            self.radius > 0.0,
            "sphere radius must be positive, got {}",
            self.radius
        );
        ensure!(
            self.sector_count >= 3,
            "sphere needs at least 3 sectors, got {}",
            self.sector_count
        );
        ensure!(
            self.stack_count >= 2,
            "sphere needs at least 2 stacks, got {}",
            self.stack_count
        );
        let vertex_count =
            (u64::from(self.stack_count) + 1) * (u64::from(self.sector_count) + 1);
        ensure!(
            vertex_count <= u64::from(u32::MAX),
            "sphere with {vertex_count} vertices cannot be indexed with u32"
        );

        let sectors = self.sector_count;
        let stacks = self.stack_count;
        let length_inv = 1.0 / self.radius;
        let sector_step = self.sector_range() / sectors as f32;
        let stack_step = PI / stacks as f32;

        let vertex_count = vertex_count as usize;
        let mut attributes = Vec::with_capacity(vertex_count * VertexLayout::PositionNormalUv.stride());

        // rings from the north pole (+z) down to the south pole (-z)
        for i in 0..=stacks {
            let stack_angle = PI / 2.0 - i as f32 * stack_step;
            let xy = self.radius * stack_angle.cos();
            let z = self.radius * stack_angle.sin();

            // first and last column share a position but not a texcoord
            for j in 0..=sectors {
                let sector_angle = j as f32 * sector_step;
                let x = xy * sector_angle.cos();
                let y = xy * sector_angle.sin();

                attributes.extend_from_slice(&[x, y, z]);
                attributes.extend_from_slice(&[x * length_inv, y * length_inv, z * length_inv]);
                attributes.extend_from_slice(&[j as f32 / sectors as f32, i as f32 / stacks as f32]);
            }
        }

        let mut indices = Vec::with_capacity(sectors as usize * (stacks as usize - 1) * 6);
        for i in 0..stacks {
            let mut k1 = i * (sectors + 1);
            let mut k2 = k1 + sectors + 1;

            for _ in 0..sectors {
                // the top ring collapses into the pole
                if i != 0 {
                    indices.extend_from_slice(&[k1, k2, k1 + 1]);
                }
                // so does the bottom one
                if i != stacks - 1 {
                    indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
                }
                k1 += 1;
                k2 += 1;
            }
        }

        Ok(MeshData::new(attributes, indices, VertexLayout::PositionNormalUv))
    }

    fn vertex_layout(&self) -> VertexLayout {
        VertexLayout::PositionNormalUv
    }
}
