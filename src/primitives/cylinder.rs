use std::f32::consts::PI;

use anyhow::ensure;

use crate::primitives::{MeshData, Primitive, VertexLayout};

/// A capped cylinder centred at the origin, axis along Z, spanning
/// `[-height / 2, height / 2]`.
///
/// Vertex order: bottom side ring, top side ring, bottom cap (centre + rim),
/// top cap (centre + rim). Cap rims repeat the side ring positions because
/// they need a different normal and texcoord.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub radius: f32,
    pub height: f32,
    pub sector_count: u32,
}

impl Cylinder {
    pub fn new(radius: f32, height: f32, sector_count: u32) -> Self {
        Self {
            radius,
            height,
            sector_count,
        }
    }

    /// Index of the bottom cap's centre vertex.
    pub fn base_center_index(&self) -> u32 {
        2 * (self.sector_count + 1)
    }

    /// Index of the top cap's centre vertex.
    pub fn top_center_index(&self) -> u32 {
        self.base_center_index() + self.sector_count + 1
    }

    /// `sector_count + 1` points on the unit circle in the XY plane, the
    /// first one repeated at the end to close the loop.
    fn unit_circle(&self) -> Vec<[f32; 2]> {
        let sector_step = 2.0 * PI / self.sector_count as f32;
        (0..=self.sector_count)
            .map(|i| {
                let sector_angle = i as f32 * sector_step;
                [sector_angle.cos(), sector_angle.sin()]
            })
            .collect()
    }
}

impl Default for Cylinder {
    fn default() -> Self {
        Self::new(1.0, 1.0, 36)
    }
}

impl Primitive for Cylinder {
    fn build(&self) -> anyhow::Result<MeshData> {
        ensure!(
            self.radius > 0.0,
            "cylinder radius must be positive, got {}",
            self.radius
        );
        ensure!(
            self.height > 0.0,
            "cylinder height must be positive, got {}",
            self.height
        );
        ensure!(
            self.sector_count >= 3,
            "cylinder needs at least 3 sectors, got {}",
            self.sector_count
        );
        let vertex_count = 4 * (u64::from(self.sector_count) + 1);
        ensure!(
            vertex_count <= u64::from(u32::MAX),
            "cylinder with {vertex_count} vertices cannot be indexed with u32"
        );

        let sectors = self.sector_count;
        let circle = self.unit_circle();
        let mut attributes =
            Vec::with_capacity(vertex_count as usize * VertexLayout::PositionNormalUv.stride());

        // side rings, bottom first
        for ring in 0..2 {
            let h = -self.height / 2.0 + ring as f32 * self.height;
            let t = 1.0 - ring as f32;
            for (j, [ux, uy]) in circle.iter().copied().enumerate() {
                attributes.extend_from_slice(&[ux * self.radius, uy * self.radius, h]);
                attributes.extend_from_slice(&[ux, uy, 0.0]);
                attributes.extend_from_slice(&[j as f32 / sectors as f32, t]);
            }
        }

        // caps, bottom first
        for cap in 0..2 {
            let h = -self.height / 2.0 + cap as f32 * self.height;
            let nz = -1.0 + cap as f32 * 2.0;

            attributes.extend_from_slice(&[0.0, 0.0, h, 0.0, 0.0, nz, 0.5, 0.5]);
            for [ux, uy] in circle.iter().take(sectors as usize).copied() {
                attributes.extend_from_slice(&[ux * self.radius, uy * self.radius, h]);
                attributes.extend_from_slice(&[0.0, 0.0, nz]);
                attributes.extend_from_slice(&[-ux * 0.5 + 0.5, -uy * 0.5 + 0.5]);
            }
        }

        let mut indices = Vec::with_capacity(sectors as usize * 12);

        let mut k1 = 0;
        let mut k2 = sectors + 1;
        for _ in 0..sectors {
            indices.extend_from_slice(&[k1, k1 + 1, k2]);
            indices.extend_from_slice(&[k2, k1 + 1, k2 + 1]);
            k1 += 1;
            k2 += 1;
        }

        let base_center = self.base_center_index();
        let mut k = base_center + 1;
        for i in 0..sectors {
            if i < sectors - 1 {
                indices.extend_from_slice(&[base_center, k + 1, k]);
            } else {
                indices.extend_from_slice(&[base_center, base_center + 1, k]);
            }
            k += 1;
        }

        let top_center = self.top_center_index();
        let mut k = top_center + 1;
        for i in 0..sectors {
            if i < sectors - 1 {
                indices.extend_from_slice(&[top_center, k, k + 1]);
            } else {
                indices.extend_from_slice(&[top_center, k, top_center + 1]);
            }
            k += 1;
        }

        Ok(MeshData::new(attributes, indices, VertexLayout::PositionNormalUv))
    }

    fn vertex_layout(&self) -> VertexLayout {
        VertexLayout::PositionNormalUv
    }
}
