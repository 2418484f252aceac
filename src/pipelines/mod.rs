//! Render pipelines.
//!
//! - `basic` builds the lit shape pipeline and the unlit cube pipeline
//! - `light` holds the point light uniform and its bind group

pub mod basic;
pub mod light;

use crate::primitives::VertexLayout;

#[derive(Debug)]
pub struct Pipelines {
    /// Spheres and cylinders.
    pub shape: wgpu::RenderPipeline,
    /// Cubes.
    pub cube: wgpu::RenderPipeline,
}

impl Pipelines {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        light_bind_group_layout: &wgpu::BindGroupLayout,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        Self {
            shape: basic::mk_shape_pipeline(
                device,
                config,
                light_bind_group_layout,
                camera_bind_group_layout,
            ),
            cube: basic::mk_cube_pipeline(device, config, camera_bind_group_layout),
        }
    }

    /// The pipeline able to draw meshes of `layout`.
    pub fn for_layout(&self, layout: VertexLayout) -> &wgpu::RenderPipeline {
        match layout {
            VertexLayout::PositionNormalUv => &self.shape,
            VertexLayout::PositionUv => &self.cube,
        }
    }
}
