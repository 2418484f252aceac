use cgmath::Matrix4;
use wgpu::util::DeviceExt;

use crate::{
    data_structures::{
        model::{GpuMesh, Material},
        transform::TransformRaw,
    },
    primitives::{Primitive, Shape},
    render::{Instanced, Render},
};

/// One drawable part: a generated mesh, its material and a one element
/// transform buffer that is rewritten every frame.
#[derive(Debug)]
pub struct Drawable {
    pub mesh: GpuMesh,
    pub material: Material,
    pub transform_buffer: wgpu::Buffer,
}

impl Drawable {
    /// Tessellate `shape`, upload it and place it at `model`.
    pub fn new(
        device: &wgpu::Device,
        name: &str,
        shape: Shape,
        material: Material,
        model: Matrix4<f32>,
    ) -> anyhow::Result<Self> {
        let data = shape.build()?;
        let mesh = GpuMesh::new(device, name, &data);
        let transform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Transform Buffer", name)),
            contents: bytemuck::cast_slice(&[TransformRaw::from_matrix(model)]),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        Ok(Self {
            mesh,
            material,
            transform_buffer,
        })
    }

    pub fn update(&self, queue: &wgpu::Queue, model: Matrix4<f32>) {
        queue.write_buffer(
            &self.transform_buffer,
            0,
            bytemuck::cast_slice(&[TransformRaw::from_matrix(model)]),
        );
    }
}

impl<'a> From<&'a Drawable> for Render<'a> {
    fn from(drawable: &'a Drawable) -> Self {
        Render::Default(Instanced {
            instance: &drawable.transform_buffer,
            mesh: &drawable.mesh,
            material: &drawable.material,
            amount: 1,
        })
    }
}
