//! GPU side meshes and materials.
//!
//! A [`GpuMesh`] owns the vertex (and optional index) buffer built from a
//! [`MeshData`] and releases both when dropped. A [`Material`] is a diffuse
//! texture bound for the fragment stage. [`DrawMesh`] issues the draw calls.

use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::{
    data_structures::texture::Texture,
    primitives::{MeshData, VertexLayout},
};

/// Vertex buffer layout for interleaved `[pos3, normal3, uv2]` or `[pos3, uv2]`.
pub fn vertex_buffer_layout(layout: VertexLayout) -> wgpu::VertexBufferLayout<'static> {
    use std::mem;
    const POSITION_NORMAL_UV: [wgpu::VertexAttribute; 3] = [
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x2,
        },
        wgpu::VertexAttribute {
            offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
            shader_location: 2,
            format: wgpu::VertexFormat::Float32x3,
        },
    ];
    const POSITION_UV: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x2,
        },
    ];

    let attributes: &'static [wgpu::VertexAttribute] = match layout {
        VertexLayout::PositionNormalUv => &POSITION_NORMAL_UV,
        VertexLayout::PositionUv => &POSITION_UV,
    };
    wgpu::VertexBufferLayout {
        array_stride: (layout.stride() * mem::size_of::<f32>()) as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes,
    }
}

/// Vertex and index buffers of one generated mesh.
///
/// The buffers are created once and never rewritten. Dropping the mesh
/// destroys them, after which nothing can draw it since drawing borrows it.
#[derive(Debug)]
pub struct GpuMesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: Option<wgpu::Buffer>,
    pub num_elements: u32,
    pub layout: VertexLayout,
}

impl GpuMesh {
    pub fn new(device: &wgpu::Device, name: &str, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Vertex Buffer", name)),
            contents: bytemuck::cast_slice(mesh.attributes()),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = mesh.is_indexed().then(|| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{:?} Index Buffer", name)),
                contents: bytemuck::cast_slice(mesh.indices()),
                usage: wgpu::BufferUsages::INDEX,
            })
        });

        Self {
            name: name.to_string(),
            vertex_buffer,
            index_buffer,
            num_elements: mesh.element_count() as u32,
            layout: mesh.layout(),
        }
    }

    pub fn is_indexed(&self) -> bool {
        self.index_buffer.is_some()
    }
}

impl Drop for GpuMesh {
    fn drop(&mut self) {
        log::debug!("releasing buffers of mesh {}", self.name);
        self.vertex_buffer.destroy();
        if let Some(index_buffer) = &self.index_buffer {
            index_buffer.destroy();
        }
    }
}

#[derive(Debug)]
pub struct Material {
    pub name: String,
    pub diffuse_texture: Texture,
    pub bind_group: wgpu::BindGroup,
}

impl Material {
    pub fn new(
        device: &wgpu::Device,
        name: &str,
        diffuse_texture: Texture,
        layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let sampler = diffuse_texture
            .sampler
            .clone()
            .unwrap_or_else(|| crate::data_structures::texture::create_default_sampler(device));
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&diffuse_texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
            label: Some(name),
        });

        Self {
            name: String::from(name),
            diffuse_texture,
            bind_group,
        }
    }
}

/// Texture + sampler layout used by every material (group 0).
pub fn diffuse_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("diffuse_bind_group_layout"),
    })
}

pub trait DrawMesh<'a> {
    /// Unlit draw: material in group 0, camera in group 1.
    fn draw_mesh_instanced(
        &mut self,
        mesh: &'a GpuMesh,
        material: &'a Material,
        instances: Range<u32>,
        camera_bind_group: &'a wgpu::BindGroup,
    );

    /// Lit draw: additionally binds the light in group 2.
    fn draw_lit_mesh_instanced(
        &mut self,
        mesh: &'a GpuMesh,
        material: &'a Material,
        instances: Range<u32>,
        camera_bind_group: &'a wgpu::BindGroup,
        light_bind_group: &'a wgpu::BindGroup,
    );
}

impl<'a, 'b> DrawMesh<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh_instanced(
        &mut self,
        mesh: &'b GpuMesh,
        material: &'b Material,
        instances: Range<u32>,
        camera_bind_group: &'b wgpu::BindGroup,
    ) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_bind_group(0, &material.bind_group, &[]);
        self.set_bind_group(1, camera_bind_group, &[]);
        match &mesh.index_buffer {
            Some(index_buffer) => {
                self.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                self.draw_indexed(0..mesh.num_elements, 0, instances);
            }
            None => self.draw(0..mesh.num_elements, instances),
        }
    }

    fn draw_lit_mesh_instanced(
        &mut self,
        mesh: &'b GpuMesh,
        material: &'b Material,
        instances: Range<u32>,
        camera_bind_group: &'b wgpu::BindGroup,
        light_bind_group: &'b wgpu::BindGroup,
    ) {
        self.set_bind_group(2, light_bind_group, &[]);
        self.draw_mesh_instanced(mesh, material, instances, camera_bind_group);
    }
}
