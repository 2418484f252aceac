//! Render composition and pipeline batching.
//!
//! Flows describe what they want drawn as a [`Render`]. The frame loop
//! flattens it into batches, one per pipeline, chosen by the vertex layout of
//! each mesh: lit shapes and unlit cubes.

use crate::{
    data_structures::model::{GpuMesh, Material},
    primitives::VertexLayout,
};

/// A mesh with its material and per-instance transform buffer.
pub struct Instanced<'a> {
    pub instance: &'a wgpu::Buffer,
    pub mesh: &'a GpuMesh,
    pub material: &'a Material,
    pub amount: usize,
}

/// - `None` renders nothing
/// - `Default(Instanced)` renders a single instanced mesh
/// - `Defaults(Vec<Instanced>)` renders a batch of them
/// - `Composed(Vec<Render>)` renders each contained render
pub enum Render<'a> {
    None,
    Default(Instanced<'a>),
    Defaults(Vec<Instanced<'a>>),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    /// Sort everything into the lit (`shapes`) and unlit (`cubes`) batches.
    pub(crate) fn set_pipelines(
        self,
        shapes: &mut Vec<Instanced<'a>>,
        cubes: &mut Vec<Instanced<'a>>,
    ) {
        match self {
            Render::Default(instanced) => push_by_layout(instanced, shapes, cubes),
            Render::Defaults(vec) => vec
                .into_iter()
                .for_each(|instanced| push_by_layout(instanced, shapes, cubes)),
            Render::Composed(renders) => renders
                .into_iter()
                .for_each(|render| render.set_pipelines(shapes, cubes)),
            Render::None => (),
        }
    }
}

fn push_by_layout<'a>(
    instanced: Instanced<'a>,
    shapes: &mut Vec<Instanced<'a>>,
    cubes: &mut Vec<Instanced<'a>>,
) {
    match instanced.mesh.layout {
        VertexLayout::PositionNormalUv => shapes.push(instanced),
        VertexLayout::PositionUv => cubes.push(instanced),
    }
}

impl<'a> From<Vec<Render<'a>>> for Render<'a> {
    fn from(renders: Vec<Render<'a>>) -> Self {
        Render::Composed(renders)
    }
}
