//! Procedural mesh generation.
//!
//! Every primitive is pure math: it turns a handful of parameters into an
//! interleaved vertex attribute array and a triangle index array. Nothing in
//! here touches the GPU, the result is handed to
//! [`GpuMesh::new`](crate::data_structures::model::GpuMesh::new) once at
//! construction time.
//!
//! - [`Sphere`] is a UV sphere (or the half of it with `y >= 0`)
//! - [`Cylinder`] is a capped cylinder along the local Z axis
//! - [`Cube`] is an unindexed box without normals
//!
//! [`Shape`] is the closed set of the three, used where the kind of
//! primitive is only known at runtime.

pub mod cube;
pub mod cylinder;
pub mod sphere;

pub use cube::Cube;
pub use cylinder::Cylinder;
pub use sphere::Sphere;

/// Interleaved per-vertex layout of a [`MeshData`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexLayout {
    /// `[x, y, z, nx, ny, nz, u, v]`
    PositionNormalUv,
    /// `[x, y, z, u, v]`
    PositionUv,
}

impl VertexLayout {
    /// Number of floats per vertex.
    pub const fn stride(&self) -> usize {
        match self {
            VertexLayout::PositionNormalUv => 8,
            VertexLayout::PositionUv => 5,
        }
    }

    /// Offset of the texture coordinates inside one vertex.
    pub const fn uv_offset(&self) -> usize {
        match self {
            VertexLayout::PositionNormalUv => 6,
            VertexLayout::PositionUv => 3,
        }
    }

    pub const fn has_normals(&self) -> bool {
        matches!(self, VertexLayout::PositionNormalUv)
    }
}

/// CPU side mesh: interleaved attributes plus triangle indices.
///
/// Indices are empty for unindexed meshes (the cube), in which case every
/// three consecutive vertices form a triangle.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    attributes: Vec<f32>,
    indices: Vec<u32>,
    layout: VertexLayout,
}

impl MeshData {
    pub(crate) fn new(attributes: Vec<f32>, indices: Vec<u32>, layout: VertexLayout) -> Self {
        debug_assert_eq!(attributes.len() % layout.stride(), 0);
        debug_assert_eq!(indices.len() % 3, 0);
        Self {
            attributes,
            indices,
            layout,
        }
    }

    pub fn attributes(&self) -> &[f32] {
        &self.attributes
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.attributes.len() / self.layout.stride()
    }

    /// Number of elements a draw call has to submit: indices when indexed,
    /// vertices otherwise.
    pub fn element_count(&self) -> usize {
        if self.is_indexed() {
            self.indices.len()
        } else {
            self.vertex_count()
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.element_count() / 3
    }

    /// The `idx`th vertex as a slice of `layout().stride()` floats.
    pub fn vertex(&self, idx: usize) -> Option<&[f32]> {
        let stride = self.layout.stride();
        self.attributes.get(idx * stride..(idx + 1) * stride)
    }

    pub fn positions(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.attributes
            .chunks_exact(self.layout.stride())
            .map(|v| [v[0], v[1], v[2]])
    }

    /// Normals of every vertex. Empty for layouts without normals.
    pub fn normals(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        let has_normals = self.layout.has_normals();
        self.attributes
            .chunks_exact(self.layout.stride())
            .filter(move |_| has_normals)
            .map(|v| [v[3], v[4], v[5]])
    }

    pub fn tex_coords(&self) -> impl Iterator<Item = [f32; 2]> + '_ {
        let offset = self.layout.uv_offset();
        self.attributes
            .chunks_exact(self.layout.stride())
            .map(move |v| [v[offset], v[offset + 1]])
    }

    /// Triangles as vertex index triples, for indexed and unindexed meshes alike.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        if self.is_indexed() {
            self.indices
                .chunks_exact(3)
                .map(|t| [t[0], t[1], t[2]])
                .collect()
        } else {
            (0..self.vertex_count() as u32 / 3)
                .map(|t| [t * 3, t * 3 + 1, t * 3 + 2])
                .collect()
        }
    }
}

/// Something that can tessellate itself into a [`MeshData`].
pub trait Primitive {
    /// Generate the mesh. Fails when the parameters would produce degenerate geometry.
    fn build(&self) -> anyhow::Result<MeshData>;

    fn vertex_layout(&self) -> VertexLayout;
}

/// One of the supported primitive kinds together with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Cylinder(Cylinder),
    Cube(Cube),
}

impl Primitive for Shape {
    fn build(&self) -> anyhow::Result<MeshData> {
        match self {
            Shape::Sphere(sphere) => sphere.build(),
            Shape::Cylinder(cylinder) => cylinder.build(),
            Shape::Cube(cube) => cube.build(),
        }
    }

    fn vertex_layout(&self) -> VertexLayout {
        match self {
            Shape::Sphere(sphere) => sphere.vertex_layout(),
            Shape::Cylinder(cylinder) => cylinder.vertex_layout(),
            Shape::Cube(cube) => cube.vertex_layout(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Cylinder> for Shape {
    fn from(cylinder: Cylinder) -> Self {
        Shape::Cylinder(cylinder)
    }
}

impl From<Cube> for Shape {
    fn from(cube: Cube) -> Self {
        Shape::Cube(cube)
    }
}
