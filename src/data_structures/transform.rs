//! Model transforms and their GPU representation.
//!
//! A [`Transform`] is position + Euler rotation + optional pivot. It is turned
//! into a model matrix once per frame and written to a one-element
//! per-instance vertex buffer as a [`TransformRaw`].

use cgmath::{Matrix, Matrix3, Matrix4, Rad, SquareMatrix, Vector3, Zero};

/// Position, rotation and an optional pivot for a single drawable part.
///
/// `rotation` holds Euler angles in radians which are applied about X, then
/// Y, then Z, each about the object's own (already rotated) axes. The order
/// matters and must not be changed.
///
/// When a `pivot` is set the rotation happens about that point (given in the
/// object's local space) instead of the local origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub pivot: Option<Vector3<f32>>,
}

impl Transform {
    /// Identity transform (no move, no rotation, no pivot).
    pub fn new() -> Self {
        Self {
            position: Vector3::zero(),
            rotation: Vector3::zero(),
            pivot: None,
        }
    }

    pub fn with_pivot(mut self, pivot: Vector3<f32>) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn with_rotation(mut self, rotation: Vector3<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    /// A transform at `position` whose local +Z axis points along `direction`.
    ///
    /// Roll about the axis is left at zero, which is all a rotationally
    /// symmetric mesh like a projectile needs.
    pub fn looking_along(position: Vector3<f32>, direction: Vector3<f32>) -> Self {
        // Rx(a) * Ry(b) * +Z == (sin b, -sin a cos b, cos a cos b)
        let yaw = direction.x.clamp(-1.0, 1.0).asin();
        let pitch = (-direction.y).atan2(direction.z);
        Self {
            position,
            rotation: Vector3::new(pitch, yaw, 0.0),
            pivot: None,
        }
    }

    /// The rotation part only: `Rx * Ry * Rz`.
    pub fn rotation_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_angle_x(Rad(self.rotation.x))
            * Matrix4::from_angle_y(Rad(self.rotation.y))
            * Matrix4::from_angle_z(Rad(self.rotation.z))
    }

    /// Compose the model matrix.
    ///
    /// `T(position) * R` without a pivot and
    /// `T(position) * T(pivot) * R * T(-pivot)` with one.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let translation = Matrix4::from_translation(self.position);
        match self.pivot {
            Some(pivot) => {
                translation
                    * Matrix4::from_translation(pivot)
                    * self.rotation_matrix()
                    * Matrix4::from_translation(-pivot)
            }
            None => translation * self.rotation_matrix(),
        }
    }

    pub fn to_raw(&self) -> TransformRaw {
        TransformRaw::from_matrix(self.to_matrix())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vector3<f32>> for Transform {
    fn from(position: Vector3<f32>) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }
}

/**
 * The raw transform is the data stored on the GPU: the model matrix and the
 * matrix used to bring normals into world space.
 */
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TransformRaw {
    model: [[f32; 4]; 4],
    normal: [[f32; 3]; 3],
}

impl TransformRaw {
    /// Build the raw data from an already composed world matrix.
    ///
    /// The normal matrix is the inverse transpose of the upper 3x3 block. A
    /// singular block is passed through unchanged.
    pub fn from_matrix(model: Matrix4<f32>) -> Self {
        let upper = Matrix3::from_cols(
            model.x.truncate(),
            model.y.truncate(),
            model.z.truncate(),
        );
        let normal = upper
            .invert()
            .map(|inverse| inverse.transpose())
            .unwrap_or(upper);
        Self {
            model: model.into(),
            normal: normal.into(),
        }
    }

    pub fn model(&self) -> Matrix4<f32> {
        self.model.into()
    }
}

impl Default for TransformRaw {
    fn default() -> Self {
        Self::from_matrix(Matrix4::identity())
    }
}

/**
 * As we store the transform directly in GPU memory we need to tell what the bytes refer to.
 *
 * A mat4 takes up four vertex slots (one vec4 each), the normal matrix another three.
 * The step mode is `Instance` so the shader only advances once per drawn instance.
 */
impl TransformRaw {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<TransformRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 5,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 6,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 8]>() as wgpu::BufferAddress,
                    shader_location: 7,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 12]>() as wgpu::BufferAddress,
                    shader_location: 8,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 16]>() as wgpu::BufferAddress,
                    shader_location: 9,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 19]>() as wgpu::BufferAddress,
                    shader_location: 10,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 22]>() as wgpu::BufferAddress,
                    shader_location: 11,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}
