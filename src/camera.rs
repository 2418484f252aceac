//! Fly camera.
//!
//! W/A/S/D moves, holding the right mouse button and dragging looks around,
//! the scroll wheel zooms by narrowing the field of view.
//!
//! - [`Camera`] is the pose (position, yaw, pitch)
//! - [`Projection`] holds the perspective parameters
//! - [`CameraController`] turns input into pose and zoom changes
//! - [`CameraState`] bundles the three, [`CameraResources`] is the GPU side

use cgmath::{Deg, InnerSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3, perspective};
use instant::Duration;
use wgpu::util::DeviceExt;
use winit::{
    event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::config::CameraConfig;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

pub const PITCH_LIMIT: Deg<f32> = Deg(89.0);
pub const MIN_FOVY: Deg<f32> = Deg(1.0);
pub const MAX_FOVY: Deg<f32> = Deg(45.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: Rad<f32>,
    pub pitch: Rad<f32>,
}

impl Camera {
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    /// Unit view direction. Yaw -90° with zero pitch looks down -Z.
    pub fn front(&self) -> Vector3<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        Vector3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize()
    }

    pub fn right(&self) -> Vector3<f32> {
        self.front().cross(Vector3::unit_y()).normalize()
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.front(), Vector3::unit_y())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height.max(1) as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn fovy(&self) -> Deg<f32> {
        self.fovy.into()
    }

    /// Narrow (positive `amount`) or widen the field of view by `amount` degrees,
    /// staying within `[1°, 45°]`.
    pub fn zoom(&mut self, amount: f32) {
        let fovy = Deg::from(self.fovy).0 - amount;
        self.fovy = Deg(fovy.clamp(MIN_FOVY.0, MAX_FOVY.0)).into();
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CameraController {
    amount_forward: f32,
    amount_backward: f32,
    amount_left: f32,
    amount_right: f32,
    rotate_horizontal: f32,
    rotate_vertical: f32,
    scroll: f32,
    looking: bool,
    /// Units per second.
    speed: f32,
    /// Degrees per pixel.
    sensitivity: f32,
}

impl CameraController {
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self {
            speed,
            sensitivity,
            ..Default::default()
        }
    }

    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let amount = if state == ElementState::Pressed { 1.0 } else { 0.0 };
        match key {
            KeyCode::KeyW => {
                self.amount_forward = amount;
                true
            }
            KeyCode::KeyS => {
                self.amount_backward = amount;
                true
            }
            KeyCode::KeyA => {
                self.amount_left = amount;
                true
            }
            KeyCode::KeyD => {
                self.amount_right = amount;
                true
            }
            _ => false,
        }
    }

    /// Positive `delta` zooms in.
    pub fn process_scroll(&mut self, delta: f32) {
        self.scroll += delta;
    }

    pub fn set_looking(&mut self, looking: bool) {
        self.looking = looking;
    }

    pub fn is_looking(&self) -> bool {
        self.looking
    }

    pub fn handle_window_events(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => self.process_keyboard(*key, *state),
            WindowEvent::MouseWheel { delta, .. } => {
                self.process_scroll(match delta {
                    MouseScrollDelta::LineDelta(_, lines) => *lines,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 20.0,
                });
                true
            }
            WindowEvent::MouseInput {
                button: MouseButton::Right,
                state,
                ..
            } => {
                self.looking = state.is_pressed();
                true
            }
            _ => false,
        }
    }

    /// Raw mouse motion in pixels. Only counted while looking.
    pub fn handle_mouse(&mut self, dx: f64, dy: f64) {
        if self.looking {
            self.rotate_horizontal += dx as f32;
            self.rotate_vertical += dy as f32;
        }
    }

    pub fn update(&mut self, camera: &mut Camera, projection: &mut Projection, dt: Duration) {
        let dt = dt.as_secs_f32();
        let velocity = self.speed * dt;

        let front = camera.front();
        let right = camera.right();
        camera.position += front * (self.amount_forward - self.amount_backward) * velocity;
        camera.position += right * (self.amount_right - self.amount_left) * velocity;

        // screen y grows downwards, dragging down looks down
        camera.yaw += Rad::from(Deg(self.rotate_horizontal * self.sensitivity));
        camera.pitch -= Rad::from(Deg(self.rotate_vertical * self.sensitivity));
        self.rotate_horizontal = 0.0;
        self.rotate_vertical = 0.0;

        let limit = Rad::from(PITCH_LIMIT);
        if camera.pitch < -limit {
            camera.pitch = -limit;
        } else if camera.pitch > limit {
            camera.pitch = limit;
        }

        if self.scroll != 0.0 {
            projection.zoom(self.scroll);
            self.scroll = 0.0;
        }
    }
}

/// Camera pose, projection and controller, advanced once per frame.
#[derive(Debug, Clone, Copy)]
pub struct CameraState {
    pub camera: Camera,
    pub projection: Projection,
    pub controller: CameraController,
}

impl CameraState {
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        let position = Point3::new(config.position.x, config.position.y, config.position.z);
        Self {
            camera: Camera::new(position, config.yaw, config.pitch),
            projection: Projection::new(width, height, config.fovy, config.znear, config.zfar),
            controller: CameraController::new(config.speed, config.sensitivity),
        }
    }

    pub fn update(&mut self, dt: Duration) {
        self.controller
            .update(&mut self.camera, &mut self.projection, dt);
    }

    pub fn view_proj(&self) -> Matrix4<f32> {
        self.projection.calc_matrix() * self.camera.calc_matrix()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view_position = camera.position.to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct CameraResources {
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraResources {
    pub fn new(device: &wgpu::Device, state: &CameraState) -> Self {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&state.camera, &state.projection);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("camera_bind_group_layout"),
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    pub fn write(&mut self, queue: &wgpu::Queue, state: &CameraState) {
        self.uniform
            .update_view_proj(&state.camera, &state.projection);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
