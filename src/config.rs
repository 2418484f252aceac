//! Tunables for the scene and the tank.
//!
//! Everything here has a `Default` that reproduces the stock scene. The
//! structs are plain data and are passed by value into
//! [`flow::run`](crate::flow::run) and [`Tank::new`](crate::tank::Tank::new).

use cgmath::{Deg, Vector3};

/// Dimensions and behaviour of the tank.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TankConfig {
    /// Extents of the body cube.
    pub body_size: Vector3<f32>,
    pub turret_radius: f32,
    /// Turret position in world space. It is not carried along by the body.
    pub turret_offset: Vector3<f32>,
    pub barrel_radius: f32,
    pub barrel_length: f32,
    /// Barrel centre relative to the turret. The barrel pivots about its
    /// breech, `length / 2` behind this point.
    pub barrel_offset: Vector3<f32>,
    pub projectile_radius: f32,
    pub projectile_length: f32,
    /// Distance travelled per key-held frame, not scaled by time.
    pub move_step: f32,
    /// Radians per second.
    pub body_turn_speed: f32,
    /// Radians per second.
    pub turret_turn_speed: f32,
    /// Radians per second, for both pitch and yaw.
    pub barrel_turn_speed: f32,
    /// Distance a projectile travels per frame.
    pub projectile_step: f32,
    /// Bound on a projectile's position along its firing axis. Past it the
    /// projectile is dropped.
    pub max_travel: f32,
    pub sector_count: u32,
    pub stack_count: u32,
}

impl TankConfig {
    /// Collision extents of a projectile.
    pub fn projectile_size(&self) -> Vector3<f32> {
        Vector3::new(
            self.projectile_radius * 2.0,
            self.projectile_radius * 2.0,
            self.projectile_length,
        )
    }

    /// Breech of the barrel in barrel space.
    pub fn barrel_pivot(&self) -> Vector3<f32> {
        Vector3::new(0.0, 0.0, -self.barrel_length / 2.0)
    }

    /// Muzzle of the barrel in barrel space.
    pub fn muzzle(&self) -> Vector3<f32> {
        Vector3::new(0.0, 0.0, self.barrel_length / 2.0)
    }
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            body_size: Vector3::new(2.0, 1.0, 3.0),
            turret_radius: 0.8,
            turret_offset: Vector3::new(0.0, 0.5, 0.0),
            barrel_radius: 0.15,
            barrel_length: 2.0,
            barrel_offset: Vector3::new(0.0, 0.4, 1.0),
            projectile_radius: 0.1,
            projectile_length: 0.3,
            move_step: 0.01,
            body_turn_speed: 1.0,
            turret_turn_speed: 1.0,
            barrel_turn_speed: 1.0,
            projectile_step: 0.1,
            max_travel: 40.0,
            sector_count: 36,
            stack_count: 18,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub position: Vector3<f32>,
    pub yaw: Deg<f32>,
    pub pitch: Deg<f32>,
    pub fovy: Deg<f32>,
    pub znear: f32,
    pub zfar: f32,
    /// Units per second.
    pub speed: f32,
    /// Degrees per pixel of mouse motion.
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 5.0),
            yaw: Deg(-90.0),
            pitch: Deg(0.0),
            fovy: Deg(45.0),
            znear: 0.1,
            zfar: 100.0,
            speed: 2.5,
            sensitivity: 0.1,
        }
    }
}

/// Window, camera and prop placement.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub clear_colour: wgpu::Color,
    pub camera: CameraConfig,
    pub light_position: Vector3<f32>,
    pub light_colour: Vector3<f32>,
    pub target_position: Vector3<f32>,
    pub target_size: Vector3<f32>,
    pub floor_position: Vector3<f32>,
    pub floor_size: Vector3<f32>,
    pub sphere_position: Vector3<f32>,
    pub sphere_radius: f32,
    pub sphere_sectors: u32,
    pub sphere_stacks: u32,
    pub tank: TankConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            title: "Camionetica poderosa".to_string(),
            width: 1280,
            height: 720,
            clear_colour: wgpu::Color {
                r: 0.2,
                g: 0.3,
                b: 0.3,
                a: 1.0,
            },
            camera: CameraConfig::default(),
            light_position: Vector3::new(2.0, 6.0, 8.0),
            light_colour: Vector3::new(1.0, 1.0, 1.0),
            target_position: Vector3::new(0.0, 0.0, 15.0),
            target_size: Vector3::new(2.0, 2.0, 2.0),
            floor_position: Vector3::new(0.0, -1.0, 0.0),
            floor_size: Vector3::new(20.0, 0.5, 20.0),
            sphere_position: Vector3::new(3.0, 0.0, 15.0),
            sphere_radius: 1.0,
            sphere_sectors: 36,
            sphere_stacks: 18,
            tank: TankConfig::default(),
        }
    }
}
