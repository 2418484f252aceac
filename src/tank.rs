//! The articulated tank: a body, a turret on top of it and a barrel in the
//! turret, plus at most one projectile in flight.
//!
//! Parts are composed hierarchically:
//!
//! - body: `T(position) * Ry(yaw)`
//! - turret: its local transform alone. It follows neither the body's
//!   position nor its heading.
//! - barrel: `turret world * barrel local`, where the barrel pitches and
//!   turns about its breech.

use cgmath::{InnerSpace, Matrix4, Vector3, Vector4, Zero};

use crate::{
    collision::BoundedObject, config::TankConfig, data_structures::transform::Transform,
    input::TankInput,
};

/// A shell in flight.
///
/// It moves by a fixed step each frame along the direction the barrel was
/// pointing when it was fired, and is spent once its position along that
/// axis passes the maximum travel bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub body: BoundedObject,
    origin: Vector3<f32>,
    direction: Vector3<f32>,
    step: f32,
}

impl Projectile {
    pub fn new(body: BoundedObject, direction: Vector3<f32>, step: f32) -> Self {
        Self {
            origin: body.position(),
            direction: direction.normalize(),
            body,
            step,
        }
    }

    pub fn advance(&mut self) {
        self.body.transform.position += self.direction * self.step;
    }

    pub fn position(&self) -> Vector3<f32> {
        self.body.position()
    }

    pub fn origin(&self) -> Vector3<f32> {
        self.origin
    }

    pub fn direction(&self) -> Vector3<f32> {
        self.direction
    }

    /// Distance covered along the firing axis since leaving the muzzle.
    pub fn travel(&self) -> f32 {
        (self.position() - self.origin).dot(self.direction)
    }

    /// World position projected on the firing axis. Firing along +Z this is
    /// the position's z.
    pub fn reach(&self) -> f32 {
        self.position().dot(self.direction)
    }

    pub fn has_exceeded(&self, max_travel: f32) -> bool {
        self.reach() >= max_travel
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        self.body.transform.to_matrix()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tank {
    pub body: BoundedObject,
    pub turret: Transform,
    pub barrel: Transform,
    pub projectile: Option<Projectile>,
    config: TankConfig,
}

impl Tank {
    pub fn new(config: TankConfig) -> Self {
        Self::at(config, Vector3::zero())
    }

    pub fn at(config: TankConfig, position: Vector3<f32>) -> Self {
        let body = BoundedObject::at(position, config.body_size);
        let turret = Transform::from(config.turret_offset);
        let barrel = Transform::from(config.barrel_offset).with_pivot(config.barrel_pivot());
        Self {
            body,
            turret,
            barrel,
            projectile: None,
            config,
        }
    }

    pub fn config(&self) -> &TankConfig {
        &self.config
    }

    pub fn position(&self) -> Vector3<f32> {
        self.body.position()
    }

    pub fn yaw(&self) -> f32 {
        self.body.transform.rotation.y
    }

    /// Unit vector the body drives along.
    pub fn heading(&self) -> Vector3<f32> {
        let yaw = self.yaw();
        Vector3::new(yaw.sin(), 0.0, yaw.cos())
    }

    /// Drive one fixed step along the heading. Not scaled by frame time.
    pub fn move_forward(&mut self) {
        self.body.transform.position += self.heading() * self.config.move_step;
    }

    pub fn move_backward(&mut self) {
        self.body.transform.position -= self.heading() * self.config.move_step;
    }

    /// Turn the body. Positive `direction` turns left (towards +X when facing +Z).
    pub fn rotate_body(&mut self, direction: f32, dt: f32) {
        self.body.transform.rotation.y += direction * self.config.body_turn_speed * dt;
    }

    /// Turn the turret about its own centre, carrying the barrel with it.
    pub fn rotate_turret(&mut self, direction: f32, dt: f32) {
        self.turret.rotation.y += direction * self.config.turret_turn_speed * dt;
    }

    /// Turn the barrel about its breech. Positive `direction` swings the
    /// muzzle left (towards +X when facing +Z).
    pub fn yaw_barrel(&mut self, direction: f32, dt: f32) {
        self.barrel.rotation.y += direction * self.config.barrel_turn_speed * dt;
    }

    /// Pitch the barrel about its breech. Positive `direction` raises the muzzle.
    pub fn pitch_barrel(&mut self, direction: f32, dt: f32) {
        // +x rotation tips +Z down
        self.barrel.rotation.x -= direction * self.config.barrel_turn_speed * dt;
    }

    pub fn body_matrix(&self) -> Matrix4<f32> {
        self.body.transform.to_matrix()
    }

    pub fn turret_matrix(&self) -> Matrix4<f32> {
        self.turret.to_matrix()
    }

    pub fn barrel_matrix(&self) -> Matrix4<f32> {
        self.turret_matrix() * self.barrel.to_matrix()
    }

    pub fn projectile_matrix(&self) -> Option<Matrix4<f32>> {
        self.projectile.as_ref().map(Projectile::to_matrix)
    }

    /// Tip of the barrel in world space.
    pub fn muzzle(&self) -> Vector3<f32> {
        (self.barrel_matrix() * self.config.muzzle().extend(1.0)).truncate()
    }

    /// Unit vector the barrel points along.
    pub fn aim(&self) -> Vector3<f32> {
        (self.barrel_matrix() * Vector4::unit_z())
            .truncate()
            .normalize()
    }

    /// Spawn a projectile at the muzzle unless one is already in flight.
    ///
    /// Returns whether a projectile was spawned.
    pub fn fire(&mut self) -> bool {
        if self.projectile.is_some() {
            return false;
        }
        let direction = self.aim();
        let transform = Transform::looking_along(self.muzzle(), direction);
        let body = BoundedObject::new(transform, self.config.projectile_size());
        self.projectile = Some(Projectile::new(
            body,
            direction,
            self.config.projectile_step,
        ));
        true
    }

    pub fn advance_projectile(&mut self) {
        if let Some(projectile) = self.projectile.as_mut() {
            projectile.advance();
        }
    }

    /// Remove the projectile in flight, if any, and hand it back.
    pub fn retire_projectile(&mut self) -> Option<Projectile> {
        self.projectile.take()
    }

    pub fn projectile_expired(&self) -> bool {
        self.projectile
            .as_ref()
            .is_some_and(|p| p.has_exceeded(self.config.max_travel))
    }

    /// Apply one frame of input. Returns whether a projectile was fired.
    pub fn apply_input(&mut self, input: &TankInput, dt: f32) -> bool {
        if input.forward {
            self.move_forward();
        }
        if input.backward {
            self.move_backward();
        }
        if input.rotate_left {
            self.rotate_body(1.0, dt);
        }
        if input.rotate_right {
            self.rotate_body(-1.0, dt);
        }
        if input.turret_left {
            self.yaw_barrel(1.0, dt);
        }
        if input.turret_right {
            self.yaw_barrel(-1.0, dt);
        }
        if input.barrel_up {
            self.pitch_barrel(1.0, dt);
        }
        if input.barrel_down {
            self.pitch_barrel(-1.0, dt);
        }
        input.fire && self.fire()
    }
}
