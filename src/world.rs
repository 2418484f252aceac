//! Per-frame game rules.
//!
//! [`World::update`] runs the rules in a fixed order and reports what
//! happened as [`WorldEvent`]s so the render side can create or drop the
//! matching GPU meshes.

use crate::{
    collision::{overlaps, BoundedObject},
    config::SceneConfig,
    input::TankInput,
    tank::Tank,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    /// A projectile left the muzzle.
    Fired,
    /// The tank body drove into the target. The target is gone.
    TargetRammed,
    /// The projectile hit the target. Both are gone.
    TargetHit,
    /// The projectile flew past its maximum travel and was dropped.
    ProjectileExpired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub tank: Tank,
    /// `None` once destroyed. It never comes back.
    pub target: Option<BoundedObject>,
}

impl World {
    pub fn new(tank: Tank, target: BoundedObject) -> Self {
        Self {
            tank,
            target: Some(target),
        }
    }

    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(
            Tank::new(config.tank),
            BoundedObject::at(config.target_position, config.target_size),
        )
    }

    pub fn target_alive(&self) -> bool {
        self.target.is_some()
    }

    /// Run one frame: input, projectile advance, ramming, hit, expiry.
    pub fn update(&mut self, input: &TankInput, dt: f32) -> Vec<WorldEvent> {
        let mut events = Vec::new();

        if self.tank.apply_input(input, dt) {
            log::info!("fired from {:?}", self.tank.muzzle());
            events.push(WorldEvent::Fired);
        }

        self.tank.advance_projectile();

        let rammed = self
            .target
            .as_ref()
            .is_some_and(|target| overlaps(&self.tank.body, target));
        if rammed {
            log::info!("target rammed at {:?}", self.tank.position());
            self.target = None;
            events.push(WorldEvent::TargetRammed);
        }

        let hit = match (&self.target, &self.tank.projectile) {
            (Some(target), Some(projectile)) => overlaps(&projectile.body, target),
            _ => false,
        };
        if hit {
            self.target = None;
            if let Some(projectile) = self.tank.retire_projectile() {
                log::info!("target hit at {:?}", projectile.position());
            }
            events.push(WorldEvent::TargetHit);
        }

        if self.tank.projectile_expired() {
            log::info!("projectile expired");
            self.tank.retire_projectile();
            events.push(WorldEvent::ProjectileExpired);
        }

        events
    }
}
