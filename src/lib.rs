//! tank-ngin
//!
//! A small wgpu renderer for a drivable tank. Meshes are generated
//! procedurally (sphere, cylinder, cube), composed into an articulated tank
//! whose turret and barrel rotate about pivots, and checked against a target
//! with axis aligned bounding boxes.
//!
//! High-level modules
//! - `primitives`: procedural mesh generation, no GPU involved
//! - `tank`, `collision`, `world`: the articulated tank and the per-frame rules
//! - `camera`: fly camera, projection and their uniforms
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: transforms, GPU meshes, materials and textures
//! - `flow`: the event loop and the `GraphicsFlow` trait scenes implement
//! - `pipelines`: the lit shape and unlit cube pipelines
//! - `render`: render composition and pipeline batching
//! - `resources`: asset loading with solid colour fallbacks
//! - `scene`: the tank scene itself
//!

pub mod camera;
pub mod clock;
pub mod collision;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod input;
pub mod pipelines;
pub mod primitives;
pub mod render;
pub mod resources;
pub mod scene;
pub mod tank;
pub mod world;

// Re-exports commonly used types for convenience in downstream code.
pub use winit::event::DeviceEvent;
pub use winit::event::WindowEvent;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn run_web() -> Result<(), JsValue> {
    let config = config::SceneConfig::default();
    flow::run(config.clone(), vec![scene::TankScene::constructor(config)])
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))
}
