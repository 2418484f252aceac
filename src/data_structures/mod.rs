//! Engine data structures.
//!
//! - `drawable` bundles a mesh, its material and its transform buffer
//! - `model` holds GPU meshes and materials
//! - `texture` wraps GPU textures
//! - `transform` composes model matrices and their per-instance GPU form

pub mod drawable;
pub mod model;
pub mod texture;
pub mod transform;
