//! Render passes. The whole scene is one fullscreen raymarch pass.

/// Fullscreen scene pass and its uniform bag.
pub mod scene_pass;

pub use scene_pass::{ScenePass, SceneUniform};
