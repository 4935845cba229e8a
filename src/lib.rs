// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedurally shaded walking-robot scene built on wgpu.
//!
//! Strider renders a single fullscreen raymarch pass and exposes runtime
//! controls — keyboard actions, pointer input, TOML-configurable options —
//! that adjust shader uniform parameters and an orbit/shake camera state in
//! real time.
//!
//! # Key entry points
//!
//! - [`engine::RobotRenderEngine`] - the frame driver and uniform bag owner
//! - [`camera::CameraRig`] - orbit angle, distance, offset, FOV, shake
//! - [`options::Options`] - runtime configuration (scene, camera,
//!   keybindings)
//! - [`Viewer`] - standalone winit window (behind the `viewer` feature)
//!
//! # Architecture
//!
//! The engine owns a [`camera::CameraRig`] and a CPU-side uniform bag. Once
//! per redraw it advances the shake state (geometric per-frame decay),
//! derives the camera position, copies UI-driven scene parameters through
//! verbatim, and encodes one fullscreen-triangle pass whose fragment shader
//! raymarches the robot.

pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod util;

#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{CameraRig, ShakePhase};
pub use engine::{RobotRenderEngine, SceneCommand};
pub use error::StriderError;
pub use input::{InputEvent, KeyAction, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
