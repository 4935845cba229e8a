//! Camera state: the orbit rig and its decaying shake.

/// Orbit angle, distance, offset, and field of view.
pub mod rig;
/// Per-frame random perturbation with geometric decay.
pub mod shake;

pub use rig::{CameraRig, DISTANCE_RANGE, FOV_RANGE};
pub use shake::{ShakePhase, ShakeState, STOP_THRESHOLD};
