//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, mouse
//! button, or programmatic call — is represented as a `SceneCommand`.
//! Consumers construct commands and pass them to
//! [`RobotRenderEngine::execute`](super::RobotRenderEngine::execute).

use crate::camera::CameraRig;
use crate::options::Options;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered — keyboard, mouse,
/// or API all look identical:
///
/// ```ignore
/// engine.execute(SceneCommand::NudgeOrbit { delta_degrees: 5.0 });
/// engine.execute(SceneCommand::StartShake { intensity: 1.2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Set the orbit angle from a degree value (slider-style input).
    SetOrbitDegrees {
        /// Absolute orbit angle in degrees.
        degrees: f32,
    },

    /// Nudge the orbit angle by a delta in degrees (arrow keys).
    NudgeOrbit {
        /// Signed orbit step in degrees.
        delta_degrees: f32,
    },

    /// Adjust the orbit radius, clamped to
    /// [`DISTANCE_RANGE`](crate::camera::DISTANCE_RANGE).
    AdjustDistance {
        /// Signed radius delta.
        delta: f32,
    },

    /// Set the field of view, clamped to
    /// [`FOV_RANGE`](crate::camera::FOV_RANGE).
    SetFov {
        /// Absolute field of view in degrees.
        degrees: f32,
    },

    /// Nudge the field of view by a delta in degrees (arrow keys).
    NudgeFov {
        /// Signed field-of-view step in degrees.
        delta_degrees: f32,
    },

    /// Reset orbit, field of view, and distance to their configured
    /// defaults and cancel any shake.
    ResetCamera,

    // ── Shake ───────────────────────────────────────────────────────
    /// Activate shake at the given intensity.
    StartShake {
        /// Initial shake intensity.
        intensity: f32,
    },

    /// Deactivate shake and zero its intensity.
    StopShake,

    // ── Scene parameters ────────────────────────────────────────────
    /// Switch between perspective and orthographic projection.
    ///
    /// Changing the projection resets the orbit angle to the front view,
    /// matching the original scene's mode toggle.
    SetProjection {
        /// `true` for perspective, `false` for orthographic.
        perspective: bool,
    },

    /// Swap between the box head and the sphere head.
    ToggleHeadShape,

    /// Set the walking animation speed multiplier.
    SetWalkSpeed {
        /// New walk speed.
        value: f32,
    },

    /// Set the arm swing amplitude.
    SetArmSwing {
        /// New arm swing.
        value: f32,
    },

    /// Set the key light intensity multiplier.
    SetLightIntensity {
        /// New light intensity.
        value: f32,
    },

    /// Set the robot shell roughness.
    SetRoughness {
        /// New roughness in `[0, 1]`.
        value: f32,
    },

    /// Set the robot shell metallic factor.
    SetMetallic {
        /// New metallic factor in `[0, 1]`.
        value: f32,
    },
}

impl SceneCommand {
    /// Apply this command to the camera rig and options.
    ///
    /// Kept free of GPU state so command semantics stay testable without a
    /// device.
    pub(crate) fn apply(self, camera: &mut CameraRig, options: &mut Options) {
        match self {
            Self::SetOrbitDegrees { degrees } => {
                camera.set_orbit_degrees(degrees);
            }
            Self::NudgeOrbit { delta_degrees } => {
                camera.nudge_orbit(delta_degrees.to_radians());
            }
            Self::AdjustDistance { delta } => camera.adjust_distance(delta),
            Self::SetFov { degrees } => camera.set_fov(degrees),
            Self::NudgeFov { delta_degrees } => {
                camera.adjust_fov(delta_degrees);
            }
            Self::ResetCamera => {
                camera.reset_orbit();
                camera.set_fov(options.camera.fov);
                camera.distance = options.camera.distance;
                camera.stop_shake();
            }
            Self::StartShake { intensity } => camera.start_shake(intensity),
            Self::StopShake => camera.stop_shake(),
            Self::SetProjection { perspective } => {
                if options.scene.perspective != perspective {
                    options.scene.perspective = perspective;
                    camera.reset_orbit();
                }
            }
            Self::ToggleHeadShape => {
                options.scene.sphere_head = !options.scene.sphere_head;
            }
            Self::SetWalkSpeed { value } => options.scene.walk_speed = value,
            Self::SetArmSwing { value } => options.scene.arm_swing = value,
            Self::SetLightIntensity { value } => {
                options.scene.light_intensity = value;
            }
            Self::SetRoughness { value } => options.scene.roughness = value,
            Self::SetMetallic { value } => options.scene.metallic = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::camera::ShakePhase;

    fn fixture() -> (CameraRig, Options) {
        let options = Options::default();
        (CameraRig::from_options(&options.camera), options)
    }

    #[test]
    fn orbit_slider_path_converts_degrees() {
        let (mut camera, mut options) = fixture();
        SceneCommand::SetOrbitDegrees { degrees: 90.0 }
            .apply(&mut camera, &mut options);
        assert!((camera.orbit_angle - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn fov_nudges_clamp() {
        let (mut camera, mut options) = fixture();
        SceneCommand::SetFov { degrees: 118.0 }
            .apply(&mut camera, &mut options);
        SceneCommand::NudgeFov { delta_degrees: 2.0 }
            .apply(&mut camera, &mut options);
        assert_eq!(camera.fov_degrees, 120.0);
        SceneCommand::NudgeFov { delta_degrees: 2.0 }
            .apply(&mut camera, &mut options);
        assert_eq!(camera.fov_degrees, 120.0);
    }

    #[test]
    fn projection_change_resets_orbit() {
        let (mut camera, mut options) = fixture();
        camera.set_orbit_degrees(45.0);
        SceneCommand::SetProjection { perspective: false }
            .apply(&mut camera, &mut options);
        assert!(!options.scene.perspective);
        assert_eq!(camera.orbit_angle, 0.0);
    }

    #[test]
    fn reselecting_projection_keeps_orbit() {
        let (mut camera, mut options) = fixture();
        camera.set_orbit_degrees(45.0);
        SceneCommand::SetProjection { perspective: true }
            .apply(&mut camera, &mut options);
        assert!(camera.orbit_angle != 0.0);
    }

    #[test]
    fn reset_camera_restores_defaults_and_cancels_shake() {
        let (mut camera, mut options) = fixture();
        camera.set_orbit_degrees(120.0);
        camera.set_fov(30.0);
        camera.adjust_distance(5.0);
        camera.start_shake(1.2);

        SceneCommand::ResetCamera.apply(&mut camera, &mut options);
        assert_eq!(camera.orbit_angle, 0.0);
        assert_eq!(camera.fov_degrees, 75.0);
        assert_eq!(camera.distance, 12.0);
        assert_eq!(camera.shake.phase(), ShakePhase::Resting);
    }

    #[test]
    fn head_shape_toggles() {
        let (mut camera, mut options) = fixture();
        assert!(!options.scene.sphere_head);
        SceneCommand::ToggleHeadShape.apply(&mut camera, &mut options);
        assert!(options.scene.sphere_head);
        SceneCommand::ToggleHeadShape.apply(&mut camera, &mut options);
        assert!(!options.scene.sphere_head);
    }
}
