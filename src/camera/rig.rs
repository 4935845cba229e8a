//! Orbit camera state: angle, distance, offset, field of view, shake.
//!
//! The rig is plain data plus pure derivations — it knows nothing about the
//! GPU. The engine owns one instance, mutates it from command execution, and
//! reads a position out of it once per frame.

use glam::{Vec2, Vec3};
use rand::Rng;

use super::shake::ShakeState;
use crate::options::CameraOptions;

/// Orbit radius bounds for [`CameraRig::adjust_distance`].
pub const DISTANCE_RANGE: (f32, f32) = (3.0, 25.0);

/// Field-of-view bounds in degrees.
pub const FOV_RANGE: (f32, f32) = (20.0, 120.0);

/// Camera state for the orbiting scene camera.
///
/// The externally visible position is [`base_position`](Self::base_position)
/// while resting, or that position plus a decaying random perturbation while
/// shaking. The orbit angle is unbounded — sin/cos handle wraparound, so no
/// normalization is performed anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    /// Lateral/vertical pan applied to the orbit position.
    pub offset: Vec2,
    /// Orbit radius from the scene origin.
    pub distance: f32,
    /// Orbit angle in radians.
    pub orbit_angle: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Shake trigger state and decaying intensity.
    pub shake: ShakeState,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl CameraRig {
    /// Build a rig from configured camera parameters.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            offset: Vec2::new(options.offset[0], options.offset[1]),
            distance: options.distance,
            orbit_angle: 0.0,
            fov_degrees: options.fov.clamp(FOV_RANGE.0, FOV_RANGE.1),
            shake: ShakeState::new(options.shake_decay),
        }
    }

    /// Set the orbit angle directly, in radians.
    pub fn set_orbit_angle(&mut self, radians: f32) {
        self.orbit_angle = radians;
    }

    /// Set the orbit angle from degrees (slider-style input path).
    pub fn set_orbit_degrees(&mut self, degrees: f32) {
        self.orbit_angle = degrees.to_radians();
    }

    /// Nudge the orbit angle by a fixed increment in radians.
    pub fn nudge_orbit(&mut self, delta_radians: f32) {
        self.orbit_angle += delta_radians;
    }

    /// Reset the orbit angle to the front view.
    pub fn reset_orbit(&mut self) {
        self.orbit_angle = 0.0;
    }

    /// Adjust the orbit radius, clamped to [`DISTANCE_RANGE`].
    pub fn adjust_distance(&mut self, delta: f32) {
        self.distance = (self.distance + delta)
            .clamp(DISTANCE_RANGE.0, DISTANCE_RANGE.1);
    }

    /// Set the field of view in degrees, clamped to [`FOV_RANGE`].
    pub fn set_fov(&mut self, degrees: f32) {
        self.fov_degrees = degrees.clamp(FOV_RANGE.0, FOV_RANGE.1);
    }

    /// Adjust the field of view by a delta in degrees, clamped to
    /// [`FOV_RANGE`].
    pub fn adjust_fov(&mut self, delta_degrees: f32) {
        self.set_fov(self.fov_degrees + delta_degrees);
    }

    /// Activate shake at the given intensity.
    pub fn start_shake(&mut self, intensity: f32) {
        self.shake.start(intensity);
    }

    /// Deactivate shake and zero its intensity.
    pub fn stop_shake(&mut self) {
        self.shake.stop();
    }

    /// The deterministic orbit position.
    ///
    /// `x = sin(angle) * distance + offset.x`, `y = offset.y`,
    /// `z = cos(angle) * distance`. Pure — no side effects, stable across
    /// repeated calls.
    #[must_use]
    pub fn base_position(&self) -> Vec3 {
        Vec3::new(
            self.orbit_angle.sin() * self.distance + self.offset.x,
            self.offset.y,
            self.orbit_angle.cos() * self.distance,
        )
    }

    /// Advance shake by one frame.
    ///
    /// Returns the perturbed camera position while shake is live, `None`
    /// once it has decayed out or was released — the caller then uses
    /// [`base_position`](Self::base_position).
    pub fn tick_shake<R: Rng>(&mut self, rng: &mut R) -> Option<Vec3> {
        let offset = self.shake.sample_offset(rng)?;
        Some(self.base_position() + offset)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::camera::ShakePhase;

    const EPS: f32 = 1e-4;

    #[test]
    fn default_matches_original_scene() {
        let rig = CameraRig::default();
        assert_eq!(rig.offset, Vec2::new(0.0, 2.0));
        assert_eq!(rig.distance, 12.0);
        assert_eq!(rig.orbit_angle, 0.0);
        assert_eq!(rig.fov_degrees, 75.0);
        assert_eq!(rig.shake.phase(), ShakePhase::Resting);
    }

    #[test]
    fn front_view_position() {
        let rig = CameraRig::default();
        let pos = rig.base_position();
        assert!((pos - Vec3::new(0.0, 2.0, 12.0)).length() < EPS);
    }

    #[test]
    fn quarter_turn_position() {
        let mut rig = CameraRig::default();
        rig.set_orbit_angle(FRAC_PI_2);
        let pos = rig.base_position();
        assert!((pos - Vec3::new(12.0, 2.0, 0.0)).length() < EPS);
    }

    #[test]
    fn stays_on_orbit_circle() {
        let mut rig = CameraRig::default();
        // Sweep well past a full revolution, including negative angles.
        for i in -24..=48 {
            rig.set_orbit_angle(i as f32 * PI / 12.0);
            let pos = rig.base_position();
            let radial = (pos.x - rig.offset.x).hypot(pos.z);
            assert!(
                (radial - rig.distance).abs() < EPS,
                "angle {} left the orbit circle: {radial}",
                rig.orbit_angle
            );
        }
    }

    #[test]
    fn base_position_is_idempotent() {
        let rig = CameraRig::default();
        assert_eq!(rig.base_position(), rig.base_position());
    }

    #[test]
    fn degrees_path_converts() {
        let mut rig = CameraRig::default();
        rig.set_orbit_degrees(90.0);
        assert!((rig.orbit_angle - FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn distance_clamps_at_both_ends() {
        let mut rig = CameraRig::default();
        rig.adjust_distance(100.0);
        assert_eq!(rig.distance, 25.0);
        rig.adjust_distance(-100.0);
        assert_eq!(rig.distance, 3.0);
    }

    #[test]
    fn fov_clamps_at_both_ends() {
        let mut rig = CameraRig::default();
        rig.set_fov(118.0);
        rig.adjust_fov(2.0);
        assert_eq!(rig.fov_degrees, 120.0);
        // A further nudge must not overshoot the clamp.
        rig.adjust_fov(2.0);
        assert_eq!(rig.fov_degrees, 120.0);

        rig.set_fov(21.0);
        rig.adjust_fov(-2.0);
        assert_eq!(rig.fov_degrees, 20.0);
    }

    #[test]
    fn shake_perturbs_around_base() {
        let mut rig = CameraRig::default();
        rig.start_shake(1.2);

        let mut rng = StdRng::seed_from_u64(7);
        let perturbed = rig.tick_shake(&mut rng).unwrap();
        let base = rig.base_position();
        for axis in (perturbed - base).to_array() {
            assert!(axis.abs() <= 0.6);
        }
        assert!((rig.shake.intensity() - 1.14).abs() < 1e-6);
    }

    #[test]
    fn released_shake_falls_back_to_base() {
        let mut rig = CameraRig::default();
        rig.start_shake(0.5);
        rig.stop_shake();

        let mut rng = StdRng::seed_from_u64(7);
        assert!(rig.tick_shake(&mut rng).is_none());
        assert_eq!(rig.shake.phase(), ShakePhase::Resting);
    }
}
