//! Geometrically decaying camera shake.
//!
//! Shake is a per-frame effect: each tick draws an independent uniform
//! perturbation per axis scaled by the current intensity, then multiplies
//! the intensity by the decay factor. Decay is per-call, not per-elapsed-
//! time, so frame rate affects perceived shake duration. This matches the
//! feel of the original effect and is kept deliberately.

use glam::Vec3;
use rand::Rng;

/// Intensity below which shake snaps back to the rest state.
///
/// Geometric decay never reaches zero on its own; this threshold is the
/// stopping criterion. Once crossed, shake deactivates even if a trigger
/// is still logically held.
pub const STOP_THRESHOLD: f32 = 0.01;

/// Default multiplicative decay applied to the intensity every frame.
pub const DEFAULT_DECAY: f32 = 0.95;

/// The two states of the per-frame camera update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShakePhase {
    /// Camera position is the pure orbit function of the rig state.
    Resting,
    /// Camera position carries a random perturbation that decays each frame.
    Shaking,
}

/// Shake trigger state and decaying intensity.
#[derive(Debug, Clone, PartialEq)]
pub struct ShakeState {
    active: bool,
    intensity: f32,
    decay: f32,
}

impl Default for ShakeState {
    fn default() -> Self {
        Self::new(DEFAULT_DECAY)
    }
}

impl ShakeState {
    /// Inactive shake with the given per-frame decay factor.
    ///
    /// `decay` is clamped into `(0, 1)`; values outside that range would
    /// either never decay or grow without bound.
    #[must_use]
    pub fn new(decay: f32) -> Self {
        Self {
            active: false,
            intensity: 0.0,
            decay: decay.clamp(f32::EPSILON, 1.0 - f32::EPSILON),
        }
    }

    /// Activate shake at the given intensity.
    ///
    /// Starting is idempotent in structure: a second trigger simply
    /// overwrites the intensity, it does not stack.
    pub fn start(&mut self, intensity: f32) {
        self.active = true;
        self.intensity = intensity.max(0.0);
    }

    /// Deactivate shake and zero the intensity.
    pub fn stop(&mut self) {
        self.active = false;
        self.intensity = 0.0;
    }

    /// Current intensity (0 when resting).
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Whether a trigger is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Which state the frame driver is in.
    #[must_use]
    pub fn phase(&self) -> ShakePhase {
        if self.active {
            ShakePhase::Shaking
        } else {
            ShakePhase::Resting
        }
    }

    /// Draw one frame's perturbation and advance the decay.
    ///
    /// Returns `Some(offset)` with each component in
    /// `[-0.5, 0.5] * intensity` while shake is live. Once the intensity
    /// falls to [`STOP_THRESHOLD`] or the trigger was released, the state
    /// snaps to rest and `None` is returned — the caller falls back to the
    /// unperturbed position.
    pub fn sample_offset<R: Rng>(&mut self, rng: &mut R) -> Option<Vec3> {
        if !self.active || self.intensity <= STOP_THRESHOLD {
            self.stop();
            return None;
        }

        let offset = Vec3::new(
            (rng.random::<f32>() - 0.5) * self.intensity,
            (rng.random::<f32>() - 0.5) * self.intensity,
            (rng.random::<f32>() - 0.5) * self.intensity,
        );
        self.intensity *= self.decay;
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn starts_resting() {
        let shake = ShakeState::default();
        assert_eq!(shake.phase(), ShakePhase::Resting);
        assert_eq!(shake.intensity(), 0.0);
    }

    #[test]
    fn stop_always_zeroes() {
        let mut shake = ShakeState::default();
        shake.start(1.2);
        shake.stop();
        assert!(!shake.is_active());
        assert_eq!(shake.intensity(), 0.0);
    }

    #[test]
    fn sample_bounds_and_decay() {
        let mut shake = ShakeState::default();
        shake.start(1.2);

        let offset = shake.sample_offset(&mut rng()).unwrap();
        for component in offset.to_array() {
            assert!(
                component.abs() <= 0.6,
                "perturbation {component} exceeds intensity/2"
            );
        }
        assert!((shake.intensity() - 1.14).abs() < 1e-6);
    }

    #[test]
    fn intensity_strictly_decreases_until_threshold() {
        let mut shake = ShakeState::default();
        shake.start(1.2);
        let mut rng = rng();

        let mut previous = shake.intensity();
        let mut ticks = 0;
        while shake.sample_offset(&mut rng).is_some() {
            assert!(shake.intensity() < previous);
            previous = shake.intensity();
            ticks += 1;
            assert!(ticks < 500, "shake failed to terminate");
        }

        // 1.2 * 0.95^n drops below 0.01 after ~94 frames.
        assert!(ticks >= 90);
        assert_eq!(shake.phase(), ShakePhase::Resting);
        assert_eq!(shake.intensity(), 0.0);
    }

    #[test]
    fn sample_while_resting_is_none() {
        let mut shake = ShakeState::default();
        assert!(shake.sample_offset(&mut rng()).is_none());
    }

    #[test]
    fn trigger_below_threshold_self_terminates() {
        let mut shake = ShakeState::default();
        shake.start(0.005);
        // Still logically "held", but under the stopping criterion.
        assert!(shake.sample_offset(&mut rng()).is_none());
        assert_eq!(shake.phase(), ShakePhase::Resting);
    }
}
