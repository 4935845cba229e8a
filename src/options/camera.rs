use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera placement and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fov: f32,
    /// Orbit radius from the scene origin.
    #[schemars(skip)]
    pub distance: f32,
    /// Lateral/vertical pan applied to the orbit position.
    #[schemars(skip)]
    pub offset: [f32; 2],
    /// Orbit step per arrow-key press, degrees.
    #[schemars(title = "Orbit Step", range(min = 1.0, max = 30.0), extend("step" = 1.0))]
    pub orbit_step_deg: f32,
    /// Field-of-view step per arrow-key press, degrees.
    #[schemars(title = "FOV Step", range(min = 1.0, max = 10.0), extend("step" = 1.0))]
    pub fov_step_deg: f32,
    /// Shake intensity for the spacebar burst trigger.
    #[schemars(title = "Shake Burst", range(min = 0.0, max = 3.0), extend("step" = 0.1))]
    pub shake_burst: f32,
    /// Shake intensity for the hold-to-shake pointer trigger.
    ///
    /// Deliberately lower than the burst — holding is sustained, the
    /// spacebar burst is a one-shot.
    #[schemars(title = "Shake Hold", range(min = 0.0, max = 3.0), extend("step" = 0.1))]
    pub shake_hold: f32,
    /// Multiplicative intensity decay applied every frame while shaking.
    #[schemars(skip)]
    pub shake_decay: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fov: 75.0,
            distance: 12.0,
            offset: [0.0, 2.0],
            orbit_step_deg: 5.0,
            fov_step_deg: 2.0,
            shake_burst: 1.2,
            shake_hold: 0.5,
            shake_decay: 0.95,
        }
    }
}
