use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Shader parameters copied verbatim into the uniform bag each frame.
pub struct SceneOptions {
    /// Walking animation speed multiplier.
    #[schemars(title = "Walk Speed", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub walk_speed: f32,
    /// Arm swing amplitude.
    #[schemars(title = "Arm Swing", range(min = 0.0, max = 1.5), extend("step" = 0.05))]
    pub arm_swing: f32,
    /// Key light intensity multiplier.
    #[schemars(title = "Light Intensity", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub light_intensity: f32,
    /// Surface roughness for the robot shell.
    #[schemars(title = "Roughness", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub roughness: f32,
    /// Metallic factor for the robot shell.
    #[schemars(title = "Metallic", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub metallic: f32,
    /// Round head instead of the default box head.
    #[schemars(title = "Sphere Head")]
    pub sphere_head: bool,
    /// Perspective projection (orthographic when false).
    #[schemars(title = "Perspective")]
    pub perspective: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            walk_speed: 1.5,
            arm_swing: 0.75,
            light_intensity: 1.0,
            roughness: 0.5,
            metallic: 0.2,
            sphere_head: false,
            perspective: true,
        }
    }
}
