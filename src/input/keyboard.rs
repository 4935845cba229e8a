use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// orbit_left = "ArrowLeft"
/// shake_burst = "Space"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum KeyAction {
    OrbitLeft,
    OrbitRight,
    FovIncrease,
    FovDecrease,
    ShakeBurst,
    ToggleProjection,
    ToggleHeadShape,
    ResetCamera,
}
