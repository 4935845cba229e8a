//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (scene shader parameters, camera constants,
//! keybindings) are consolidated here. Options serialize to/from TOML for
//! presets passed on the command line.

mod camera;
mod keybindings;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::StriderError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Shader parameters passed straight through to the uniform bag.
    pub scene: SceneOptions,
    /// Camera placement and control parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StriderError::Io`] when the file cannot be read and
    /// [`StriderError::OptionsParse`] when it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, StriderError> {
        let content = std::fs::read_to_string(path).map_err(StriderError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| StriderError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`StriderError::OptionsParse`] on serialization failure and
    /// [`StriderError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), StriderError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| StriderError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(StriderError::Io)?;
        }
        std::fs::write(path, content).map_err(StriderError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[scene]
walk_speed = 2.5
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.scene.walk_speed, 2.5);
        // Everything else should be default
        assert_eq!(opts.scene.arm_swing, 0.75);
        assert_eq!(opts.camera.distance, 12.0);
        assert_eq!(opts.camera.shake_decay, 0.95);
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::ShakeBurst)
        );
        assert_eq!(
            opts.keybindings.lookup("ArrowLeft"),
            Some(KeyAction::OrbitLeft)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn distinct_shake_trigger_intensities() {
        // The spacebar burst is deliberately stronger than the pointer hold.
        let camera = CameraOptions::default();
        assert_eq!(camera.shake_burst, 1.2);
        assert_eq!(camera.shake_hold, 0.5);
        assert!(camera.shake_burst > camera.shake_hold);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        // UI-exposed sections should be present
        assert!(props.contains_key("scene"));
        assert!(props.contains_key("camera"));

        // Skipped sections should be absent
        assert!(!props.contains_key("keybindings"));

        // Camera should have exposed fields but not skipped ones
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fov").is_some());
        assert!(camera.get("shake_burst").is_some());
        assert!(camera.get("shake_decay").is_none());
        assert!(camera.get("offset").is_none());
    }
}
