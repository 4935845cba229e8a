//! Input dispatch for the engine: raw events and key-bound actions.

use super::{RobotRenderEngine, SceneCommand};
use crate::input::{InputEvent, KeyAction, MouseButton};

impl RobotRenderEngine {
    /// Process a platform-agnostic input event.
    ///
    /// The pointer position and primary-button state feed the mouse uniform
    /// (position flipped to a bottom-left origin, as the shader expects).
    /// The secondary button is the hold-to-shake trigger: press starts a
    /// sustained shake at the configured hold intensity, release — or the
    /// cursor leaving the window mid-hold — stops it. The spacebar burst is
    /// not affected by pointer state; it terminates through decay alone.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let (_, height) = self.context.size();
                self.uniforms.mouse[0] = x;
                self.uniforms.mouse[1] = height as f32 - y;
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => {
                self.uniforms.mouse[2] = if pressed { 1.0 } else { 0.0 };
            }
            InputEvent::MouseButton {
                button: MouseButton::Right,
                pressed,
            } => {
                if pressed {
                    self.shake_held = true;
                    let intensity = self.options.camera.shake_hold;
                    self.execute(SceneCommand::StartShake { intensity });
                } else {
                    self.shake_held = false;
                    self.execute(SceneCommand::StopShake);
                }
            }
            InputEvent::MouseButton {
                button: MouseButton::Middle,
                ..
            } => {}
            InputEvent::CursorLeft => {
                self.uniforms.mouse[2] = 0.0;
                if self.shake_held {
                    self.shake_held = false;
                    self.execute(SceneCommand::StopShake);
                }
            }
        }
    }
}

impl KeyAction {
    /// Execute this action on the given engine.
    pub fn execute(self, engine: &mut RobotRenderEngine) {
        let camera = &engine.options().camera;
        let orbit_step = camera.orbit_step_deg;
        let fov_step = camera.fov_step_deg;
        let burst = camera.shake_burst;
        let perspective = engine.options().scene.perspective;

        let command = match self {
            Self::OrbitLeft => SceneCommand::NudgeOrbit {
                delta_degrees: -orbit_step,
            },
            Self::OrbitRight => SceneCommand::NudgeOrbit {
                delta_degrees: orbit_step,
            },
            Self::FovIncrease => SceneCommand::NudgeFov {
                delta_degrees: fov_step,
            },
            Self::FovDecrease => SceneCommand::NudgeFov {
                delta_degrees: -fov_step,
            },
            Self::ShakeBurst => SceneCommand::StartShake { intensity: burst },
            Self::ToggleProjection => SceneCommand::SetProjection {
                perspective: !perspective,
            },
            Self::ToggleHeadShape => SceneCommand::ToggleHeadShape,
            Self::ResetCamera => SceneCommand::ResetCamera,
        };
        engine.execute(command);
    }
}
