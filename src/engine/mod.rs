//! The rendering engine: owns the GPU context, the camera rig, and the
//! uniform bag, and advances the scene once per frame.

mod command;
mod input;

use web_time::Instant;

use crate::camera::{CameraRig, ShakePhase};
use crate::error::StriderError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::options::Options;
use crate::renderer::scene_pass::{ScenePass, SceneUniform};
use crate::util::frame_timing::FrameTiming;

pub use command::SceneCommand;

/// Target FPS limit. Presentation is Fifo-paced anyway; this only caps
/// displays with unusually high refresh rates.
const TARGET_FPS: u32 = 300;

/// The core rendering engine for the robot scene.
///
/// # Frame loop
///
/// Each frame, call [`update`](Self::update) to advance the camera/shake
/// state and refresh the uniform bag, then [`render`](Self::render) to draw
/// and present. Call [`resize`](Self::resize) when the window size changes.
/// Input is forwarded via [`handle_input`](Self::handle_input); discrete
/// operations go through [`execute`](Self::execute).
///
/// # Shake semantics
///
/// While shake is live the camera-position uniform carries a random
/// perturbation and the shake-intensity uniform carries the pre-decay
/// intensity; once intensity decays below the stop threshold (or the hold
/// trigger releases) both snap back to the resting values. Decay is
/// per-frame, not per-elapsed-time.
pub struct RobotRenderEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    _shader_composer: ShaderComposer,

    /// Fullscreen raymarch pass.
    scene_pass: ScenePass,
    /// Orbit camera state.
    pub camera: CameraRig,
    /// Runtime scene, camera, and keybinding options.
    options: Options,
    /// CPU-side uniform bag, uploaded once per frame.
    uniforms: SceneUniform,
    /// Engine start, the zero point of the time uniform.
    start_time: Instant,
    /// Per-frame timing and FPS tracking.
    frame_timing: FrameTiming,
    /// Whether the pointer hold-to-shake trigger is currently down.
    shake_held: bool,
}

impl RobotRenderEngine {
    /// Build the engine for the given window surface.
    ///
    /// # Errors
    ///
    /// Returns [`StriderError`] if GPU initialization or shader composition
    /// fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, StriderError> {
        let context = RenderContext::new(window, size).await?;
        let mut shader_composer = ShaderComposer::new()?;
        let scene_pass = ScenePass::new(&context, &mut shader_composer)?;

        let camera = CameraRig::from_options(&options.camera);
        let mut uniforms = SceneUniform::new();
        uniforms.resolution = [size.0 as f32, size.1 as f32, 1.0, 0.0];

        let mut engine = Self {
            context,
            _shader_composer: shader_composer,
            scene_pass,
            camera,
            options,
            uniforms,
            start_time: Instant::now(),
            frame_timing: FrameTiming::new(TARGET_FPS),
            shake_held: false,
        };
        engine.sync_scene_uniforms();
        Ok(engine)
    }

    /// Advance the camera/shake state and refresh the uniform bag.
    ///
    /// Invoked once per redraw, before [`render`](Self::render).
    pub fn update(&mut self) {
        // The shader consumes the intensity that produced this frame's
        // perturbation, so capture it before the decay step.
        let intensity = self.camera.shake.intensity();
        let position = match self.camera.tick_shake(&mut rand::rng()) {
            Some(shaken) => {
                self.uniforms.shake_intensity = intensity;
                shaken
            }
            None => {
                self.uniforms.shake_intensity = 0.0;
                self.camera.base_position()
            }
        };

        self.uniforms.camera_pos = position.to_array();
        self.uniforms.fov = self.camera.fov_degrees;
        self.uniforms.time = self.start_time.elapsed().as_secs_f32();
        self.sync_scene_uniforms();
    }

    /// Copy UI-driven scene parameters into the uniform bag — direct scalar
    /// copies, no derived logic.
    fn sync_scene_uniforms(&mut self) {
        let scene = &self.options.scene;
        self.uniforms.walk_speed = scene.walk_speed;
        self.uniforms.arm_swing = scene.arm_swing;
        self.uniforms.light_intensity = scene.light_intensity;
        self.uniforms.roughness = scene.roughness;
        self.uniforms.metallic = scene.metallic;
        self.uniforms.sphere_head =
            if scene.sphere_head { 1.0 } else { 0.0 };
        self.uniforms.perspective =
            if scene.perspective { 1.0 } else { 0.0 };
    }

    /// Execute one frame: upload uniforms, run the fullscreen pass, present.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain frame cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if !self.frame_timing.should_render() {
            return Ok(());
        }

        self.scene_pass.write(&self.context.queue, &self.uniforms);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();
        self.scene_pass.render(&mut encoder, &view);
        self.context.submit(encoder);
        frame.present();

        self.frame_timing.end_frame();
        Ok(())
    }

    /// Resize the GPU surface and the resolution uniform to match the new
    /// window size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.context.resize(width, height);
            self.uniforms.resolution =
                [width as f32, height as f32, 1.0, 0.0];
        }
    }

    /// Execute a discrete engine command.
    pub fn execute(&mut self, command: SceneCommand) {
        command.apply(&mut self.camera, &mut self.options);
    }

    /// Which state the per-frame camera update is in.
    #[must_use]
    pub fn shake_phase(&self) -> ShakePhase {
        self.camera.shake.phase()
    }

    /// Runtime options currently in effect.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the runtime options.
    ///
    /// The camera rig keeps its live state (orbit, FOV, shake); new camera
    /// defaults apply on the next [`SceneCommand::ResetCamera`].
    pub fn set_options(&mut self, mut options: Options) {
        options.keybindings.rebuild_reverse_map();
        self.options = options;
        self.sync_scene_uniforms();
    }

    /// Smoothed frames-per-second estimate.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.frame_timing.fps()
    }
}
