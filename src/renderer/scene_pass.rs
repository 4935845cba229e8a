//! The single fullscreen pass that raymarches the robot scene.
//!
//! There is no vertex data — the pipeline draws one oversized triangle and
//! the fragment shader does all the work from the uniform bag.

use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::error::StriderError;

/// The complete uniform bag consumed by the scene shader.
///
/// Field order and padding mirror the WGSL `SceneUniform` struct exactly;
/// the total size stays a 16-byte multiple for uniform-buffer layout.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    /// Surface size in physical pixels (z carries the pixel ratio).
    pub resolution: [f32; 4],
    /// Pointer position in pixels (bottom-left origin) and primary-button
    /// state in z.
    pub mouse: [f32; 4],
    /// World-space camera position, already shaken when shake is live.
    pub camera_pos: [f32; 3],
    /// Elapsed seconds since engine start.
    pub time: f32,
    /// Walking animation speed multiplier.
    pub walk_speed: f32,
    /// Arm swing amplitude.
    pub arm_swing: f32,
    /// Current shake intensity (0 while resting).
    pub shake_intensity: f32,
    /// 1.0 for perspective projection, 0.0 for orthographic.
    pub perspective: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Key light intensity multiplier.
    pub light_intensity: f32,
    /// 1.0 for the round head, 0.0 for the box head.
    pub sphere_head: f32,
    /// Surface roughness for the robot shell.
    pub roughness: f32,
    /// Metallic factor for the robot shell.
    pub metallic: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 3],
}

impl Default for SceneUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneUniform {
    /// Uniform bag with the original scene defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolution: [1.0, 1.0, 1.0, 0.0],
            mouse: [0.5, 0.5, 0.0, 0.0],
            camera_pos: [0.0, 2.0, 12.0],
            time: 0.0,
            walk_speed: 1.5,
            arm_swing: 0.75,
            shake_intensity: 0.0,
            perspective: 1.0,
            fov: 75.0,
            light_intensity: 1.0,
            sphere_head: 0.0,
            roughness: 0.5,
            metallic: 0.2,
            _pad: [0.0; 3],
        }
    }
}

/// Fullscreen scene pipeline plus its uniform buffer and bind group.
pub struct ScenePass {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
}

impl ScenePass {
    /// Build the pipeline from the composed scene shader.
    ///
    /// # Errors
    ///
    /// Returns [`StriderError::Shader`] when the scene shader fails to
    /// compose.
    pub fn new(
        context: &RenderContext,
        shader_composer: &mut ShaderComposer,
    ) -> Result<Self, StriderError> {
        let uniform = SceneUniform::new();
        let uniform_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Scene Uniform Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let bind_group_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Scene Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Scene Bind Group"),
                    layout: &bind_group_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });

        let shader = shader_composer.compose(
            &context.device,
            "Robot Scene Shader",
            include_str!("../../assets/shaders/scene/robot.wgsl"),
            "robot.wgsl",
        )?;

        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&bind_group_layout],
                push_constant_ranges: &[],
            },
        );

        let pipeline = context.device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Scene Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.config.format,
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            },
        );

        Ok(Self {
            pipeline,
            bind_group,
            uniform_buffer,
        })
    }

    /// Upload the uniform bag for this frame.
    pub fn write(&self, queue: &wgpu::Queue, uniform: &SceneUniform) {
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[*uniform]),
        );
    }

    /// Encode the fullscreen pass into the swapchain view.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output_view: &wgpu::TextureView,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_gpu_aligned() {
        // Uniform-buffer structs must be sized in 16-byte blocks.
        assert_eq!(size_of::<SceneUniform>() % 16, 0);
    }

    #[test]
    fn defaults_match_original_scene() {
        let u = SceneUniform::new();
        assert_eq!(u.camera_pos, [0.0, 2.0, 12.0]);
        assert_eq!(u.walk_speed, 1.5);
        assert_eq!(u.arm_swing, 0.75);
        assert_eq!(u.fov, 75.0);
        assert_eq!(u.shake_intensity, 0.0);
        assert_eq!(u.perspective, 1.0);
    }
}
