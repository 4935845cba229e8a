//! GPU resource management: device/surface context and shader composition.

/// wgpu device, queue, surface, and configuration.
pub mod render_context;
/// WGSL composition with `#import` support.
pub mod shader_composer;

pub use render_context::{RenderContext, RenderContextError};
pub use shader_composer::ShaderComposer;
