//! wgpu renderers for `scene` draw lists.
//!
//! Geometry arrives in logical pixels (top-left origin, +Y down); each renderer
//! owns its pipelines and buffers and converts to NDC in its vertex shader.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
