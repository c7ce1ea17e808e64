//! 2D drawing-surface abstraction.
//!
//! [`Canvas2d`] is the capability interface the logo layer draws against:
//! path construction, fill, stroke, a translation transform, compositing mode
//! and save/restore. Geometry code never touches wgpu directly.
//!
//! Implementations:
//! - [`SceneCanvas`] tessellates into a [`DrawList`](crate::scene::DrawList)
//!   consumed by the GPU renderers.

mod path;
mod scene_canvas;
mod state;
mod tessellate;

pub use crate::paint::CompositeMode;
pub use path::{Path, Subpath};
pub use scene_canvas::SceneCanvas;
pub use state::{CanvasState, StateStack};
pub use tessellate::{fill_fan, stroke_polyline, Tessellation};

use crate::coords::Rect;
use crate::paint::Color;

/// Immediate-mode 2D drawing surface in logical pixels.
///
/// Semantics follow an HTML canvas context:
/// - the current path survives `fill`/`stroke`; only `begin_path` clears it
/// - `move_to`/`line_to` apply the current translation at call time
/// - `save`/`restore` cover styles, line width, compositing and translation
///   but not the current path
pub trait Canvas2d {
    /// Current drawing state.
    fn state(&self) -> &CanvasState;

    /// Pushes a copy of the current state.
    fn save(&mut self);
    /// Pops the last saved state. No-op when nothing was saved.
    fn restore(&mut self);

    /// Shifts the drawing origin.
    fn translate(&mut self, dx: f32, dy: f32);

    fn set_fill_style(&mut self, color: Color);
    fn set_stroke_style(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_composite_mode(&mut self, mode: CompositeMode);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn close_path(&mut self);

    /// Fills the current path with the fill style.
    fn fill(&mut self);
    /// Strokes the current path with the stroke style and line width.
    fn stroke(&mut self);

    /// Fills `rect` (translated) without touching the current path.
    fn fill_rect(&mut self, rect: Rect);
}
