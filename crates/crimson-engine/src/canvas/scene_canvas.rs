use crate::coords::{Rect, Vec2};
use crate::paint::{Color, CompositeMode};
use crate::scene::{DrawList, MeshCmd};

use super::tessellate::{fill_fan, stroke_polyline, Tessellation};
use super::{Canvas2d, CanvasState, Path, StateStack};

/// [`Canvas2d`] that tessellates every fill/stroke into a [`DrawList`].
///
/// Each `fill`, `stroke` or `fill_rect` call becomes at most one mesh command,
/// tagged with the compositing mode active at the time of the call.
pub struct SceneCanvas<'a> {
    draw_list: &'a mut DrawList,
    states: StateStack,
    path: Path,
}

impl<'a> SceneCanvas<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self {
            draw_list,
            states: StateStack::new(),
            path: Path::new(),
        }
    }

    /// Outstanding `save` calls; zero once every draw routine has cleaned up.
    pub fn save_depth(&self) -> usize {
        self.states.depth()
    }

    fn emit(&mut self, tess: Tessellation, color: Color, what: &str) {
        if tess.is_empty() {
            log::trace!("SceneCanvas: {what} produced no geometry");
            return;
        }
        if color.a <= 0.0 {
            return;
        }
        let blend = self.states.current().composite_mode;
        self.draw_list
            .push_mesh(MeshCmd::new(tess.vertices, tess.indices, color, blend));
    }

    fn device_point(&self, x: f32, y: f32) -> Option<Vec2> {
        let p = Vec2::new(x, y);
        if !p.is_finite() {
            log::debug!("SceneCanvas: ignoring non-finite point {p}");
            return None;
        }
        Some(self.states.current().apply(p))
    }
}

impl Canvas2d for SceneCanvas<'_> {
    fn state(&self) -> &CanvasState {
        self.states.current()
    }

    fn save(&mut self) {
        self.states.save();
    }

    fn restore(&mut self) {
        self.states.restore();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.states.translate(dx, dy);
    }

    fn set_fill_style(&mut self, color: Color) {
        self.states.current_mut().fill_style = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.states.current_mut().stroke_style = color;
    }

    fn set_line_width(&mut self, width: f32) {
        // Canvas ignores non-positive and non-finite widths.
        if width > 0.0 && width.is_finite() {
            self.states.current_mut().line_width = width;
        }
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.states.current_mut().composite_mode = mode;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        if let Some(p) = self.device_point(x, y) {
            self.path.move_to(p);
        }
    }

    fn line_to(&mut self, x: f32, y: f32) {
        if let Some(p) = self.device_point(x, y) {
            self.path.line_to(p);
        }
    }

    fn close_path(&mut self) {
        self.path.close();
    }

    fn fill(&mut self) {
        let mut tess = Tessellation::default();
        for sub in self.path.subpaths() {
            fill_fan(&sub.points, &mut tess);
        }
        let color = self.states.current().fill_style;
        self.emit(tess, color, "fill");
    }

    fn stroke(&mut self) {
        let width = self.states.current().line_width;
        let mut tess = Tessellation::default();
        for sub in self.path.subpaths() {
            stroke_polyline(&sub.points, sub.closed, width, &mut tess);
        }
        let color = self.states.current().stroke_style;
        self.emit(tess, color, "stroke");
    }

    fn fill_rect(&mut self, rect: Rect) {
        let rect = rect.normalized();
        if rect.is_empty() || !rect.is_finite() {
            return;
        }
        let state = *self.states.current();
        let corners = rect.corners().map(|c| state.apply(c));
        let mut tess = Tessellation::default();
        fill_fan(&corners, &mut tess);
        self.emit(tess, state.fill_style, "fill_rect");
    }
}
