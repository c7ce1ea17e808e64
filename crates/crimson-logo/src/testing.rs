//! Test double for [`Canvas2d`] that records every call.

use crimson_engine::canvas::{Canvas2d, CanvasState, CompositeMode, StateStack};
use crimson_engine::coords::Rect;
use crimson_engine::paint::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCall {
    Save,
    Restore,
    Translate(f32, f32),
    SetFillStyle(Color),
    SetStrokeStyle(Color),
    SetLineWidth(f32),
    SetCompositeMode(CompositeMode),
    BeginPath,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    ClosePath,
    Fill,
    Stroke,
    FillRect(Rect),
}

/// Records calls in order and tracks state the way a real canvas would.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    states: StateStack,
    calls: Vec<CanvasCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[CanvasCall] {
        &self.calls
    }

    pub fn count(&self, pred: impl Fn(&CanvasCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn save_depth(&self) -> usize {
        self.states.depth()
    }
}

impl Canvas2d for RecordingCanvas {
    fn state(&self) -> &CanvasState {
        self.states.current()
    }

    fn save(&mut self) {
        self.states.save();
        self.calls.push(CanvasCall::Save);
    }

    fn restore(&mut self) {
        self.states.restore();
        self.calls.push(CanvasCall::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.states.translate(dx, dy);
        self.calls.push(CanvasCall::Translate(dx, dy));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.states.current_mut().fill_style = color;
        self.calls.push(CanvasCall::SetFillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.states.current_mut().stroke_style = color;
        self.calls.push(CanvasCall::SetStrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.states.current_mut().line_width = width;
        self.calls.push(CanvasCall::SetLineWidth(width));
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.states.current_mut().composite_mode = mode;
        self.calls.push(CanvasCall::SetCompositeMode(mode));
    }

    fn begin_path(&mut self) {
        self.calls.push(CanvasCall::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.calls.push(CanvasCall::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.calls.push(CanvasCall::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.calls.push(CanvasCall::ClosePath);
    }

    fn fill(&mut self) {
        self.calls.push(CanvasCall::Fill);
    }

    fn stroke(&mut self) {
        self.calls.push(CanvasCall::Stroke);
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.calls.push(CanvasCall::FillRect(rect));
    }
}
