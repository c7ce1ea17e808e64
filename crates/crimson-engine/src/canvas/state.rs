use crate::coords::Vec2;
use crate::paint::{Color, CompositeMode};

/// The save/restore-able part of a canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasState {
    pub fill_style: Color,
    pub stroke_style: Color,
    pub line_width: f32,
    pub composite_mode: CompositeMode,
    /// Accumulated `translate` offset.
    pub translation: Vec2,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            fill_style: Color::black(),
            stroke_style: Color::black(),
            line_width: 1.0,
            composite_mode: CompositeMode::SourceOver,
            translation: Vec2::zero(),
        }
    }
}

impl CanvasState {
    /// Maps a user-space point to device space.
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        p + self.translation
    }
}

/// Current state plus the save stack.
///
/// Shared by every `Canvas2d` implementation so save/restore behave the same.
#[derive(Debug, Default, Clone)]
pub struct StateStack {
    current: CanvasState,
    saved: Vec<CanvasState>,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> &CanvasState {
        &self.current
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut CanvasState {
        &mut self.current
    }

    /// Number of outstanding `save` calls.
    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => self.current = state,
            None => log::trace!("canvas restore without matching save; ignored"),
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.current.translation += Vec2::new(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_returns_to_saved_state() {
        let mut s = StateStack::new();
        s.save();
        s.translate(5.0, 0.0);
        s.current_mut().composite_mode = CompositeMode::Lighter;
        s.restore();
        assert_eq!(*s.current(), CanvasState::default());
        assert_eq!(s.depth(), 0);
    }

    #[test]
    fn unbalanced_restore_is_noop() {
        let mut s = StateStack::new();
        s.translate(1.0, 2.0);
        s.restore();
        assert_eq!(s.current().translation, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn translations_accumulate() {
        let mut s = StateStack::new();
        s.translate(1.0, 2.0);
        s.translate(3.0, -1.0);
        assert_eq!(s.current().apply(Vec2::zero()), Vec2::new(4.0, 1.0));
    }
}
