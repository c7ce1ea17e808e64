use crate::coords::Vec2;

/// One connected run of points started by `move_to`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subpath {
    pub points: Vec<Vec2>,
    pub closed: bool,
}

/// Current path of a canvas, stored in device space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<Subpath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.subpaths.clear();
    }

    #[inline]
    pub fn subpaths(&self) -> &[Subpath] {
        &self.subpaths
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|s| s.points.is_empty())
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.subpaths.push(Subpath {
            points: vec![p],
            closed: false,
        });
    }

    /// Extends the current subpath. Without one, behaves like `move_to`.
    pub fn line_to(&mut self, p: Vec2) {
        match self.subpaths.last_mut() {
            Some(sub) if !sub.closed => sub.points.push(p),
            _ => self.move_to(p),
        }
    }

    /// Closes the current subpath; the next `line_to` starts a new one.
    pub fn close(&mut self) {
        if let Some(sub) = self.subpaths.last_mut() {
            sub.closed = true;
        }
    }
}
