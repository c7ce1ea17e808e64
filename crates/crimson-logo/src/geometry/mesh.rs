use crimson_engine::coords::Vec2;

use super::Triangle;

/// Ordered triangles; insertion order is draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    /// Builds a triangle from three points and appends it.
    #[inline]
    pub fn append(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        self.triangles.push(Triangle::new(a, b, c));
    }

    #[inline]
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline]
    pub fn at(&self, i: usize) -> Option<&Triangle> {
        self.triangles.get(i)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Triangle> + '_ {
        self.triangles.iter()
    }

    /// Shrinks every triangle in order; see [`Triangle::shrink_by`].
    pub fn shrink_by(&mut self, pixels: f32) {
        for t in &mut self.triangles {
            t.shrink_by(pixels);
        }
    }
}
