use crimson_engine::coords::Vec2;

/// Three vertices, stored by value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    #[inline]
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn centroid(&self) -> Vec2 {
        (self.a + self.b + self.c) / 3.0
    }

    /// Moves each vertex `pixels` towards the centroid along its own
    /// vertex-to-centroid ray, in place.
    ///
    /// This is a per-vertex offset, not a uniform edge inset: how far each edge
    /// moves depends on the triangle's shape.
    pub fn shrink_by(&mut self, pixels: f32) {
        let center = self.centroid();
        for v in [&mut self.a, &mut self.b, &mut self.c] {
            *v += (center - *v).normalized() * pixels;
        }
    }

    /// Pure form of [`shrink_by`](Self::shrink_by).
    #[inline]
    pub fn shrunk(mut self, pixels: f32) -> Self {
        self.shrink_by(pixels);
        self
    }
}
