use crimson_engine::coords::Vec2;

use crate::error::LogoError;

/// Unit vector perpendicular to the segment `a -> b`, i.e. `(dy, -dx)` normalized.
///
/// Not guarded: coincident points produce NaN components.
#[inline]
pub fn perp(a: Vec2, b: Vec2) -> Vec2 {
    let d = b - a;
    Vec2::new(d.y, -d.x).normalized()
}

/// Ordered sequence of points. Order defines path direction and adjacency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Vec2>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Appends `(x, y)`, rejecting NaN or infinite coordinates.
    pub fn append(&mut self, x: f32, y: f32) -> Result<(), LogoError> {
        if !x.is_finite() {
            return Err(LogoError::TypeMismatch { argument: "x" });
        }
        if !y.is_finite() {
            return Err(LogoError::TypeMismatch { argument: "y" });
        }
        self.points.push(Vec2::new(x, y));
        Ok(())
    }

    /// Appends a point without validation.
    #[inline]
    pub fn push(&mut self, p: Vec2) {
        self.points.push(p);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn at(&self, i: usize) -> Option<Vec2> {
        self.points.get(i).copied()
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// Offset direction at point `i`: perpendicular to the path, unit length.
    ///
    /// Endpoints use their single adjacent segment; interior points average the
    /// perpendiculars of both neighbouring segments and renormalize, so the offset
    /// turns smoothly through each vertex.
    pub fn tangent(&self, i: usize) -> Result<Vec2, LogoError> {
        let n = self.points.len();
        if n < 2 {
            return Err(LogoError::InvalidGeometry { points: n });
        }
        if i >= n {
            return Err(LogoError::IndexOutOfRange { index: i, len: n });
        }

        let p = &self.points;
        let t = if i == 0 {
            perp(p[0], p[1])
        } else if i == n - 1 {
            perp(p[i - 1], p[i])
        } else {
            let t1 = perp(p[i - 1], p[i]);
            let t2 = perp(p[i], p[i + 1]);
            ((t1 + t2) * 0.5).normalized()
        };
        Ok(t)
    }
}

impl FromIterator<Vec2> for Polyline {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn append_rejects_non_finite_and_names_argument() {
        let mut p = Polyline::new();
        assert_eq!(
            p.append(f32::NAN, 1.0),
            Err(LogoError::TypeMismatch { argument: "x" })
        );
        assert_eq!(
            p.append(1.0, f32::INFINITY),
            Err(LogoError::TypeMismatch { argument: "y" })
        );
        assert!(p.is_empty());
        p.append(1.0, 2.0).unwrap();
        assert_eq!(p.at(0), Some(Vec2::new(1.0, 2.0)));
        assert_eq!(p.at(1), None);
    }

    #[test]
    fn perp_of_horizontal_segment() {
        // (dy, -dx) for a rightward segment points towards -Y.
        let t = perp(Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0));
        assert!((t.x - 0.0).abs() < EPS);
        assert!((t.y + 1.0).abs() < EPS);
    }

    #[test]
    fn endpoint_tangents_use_adjacent_segment() {
        let p: Polyline = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)]
            .into_iter()
            .collect();
        let first = p.tangent(0).unwrap();
        let last = p.tangent(2).unwrap();
        assert!((first - Vec2::new(0.0, -1.0)).length() < EPS);
        assert!((last - Vec2::new(1.0, 0.0)).length() < EPS);
    }

    #[test]
    fn interior_tangent_bisects_corner() {
        let p: Polyline = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)]
            .into_iter()
            .collect();
        let t = p.tangent(1).unwrap();
        let s = std::f32::consts::FRAC_1_SQRT_2;
        assert!((t - Vec2::new(s, -s)).length() < EPS);
    }

    #[test]
    fn tangent_errors() {
        let mut p = Polyline::new();
        p.push(Vec2::zero());
        assert_eq!(p.tangent(0), Err(LogoError::InvalidGeometry { points: 1 }));
        p.push(Vec2::new(1.0, 0.0));
        assert_eq!(p.tangent(2), Err(LogoError::IndexOutOfRange { index: 2, len: 2 }));
    }

    fn coord() -> impl Strategy<Value = f32> {
        -1000.0f32..1000.0
    }

    proptest! {
        #[test]
        fn perp_is_unit_and_orthogonal(ax in coord(), ay in coord(), bx in coord(), by in coord()) {
            let (a, b) = (Vec2::new(ax, ay), Vec2::new(bx, by));
            prop_assume!(a.distance(b) > 1e-2);
            let t = perp(a, b);
            prop_assert!((t.length() - 1.0).abs() < 1e-4);
            let d = (b - a).normalized();
            prop_assert!(t.dot(d).abs() < 1e-4);
        }

        #[test]
        fn tangents_are_unit_on_arcs(n in 3usize..32, rx in 1.0f32..500.0, ry in 1.0f32..500.0) {
            // Points on an open arc never double back, so interior averages are non-zero.
            let p: Polyline = (0..n)
                .map(|i| {
                    let a = 0.25 * std::f32::consts::PI + 1.5 * std::f32::consts::PI * i as f32 / (n - 1) as f32;
                    Vec2::new(rx * a.cos(), ry * a.sin())
                })
                .collect();
            for i in 0..n {
                let t = p.tangent(i).unwrap();
                prop_assert!((t.length() - 1.0).abs() < 1e-4);
            }
        }
    }
}
