//! CPU tessellation of canvas paths into indexed triangle lists.

use crate::coords::Vec2;

/// Indexed triangles produced by the tessellators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tessellation {
    pub vertices: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl Tessellation {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[a, b, c]);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    fn push_quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&[a, b, c, d]);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Appends a fan triangulation of `points` to `out`.
///
/// Exact for convex polygons, which is all the canvas is asked to fill
/// (triangles and rectangles). Fewer than three points adds nothing.
pub fn fill_fan(points: &[Vec2], out: &mut Tessellation) {
    if points.len() < 3 {
        return;
    }
    let base = out.vertices.len() as u32;
    out.vertices.extend_from_slice(points);
    for i in 1..(points.len() as u32 - 1) {
        out.indices.extend_from_slice(&[base, base + i, base + i + 1]);
    }
}

/// Appends a stroke of `points` with the given `width` to `out`.
///
/// Each segment becomes a quad of the full width centred on the segment; interior
/// vertices (and the wrap-around vertex of a closed run) get bevel joins.
/// Zero-length segments are skipped.
pub fn stroke_polyline(points: &[Vec2], closed: bool, width: f32, out: &mut Tessellation) {
    if points.len() < 2 || !(width > 0.0) || !width.is_finite() {
        return;
    }
    let half = width * 0.5;

    let mut segments: Vec<(Vec2, Vec2)> = points.windows(2).map(|w| (w[0], w[1])).collect();
    if closed && points.len() > 2 {
        segments.push((points[points.len() - 1], points[0]));
    }

    // Offset normal per segment; `None` for degenerate segments.
    let normals: Vec<Option<Vec2>> = segments
        .iter()
        .map(|&(a, b)| {
            let d = b - a;
            Vec2::new(-d.y, d.x).try_normalized().map(|n| n * half)
        })
        .collect();

    for (&(a, b), n) in segments.iter().zip(&normals) {
        let Some(n) = *n else { continue };
        out.push_quad(a + n, b + n, b - n, a - n);
    }

    // Bevel joins between consecutive non-degenerate segments.
    let joins = if closed && points.len() > 2 { segments.len() } else { segments.len() - 1 };
    for i in 0..joins {
        let j = (i + 1) % segments.len();
        let (Some(n0), Some(n1)) = (normals[i], normals[j]) else { continue };
        let p = segments[i].1;
        out.push_triangle(p, p + n0, p + n1);
        out.push_triangle(p, p - n0, p - n1);
    }
}
