use crimson_engine::coords::Vec2;

use crate::config::LogoConfig;
use crate::error::LogoError;

use super::{Polyline, TriangleMesh};

/// Samples `config.segment_count` points on the elliptical arc that forms the "C".
///
/// The ellipse is centred in the `width x height` box with radii
/// `width * horizontal_size / 2` and `height * vertical_size / 2`. Angles run from
/// `angle_start` to `angle_stop` inclusive, measured counter-clockwise on screen
/// (Y grows downwards, hence the subtracted sine). The skipped wedge around angle 0
/// is the opening of the "C".
pub fn build_centerline(config: &LogoConfig, width: f32, height: f32) -> Result<Polyline, LogoError> {
    config.validate()?;

    let center = Vec2::new(width / 2.0, height / 2.0);
    let rx = width * config.horizontal_size / 2.0;
    let ry = height * config.vertical_size / 2.0;

    let count = config.segment_count;
    let step = (config.angle_stop - config.angle_start) / (count - 1) as f32;

    let mut line = Polyline::with_capacity(count);
    for i in 0..count {
        let angle = config.angle_start + i as f32 * step;
        line.append(center.x + rx * angle.cos(), center.y - ry * angle.sin())?;
    }

    log::trace!("centerline: {count} points for {width}x{height}");
    Ok(line)
}

/// Offsets every centerline point by `half_width` on both sides of its tangent.
///
/// Output interleaves `p + t*h`, `p - t*h` per source point, so it has twice as
/// many points as the input.
pub fn build_ribbon_outline(centerline: &Polyline, half_width: f32) -> Result<Polyline, LogoError> {
    let mut outline = Polyline::with_capacity(centerline.len() * 2);
    for (i, p) in centerline.iter().enumerate() {
        let offset = centerline.tangent(i)? * half_width;
        let outer = p + offset;
        let inner = p - offset;
        outline.append(outer.x, outer.y)?;
        outline.append(inner.x, inner.y)?;
    }

    log::trace!("ribbon outline: {} points", outline.len());
    Ok(outline)
}

/// Sliding-window triangle strip over the outline: `(i, i+1, i+2)` for every `i`.
///
/// Consecutive triangles have opposite winding. The fill is flat and culling is
/// off, so this is left as is.
pub fn triangulate_ribbon(outline: &Polyline) -> TriangleMesh {
    let pts = outline.points();
    let mut mesh = TriangleMesh::with_capacity(pts.len().saturating_sub(2));
    for w in pts.windows(3) {
        mesh.append(w[0], w[1], w[2]);
    }

    log::trace!("ribbon mesh: {} triangles", mesh.len());
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    const EPS: f32 = 1e-3;

    fn angle_from(center: Vec2, p: Vec2, rx: f32, ry: f32) -> f32 {
        // Undo the ellipse scaling and the screen-space Y flip.
        let a = (-(p.y - center.y) / ry).atan2((p.x - center.x) / rx);
        a.rem_euclid(2.0 * PI)
    }

    #[test]
    fn centerline_200_square() {
        let line = build_centerline(&LogoConfig::default(), 200.0, 200.0).unwrap();
        assert_eq!(line.len(), 9);

        let center = Vec2::new(100.0, 100.0);
        let (rx, ry) = (55.0, 65.0);
        let first = line.at(0).unwrap();
        let last = line.at(8).unwrap();

        assert!((angle_from(center, first, rx, ry) - PI / 4.0).abs() < EPS);
        assert!((angle_from(center, last, rx, ry) - (2.0 * PI - PI / 4.0)).abs() < EPS);

        // Every point lies on the ellipse.
        for p in line.iter() {
            let u = (p.x - center.x) / rx;
            let v = (p.y - center.y) / ry;
            assert!((u * u + v * v - 1.0).abs() < EPS);
        }

        // First point is upper-right, last is lower-right (opening faces +X).
        assert!(first.x > center.x && first.y < center.y);
        assert!(last.x > center.x && last.y > center.y);
    }

    #[test]
    fn centerline_angles_increase_evenly() {
        let line = build_centerline(&LogoConfig::default(), 300.0, 120.0).unwrap();
        let center = Vec2::new(150.0, 60.0);
        let (rx, ry) = (300.0 * 0.55 / 2.0, 120.0 * 0.65 / 2.0);
        let angles: Vec<f32> = line.iter().map(|p| angle_from(center, p, rx, ry)).collect();
        let step = (1.5 * PI) / 8.0;
        for w in angles.windows(2) {
            assert!((w[1] - w[0] - step).abs() < EPS);
        }
    }

    #[test]
    fn centerline_rejects_bad_config() {
        let cfg = LogoConfig::default().with_segment_count(1);
        assert!(build_centerline(&cfg, 100.0, 100.0).is_err());
    }

    #[test]
    fn outline_needs_two_points() {
        let mut line = Polyline::new();
        line.push(Vec2::zero());
        assert_eq!(
            build_ribbon_outline(&line, 3.0),
            Err(LogoError::InvalidGeometry { points: 1 })
        );
    }

    #[test]
    fn triangulation_of_tiny_outline_is_empty() {
        let line: Polyline = [Vec2::zero(), Vec2::new(1.0, 0.0)].into_iter().collect();
        assert!(triangulate_ribbon(&line).is_empty());
    }

    #[test]
    fn triangulation_alternates_winding() {
        let line = build_centerline(&LogoConfig::default(), 200.0, 200.0).unwrap();
        let outline = build_ribbon_outline(&line, 12.0).unwrap();
        let mesh = triangulate_ribbon(&outline);
        let cross = |t: &crate::geometry::Triangle| {
            let (u, v) = (t.b - t.a, t.c - t.a);
            u.x * v.y - u.y * v.x
        };
        let signs: Vec<bool> = mesh.iter().map(|t| cross(t) > 0.0).collect();
        for w in signs.windows(2) {
            assert_ne!(w[0], w[1]);
        }
    }

    proptest! {
        #[test]
        fn outline_is_symmetric_about_centerline(
            w in 20.0f32..2000.0,
            h in 20.0f32..2000.0,
            half in 0.5f32..50.0,
        ) {
            let line = build_centerline(&LogoConfig::default(), w, h).unwrap();
            let outline = build_ribbon_outline(&line, half).unwrap();
            prop_assert_eq!(outline.len(), 2 * line.len());

            for i in 0..line.len() {
                let p = line.at(i).unwrap();
                let outer = outline.at(2 * i).unwrap();
                let inner = outline.at(2 * i + 1).unwrap();
                let tol = 1e-5 * w.max(h) + 1e-3;
                prop_assert!(((outer + inner) * 0.5 - p).length() < tol);
                prop_assert!((outer.distance(p) - half).abs() < tol);
                prop_assert!((inner.distance(p) - half).abs() < tol);
                // Offset is along the tangent direction.
                let t = line.tangent(i).unwrap();
                prop_assert!(((outer - p) - t * half).length() < tol);
            }
        }

        #[test]
        fn strip_has_m_minus_two_consecutive_triangles(m in 3usize..64) {
            let outline: Polyline = (0..m).map(|i| Vec2::new(i as f32, (i % 2) as f32)).collect();
            let mesh = triangulate_ribbon(&outline);
            prop_assert_eq!(mesh.len(), m - 2);
            for (i, t) in mesh.iter().enumerate() {
                prop_assert_eq!(t.a, outline.at(i).unwrap());
                prop_assert_eq!(t.b, outline.at(i + 1).unwrap());
                prop_assert_eq!(t.c, outline.at(i + 2).unwrap());
            }
        }
    }
}
