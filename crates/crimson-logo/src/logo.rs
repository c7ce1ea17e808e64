//! Drawing the logo onto a [`Canvas2d`].

use crimson_engine::canvas::{Canvas2d, CompositeMode};
use crimson_engine::coords::{Rect, Viewport};
use crimson_engine::paint::Color;

use crate::config::{LogoConfig, ShimmerStyle};
use crate::error::LogoError;
use crate::geometry::{
    build_centerline, build_ribbon_outline, triangulate_ribbon, Polyline, Triangle, TriangleMesh,
};

/// Everything the logo is drawn from, for one canvas size.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoGeometry {
    pub centerline: Polyline,
    pub outline: Polyline,
    pub triangles: TriangleMesh,
    /// `min(width, height)`; every ratio in the config scales with it.
    pub base_size: f32,
}

/// Shimmer alpha for a triangle: `(sin(seed * scale) / 2 + 0.5) * max_alpha`.
///
/// The product is taken in `f64`; in `f32` it would lose most of its fractional
/// part for seeds past a handful and collapse the pattern.
pub fn shimmer_alpha(style: &ShimmerStyle, seed: f64) -> f32 {
    let random = (seed * style.seed_scale).sin() / 2.0 + 0.5;
    (random as f32) * style.max_alpha
}

/// Draws the crimson ribbon logo.
#[derive(Debug, Clone, Default)]
pub struct LogoRenderer {
    config: LogoConfig,
}

impl LogoRenderer {
    pub fn new(config: LogoConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LogoConfig {
        &self.config
    }

    /// Builds centerline, outline and triangles for a `width x height` canvas.
    pub fn geometry(&self, width: f32, height: f32) -> Result<LogoGeometry, LogoError> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(LogoError::InvalidSize { width, height });
        }
        let base_size = viewport.min_side();

        let centerline = build_centerline(&self.config, width, height)?;
        let outline = build_ribbon_outline(&centerline, base_size * self.config.stroke_width)?;
        let triangles = triangulate_ribbon(&outline);

        Ok(LogoGeometry {
            centerline,
            outline,
            triangles,
            base_size,
        })
    }

    /// Strokes `polyline` as one path using the canvas' current stroke style.
    pub fn draw_polyline(&self, canvas: &mut dyn Canvas2d, polyline: &Polyline) -> Result<(), LogoError> {
        if polyline.len() < 2 {
            return Err(LogoError::InvalidGeometry { points: polyline.len() });
        }

        canvas.begin_path();
        for (i, p) in polyline.iter().enumerate() {
            if i == 0 {
                canvas.move_to(p.x, p.y);
            } else {
                canvas.line_to(p.x, p.y);
            }
        }
        canvas.stroke();
        Ok(())
    }

    /// Fills `triangle` with the current fill style, then overlays the shimmer
    /// highlight for `seed`. Leaves the fill style set to the highlight color.
    pub fn draw_triangle(&self, canvas: &mut dyn Canvas2d, triangle: &Triangle, seed: usize) {
        canvas.begin_path();
        canvas.move_to(triangle.a.x, triangle.a.y);
        canvas.line_to(triangle.b.x, triangle.b.y);
        canvas.line_to(triangle.c.x, triangle.c.y);
        canvas.fill();

        canvas.set_fill_style(self.shimmer_color(seed));
        canvas.fill();
    }

    /// Highlight color for the triangle at index `seed`.
    pub fn shimmer_color(&self, seed: usize) -> Color {
        let s = &self.config.shimmer;
        Color::from_hsla(s.hue, s.saturation, s.lightness, shimmer_alpha(s, seed as f64))
    }

    /// Draws the whole logo into a `width x height` area.
    ///
    /// Canvas state is saved on entry and restored on every exit path, so repeated
    /// calls never accumulate translation or compositing changes.
    pub fn draw_logo(&self, canvas: &mut dyn Canvas2d, width: f32, height: f32) -> Result<(), LogoError> {
        canvas.save();
        let result = self.draw_layers(canvas, width, height);
        canvas.restore();

        if let Err(err) = &result {
            log::debug!("draw_logo({width}x{height}) failed: {err}");
        }
        result
    }

    fn draw_layers(&self, canvas: &mut dyn Canvas2d, width: f32, height: f32) -> Result<(), LogoError> {
        let cfg = &self.config;
        let geo = self.geometry(width, height)?;

        canvas.set_fill_style(cfg.background);
        canvas.fill_rect(Rect::new(0.0, 0.0, width, height));

        let padding = geo.base_size * cfg.ellipse_padding;
        canvas.set_fill_style(cfg.backdrop);
        canvas.fill_rect(Rect::new(0.0, 0.0, width, height).inset(padding));

        canvas.set_composite_mode(CompositeMode::Lighter);
        canvas.translate(cfg.ribbon_shift * width, 0.0);
        for (i, triangle) in geo.triangles.iter().enumerate() {
            canvas.set_fill_style(cfg.ribbon_color);
            self.draw_triangle(canvas, triangle, i);
        }

        canvas.set_composite_mode(CompositeMode::SourceOver);
        canvas.set_stroke_style(cfg.outline_color);
        canvas.set_line_width(cfg.outline_width * geo.base_size);
        self.draw_polyline(canvas, &geo.outline)?;

        log::debug!(
            "drew logo {width}x{height}: {} triangles, {} outline points",
            geo.triangles.len(),
            geo.outline.len()
        );
        Ok(())
    }
}
