use std::f32::consts::PI;

use crimson_engine::paint::Color;

use crate::error::LogoError;

/// Translucent highlight laid over every ribbon triangle.
///
/// The alpha is derived from the triangle index through a sine hash, so the
/// shimmer pattern is identical on every draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShimmerStyle {
    /// Hue in turns.
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    /// Alpha at the peak of the sine hash.
    pub max_alpha: f32,
    /// Multiplier applied to the seed before taking the sine.
    pub seed_scale: f64,
}

impl Default for ShimmerStyle {
    fn default() -> Self {
        Self {
            hue: 0.15,
            saturation: 1.0,
            lightness: 0.5,
            max_alpha: 0.25,
            seed_scale: 1451331.814145,
        }
    }
}

/// Shape and color parameters of the logo.
///
/// Ratios are fractions of the canvas: `horizontal_size`/`vertical_size` of the
/// width/height, the rest of `min(width, height)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoConfig {
    /// Points sampled along the arc.
    pub segment_count: usize,
    /// Arc start angle in radians (counter-clockwise, 0 pointing right).
    pub angle_start: f32,
    /// Arc stop angle in radians.
    pub angle_stop: f32,
    pub horizontal_size: f32,
    pub vertical_size: f32,
    /// Backdrop inset on each side.
    pub ellipse_padding: f32,
    /// Ribbon half-width.
    pub stroke_width: f32,
    /// Outline stroke width.
    pub outline_width: f32,
    /// Horizontal shift of the ribbon triangles, as a fraction of the width.
    pub ribbon_shift: f32,

    pub background: Color,
    pub backdrop: Color,
    pub ribbon_color: Color,
    pub outline_color: Color,
    pub shimmer: ShimmerStyle,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            segment_count: 9,
            angle_start: PI / 4.0,
            angle_stop: PI * 2.0 - PI / 4.0,
            horizontal_size: 0.55,
            vertical_size: 0.65,
            ellipse_padding: 0.03,
            stroke_width: 0.06,
            outline_width: 0.006,
            ribbon_shift: 0.05,
            background: Color::white(),
            backdrop: Color::black(),
            ribbon_color: Color::crimson(),
            outline_color: Color::black(),
            shimmer: ShimmerStyle::default(),
        }
    }
}

impl LogoConfig {
    pub fn with_segment_count(mut self, count: usize) -> Self {
        self.segment_count = count;
        self
    }

    pub fn with_arc(mut self, start: f32, stop: f32) -> Self {
        self.angle_start = start;
        self.angle_stop = stop;
        self
    }

    pub fn with_size(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_size = horizontal;
        self.vertical_size = vertical;
        self
    }

    pub fn with_stroke_width(mut self, ratio: f32) -> Self {
        self.stroke_width = ratio;
        self
    }

    pub fn with_ribbon_color(mut self, color: Color) -> Self {
        self.ribbon_color = color;
        self
    }

    pub fn with_shimmer(mut self, shimmer: ShimmerStyle) -> Self {
        self.shimmer = shimmer;
        self
    }

    /// Checks the invariants the builders rely on.
    pub fn validate(&self) -> Result<(), LogoError> {
        if self.segment_count < 2 {
            return Err(LogoError::InvalidConfig(format!(
                "segment_count must be at least 2, got {}",
                self.segment_count
            )));
        }

        let ratios = [
            ("angle_start", self.angle_start),
            ("angle_stop", self.angle_stop),
            ("horizontal_size", self.horizontal_size),
            ("vertical_size", self.vertical_size),
            ("ellipse_padding", self.ellipse_padding),
            ("stroke_width", self.stroke_width),
            ("outline_width", self.outline_width),
            ("ribbon_shift", self.ribbon_shift),
        ];
        if let Some((name, value)) = ratios.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LogoError::InvalidConfig(format!("{name} is not finite ({value})")));
        }

        if self.angle_start == self.angle_stop {
            return Err(LogoError::InvalidConfig("arc has zero angular span".into()));
        }

        Ok(())
    }
}
