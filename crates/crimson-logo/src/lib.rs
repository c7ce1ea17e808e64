//! Procedural "C" logo: a crimson ribbon swept along an elliptical arc, cut into
//! shimmering triangles and outlined.
//!
//! [`LogoRenderer`] draws onto any [`crimson_engine::canvas::Canvas2d`];
//! [`LogoViewer`] puts it in a window.

pub mod config;
pub mod error;
pub mod geometry;
pub mod logo;
pub mod viewer;

#[cfg(test)]
mod testing;

pub use config::{LogoConfig, ShimmerStyle};
pub use error::LogoError;
pub use logo::{shimmer_alpha, LogoGeometry, LogoRenderer};
pub use viewer::LogoViewer;
