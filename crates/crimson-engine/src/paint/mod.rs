//! Paint model shared between the canvas and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - color construction from sRGB bytes and HSLA
//! - compositing modes
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod composite;

pub use color::Color;
pub use composite::CompositeMode;
