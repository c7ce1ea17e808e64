//! Crimson engine crate.
//!
//! This crate owns the platform + GPU runtime pieces and the 2D drawing-surface
//! abstraction used by the logo layer.

pub mod device;
pub mod window;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod canvas;
pub mod scene;
pub mod render;
