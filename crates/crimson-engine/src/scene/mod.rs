//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - preserve paint order (insertion order is draw order)
//! - keep shape-specific payloads isolated per file

mod cmd;
mod list;
mod mesh;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use mesh::MeshCmd;
