use super::MeshCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a payload type next to `mesh.rs`
/// - add a new variant here
/// - add a push helper on `DrawList`
/// - teach the renderers under `render::shapes::*` to consume it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Mesh(MeshCmd),
}
