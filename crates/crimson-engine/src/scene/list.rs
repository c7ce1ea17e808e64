use super::DrawCmd;

/// Recorded draw stream for a frame.
///
/// Commands are painted in insertion order, so later commands land on top.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps the allocation for reuse across frames
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a draw command on top of everything recorded so far.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// Total number of triangles across all commands.
    pub fn triangle_count(&self) -> usize {
        self.items
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Mesh(mesh) => mesh.triangle_count(),
            })
            .sum()
    }
}
