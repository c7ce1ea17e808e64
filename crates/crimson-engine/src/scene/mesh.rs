use crate::coords::Vec2;
use crate::paint::{Color, CompositeMode};

use super::{DrawCmd, DrawList};

/// Indexed triangle list in logical pixels, filled with a single color.
///
/// `indices.len()` is always a multiple of 3 and every index is in range of
/// `vertices`; `DrawList::push_mesh` enforces both.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshCmd {
    pub vertices: Vec<Vec2>,
    pub indices: Vec<u32>,
    pub color: Color,
    pub blend: CompositeMode,
}

impl MeshCmd {
    #[inline]
    pub fn new(vertices: Vec<Vec2>, indices: Vec<u32>, color: Color, blend: CompositeMode) -> Self {
        Self { vertices, indices, color, blend }
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn is_well_formed(&self) -> bool {
        self.indices.len() % 3 == 0
            && self.indices.iter().all(|&i| (i as usize) < self.vertices.len())
    }
}

impl DrawList {
    /// Records an indexed mesh.
    ///
    /// Empty or malformed meshes are dropped with a debug message.
    pub fn push_mesh(&mut self, mesh: MeshCmd) {
        if mesh.indices.is_empty() {
            return;
        }
        if !mesh.is_well_formed() {
            log::debug!(
                "DrawList: dropping malformed mesh ({} vertices, {} indices)",
                mesh.vertices.len(),
                mesh.indices.len()
            );
            return;
        }
        self.push(DrawCmd::Mesh(mesh));
    }

    /// Records a non-indexed triangle list (`vertices.len()` a multiple of 3).
    pub fn push_triangles(&mut self, vertices: Vec<Vec2>, color: Color, blend: CompositeMode) {
        let indices = (0..vertices.len() as u32 - vertices.len() as u32 % 3).collect();
        self.push_mesh(MeshCmd::new(vertices, indices, color, blend));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Vec<Vec2> {
        vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]
    }

    #[test]
    fn push_triangles_indexes_sequentially() {
        let mut list = DrawList::new();
        list.push_triangles(tri(), Color::white(), CompositeMode::SourceOver);
        let DrawCmd::Mesh(mesh) = &list.items()[0];
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn push_triangles_ignores_trailing_vertices() {
        let mut list = DrawList::new();
        let mut v = tri();
        v.push(Vec2::new(5.0, 5.0));
        list.push_triangles(v, Color::white(), CompositeMode::SourceOver);
        assert_eq!(list.triangle_count(), 1);
    }

    #[test]
    fn malformed_mesh_is_dropped() {
        let mut list = DrawList::new();
        list.push_mesh(MeshCmd::new(tri(), vec![0, 1, 7], Color::black(), CompositeMode::Lighter));
        list.push_mesh(MeshCmd::new(tri(), vec![0, 1], Color::black(), CompositeMode::Lighter));
        list.push_mesh(MeshCmd::new(tri(), vec![], Color::black(), CompositeMode::Lighter));
        assert!(list.is_empty());
    }
}
