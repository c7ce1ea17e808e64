//! Pure geometry for the logo: points along a path, triangles, and the builders
//! that turn an arc into a ribbon of triangles. Nothing here draws.

mod builders;
mod mesh;
mod polyline;
mod triangle;

pub use builders::{build_centerline, build_ribbon_outline, triangulate_ribbon};
pub use mesh::TriangleMesh;
pub use polyline::{perp, Polyline};
pub use triangle::Triangle;
