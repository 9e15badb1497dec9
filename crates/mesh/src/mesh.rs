use glam::{DVec2, DVec3};

/// A mesh vertex: position, unit normal, and texture coordinate.
///
/// The normal is the zero vector where the surface is degenerate, such as
/// the tip of a cone.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub position: DVec3,
    pub normal: DVec3,
    pub uv: DVec2,
}

/// An indexed triangle mesh with per-vertex UV coordinates.
///
/// Plain data for a renderer to convert into its own buffers. Triangles index
/// into `vertices` and are wound counter-clockwise seen from the side their
/// vertex normals point to.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UvMesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<[u32; 3]>,
}

impl UvMesh {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Iterates over vertex positions.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = DVec3> + '_ {
        self.vertices.iter().map(|vertex| vertex.position)
    }

    /// Returns the unnormalized normal `(b - a) x (c - a)` of a triangle.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    #[must_use]
    pub fn face_normal(&self, [a, b, c]: [u32; 3]) -> DVec3 {
        let position = |index: u32| self.vertices[index as usize].position;
        let origin = position(a);
        (position(b) - origin).cross(position(c) - origin)
    }
}
