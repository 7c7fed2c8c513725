use crate::geometry::{Triangle, Vector2};

/// Connectivity for a single triangle.
///
/// The fields here are only indices into a shared vertex vector. Meshes
/// produced by refinement reuse almost every vertex across several
/// triangles, so storing 3 indices per triangle is much cheaper than storing
/// 3 coordinate pairs, and it keeps "same vertex" an exact index comparison
/// instead of a floating-point one.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Face {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

/// An indexed triangle mesh.
///
/// `vertices` keeps its insertion order; `faces` may shrink when triangles
/// are filtered out, leaving unreferenced vertices in place.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    pub vertices: Vec<Vector2>,
    pub faces: Vec<Face>,
}

impl TriangleMesh {
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Resolves one face to its corner coordinates.
    pub fn triangle(&self, face: &Face) -> Triangle {
        Triangle {
            a: self.vertices[face.p0 as usize],
            b: self.vertices[face.p1 as usize],
            c: self.vertices[face.p2 as usize],
        }
    }

    /// Iterates the mesh's triangles in face order.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|face| self.triangle(face))
    }
}
