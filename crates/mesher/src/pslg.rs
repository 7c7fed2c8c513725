use polymesh_mesh::{Hole, Polygon, Segment, Vector2};

/// Planar straight-line graph: the combined border and pillar vertices plus
/// every segment the triangulation must preserve as an edge.
///
/// The border occupies the index prefix; hole vertices follow in reading
/// order. That ordering fixes the final vertex indices and keeps output
/// deterministic, so it must not be changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Pslg {
    pub vertices: Vec<Vector2>,
    pub segments: Vec<Segment>,
    pub(crate) boundary_len: usize,
}

impl Pslg {
    /// The outer boundary ring the graph was assembled around.
    pub fn boundary(&self) -> Polygon {
        Polygon::new(self.vertices[..self.boundary_len].to_vec())
    }
}

/// Merges the border and holes into a single indexed graph.
///
/// The border contributes one cyclic segment per vertex. Each hole's
/// pre-built chain is appended with its indices shifted by the running
/// vertex count. Coincident points across polygons stay distinct.
pub fn assemble_pslg(border: &Polygon, holes: &[Hole]) -> Pslg {
    let mut vertices = border.points().to_vec();
    let n = vertices.len() as u32;
    let mut segments: Vec<Segment> = (0..n)
        .map(|i| Segment {
            a: i,
            b: (i + 1) % n,
        })
        .collect();

    let mut offset = n;
    for hole in holes {
        vertices.extend_from_slice(hole.outline.points());
        segments.extend(hole.segments.iter().map(|s| Segment {
            a: s.a + offset,
            b: s.b + offset,
        }));
        offset += hole.outline.len() as u32;
    }

    Pslg {
        vertices,
        segments,
        boundary_len: n as usize,
    }
}
