use polymesh_mesh::{Face, TriangleMesh, Vector2};
use spade::{ConstrainedDelaunayTriangulation, Point2, RefinementParameters, Triangulation};

use crate::error::{MeshError, Result};
use crate::pslg::Pslg;

fn degenerate(reason: String) -> MeshError {
    MeshError::DegeneratePslg { reason }
}

/// Runs a constrained Delaunay triangulation over an assembled graph.
///
/// Every PSLG segment is forced into the output as a constraint edge, and
/// refinement keeps splitting triangles until none exceeds
/// `max_triangle_area`. Steiner vertices introduced by refinement are
/// appended after the input vertices. The triangulation covers the convex
/// hull of the input, so faces whose centroid falls outside the outer
/// boundary ring are dropped before the mesh is returned.
pub fn triangulate(pslg: &Pslg, max_triangle_area: f64) -> Result<TriangleMesh> {
    if pslg.vertices.len() < 3 {
        return Err(degenerate(format!(
            "{} vertices, at least 3 required",
            pslg.vertices.len()
        )));
    }
    if !(max_triangle_area > 0.0) {
        return Err(degenerate(format!(
            "max triangle area must be positive, got {max_triangle_area}"
        )));
    }
    for segment in &pslg.segments {
        if segment.a as usize >= pslg.vertices.len() || segment.b as usize >= pslg.vertices.len() {
            return Err(degenerate(format!(
                "segment ({}, {}) references a vertex out of range",
                segment.a, segment.b
            )));
        }
    }

    let mut cdt = ConstrainedDelaunayTriangulation::<Point2<f64>>::new();

    let mut handles = Vec::with_capacity(pslg.vertices.len());
    for vertex in &pslg.vertices {
        let handle = cdt
            .insert(Point2::new(vertex.x, vertex.y))
            .map_err(|e| degenerate(format!("vertex ({}, {}) rejected: {e}", vertex.x, vertex.y)))?;
        handles.push(handle);
    }

    for segment in &pslg.segments {
        let (from, to) = (handles[segment.a as usize], handles[segment.b as usize]);
        if from == to {
            // Coincident endpoints collapsed to one vertex on insertion.
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(degenerate(format!(
                "segment ({}, {}) crosses another boundary segment",
                segment.a, segment.b
            )));
        }
        cdt.add_constraint(from, to);
    }

    // Refinement stops once it has inserted its vertex budget, and the
    // default budget is far too small for fine area bounds. Size it to the
    // number of triangles the bound implies over the input's extent.
    let additional_vertices = steiner_budget(&pslg.vertices, max_triangle_area);
    cdt.refine(
        RefinementParameters::<f64>::new()
            .with_max_allowed_area(max_triangle_area)
            .with_max_additional_vertices(additional_vertices),
    );

    let vertices: Vec<Vector2> = cdt
        .vertices()
        .map(|v| {
            let position = v.position();
            Vector2::new(position.x, position.y)
        })
        .collect();

    let boundary = pslg.boundary();
    let mut faces = Vec::new();
    for face in cdt.inner_faces() {
        let [v0, v1, v2] = face.vertices();
        let (p0, p1, p2) = (v0.position(), v1.position(), v2.position());
        let centroid = Vector2::new((p0.x + p1.x + p2.x) / 3.0, (p0.y + p1.y + p2.y) / 3.0);
        if !boundary.contains(centroid) {
            continue;
        }
        faces.push(Face {
            p0: v0.fix().index() as u32,
            p1: v1.fix().index() as u32,
            p2: v2.fix().index() as u32,
        });
    }

    Ok(TriangleMesh { vertices, faces })
}

/// Vertex budget for refinement: roughly one Steiner vertex per target
/// triangle over the bounding box, with headroom for uneven splits.
fn steiner_budget(vertices: &[Vector2], max_triangle_area: f64) -> usize {
    let mut min = vertices[0];
    let mut max = vertices[0];
    for v in vertices {
        min.x = min.x.min(v.x);
        min.y = min.y.min(v.y);
        max.x = max.x.max(v.x);
        max.y = max.y.max(v.y);
    }
    let extent = (max.x - min.x) * (max.y - min.y);
    ((extent / max_triangle_area) * 4.0) as usize + 1024
}
