use std::collections::HashSet;

use polymesh_mesh::TriangleMesh;

/// Removes every triangle incident to a vertex whose number of distinct
/// neighbors exceeds `max_degree`.
///
/// Vertices are never removed or renumbered; a vertex left without any
/// retained face is tolerated. The gaps this opens next to high-degree
/// vertices are not re-triangulated.
pub fn enforce_max_degree(mesh: TriangleMesh, max_degree: usize) -> TriangleMesh {
    let mut neighbors: Vec<HashSet<u32>> = vec![HashSet::new(); mesh.vertices.len()];
    for face in &mesh.faces {
        for (v, w) in [
            (face.p0, face.p1),
            (face.p1, face.p2),
            (face.p2, face.p0),
        ] {
            neighbors[v as usize].insert(w);
            neighbors[w as usize].insert(v);
        }
    }

    let excess: Vec<bool> = neighbors.iter().map(|n| n.len() > max_degree).collect();
    let faces = mesh
        .faces
        .into_iter()
        .filter(|f| {
            !excess[f.p0 as usize] && !excess[f.p1 as usize] && !excess[f.p2 as usize]
        })
        .collect();

    TriangleMesh {
        vertices: mesh.vertices,
        faces,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polymesh_mesh::{Face, Vector2};

    /// A hub vertex surrounded by `spokes` rim vertices, one triangle per
    /// adjacent rim pair. The hub has degree `spokes`; rim vertices have
    /// degree 3.
    fn fan_mesh(spokes: u32) -> TriangleMesh {
        let mut vertices = vec![Vector2::new(0.0, 0.0)];
        for i in 0..spokes {
            let angle = (i as f64) * std::f64::consts::TAU / (spokes as f64);
            vertices.push(Vector2::new(angle.cos(), angle.sin()));
        }
        let faces = (0..spokes)
            .map(|i| Face {
                p0: 0,
                p1: 1 + i,
                p2: 1 + (i + 1) % spokes,
            })
            .collect();
        TriangleMesh { vertices, faces }
    }

    fn distinct_neighbors(mesh: &TriangleMesh) -> Vec<HashSet<u32>> {
        let mut neighbors = vec![HashSet::new(); mesh.vertices.len()];
        for f in &mesh.faces {
            for (v, w) in [(f.p0, f.p1), (f.p1, f.p2), (f.p2, f.p0)] {
                neighbors[v as usize].insert(w);
                neighbors[w as usize].insert(v);
            }
        }
        neighbors
    }

    #[test]
    fn removes_triangles_at_overconnected_vertices() {
        let filtered = enforce_max_degree(fan_mesh(8), 6);
        assert!(filtered.faces.is_empty());
        // Vertices survive even with no faces left.
        assert_eq!(filtered.vertices.len(), 9);
    }

    #[test]
    fn keeps_meshes_already_within_the_bound() {
        let filtered = enforce_max_degree(fan_mesh(8), 8);
        assert_eq!(filtered.triangle_count(), 8);
    }

    #[test]
    fn only_triangles_touching_the_excess_vertex_are_dropped() {
        let mut mesh = fan_mesh(8);
        // A detached triangle away from the hub.
        let base = mesh.vertices.len() as u32;
        mesh.vertices.extend([
            Vector2::new(5.0, 5.0),
            Vector2::new(6.0, 5.0),
            Vector2::new(5.0, 6.0),
        ]);
        mesh.faces.push(Face {
            p0: base,
            p1: base + 1,
            p2: base + 2,
        });

        let filtered = enforce_max_degree(mesh, 6);
        assert_eq!(filtered.triangle_count(), 1);

        for (vertex, neighbors) in distinct_neighbors(&filtered).iter().enumerate() {
            let referenced = filtered
                .faces
                .iter()
                .any(|f| [f.p0, f.p1, f.p2].contains(&(vertex as u32)));
            assert!(neighbors.len() <= 6 || !referenced);
        }
    }
}
