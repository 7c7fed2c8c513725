use std::sync::atomic::AtomicBool;

use crate::config::MesherConfig;
use crate::degree::enforce_max_degree;
use crate::emit::{emit_mesh, RunSummary};
use crate::error::{MeshError, Result};
use crate::progress::Progress;
use crate::pslg::assemble_pslg;
use crate::triangulate::triangulate;

/// Runs the full meshing pipeline over one border/pillar file pair.
///
/// Reads the polygon files, assembles the PSLG, triangulates with the area
/// bound, drops triangles at over-connected vertices, then classifies and
/// writes every remaining triangle. Progress is reported per triangle during
/// the writing phase, and the cancellation flag is polled between triangles.
/// Any failure aborts the whole run; output files are closed on every path.
pub fn mesh_area(
    config: &MesherConfig,
    progress: &Progress,
    cancel: &AtomicBool,
) -> Result<RunSummary> {
    let border = polymesh_poly::read_border(&config.border_path)?;
    if border.len() < 3 {
        return Err(MeshError::DegeneratePslg {
            reason: format!(
                "border has {} usable vertices, at least 3 required",
                border.len()
            ),
        });
    }
    let holes = polymesh_poly::read_pillars(&config.pillar_path)?;
    log::info!(
        "read border with {} vertices and {} pillars",
        border.len(),
        holes.len()
    );

    let pslg = assemble_pslg(&border, &holes);

    let mesh = triangulate(&pslg, config.max_triangle_area)?;
    log::info!("triangulation produced {} triangles", mesh.triangle_count());

    let mesh = enforce_max_degree(mesh, config.max_vertex_degree);
    log::info!("{} triangles after degree filtering", mesh.triangle_count());

    emit_mesh(
        &mesh,
        &holes,
        &config.element_dir,
        &config.plot_dir,
        progress,
        cancel,
    )
}
