use std::path::PathBuf;

/// Parameters for one meshing run.
#[derive(Debug, Clone)]
pub struct MesherConfig {
    /// Border vertex file written by the tracing step.
    pub border_path: PathBuf,
    /// Pillar vertex file written by the tracing step.
    pub pillar_path: PathBuf,
    /// Directory receiving one element record file per category.
    pub element_dir: PathBuf,
    /// Directory receiving one plot record file per category.
    pub plot_dir: PathBuf,
    /// Upper bound on the area of any generated triangle, in grid units.
    pub max_triangle_area: f64,
    /// Upper bound on the number of distinct neighbors a mesh vertex may
    /// keep; triangles at vertices over the bound are dropped.
    pub max_vertex_degree: usize,
}
