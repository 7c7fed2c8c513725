//! Constrained triangular meshing of traced mine layouts.
//!
//! Given a border polygon and a set of pillar outlines (as written by the
//! tracing step), this crate assembles a planar straight-line graph, runs a
//! constrained Delaunay triangulation with an area bound, filters triangles
//! at over-connected vertices, classifies each remaining triangle as mined
//! area or pillar, and writes per-category element and plot record files.

mod classify;
mod config;
mod degree;
mod emit;
mod error;
mod mesher;
mod progress;
mod pslg;
mod triangulate;

pub use classify::classify_triangle;
pub use config::MesherConfig;
pub use degree::enforce_max_degree;
pub use emit::{emit_mesh, RunSummary, ELEMENT_FILE_EXT, PLOT_FILE_EXT};
pub use error::{MeshError, Result};
pub use mesher::mesh_area;
pub use progress::Progress;
pub use pslg::{assemble_pslg, Pslg};
pub use triangulate::triangulate;
