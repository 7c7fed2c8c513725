use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use polymesh_mesh::{Hole, Triangle, TriangleMesh};

use crate::classify::classify_triangle;
use crate::error::{MeshError, Result};
use crate::progress::Progress;

/// Extension of element record files; the plotting collaborator scans the
/// element directory for this extension.
pub const ELEMENT_FILE_EXT: &str = "tri";
/// Extension of plot record files.
pub const PLOT_FILE_EXT: &str = "plt";

const MINED_LABEL: &str = "MINED";
const PILLAR_LABEL: &str = "PILLAR";

/// Totals for a completed meshing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Triangles processed, after degree filtering.
    pub triangles: usize,
    /// Triangles in the open area.
    pub mined: usize,
    /// Triangles per pillar, in reading order.
    pub pillars: Vec<usize>,
}

/// The open output files and sequence counter for one record category.
///
/// Element and plot files are opened together and closed together when the
/// value drops, on every exit path.
struct CategoryFiles {
    element: BufWriter<File>,
    plot: BufWriter<File>,
    sequence: u32,
}

impl CategoryFiles {
    fn create(element_dir: &Path, plot_dir: &Path, stem: &str) -> std::io::Result<Self> {
        let element = File::create(element_dir.join(format!("{stem}.{ELEMENT_FILE_EXT}")))?;
        let plot = File::create(plot_dir.join(format!("{stem}.{PLOT_FILE_EXT}")))?;
        Ok(Self {
            element: BufWriter::new(element),
            plot: BufWriter::new(plot),
            sequence: 0,
        })
    }

    /// Writes one element record and one plot record for a triangle.
    ///
    /// The element name token is the 2-digit category code followed by this
    /// category's 5-digit sequence number; the plot record repeats the first
    /// corner to close the polyline.
    fn write(&mut self, label: &str, code: usize, t: &Triangle) -> std::io::Result<()> {
        self.sequence += 1;
        writeln!(
            self.element,
            "E_LT: {} {:02}{:05}; {:.4} {:.4} {:.4} {:.4} {:.4} {:.4}",
            label, code, self.sequence, t.a.x, t.a.y, t.b.x, t.b.y, t.c.x, t.c.y
        )?;
        for p in [t.a, t.b, t.c, t.a] {
            writeln!(self.plot, "{:.4} {:.4}", p.x, p.y)?;
        }
        writeln!(self.plot)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.element.flush()?;
        self.plot.flush()
    }
}

/// Creates the directory, or removes the files a previous run left in it.
fn prepare_dir(dir: &Path) -> std::io::Result<()> {
    if dir.exists() {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                fs::remove_file(entry.path())?;
            }
        }
    } else {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

struct Emitter {
    mined: CategoryFiles,
    pillars: Vec<CategoryFiles>,
}

impl Emitter {
    fn create(element_dir: &Path, plot_dir: &Path, hole_count: usize) -> std::io::Result<Self> {
        prepare_dir(element_dir)?;
        prepare_dir(plot_dir)?;
        let mined = CategoryFiles::create(element_dir, plot_dir, "M1")?;
        let mut pillars = Vec::with_capacity(hole_count);
        for i in 0..hole_count {
            pillars.push(CategoryFiles::create(
                element_dir,
                plot_dir,
                &format!("P{}", i + 1),
            )?);
        }
        Ok(Self { mined, pillars })
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.mined.flush()?;
        for pillar in &mut self.pillars {
            pillar.flush()?;
        }
        Ok(())
    }
}

/// Classifies every triangle of the mesh and writes its element and plot
/// records to the category's files.
///
/// Both output directories are cleared of previous results first, and one
/// file pair per category (each hole, plus one for the mined area) stays
/// open for the whole run. The cancellation flag is polled between
/// triangles; when set, the emitter flushes, closes everything and returns
/// [`MeshError::Cancelled`], leaving the partial files on disk.
pub fn emit_mesh(
    mesh: &TriangleMesh,
    holes: &[Hole],
    element_dir: &Path,
    plot_dir: &Path,
    progress: &Progress,
    cancel: &AtomicBool,
) -> Result<RunSummary> {
    let mut emitter = Emitter::create(element_dir, plot_dir, holes.len())?;

    let total = mesh.triangle_count();
    let mut summary = RunSummary {
        triangles: 0,
        mined: 0,
        pillars: vec![0; holes.len()],
    };

    for (processed, triangle) in mesh.triangles().enumerate() {
        // Single writer, single reader; relaxed is enough.
        if cancel.load(Ordering::Relaxed) {
            emitter.flush()?;
            return Err(MeshError::Cancelled);
        }

        match classify_triangle(&triangle, holes) {
            Some(hole) => {
                emitter.pillars[hole].write(PILLAR_LABEL, hole + 1, &triangle)?;
                summary.pillars[hole] += 1;
            }
            None => {
                emitter.mined.write(MINED_LABEL, 1, &triangle)?;
                summary.mined += 1;
            }
        }
        summary.triangles += 1;
        progress.report(processed + 1, total, "writing mesh records");
    }

    emitter.flush()?;
    Ok(summary)
}
