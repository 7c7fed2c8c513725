use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use polymesh::{mesh_area, MesherConfig, Progress};

use crate::args;

pub fn mesh_command(args: args::MeshArgs) -> anyhow::Result<()> {
    let output = PathBuf::from(&args.output);
    let config = MesherConfig {
        border_path: PathBuf::from(&args.border),
        pillar_path: PathBuf::from(&args.pillars),
        element_dir: output.join("Mesh"),
        plot_dir: output.join("Plot"),
        max_triangle_area: args.max_area,
        max_vertex_degree: args.max_degree,
    };

    let progress = Progress::new(|current, total, message| {
        if current % 1000 == 0 || current == total {
            log::info!("{message}: {current}/{total}");
        }
    });
    // Headless runs have no cancel source; the flag stays clear.
    let cancel = AtomicBool::new(false);

    let summary = mesh_area(&config, &progress, &cancel)?;

    println!("triangles: {}", summary.triangles);
    println!("mined: {}", summary.mined);
    for (i, count) in summary.pillars.iter().enumerate() {
        println!("pillar {}: {}", i + 1, count);
    }
    Ok(())
}
