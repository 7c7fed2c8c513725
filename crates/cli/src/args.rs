use clap::{Parser, Subcommand};

#[derive(clap::Args, Debug)]
pub struct MeshArgs {
    /// Border vertex file.
    pub border: String,

    /// Pillar vertex file.
    pub pillars: String,

    /// Project data directory that receives the Mesh/ and Plot/ outputs.
    #[arg(short, long)]
    pub output: String,

    /// Maximum triangle area, in grid units.
    #[arg(long, default_value_t = 0.5)]
    pub max_area: f64,

    /// Maximum number of distinct neighbors per mesh vertex.
    #[arg(long, default_value_t = 12)]
    pub max_degree: usize,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Mesh(MeshArgs),
}
