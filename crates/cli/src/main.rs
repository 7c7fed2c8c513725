use clap::Parser;

mod args;
mod mesh;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = args::Args::parse();
    match args.command {
        args::Commands::Mesh(args) => mesh::mesh_command(args),
    }
}
