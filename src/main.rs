use anyhow::Result;
use clap::{Parser, Subcommand};
use seedcull::commands::{cull, seeds};

#[derive(Parser)]
#[command(name = "seedcull")]
#[command(version = "0.1.0")]
#[command(about = "Seed enumeration and hit culling for protein similarity search", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Per-shape seed statistics of a protein FASTA file
    Seeds(seeds::SeedsArgs),

    /// Cull a table of HSPs per query
    Cull(cull::CullArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match cli.command {
        Commands::Seeds(args) => {
            seeds::run(args)?;
        }
        Commands::Cull(args) => {
            cull::run(args)?;
        }
    }
    Ok(())
}
