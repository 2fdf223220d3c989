mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "matte", about = "Foreground isolation by mask erosion and island regrowth")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cut the foreground out of an image by rewriting its alpha channel
    Isolate(commands::isolate::IsolateArgs),
    /// Render the regrown islands of an image in distinct colors
    Labels(commands::labels::LabelsArgs),
    /// Print or save the default isolation config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Isolate(args) => commands::isolate::run(args),
        Commands::Labels(args) => commands::labels::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
