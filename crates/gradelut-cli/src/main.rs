//! gradelut - 3D LUT inspection and conversion CLI

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gradelut")]
#[command(author, version, about = "3D LUT inspection and conversion")]
#[command(long_about = "
Load, inspect, convert, and generate 3D color-grading LUTs
in .cube (Adobe/Resolve) and .spi3d (Sony Imageworks) formats.

Examples:
  gradelut info grade.cube              # Show edge length and value range
  gradelut convert grade.cube out.spi3d # Convert between formats
  gradelut identity neutral.cube -s 33  # Write an identity LUT
  gradelut sample grade.cube 0.5 0.5 0.5
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display LUT information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Convert between LUT formats
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Generate an identity (pass-through) LUT
    Identity(IdentityArgs),

    /// Evaluate a LUT at one RGB triple
    Sample(SampleArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// LUT file (.cube or .spi3d)
    input: PathBuf,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input LUT file
    input: PathBuf,

    /// Output LUT file; format is picked from the extension
    output: PathBuf,
}

#[derive(Args)]
struct IdentityArgs {
    /// Output LUT file; format is picked from the extension
    output: PathBuf,

    /// Cube edge length
    #[arg(short, long, default_value = "33")]
    size: usize,
}

#[derive(Args)]
struct SampleArgs {
    /// LUT file (.cube or .spi3d)
    input: PathBuf,

    /// Input red channel
    r: f32,

    /// Input green channel
    g: f32,

    /// Input blue channel
    b: f32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(if cli.verbose { "debug" } else { "warn" })
        }))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Identity(args) => commands::identity::run(args),
        Commands::Sample(args) => commands::sample::run(args),
    }
}
