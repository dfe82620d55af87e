//! CLI argument definitions using clap.

use crate::split::Split;
use clap::{Parser, Subcommand};
use eyre::Result;
use std::path::PathBuf;

/// Default manifest directory, relative to the recipe directory.
pub const DEFAULT_FBANK_DIR: &str = "data/fbank";

#[derive(Debug, Parser)]
#[command(name = "corpora")]
#[command(about = "Inspect multi-corpus ASR cut manifests")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify that every catalog manifest exists
    Check(crate::check::Args),

    /// Count cuts and hours per partition of a split
    Stats(crate::stats::Args),

    /// Print the first cuts of a split
    Peek(crate::peek::Args),
}

/// Location of the cut manifests.
#[derive(clap::Args, Clone, Debug)]
pub struct CorpusArgs {
    /// Directory holding the cut manifests
    #[arg(long, env = "CORPORA_FBANK_DIR", default_value = DEFAULT_FBANK_DIR)]
    pub fbank_dir: PathBuf,
}

/// Split selection shared by stats and peek.
#[derive(clap::Args, Clone, Copy, Debug)]
pub struct SplitArgs {
    /// Split to load
    #[arg(value_enum)]
    pub split: Split,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Check(args) => crate::check::execute(args.try_into()?),
        Commands::Stats(args) => crate::stats::execute(args.try_into()?),
        Commands::Peek(args) => crate::peek::execute(args.try_into()?),
    }
}
