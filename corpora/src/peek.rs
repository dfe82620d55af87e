//! Peek subcommand - print the first cuts of a split.

use crate::cli::{CorpusArgs, SplitArgs};
use crate::config::CorpusConfig;
use crate::split::Split;
use corpora_catalog::MultiDataset;
use corpora_cuts::Cut;
use corpora_cuts::mux::DEFAULT_SEED;
use eyre::{Context, Result};

/// Default number of cuts printed per partition
const DEFAULT_COUNT: usize = 5;

/// CLI arguments for peeking into a split.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    #[command(flatten)]
    pub split: SplitArgs,

    /// Number of cuts to print per partition
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Seed of the training mux
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Resolved configuration for peeking into a split.
#[derive(Debug)]
pub struct Config {
    pub dataset: MultiDataset,
    pub split: Split,
    pub count: usize,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let corpus = CorpusConfig::try_from(args.corpus)?;

        Ok(Self {
            dataset: corpus.dataset.with_seed(args.seed),
            split: args.split.split,
            count: args.count,
        })
    }
}

/// Format a cut as `id<TAB>duration<TAB>text`.
fn format_cut(cut: &Cut) -> String {
    format!("{}\t{:.2}s\t{}", cut.id, cut.duration(), cut.text())
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(split = ?config.split, count = config.count, "peeking into split");

    let partitions = config
        .split
        .load(&config.dataset)
        .wrap_err_with(|| format!("failed to load {:?} split", config.split))?;

    for (name, cuts) in partitions.iter() {
        println!("[{name}]");

        for cut in cuts.iter().take(config.count) {
            let cut = cut.wrap_err_with(|| format!("failed to read partition {name}"))?;
            println!("  {}", format_cut(&cut));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cut_line() {
        let cut = Cut::new("BAC009S0764W0121-0", 0.0, 4.2)
            .with_text("BAC009S0764W0121", "甚至出现交易几乎停滞的情况");

        assert_eq!(
            format_cut(&cut),
            "BAC009S0764W0121-0\t4.20s\t甚至出现交易几乎停滞的情况"
        );
    }
}
