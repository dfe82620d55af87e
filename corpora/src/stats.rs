//! Stats subcommand - count cuts and hours per partition.

use crate::cli::{CorpusArgs, SplitArgs};
use crate::config::CorpusConfig;
use crate::split::Split;
use corpora_catalog::MultiDataset;
use corpora_cuts::CutSet;
use eyre::{Context, Result};

/// CLI arguments for split statistics.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    #[command(flatten)]
    pub split: SplitArgs,
}

/// Resolved configuration for split statistics.
#[derive(Debug)]
pub struct Config {
    pub dataset: MultiDataset,
    pub split: Split,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let corpus = CorpusConfig::try_from(args.corpus)?;

        Ok(Self {
            dataset: corpus.dataset,
            split: args.split.split,
        })
    }
}

/// Totals over the cuts of one cut set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CutStats {
    pub cuts: usize,
    pub supervisions: usize,
    pub duration_secs: f64,
}

impl CutStats {
    /// Iterate `cuts` once and sum counts and durations.
    pub fn collect(cuts: &CutSet) -> corpora_cuts::Result<Self> {
        let mut stats = Self::default();
        for cut in cuts {
            let cut = cut?;
            stats.cuts += 1;
            stats.supervisions += cut.num_supervisions();
            stats.duration_secs += cut.duration();
        }
        Ok(stats)
    }

    pub fn hours(&self) -> f64 {
        self.duration_secs / 3600.0
    }

    fn add(&mut self, other: &Self) {
        self.cuts += other.cuts;
        self.supervisions += other.supervisions;
        self.duration_secs += other.duration_secs;
    }
}

/// Format one table row.
fn format_row(name: &str, stats: &CutStats) -> String {
    format!(
        "{name:<28} {:>10} {:>12} {:>10.2}",
        stats.cuts,
        stats.supervisions,
        stats.hours()
    )
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(split = ?config.split, "collecting statistics");

    let partitions = config
        .split
        .load(&config.dataset)
        .wrap_err_with(|| format!("failed to load {:?} split", config.split))?;

    println!(
        "{:<28} {:>10} {:>12} {:>10}",
        "partition", "cuts", "supervisions", "hours"
    );

    let mut total = CutStats::default();

    for (name, cuts) in partitions.iter() {
        let stats = CutStats::collect(cuts)
            .wrap_err_with(|| format!("failed to read partition {name}"))?;

        println!("{}", format_row(name, &stats));
        total.add(&stats);
    }

    if partitions.len() > 1 {
        println!("{}", format_row("total", &total));
    }

    Ok(())
}
