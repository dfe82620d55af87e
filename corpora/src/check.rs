//! Check subcommand - verify that every catalog manifest exists.

use crate::cli::CorpusArgs;
use crate::config::CorpusConfig;
use color_eyre::Section;
use corpora_catalog::Corpus;
use corpora_catalog::catalog::all_manifests;
use corpora_cuts::{LazyJsonl, ManifestLoader};
use eyre::{Result, eyre};
use std::path::{Path, PathBuf};

/// CLI arguments for manifest checking.
#[derive(clap::Args, Debug)]
pub struct Args {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Also check the SpeechIO test sets
    #[arg(long)]
    pub speechio: bool,
}

/// Resolved configuration for manifest checking.
#[derive(Debug)]
pub struct Config {
    pub fbank_dir: PathBuf,
    pub speechio: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let corpus = CorpusConfig::try_from(args.corpus)?;

        Ok(Self {
            fbank_dir: corpus.dataset.fbank_dir().to_path_buf(),
            speechio: args.speechio,
        })
    }
}

/// Outcome of opening one manifest.
#[derive(Debug)]
pub struct Entry {
    pub corpus: Corpus,
    pub path: String,
    pub problem: Option<String>,
}

/// Try to open every catalog manifest under `fbank_dir`.
pub fn check_manifests(fbank_dir: &Path, speechio: bool) -> Vec<Entry> {
    all_manifests(speechio)
        .into_iter()
        .map(|(corpus, path)| {
            let problem = LazyJsonl
                .open(&fbank_dir.join(&path))
                .err()
                .map(|e| e.to_string());

            Entry {
                corpus,
                path,
                problem,
            }
        })
        .collect()
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        dir = ?config.fbank_dir.display(),
        speechio = config.speechio,
        "checking manifests"
    );

    let entries = check_manifests(&config.fbank_dir, config.speechio);

    for entry in &entries {
        match &entry.problem {
            None => println!("ok       {:<12} {}", entry.corpus, entry.path),
            Some(problem) => {
                tracing::warn!(corpus = %entry.corpus, path = %entry.path, %problem, "manifest unavailable");
                println!("missing  {:<12} {}", entry.corpus, entry.path);
            }
        }
    }

    let missing = entries.iter().filter(|e| e.problem.is_some()).count();

    if missing > 0 {
        let e = eyre!("{missing} of {} manifests unavailable", entries.len())
            .suggestion("run the manifest preparation stage for the missing corpora");
        return Err(e);
    }

    println!("all {} manifests present", entries.len());

    Ok(())
}
