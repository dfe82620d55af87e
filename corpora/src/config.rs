//! Configuration types for resolved CLI arguments.
//!
//! This module contains Config structs and their TryFrom implementations.
//! Args structs (for CLI parsing) remain in cli.rs and the command modules.

use crate::cli::CorpusArgs;
use color_eyre::Section;
use corpora_catalog::MultiDataset;
use eyre::{Result, eyre};

/// Resolved manifest location.
///
/// Converted from CorpusArgs via TryFrom.
/// Holds a MultiDataset rooted at an existing directory.
#[derive(Debug)]
pub struct CorpusConfig {
    pub dataset: MultiDataset,
}

impl TryFrom<CorpusArgs> for CorpusConfig {
    type Error = eyre::Error;

    fn try_from(args: CorpusArgs) -> Result<Self> {
        if !args.fbank_dir.is_dir() {
            let e = eyre!("fbank directory not found: {:?}", args.fbank_dir.display())
                .suggestion("pass --fbank-dir or set CORPORA_FBANK_DIR");
            return Err(e);
        }

        Ok(Self {
            dataset: MultiDataset::new(args.fbank_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_existing_directory() {
        let dir = tempfile::tempdir().unwrap();

        let config = CorpusConfig::try_from(CorpusArgs {
            fbank_dir: dir.path().to_path_buf(),
        })
        .unwrap();

        assert_eq!(config.dataset.fbank_dir(), dir.path());
    }

    #[test]
    fn rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();

        let result = CorpusConfig::try_from(CorpusArgs {
            fbank_dir: dir.path().join("missing"),
        });

        assert!(result.is_err());
    }
}
