//! Dataset splits selectable from the command line.

use corpora_catalog::{MultiDataset, Partitions};
use corpora_cuts::{ManifestLoader, Result};

/// Named view over the MultiDataset accessors.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    /// Weighted mux of every training corpus
    Train,
    /// WeNetSpeech dev set
    Dev,
    /// Every evaluation partition
    Test,
    /// SpeechIO test sets
    Speechio,
    /// Aishell-1 train, dev and test
    Aishell,
    /// Aishell-2 train, dev and test
    Aishell2,
    /// WeNetSpeech test meeting set
    WenetspeechMeeting,
}

impl Split {
    /// Load the split as named partitions.
    ///
    /// Accessors returning a single cut set become one partition named after
    /// the split part.
    pub fn load<L: ManifestLoader>(self, dataset: &MultiDataset<L>) -> Result<Partitions> {
        let partitions = match self {
            Split::Train => Partitions::from_iter([("train", dataset.train_cuts()?)]),
            Split::Dev => Partitions::from_iter([("dev", dataset.dev_cuts()?)]),
            Split::Test => dataset.test_cuts()?,
            Split::Speechio => dataset.speechio_test_cuts()?,
            Split::Aishell => {
                let mut partitions = Partitions::from_iter([
                    ("aishell_train", dataset.aishell_train_cuts()?),
                    ("aishell_dev", dataset.aishell_dev_cuts()?),
                ]);
                partitions.extend(dataset.aishell_test_cuts()?);
                partitions
            }
            Split::Aishell2 => {
                let mut partitions = Partitions::from_iter([
                    ("aishell2_train", dataset.aishell2_train_cuts()?),
                    ("aishell2_dev", dataset.aishell2_dev_cuts()?),
                ]);
                partitions.extend(dataset.aishell2_test_cuts()?);
                partitions
            }
            Split::WenetspeechMeeting => dataset.wenetspeech_test_meeting_cuts()?,
        };

        Ok(partitions)
    }
}
