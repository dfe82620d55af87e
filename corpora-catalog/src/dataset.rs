//! Multi-corpus dataset built from the manifest catalog.

use crate::catalog::{
    AISHELL_DEV, AISHELL_TEST, AISHELL_TRAIN, AISHELL2_DEV, AISHELL2_TEST, AISHELL2_TRAIN,
    Corpus, DEV_MANIFEST, ManifestSpec, TEST_PARTITIONS, TRAIN_MANIFESTS, WENETSPEECH_TEST_MEETING,
    speechio_manifest_path, speechio_partitions,
};
use crate::partitions::Partitions;
use corpora_cuts::mux::DEFAULT_SEED;
use corpora_cuts::{CutSet, LazyJsonl, ManifestLoader, Result};
use std::path::{Path, PathBuf};

/// Train, dev and test cut sets of the Mandarin corpora under one fbank directory.
///
/// The directory is expected to contain:
///
/// - `aishell_cuts_train.jsonl.gz`
/// - `aishell2_cuts_train.jsonl.gz`
/// - `aishell4_cuts_train_{L,M,S}.jsonl.gz`
/// - `alimeeting-far_cuts_train.jsonl.gz`
/// - `magicdata_cuts_train.jsonl.gz`
/// - `primewords_cuts_train.jsonl.gz`
/// - `stcmds_cuts_train.jsonl.gz`
/// - `thchs_30_cuts_train.jsonl.gz`
/// - `kespeech/kespeech-asr_cuts_train_phase{1,2}.jsonl.gz`
/// - `wenetspeech/cuts_L_fixed.jsonl.gz`
///
/// plus the dev/test manifests listed in [`crate::catalog`].
///
/// Construction never touches the filesystem. Every accessor opens its
/// manifests again; nothing is cached between calls. Errors from the loader
/// are returned unchanged.
#[derive(Clone, Debug)]
pub struct MultiDataset<L = LazyJsonl> {
    fbank_dir: PathBuf,
    loader: L,
    seed: u64,
}

impl MultiDataset<LazyJsonl> {
    pub fn new(fbank_dir: impl Into<PathBuf>) -> Self {
        Self::with_loader(fbank_dir, LazyJsonl)
    }
}

impl<L: ManifestLoader> MultiDataset<L> {
    /// Use a custom manifest loader.
    pub fn with_loader(fbank_dir: impl Into<PathBuf>, loader: L) -> Self {
        Self {
            fbank_dir: fbank_dir.into(),
            loader,
            seed: DEFAULT_SEED,
        }
    }

    /// Seed of the training mux.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn fbank_dir(&self) -> &Path {
        &self.fbank_dir
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn open(&self, spec: &ManifestSpec) -> Result<CutSet> {
        self.open_at(spec.corpus, spec.path)
    }

    fn open_at(&self, corpus: Corpus, relative: &str) -> Result<CutSet> {
        let path = self.fbank_dir.join(relative);
        tracing::info!(%corpus, path = ?path.display(), "loading manifest in lazy mode");
        self.loader.open(&path)
    }

    fn open_partitions<'a, I>(&self, entries: I) -> Result<Partitions>
    where
        I: IntoIterator<Item = (&'a str, &'a ManifestSpec)>,
    {
        let mut partitions = Partitions::new();
        for (name, spec) in entries {
            partitions.insert(name, self.open(spec)?);
        }
        Ok(partitions)
    }

    /// Weighted union of every training corpus.
    ///
    /// Each source is weighted by its number of cuts, so larger corpora are
    /// drawn proportionally more often.
    pub fn train_cuts(&self) -> Result<CutSet> {
        tracing::info!("about to get multidataset train cuts");

        let mut sources = Vec::with_capacity(TRAIN_MANIFESTS.len());
        let mut weights = Vec::with_capacity(TRAIN_MANIFESTS.len());

        for spec in &TRAIN_MANIFESTS {
            let cuts = self.open(spec)?;
            let len = cuts.len()?;
            tracing::debug!(corpus = %spec.corpus, cuts = len, "counted training cuts");

            weights.push(len as f64);
            sources.push(cuts);
        }

        CutSet::mux(sources, weights, self.seed)
    }

    pub fn dev_cuts(&self) -> Result<CutSet> {
        tracing::info!("about to get multidataset dev cuts");
        self.open(&DEV_MANIFEST)
    }

    /// Every evaluation partition, keyed by partition name.
    pub fn test_cuts(&self) -> Result<Partitions> {
        tracing::info!("about to get multidataset test cuts");
        self.open_partitions(TEST_PARTITIONS.iter().map(|(name, spec)| (*name, spec)))
    }

    pub fn aishell_train_cuts(&self) -> Result<CutSet> {
        tracing::info!("about to get aishell train cuts");
        self.open(&AISHELL_TRAIN)
    }

    pub fn aishell_dev_cuts(&self) -> Result<CutSet> {
        tracing::info!("about to get aishell dev cuts");
        self.open(&AISHELL_DEV)
    }

    pub fn aishell_test_cuts(&self) -> Result<Partitions> {
        tracing::info!("about to get aishell test cuts");
        self.open_partitions([("aishell_test", &AISHELL_TEST)])
    }

    pub fn aishell2_train_cuts(&self) -> Result<CutSet> {
        tracing::info!("about to get aishell2 train cuts");
        self.open(&AISHELL2_TRAIN)
    }

    pub fn aishell2_dev_cuts(&self) -> Result<CutSet> {
        tracing::info!("about to get aishell2 dev cuts");
        self.open(&AISHELL2_DEV)
    }

    pub fn aishell2_test_cuts(&self) -> Result<Partitions> {
        tracing::info!("about to get aishell2 test cuts");
        self.open_partitions([("aishell2_test", &AISHELL2_TEST)])
    }

    pub fn wenetspeech_test_meeting_cuts(&self) -> Result<Partitions> {
        tracing::info!("about to get wenetspeech test meeting cuts");
        self.open_partitions([("wenetspeech-meeting_test", &WENETSPEECH_TEST_MEETING)])
    }

    /// SpeechIO test sets `SPEECHIO_ASR_ZH00000` through `SPEECHIO_ASR_ZH00026`.
    pub fn speechio_test_cuts(&self) -> Result<Partitions> {
        tracing::info!("about to get speechio test cuts");

        let mut partitions = Partitions::new();
        for partition in speechio_partitions() {
            let cuts = self.open_at(Corpus::SpeechIo, &speechio_manifest_path(&partition))?;
            partitions.insert(partition, cuts);
        }

        Ok(partitions)
    }
}
