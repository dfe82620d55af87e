//! Fixed catalog of corpus manifests under an fbank directory.
//!
//! Paths are relative to the corpus root. Flat files follow
//! `{corpus}_cuts_{split}.jsonl.gz`; KeSpeech and WeNetSpeech live in their
//! own subdirectories with their own naming.

use std::collections::HashSet;
use std::fmt;

/// Corpora known to the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corpus {
    Thchs30,
    Aishell,
    Aishell2,
    Aishell4,
    AliMeeting,
    StCmds,
    Primewords,
    MagicData,
    WenetSpeech,
    KeSpeech,
    SpeechIo,
}

impl Corpus {
    /// Human-readable name used in log lines.
    pub fn display_name(self) -> &'static str {
        match self {
            Corpus::Thchs30 => "THCHS-30",
            Corpus::Aishell => "Aishell-1",
            Corpus::Aishell2 => "Aishell-2",
            Corpus::Aishell4 => "Aishell-4",
            Corpus::AliMeeting => "Ali-Meeting",
            Corpus::StCmds => "ST-CMDS",
            Corpus::Primewords => "Primewords",
            Corpus::MagicData => "MagicData",
            Corpus::WenetSpeech => "WeNetSpeech",
            Corpus::KeSpeech => "KeSpeech",
            Corpus::SpeechIo => "SpeechIO",
        }
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

/// Manifest file of one corpus part, relative to the corpus root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ManifestSpec {
    pub corpus: Corpus,
    pub path: &'static str,
}

const fn spec(corpus: Corpus, path: &'static str) -> ManifestSpec {
    ManifestSpec { corpus, path }
}

pub const THCHS30_TRAIN: ManifestSpec = spec(Corpus::Thchs30, "thchs_30_cuts_train.jsonl.gz");

pub const AISHELL_TRAIN: ManifestSpec = spec(Corpus::Aishell, "aishell_cuts_train.jsonl.gz");
pub const AISHELL_DEV: ManifestSpec = spec(Corpus::Aishell, "aishell_cuts_dev.jsonl.gz");
pub const AISHELL_TEST: ManifestSpec = spec(Corpus::Aishell, "aishell_cuts_test.jsonl.gz");

pub const AISHELL2_TRAIN: ManifestSpec = spec(Corpus::Aishell2, "aishell2_cuts_train.jsonl.gz");
pub const AISHELL2_DEV: ManifestSpec = spec(Corpus::Aishell2, "aishell2_cuts_dev.jsonl.gz");
pub const AISHELL2_TEST: ManifestSpec = spec(Corpus::Aishell2, "aishell2_cuts_test.jsonl.gz");

pub const AISHELL4_TRAIN_L: ManifestSpec = spec(Corpus::Aishell4, "aishell4_cuts_train_L.jsonl.gz");
pub const AISHELL4_TRAIN_M: ManifestSpec = spec(Corpus::Aishell4, "aishell4_cuts_train_M.jsonl.gz");
pub const AISHELL4_TRAIN_S: ManifestSpec = spec(Corpus::Aishell4, "aishell4_cuts_train_S.jsonl.gz");
pub const AISHELL4_TEST: ManifestSpec = spec(Corpus::Aishell4, "aishell4_cuts_test.jsonl.gz");

pub const ALIMEETING_TRAIN: ManifestSpec =
    spec(Corpus::AliMeeting, "alimeeting-far_cuts_train.jsonl.gz");
pub const ALIMEETING_TEST: ManifestSpec =
    spec(Corpus::AliMeeting, "alimeeting-far_cuts_test.jsonl.gz");
pub const ALIMEETING_EVAL: ManifestSpec =
    spec(Corpus::AliMeeting, "alimeeting-far_cuts_eval.jsonl.gz");

pub const STCMDS_TRAIN: ManifestSpec = spec(Corpus::StCmds, "stcmds_cuts_train.jsonl.gz");

pub const PRIMEWORDS_TRAIN: ManifestSpec =
    spec(Corpus::Primewords, "primewords_cuts_train.jsonl.gz");

pub const MAGICDATA_TRAIN: ManifestSpec = spec(Corpus::MagicData, "magicdata_cuts_train.jsonl.gz");
pub const MAGICDATA_DEV: ManifestSpec = spec(Corpus::MagicData, "magicdata_cuts_dev.jsonl.gz");
pub const MAGICDATA_TEST: ManifestSpec = spec(Corpus::MagicData, "magicdata_cuts_test.jsonl.gz");

pub const WENETSPEECH_TRAIN_L: ManifestSpec =
    spec(Corpus::WenetSpeech, "wenetspeech/cuts_L_fixed.jsonl.gz");
pub const WENETSPEECH_DEV: ManifestSpec =
    spec(Corpus::WenetSpeech, "wenetspeech/cuts_DEV_fixed.jsonl.gz");
pub const WENETSPEECH_TEST_MEETING: ManifestSpec =
    spec(Corpus::WenetSpeech, "wenetspeech/cuts_TEST_MEETING.jsonl.gz");
pub const WENETSPEECH_TEST_NET: ManifestSpec =
    spec(Corpus::WenetSpeech, "wenetspeech/cuts_TEST_NET.jsonl.gz");

pub const KESPEECH_TRAIN_PHASE1: ManifestSpec =
    spec(Corpus::KeSpeech, "kespeech/kespeech-asr_cuts_train_phase1.jsonl.gz");
pub const KESPEECH_TRAIN_PHASE2: ManifestSpec =
    spec(Corpus::KeSpeech, "kespeech/kespeech-asr_cuts_train_phase2.jsonl.gz");
pub const KESPEECH_TEST: ManifestSpec =
    spec(Corpus::KeSpeech, "kespeech/kespeech-asr_cuts_test.jsonl.gz");
pub const KESPEECH_DEV_PHASE1: ManifestSpec =
    spec(Corpus::KeSpeech, "kespeech/kespeech-asr_cuts_dev_phase1.jsonl.gz");
pub const KESPEECH_DEV_PHASE2: ManifestSpec =
    spec(Corpus::KeSpeech, "kespeech/kespeech-asr_cuts_dev_phase2.jsonl.gz");

/// Training manifests in mux order.
pub const TRAIN_MANIFESTS: [ManifestSpec; 13] = [
    THCHS30_TRAIN,
    AISHELL_TRAIN,
    AISHELL2_TRAIN,
    AISHELL4_TRAIN_L,
    AISHELL4_TRAIN_M,
    AISHELL4_TRAIN_S,
    ALIMEETING_TRAIN,
    STCMDS_TRAIN,
    PRIMEWORDS_TRAIN,
    MAGICDATA_TRAIN,
    WENETSPEECH_TRAIN_L,
    KESPEECH_TRAIN_PHASE1,
    KESPEECH_TRAIN_PHASE2,
];

/// Manifest used for validation during training.
pub const DEV_MANIFEST: ManifestSpec = WENETSPEECH_DEV;

/// Evaluation partitions, scored independently.
pub const TEST_PARTITIONS: [(&str, ManifestSpec); 15] = [
    ("wenetspeech-meeting_test", WENETSPEECH_TEST_MEETING),
    ("aishell_test", AISHELL_TEST),
    ("aishell_dev", AISHELL_DEV),
    ("ali-meeting_test", ALIMEETING_TEST),
    ("ali-meeting_eval", ALIMEETING_EVAL),
    ("aishell-4_test", AISHELL4_TEST),
    ("aishell-2_test", AISHELL2_TEST),
    ("aishell-2_dev", AISHELL2_DEV),
    ("magicdata_test", MAGICDATA_TEST),
    ("magicdata_dev", MAGICDATA_DEV),
    ("kespeech-asr_test", KESPEECH_TEST),
    ("kespeech-asr_dev_phase1", KESPEECH_DEV_PHASE1),
    ("kespeech-asr_dev_phase2", KESPEECH_DEV_PHASE2),
    ("wenetspeech-net_test", WENETSPEECH_TEST_NET),
    ("wenetspeech_dev", WENETSPEECH_DEV),
];

/// First SpeechIO test set index.
pub const SPEECHIO_FIRST: u32 = 0;

/// Last SpeechIO test set index, inclusive.
pub const SPEECHIO_LAST: u32 = 26;

/// SpeechIO partition names, `SPEECHIO_ASR_ZH00000` through `SPEECHIO_ASR_ZH00026`.
pub fn speechio_partitions() -> impl Iterator<Item = String> {
    (SPEECHIO_FIRST..=SPEECHIO_LAST).map(|idx| format!("SPEECHIO_ASR_ZH000{idx:02}"))
}

/// Manifest file name of a SpeechIO partition, relative to the corpus root.
pub fn speechio_manifest_path(partition: &str) -> String {
    format!("speechio_cuts_{partition}.jsonl.gz")
}

/// Every distinct manifest path of the catalog, in first-seen order.
///
/// Train, dev and test manifests come first; SpeechIO files are appended when
/// `include_speechio` is set.
pub fn all_manifests(include_speechio: bool) -> Vec<(Corpus, String)> {
    let mut seen = HashSet::new();
    let mut manifests = Vec::new();

    let fixed = TRAIN_MANIFESTS
        .iter()
        .chain([&DEV_MANIFEST])
        .chain(TEST_PARTITIONS.iter().map(|(_, spec)| spec))
        .map(|spec| (spec.corpus, spec.path.to_string()))
        .collect::<Vec<_>>();

    let speechio = speechio_partitions()
        .filter(|_| include_speechio)
        .map(|partition| (Corpus::SpeechIo, speechio_manifest_path(&partition)));

    for (corpus, path) in fixed.into_iter().chain(speechio) {
        if seen.insert(path.clone()) {
            manifests.push((corpus, path));
        }
    }

    manifests
}
