//! Catalog of Mandarin ASR corpus manifests and multi-dataset aggregation.
//!
//! ## Modules
//!
//! - [`catalog`] - Fixed table of manifest paths per corpus and split
//! - [`dataset`] - [`MultiDataset`] accessors returning cut sets
//! - [`partitions`] - Ordered name to cut set mapping for evaluation sets
//!
//! ## Quick Start
//!
//! ```no_run
//! use corpora_catalog::MultiDataset;
//!
//! # fn main() -> corpora_cuts::Result<()> {
//! let dataset = MultiDataset::new("data/fbank");
//!
//! let train = dataset.train_cuts()?;
//! for cut in train.iter().take(4) {
//!     println!("{}", cut?.id);
//! }
//!
//! for (name, cuts) in dataset.test_cuts()?.iter() {
//!     println!("{name}: {} cuts", cuts.len()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod dataset;
pub mod partitions;

pub use catalog::{Corpus, ManifestSpec};
pub use dataset::MultiDataset;
pub use partitions::Partitions;
