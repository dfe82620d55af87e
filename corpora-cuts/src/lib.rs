//! corpora-cuts: lazy cut manifests and weighted multiplexing.
//!
//! A cut is one labeled audio segment. Manifests store cuts as JSON lines,
//! usually gzip-compressed, and are opened lazily: opening only checks that
//! the file exists, iteration does the reading.
//!
//! # Architecture
//!
//! - [`traits::ManifestLoader`]: opens a manifest path as a [`cutset::CutSet`]
//! - [`manifest::LazyJsonl`]: default loader for `.jsonl` / `.jsonl.gz` files
//! - [`cutset::CutSet`]: cheap handle over a manifest, in-memory cuts or a mux
//! - [`mux::Mux`]: weighted union of cut sets
//!
//! # Quick Start
//!
//! ```no_run
//! use corpora_cuts::cutset::CutSet;
//! use corpora_cuts::manifest::LazyJsonl;
//! use corpora_cuts::traits::ManifestLoader;
//! use std::path::Path;
//!
//! # fn main() -> corpora_cuts::error::Result<()> {
//! let a = LazyJsonl.open(Path::new("data/fbank/aishell_cuts_train.jsonl.gz"))?;
//! let b = LazyJsonl.open(Path::new("data/fbank/stcmds_cuts_train.jsonl.gz"))?;
//! let weights = vec![a.len()? as f64, b.len()? as f64];
//!
//! let train = CutSet::mux(vec![a, b], weights, 0)?;
//! for cut in train.iter().take(10) {
//!     println!("{}", cut?.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cutset;
pub mod error;
pub mod manifest;
pub mod mux;
pub mod traits;
pub mod types;

pub use cutset::CutSet;
pub use error::{Error, Result};
pub use manifest::LazyJsonl;
pub use traits::ManifestLoader;
pub use types::{Cut, Supervision};
