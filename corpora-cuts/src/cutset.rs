//! Cut set handles.

use crate::error::Result;
use crate::manifest::{JsonlCuts, count_records, write_manifest};
use crate::mux::{Mux, MuxCuts};
use crate::types::Cut;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Handle to a collection of cuts.
///
/// Cloning is cheap and never reads data. Lazy handles read their manifest
/// each time they are iterated or counted.
#[derive(Clone, Debug)]
pub struct CutSet {
    source: Source,
}

#[derive(Clone, Debug)]
enum Source {
    Lazy(PathBuf),
    Eager(Arc<[Cut]>),
    Mux(Mux),
}

impl CutSet {
    pub(crate) fn lazy(path: &Path) -> Self {
        Self {
            source: Source::Lazy(path.to_path_buf()),
        }
    }

    /// In-memory cut set.
    pub fn from_cuts(cuts: Vec<Cut>) -> Self {
        Self {
            source: Source::Eager(cuts.into()),
        }
    }

    /// Weighted union of `sources`.
    ///
    /// Iteration draws from each non-exhausted source with probability
    /// proportional to its weight. `weights` must line up with `sources`.
    pub fn mux(sources: Vec<CutSet>, weights: Vec<f64>, seed: u64) -> Result<Self> {
        Ok(Self {
            source: Source::Mux(Mux::new(sources, weights, seed)?),
        })
    }

    /// Manifest path backing a lazy cut set.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            Source::Lazy(path) => Some(path),
            _ => None,
        }
    }

    pub fn as_mux(&self) -> Option<&Mux> {
        match &self.source {
            Source::Mux(mux) => Some(mux),
            _ => None,
        }
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self.source, Source::Lazy(_))
    }

    /// Number of cuts.
    ///
    /// Lazy cut sets scan their manifest; a mux sums its sources.
    pub fn len(&self) -> Result<usize> {
        match &self.source {
            Source::Lazy(path) => count_records(path),
            Source::Eager(cuts) => Ok(cuts.len()),
            Source::Mux(mux) => mux.len(),
        }
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.len().map(|n| n == 0)
    }

    /// Iterate over cuts, reading lazily.
    pub fn iter(&self) -> Cuts {
        let inner = match &self.source {
            Source::Lazy(path) => Inner::Jsonl(JsonlCuts::new(path.clone())),
            Source::Eager(cuts) => Inner::Eager {
                cuts: Arc::clone(cuts),
                pos: 0,
            },
            Source::Mux(mux) => Inner::Mux(Box::new(mux.iter())),
        };

        Cuts { inner }
    }

    /// Write all cuts to a manifest file, returning the number written.
    pub fn to_file(&self, path: &Path) -> Result<usize> {
        let cuts: Vec<Cut> = self.iter().collect::<Result<_>>()?;
        write_manifest(path, &cuts)
    }
}

impl<'a> IntoIterator for &'a CutSet {
    type Item = Result<Cut>;
    type IntoIter = Cuts;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cuts of a [`CutSet`].
pub struct Cuts {
    inner: Inner,
}

enum Inner {
    Jsonl(JsonlCuts),
    Eager { cuts: Arc<[Cut]>, pos: usize },
    Mux(Box<MuxCuts>),
}

impl Iterator for Cuts {
    type Item = Result<Cut>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            Inner::Jsonl(iter) => iter.next(),
            Inner::Eager { cuts, pos } => {
                let cut = cuts.get(*pos)?.clone();
                *pos += 1;
                Some(Ok(cut))
            }
            Inner::Mux(iter) => iter.next(),
        }
    }
}
