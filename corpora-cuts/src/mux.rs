//! Weighted multiplexing of cut sets.

use crate::cutset::{CutSet, Cuts};
use crate::error::{MuxError, Result};
use crate::types::Cut;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default mux seed.
pub const DEFAULT_SEED: u64 = 0;

/// Weighted union of cut sets.
///
/// `weights[i]` is the relative sampling weight of `sources[i]`.
#[derive(Clone, Debug)]
pub struct Mux {
    sources: Vec<CutSet>,
    weights: Vec<f64>,
    seed: u64,
}

impl Mux {
    pub fn new(sources: Vec<CutSet>, weights: Vec<f64>, seed: u64) -> Result<Self> {
        if sources.is_empty() {
            return Err(MuxError::Empty.into());
        }

        if sources.len() != weights.len() {
            return Err(MuxError::WeightsMismatch {
                sources: sources.len(),
                weights: weights.len(),
            }
            .into());
        }

        if let Some((index, &weight)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(MuxError::InvalidWeight { index, weight }.into());
        }

        Ok(Self {
            sources,
            weights,
            seed,
        })
    }

    pub fn sources(&self) -> &[CutSet] {
        &self.sources
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Total number of cuts across all sources.
    pub fn len(&self) -> Result<usize> {
        let mut total = 0;
        for source in &self.sources {
            total += source.len()?;
        }
        Ok(total)
    }

    pub fn iter(&self) -> MuxCuts {
        MuxCuts::new(
            self.sources.iter().map(CutSet::iter).collect(),
            self.weights.clone(),
            self.seed,
        )
    }
}

/// Iterator interleaving the sources of a [`Mux`].
///
/// Each step draws one non-exhausted source by weight. A source that yields
/// nothing is dropped from later draws. If every remaining weight is zero the
/// draw is uniform. The first error from any source ends the iteration.
pub struct MuxCuts {
    iters: Vec<Cuts>,
    weights: Vec<f64>,
    /// Indices of sources not yet exhausted
    active: Vec<usize>,
    /// Distribution over `active`, `None` when all its weights are zero
    dist: Option<WeightedIndex<f64>>,
    rng: StdRng,
    failed: bool,
}

impl MuxCuts {
    fn new(iters: Vec<Cuts>, weights: Vec<f64>, seed: u64) -> Self {
        let mut cuts = Self {
            active: (0..iters.len()).collect(),
            iters,
            weights,
            dist: None,
            rng: StdRng::seed_from_u64(seed),
            failed: false,
        };
        cuts.reweigh();
        cuts
    }

    fn reweigh(&mut self) {
        let weights = self.active.iter().map(|&i| self.weights[i]);
        self.dist = WeightedIndex::new(weights).ok();
    }

    /// Position in `active` of the next source to draw from.
    fn pick(&mut self) -> usize {
        match &self.dist {
            Some(dist) => dist.sample(&mut self.rng),
            None => self.rng.gen_range(0..self.active.len()),
        }
    }
}

impl Iterator for MuxCuts {
    type Item = Result<Cut>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.failed && !self.active.is_empty() {
            let slot = self.pick();
            let index = self.active[slot];

            match self.iters[index].next() {
                Some(Ok(cut)) => return Some(Ok(cut)),
                Some(Err(e)) => {
                    tracing::warn!(source = index, error = %e, "mux source failed");
                    self.failed = true;
                    return Some(Err(e));
                }
                None => {
                    tracing::trace!(source = index, "mux source exhausted");
                    self.active.remove(slot);
                    if !self.active.is_empty() {
                        self.reweigh();
                    }
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::manifest::LazyJsonl;
    use crate::traits::ManifestLoader;

    fn source(prefix: &str, n: usize) -> CutSet {
        CutSet::from_cuts(
            (0..n)
                .map(|i| Cut::new(format!("{prefix}-{i}"), 0.0, 1.0))
                .collect(),
        )
    }

    fn ids(set: &CutSet) -> Vec<String> {
        set.iter().map(|c| c.unwrap().id).collect()
    }

    #[test]
    fn rejects_empty_sources() {
        let err = Mux::new(vec![], vec![], 0).unwrap_err();
        assert!(matches!(err, Error::Mux(MuxError::Empty)));
    }

    #[test]
    fn rejects_weight_count_mismatch() {
        let err = Mux::new(vec![source("a", 1), source("b", 1)], vec![1.0], 0).unwrap_err();

        assert!(matches!(
            err,
            Error::Mux(MuxError::WeightsMismatch {
                sources: 2,
                weights: 1
            })
        ));
    }

    #[test]
    fn rejects_negative_and_nan_weights() {
        let err = Mux::new(vec![source("a", 1), source("b", 1)], vec![1.0, -1.0], 0).unwrap_err();
        assert!(matches!(
            err,
            Error::Mux(MuxError::InvalidWeight { index: 1, .. })
        ));

        let err = Mux::new(vec![source("a", 1)], vec![f64::NAN], 0).unwrap_err();
        assert!(matches!(
            err,
            Error::Mux(MuxError::InvalidWeight { index: 0, .. })
        ));
    }

    #[test]
    fn yields_every_cut_once() {
        let set = CutSet::mux(
            vec![source("a", 5), source("b", 3), source("c", 0)],
            vec![5.0, 3.0, 0.0],
            0,
        )
        .unwrap();

        let mut got = ids(&set);
        got.sort();

        let mut expected: Vec<String> = ids(&source("a", 5))
            .into_iter()
            .chain(ids(&source("b", 3)))
            .collect();
        expected.sort();

        assert_eq!(got, expected);
        assert_eq!(set.len().unwrap(), 8);
    }

    #[test]
    fn preserves_order_within_each_source() {
        let set = CutSet::mux(vec![source("a", 10), source("b", 10)], vec![1.0, 1.0], 7).unwrap();

        let got = ids(&set);
        let a: Vec<_> = got.iter().filter(|id| id.starts_with("a-")).cloned().collect();

        assert_eq!(a, ids(&source("a", 10)));
    }

    #[test]
    fn same_seed_same_order() {
        let make = |seed| {
            CutSet::mux(vec![source("a", 20), source("b", 20)], vec![2.0, 1.0], seed).unwrap()
        };

        assert_eq!(ids(&make(3)), ids(&make(3)));
        assert_eq!(make(3).as_mux().unwrap().seed(), 3);
    }

    #[test]
    fn zero_weights_are_drained_uniformly() {
        let set = CutSet::mux(vec![source("a", 2), source("b", 2)], vec![0.0, 0.0], 0).unwrap();

        assert_eq!(set.iter().count(), 4);
    }

    #[test]
    fn stops_after_first_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jsonl");
        std::fs::write(&path, b"not json\n").unwrap();

        let broken = LazyJsonl.open(&path).unwrap();
        let set = CutSet::mux(vec![broken, source("good", 5)], vec![1.0, 5.0], 0).unwrap();

        let items: Vec<_> = set.iter().collect();
        let errors = items.iter().filter(|c| c.is_err()).count();

        assert_eq!(errors, 1);
        assert!(items.last().unwrap().is_err());

        let mut cuts = set.iter();
        while let Some(Ok(_)) = cuts.next() {}
        assert!(cuts.next().is_none());
    }

    #[test]
    fn heavier_source_dominates_early_draws() {
        let set = CutSet::mux(
            vec![source("big", 1000), source("small", 1000)],
            vec![99.0, 1.0],
            0,
        )
        .unwrap();

        let big = set
            .iter()
            .take(200)
            .filter(|c| c.as_ref().unwrap().id.starts_with("big-"))
            .count();

        assert!(big > 150, "expected weighted draws, got {big}/200 from big");
    }
}
