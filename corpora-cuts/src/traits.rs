//! Core traits for manifest loading.

use crate::cutset::CutSet;
use crate::error::Result;
use std::path::Path;

/// Opens manifest files as cut sets.
///
/// Opening is expected to be cheap: implementations may check that the file
/// exists but should not read records. Malformed content surfaces when the
/// returned [`CutSet`] is iterated.
pub trait ManifestLoader {
    /// Open the manifest at `path`.
    fn open(&self, path: &Path) -> Result<CutSet>;
}

impl<L: ManifestLoader + ?Sized> ManifestLoader for &L {
    fn open(&self, path: &Path) -> Result<CutSet> {
        (**self).open(path)
    }
}
