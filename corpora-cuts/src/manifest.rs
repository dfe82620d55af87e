//! JSON lines manifest files, optionally gzip-compressed.

use crate::cutset::CutSet;
use crate::error::{ManifestError, Result};
use crate::traits::ManifestLoader;
use crate::types::Cut;
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::{Path, PathBuf};

type Reader = Box<dyn BufRead + Send>;

/// Loader for `.jsonl` and `.jsonl.gz` cut manifests.
///
/// `open` only checks file metadata; records are read when the cut set is
/// iterated.
#[derive(Clone, Copy, Debug, Default)]
pub struct LazyJsonl;

impl ManifestLoader for LazyJsonl {
    fn open(&self, path: &Path) -> Result<CutSet> {
        if !is_jsonl(path) {
            return Err(ManifestError::UnsupportedFormat(path.to_path_buf()).into());
        }

        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => Ok(CutSet::lazy(path)),
            Ok(_) => Err(ManifestError::NotFound(path.to_path_buf()).into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ManifestError::NotFound(path.to_path_buf()).into())
            }
            Err(source) => Err(ManifestError::Io {
                path: path.to_path_buf(),
                source,
            }
            .into()),
        }
    }
}

fn is_jsonl(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.contains(".jsonl"))
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

fn io_error(path: &Path, source: std::io::Error) -> ManifestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        ManifestError::NotFound(path.to_path_buf())
    } else {
        ManifestError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn open_reader(path: &Path) -> std::result::Result<Reader, ManifestError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;

    let reader: Reader = if is_gzip(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(BufReader::new(file))))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(reader)
}

/// Count non-blank lines without decoding them.
pub(crate) fn count_records(path: &Path) -> Result<usize> {
    let reader = open_reader(path)?;

    let mut count = 0;
    for line in reader.lines() {
        let line = line.map_err(|e| io_error(path, e))?;
        if !line.trim().is_empty() {
            count += 1;
        }
    }

    Ok(count)
}

/// Streaming iterator over the cuts of one manifest file.
///
/// The file is opened on the first call to `next`. After the first error the
/// iterator is fused.
pub struct JsonlCuts {
    path: PathBuf,
    lines: Option<Lines<Reader>>,
    line: usize,
    done: bool,
}

impl JsonlCuts {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            lines: None,
            line: 0,
            done: false,
        }
    }

    fn fail(&mut self, e: ManifestError) -> Option<Result<Cut>> {
        self.done = true;
        self.lines = None;
        Some(Err(e.into()))
    }
}

impl Iterator for JsonlCuts {
    type Item = Result<Cut>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.lines.is_none() {
            tracing::debug!(path = ?self.path.display(), "opening manifest");
            match open_reader(&self.path) {
                Ok(reader) => self.lines = Some(reader.lines()),
                Err(e) => return self.fail(e),
            }
        }

        let lines = self.lines.as_mut()?;

        loop {
            let raw = match lines.next() {
                Some(Ok(raw)) => raw,
                Some(Err(e)) => {
                    let e = io_error(&self.path, e);
                    return self.fail(e);
                }
                None => {
                    self.done = true;
                    self.lines = None;
                    return None;
                }
            };
            self.line += 1;

            if raw.trim().is_empty() {
                continue;
            }

            return match serde_json::from_str::<Cut>(&raw) {
                Ok(cut) => Some(Ok(cut)),
                Err(source) => {
                    let e = ManifestError::Malformed {
                        path: self.path.clone(),
                        line: self.line,
                        source,
                    };
                    self.fail(e)
                }
            };
        }
    }
}

/// Write cuts to a JSON lines manifest, gzip-compressed when the path ends in `.gz`.
///
/// Returns the number of cuts written.
pub fn write_manifest<'a, I>(path: &Path, cuts: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Cut>,
{
    let file = File::create(path).map_err(|e| io_error(path, e))?;

    let count = if is_gzip(path) {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        let count = write_records(path, &mut encoder, cuts)?;
        encoder
            .finish()
            .and_then(|mut inner| inner.flush())
            .map_err(|e| io_error(path, e))?;
        count
    } else {
        let mut writer = BufWriter::new(file);
        let count = write_records(path, &mut writer, cuts)?;
        writer.flush().map_err(|e| io_error(path, e))?;
        count
    };

    tracing::debug!(path = ?path.display(), count, "manifest written");

    Ok(count)
}

fn write_records<'a, W, I>(path: &Path, writer: &mut W, cuts: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Cut>,
{
    let mut count = 0;

    for cut in cuts {
        let line = serde_json::to_string(cut).map_err(|source| ManifestError::Encode {
            path: path.to_path_buf(),
            id: cut.id.clone(),
            source,
        })?;
        writeln!(writer, "{line}").map_err(|e| io_error(path, e))?;
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample_cuts(n: usize) -> Vec<Cut> {
        (0..n)
            .map(|i| Cut::new(format!("cut-{i}"), 0.0, 1.0 + i as f64).with_text("rec", "好"))
            .collect()
    }

    #[test]
    fn open_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aishell_cuts_train.jsonl.gz");

        let err = LazyJsonl.open(&path).unwrap_err();

        assert!(err.is_not_found(), "unexpected error: {err}");
    }

    #[test]
    fn open_rejects_non_jsonl_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cuts.json.gz");
        std::fs::write(&path, b"").unwrap();

        let err = LazyJsonl.open(&path).unwrap_err();

        assert!(matches!(
            err,
            Error::Manifest(ManifestError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn open_does_not_read_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.jsonl");
        std::fs::write(&path, b"not json\n").unwrap();

        let cuts = LazyJsonl.open(&path).expect("open should only check metadata");
        let first = cuts.iter().next().unwrap();

        match first {
            Err(Error::Manifest(ManifestError::Malformed { line, .. })) => assert_eq!(line, 1),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn reads_gzip_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cuts.jsonl.gz");
        let cuts = sample_cuts(3);

        assert_eq!(write_manifest(&path, &cuts).unwrap(), 3);

        let loaded: Vec<Cut> = LazyJsonl
            .open(&path)
            .unwrap()
            .iter()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(loaded, cuts);
        assert_eq!(count_records(&path).unwrap(), 3);
    }

    #[test]
    fn skips_blank_lines_and_reports_line_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cuts.jsonl");
        let good = serde_json::to_string(&sample_cuts(1)[0]).unwrap();

        let mut file = File::create(&path).unwrap();
        writeln!(file, "{good}").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{{\"id\": 3}}").unwrap();
        drop(file);

        let results: Vec<_> = JsonlCuts::new(path.clone()).collect();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        match &results[1] {
            Err(Error::Manifest(ManifestError::Malformed { line, .. })) => assert_eq!(*line, 3),
            other => panic!("expected malformed error, got {other:?}"),
        }
        assert_eq!(count_records(&path).unwrap(), 2);
    }

    #[test]
    fn file_removed_after_open_fails_on_iteration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cuts.jsonl.gz");
        write_manifest(&path, &sample_cuts(2)).unwrap();

        let cuts = LazyJsonl.open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let mut iter = cuts.iter();
        let err = iter.next().unwrap().unwrap_err();

        assert!(err.is_not_found());
        assert!(iter.next().is_none());
    }
}
