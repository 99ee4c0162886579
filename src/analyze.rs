//! Cross-referencing collected media files against every source file.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use exn::ResultExt;
use tracing::instrument;
use unref_collect::Collector;
use unref_config::Config;
use unref_extract::{MediaFile, SourceText};

use crate::error::{ErrorKind, Result};
use crate::report::Report;

/// Accumulates the set of used media files across any number of source
/// files.
///
/// A media file, once marked used, stays used, so the order in which sources
/// are scanned never changes the outcome.
#[derive(Debug)]
pub struct Analysis {
    media: Vec<MediaFile>,
    used: Vec<bool>,
    sources: usize,
    skipped: usize,
}
impl Analysis {
    /// Duplicate paths are collapsed.
    pub fn new<I, S>(media: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paths: BTreeSet<String> = media.into_iter().map(Into::into).collect();
        let media: Vec<_> = paths.into_iter().map(MediaFile::new).collect();
        let used = vec![false; media.len()];
        Self { media, used, sources: 0, skipped: 0 }
    }

    /// Marks every media file that `content` refers to. Returns how many were
    /// newly marked.
    pub fn scan_source(&mut self, path: &str, content: &str) -> usize {
        self.sources += 1;
        let source = SourceText::new(content);
        let mut marked = 0;
        for (media, used) in self.media.iter().zip(self.used.iter_mut()) {
            if !*used && media.is_used_by(&source) {
                *used = true;
                marked += 1;
            }
        }
        tracing::debug!(source = path, references = source.references().len(), marked, "Scanned source file");
        marked
    }

    /// Reads `root/relative` and scans it.
    ///
    /// Read failures are logged and the file contributes nothing; returns
    /// `false` in that case. Bytes that aren't valid UTF-8 are dropped.
    pub fn scan_file(&mut self, root: &Path, relative: &str) -> bool {
        let bytes = match fs::read(root.join(relative)) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(source = relative, error = %err, "Error reading source file; skipping");
                self.skipped += 1;
                return false;
            },
        };
        self.scan_source(relative, &decode(&bytes));
        true
    }

    pub fn finish(self) -> Report {
        let mut used = Vec::new();
        let mut unused = Vec::new();
        for (media, is_used) in self.media.into_iter().zip(self.used) {
            match is_used {
                true => used.push(media.path().to_string()),
                false => unused.push(media.path().to_string()),
            }
        }
        Report::new(self.sources, self.skipped, used, unused)
    }
}

/// Decodes UTF-8, discarding invalid sequences instead of replacing them.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    let mut chunks = bytes.utf8_chunks();
    if let Some(chunk) = chunks.next()
        && chunk.invalid().is_empty()
    {
        return Cow::Borrowed(chunk.valid());
    }
    Cow::Owned(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect())
}

/// Collects media and source files under the configured root and works out
/// which media files nothing references.
///
/// # Errors
///
/// Fails if the root directory can't be listed. Individual unreadable source
/// files are skipped.
#[instrument(skip(config), fields(root = %config.root.display()))]
pub fn run(config: &Config) -> Result<Report> {
    let root = config.root.as_path();
    let media = Collector::new(&config.media_extensions)
        .with_excluded(config.excluded_dirs.iter().cloned())
        .collect(root)
        .or_raise(|| ErrorKind::Collect(root.to_path_buf()))?;
    tracing::info!(count = media.len(), "Found media files");
    let sources = Collector::new(&config.source_extensions)
        .with_excluded(config.excluded_dirs.iter().cloned())
        .collect(root)
        .or_raise(|| ErrorKind::Collect(root.to_path_buf()))?;
    tracing::info!(count = sources.len(), "Found source files");

    let mut analysis = Analysis::new(media);
    for source in &sources {
        analysis.scan_file(root, source);
    }
    Ok(analysis.finish())
}
