//! Summarizing and persisting the unused media list.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use exn::ResultExt;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

const RULE_WIDTH: usize = 60;

/// The outcome of a scan: every collected media file is in exactly one of
/// `used` or `unused`, both sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    sources: usize,
    skipped: usize,
    used: Vec<String>,
    unused: Vec<String>,
}
impl Report {
    pub fn new(sources: usize, skipped: usize, mut used: Vec<String>, mut unused: Vec<String>) -> Self {
        used.sort();
        unused.sort();
        Self { sources, skipped, used, unused }
    }

    /// Total number of media files considered.
    pub fn media(&self) -> usize {
        self.used.len() + self.unused.len()
    }

    /// Number of source files that were read and scanned.
    pub fn sources(&self) -> usize {
        self.sources
    }

    /// Number of source files that could not be read.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn used(&self) -> &[String] {
        &self.used
    }

    pub fn unused(&self) -> &[String] {
        &self.unused
    }

    /// The first `limit` unused paths.
    pub fn preview(&self, limit: usize) -> &[String] {
        &self.unused[..limit.min(self.unused.len())]
    }

    /// Writes the human-readable summary, followed by a preview of at most
    /// `limit` unused paths.
    pub fn render(&self, out: &mut impl Write, limit: usize) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out)?;
        writeln!(out, "{rule}")?;
        writeln!(out, "Total media files: {}", self.media())?;
        writeln!(out, "Source files scanned: {}", self.sources)?;
        if self.skipped > 0 {
            writeln!(out, "Unreadable source files: {}", self.skipped)?;
        }
        writeln!(out, "Used files: {}", self.used.len())?;
        writeln!(out, "Unused files: {}", self.unused.len())?;
        writeln!(out, "{rule}")?;
        if self.unused.is_empty() {
            writeln!(out, "No unused files found!")?;
            return Ok(());
        }
        let preview = self.preview(limit);
        if !preview.is_empty() {
            writeln!(out)?;
            writeln!(out, "First {} unused files:", preview.len())?;
            for path in preview {
                writeln!(out, "  {path}")?;
            }
        }
        Ok(())
    }

    /// Persists the unused list, one path per line, replacing any existing
    /// file. Nothing is written when there are no unused files; returns
    /// whether the file was written.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display(), count = self.unused.len()))]
    pub fn write_unused(&self, path: impl AsRef<Path>) -> Result<bool> {
        let path = path.as_ref();
        if self.unused.is_empty() {
            return Ok(false);
        }
        let mut contents = String::new();
        for unused in &self.unused {
            contents.push_str(unused);
            contents.push('\n');
        }
        fs::write(path, contents).or_raise(|| ErrorKind::Report(path.to_path_buf()))?;
        tracing::debug!("Wrote unused file list");
        Ok(true)
    }
}
