//! Recursive, extension-filtered directory walk.

use std::collections::BTreeSet;
use std::fs::{self, DirEntry};
use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::error::{ErrorKind, Result};
use crate::path::relative as relative_path;

/// Directory names that are never descended into.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "node_modules", "__pycache__", ".vscode", ".idea"];

enum WalkEntry {
    File(PathBuf),
    Descend(PathBuf),
    Skip,
}

/// Collects files under a root directory whose names end with one of a set of
/// extensions.
///
/// # Examples
///
/// ```no_run
/// use unref_collect::Collector;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let images = Collector::new([".png", "jpg"]).collect("/path/to/site")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Collector {
    /// Lower-cased suffixes, each with a leading dot.
    extensions: Vec<String>,
    excluded: BTreeSet<String>,
}
impl Collector {
    /// Extensions are matched case-insensitively and may be given with or
    /// without their leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().to_lowercase())
            .filter(|ext| !ext.is_empty() && ext != ".")
            .map(|ext| match ext.starts_with('.') {
                true => ext,
                false => format!(".{ext}"),
            })
            .collect();
        Self {
            extensions,
            excluded: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Replace the set of directory names that are pruned from the walk.
    pub fn with_excluded<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Case-insensitive suffix match against a file name (not a full path).
    pub fn matches(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }

    fn is_excluded(&self, dir_name: &str) -> bool {
        self.excluded.contains(dir_name)
    }

    /// Walk `root` and return every matching file as a forward-slash path
    /// relative to `root`, sorted and deduplicated.
    ///
    /// # Errors
    ///
    /// Fails if `root` is missing, is not a directory, or cannot be read.
    /// Unreadable directories *below* the root are logged and skipped.
    #[instrument(skip(self, root), fields(root = %root.as_ref().display()))]
    pub fn collect(&self, root: impl AsRef<Path>) -> Result<Vec<String>> {
        let root = root.as_ref();
        let metadata = fs::metadata(root).map_err(|e| ErrorKind::from_io(e, root))?;
        if !metadata.is_dir() {
            exn::bail!(ErrorKind::NotADirectory(root.to_path_buf()));
        }
        // The root itself must be listable; anything deeper is best-effort.
        let entries = fs::read_dir(root).map_err(|e| ErrorKind::from_io(e, root))?;

        let mut found = BTreeSet::new();
        let mut stack = Vec::new();
        self.drain(root, entries, &mut stack, &mut found)?;
        while let Some(current) = stack.pop() {
            let entries = match fs::read_dir(&current) {
                Ok(entries) => entries,
                Err(err) => {
                    tracing::warn!(path = %current.display(), error = %err, "Skipping unreadable directory");
                    continue;
                },
            };
            self.drain(root, entries, &mut stack, &mut found)?;
        }
        tracing::debug!(count = found.len(), "Collected files");
        Ok(found.into_iter().collect())
    }

    fn drain(
        &self,
        root: &Path,
        entries: fs::ReadDir,
        stack: &mut Vec<PathBuf>,
        found: &mut BTreeSet<String>,
    ) -> Result<()> {
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "Skipping unreadable directory entry");
                    continue;
                },
            };
            match self.process_entry(entry) {
                WalkEntry::File(path) => {
                    found.insert(relative_path(root, &path)?);
                },
                WalkEntry::Descend(dir) => stack.push(dir),
                WalkEntry::Skip => {},
            }
        }
        Ok(())
    }

    fn process_entry(&self, entry: DirEntry) -> WalkEntry {
        let path = entry.path();
        // DirEntry::file_type doesn't traverse symlinks.
        let Ok(file_type) = entry.file_type() else {
            return WalkEntry::Skip;
        };
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if file_type.is_dir() {
            if self.is_excluded(&name) {
                tracing::debug!(path = %path.display(), "Pruning excluded directory");
                return WalkEntry::Skip;
            }
            return WalkEntry::Descend(path);
        }
        if !self.matches(&name) {
            return WalkEntry::Skip;
        }
        if file_type.is_file() {
            return WalkEntry::File(path);
        }
        // Links to files are collected; links to directories are not followed.
        if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(target) if target.is_file() => return WalkEntry::File(path),
                Ok(_) => {},
                Err(err) => tracing::debug!(path = %path.display(), error = %err, "Skipping dangling symlink"),
            }
        }
        WalkEntry::Skip
    }
}
