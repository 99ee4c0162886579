//! Deciding whether a media file is referenced by a source file.
//!
//! Matching errs on the side of "used". A media file counts as used by a
//! source file when either:
//!
//! 1. **A reference matches it.** The normalized media path equals the
//!    reference, ends with the reference, or shares its final path segment
//!    with the reference.
//! 2. **Its basename appears anywhere in the source.** The lower-cased file
//!    name is searched for as a plain substring of the lower-cased content,
//!    catching references hidden in script logic or templates.
//!
//! Rule 2 will also match short names that happen to occur in unrelated text
//! (`a.png` inside `data.png`). That is an accepted limitation.

use memchr::memmem;

use crate::normalize::{basename, normalize};
use crate::references::References;

/// A media asset eligible for the unused check, identified by its path
/// relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaFile {
    path: String,
    normalized: String,
    basename: String,
}
impl MediaFile {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let normalized = normalize(&path);
        let basename = basename(&normalized).to_string();
        Self { path, normalized, basename }
    }

    /// The path exactly as collected.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Lower-cased final path segment.
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// Rule 1: exact, suffix, or basename match against any reference.
    ///
    /// ```rust
    /// use unref_extract::{MediaFile, References};
    /// let media = MediaFile::new("assets/img/bg.jpg");
    /// assert!(media.is_referenced_by(&References::extract("url('img/bg.jpg')")));
    /// assert!(media.is_referenced_by(&References::extract("url('../elsewhere/BG.jpg')")));
    /// assert!(!media.is_referenced_by(&References::extract("url('img/bg.png')")));
    /// ```
    pub fn is_referenced_by(&self, references: &References) -> bool {
        references.contains(&self.normalized)
            || references.contains_basename(&self.basename)
            || references.iter().any(|reference| self.normalized.ends_with(reference))
    }

    /// Rule 2: the basename occurs somewhere in already lower-cased content.
    pub fn appears_in(&self, lowered_content: &str) -> bool {
        memmem::find(lowered_content.as_bytes(), self.basename.as_bytes()).is_some()
    }

    /// Applies both rules against one source file.
    pub fn is_used_by(&self, source: &SourceText) -> bool {
        self.is_referenced_by(&source.references) || self.appears_in(&source.lowered)
    }
}

/// One source file prepared for matching: its extracted references plus the
/// lower-cased raw content for the substring fallback.
#[derive(Debug, Clone)]
pub struct SourceText {
    references: References,
    lowered: String,
}
impl SourceText {
    pub fn new(content: &str) -> Self {
        Self {
            references: References::extract(content),
            lowered: content.to_lowercase(),
        }
    }

    pub fn references(&self) -> &References {
        &self.references
    }
}
