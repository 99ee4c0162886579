//! Asset reference extraction and matching.
//!
//! [`References::extract`] pulls path-like strings out of HTML, CSS, SCSS,
//! JavaScript or PHP text using a fixed set of patterns, and
//! [`MediaFile::is_used_by`] decides whether a media asset is referenced by a
//! prepared [`SourceText`].

mod consts;
mod media;
mod normalize;
mod references;

pub use crate::media::{MediaFile, SourceText};
pub use crate::normalize::normalize;
pub use crate::references::References;
