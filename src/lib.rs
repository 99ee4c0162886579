//! Find media assets in a static website project that no source file
//! references.
//!
//! [`run`] collects media files (images, video, PDFs) and source files (HTML,
//! CSS, SCSS, JavaScript, PHP) under the configured root, then marks a media
//! file as used when any source refers to it. The remainder is reported in a
//! [`Report`] for manual cleanup; nothing is ever deleted.

mod analyze;
pub mod error;
mod report;

pub use crate::analyze::{Analysis, run};
pub use crate::report::Report;
pub use unref_config::{Config, Loader};
