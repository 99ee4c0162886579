//! Portable relative path rendering.

use std::path::{Component, Path};

use crate::error::{ErrorKind, Result};

/// Renders `path` relative to `root` as a forward-slash separated string.
///
/// Only normal components are kept, so the output is identical on every
/// platform. Non-UTF8 components are converted lossily.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use unref_collect::relative_path;
/// assert_eq!(relative_path(Path::new("/site"), Path::new("/site/img/logo.png")).unwrap(), "img/logo.png");
/// assert!(relative_path(Path::new("/site"), Path::new("/other/logo.png")).is_err());
/// ```
pub fn relative(root: &Path, path: &Path) -> Result<String> {
    let Ok(stripped) = path.strip_prefix(root) else {
        exn::bail!(ErrorKind::InvalidPath(path.to_path_buf()));
    };
    let mut segments = Vec::new();
    for component in stripped.components() {
        match component {
            Component::Normal(s) => segments.push(s.to_string_lossy()),
            Component::CurDir => {},
            _ => exn::bail!(ErrorKind::InvalidPath(path.to_path_buf())),
        }
    }
    match segments.is_empty() {
        true => exn::bail!(ErrorKind::InvalidPath(path.to_path_buf())),
        false => Ok(segments.join("/")),
    }
}
