//! Layered configuration for the unused asset scan.
//!
//! Sources are merged in increasing order of precedence:
//!
//! 1. Built-in defaults ([`Config::default`]).
//! 2. The user configuration file, `config.toml` in the platform config
//!    directory (e.g. `~/.config/unref/config.toml`).
//! 3. Either `unref.toml` in the working directory, or a file passed with
//!    [`Loader::with_file`].
//! 4. Environment variables prefixed with `UNREF_` (`UNREF_PREVIEW=50`).
//!
//! Missing files at steps 2 and 3 are skipped; an explicitly requested file
//! must exist.

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;
use unref_collect::DEFAULT_EXCLUDED_DIRS;

pub const ENV_PREFIX: &str = "UNREF_";
pub const PROJECT_FILE: &str = "unref.toml";
pub const USER_FILE: &str = "config.toml";
pub const DEFAULT_OUTPUT: &str = "unused_files.txt";
pub const DEFAULT_PREVIEW: usize = 20;
pub const DEFAULT_MEDIA_EXTENSIONS: &[&str] =
    &[".jpg", ".jpeg", ".png", ".gif", ".svg", ".webp", ".mp4", ".mov", ".avi", ".pdf"];
pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &[".html", ".css", ".js", ".php", ".scss"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project directory to scan.
    pub root: PathBuf,
    /// Where the unused list is written, relative to the working directory.
    pub output: PathBuf,
    /// How many unused paths to print to the console.
    pub preview: usize,
    pub media_extensions: Vec<String>,
    pub source_extensions: Vec<String>,
    /// Directory names that are never descended into.
    pub excluded_dirs: Vec<String>,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT),
            preview: DEFAULT_PREVIEW,
            media_extensions: DEFAULT_MEDIA_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            source_extensions: DEFAULT_SOURCE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.media_extensions.iter().all(|e| e.trim().is_empty()) {
            exn::bail!(ErrorKind::EmptyList("media_extensions"));
        }
        if self.source_extensions.iter().all(|e| e.trim().is_empty()) {
            exn::bail!(ErrorKind::EmptyList("source_extensions"));
        }
        Ok(())
    }
}

/// Builds a [`Config`] from the layered sources described in the crate docs.
#[derive(Debug, Clone)]
pub struct Loader {
    user_file: Option<PathBuf>,
    file: Option<PathBuf>,
}
impl Default for Loader {
    fn default() -> Self {
        let user_file = ProjectDirs::from("", "", "unref").map(|dirs| dirs.config_dir().join(USER_FILE));
        Self { user_file, file: None }
    }
}
impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `path` instead of looking for `unref.toml` in the working directory.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Ignore the per-user configuration file.
    pub fn without_user_file(mut self) -> Self {
        self.user_file = None;
        self
    }

    #[instrument(skip(self))]
    pub fn load(self) -> Result<Config> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(user_file) = &self.user_file {
            tracing::debug!(path = %user_file.display(), "Merging user configuration");
            figment = figment.merge(Toml::file_exact(user_file));
        }
        figment = match &self.file {
            Some(file) => {
                if !file.is_file() {
                    exn::bail!(ErrorKind::NotFound(file.clone()));
                }
                figment.merge(Toml::file_exact(file))
            },
            None => figment.merge(Toml::file_exact(Path::new(PROJECT_FILE))),
        };
        let config: Config = figment.merge(Env::prefixed(ENV_PREFIX)).extract().or_raise(|| ErrorKind::Invalid)?;
        config.validate()?;
        Ok(config)
    }
}
