//! Argument checks that run before any workflow touches the filesystem.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consts::DEFAULT_DISTROS;

#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("{field} cannot be empty")]
  MissingArgument { field: &'static str },

  #[error("invalid distro: {name} (expected one of: {allowed})")]
  InvalidDistro { name: String, allowed: String },

  #[error("failed to stat {}", path.display())]
  Stat { path: PathBuf, source: io::Error },
}

/// Allow-list of distros the ISO builder supports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistroSet(BTreeSet<String>);

impl DistroSet {
  pub fn new<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self(names.into_iter().map(Into::into).collect())
  }

  pub fn contains(&self, name: &str) -> bool {
    self.0.contains(name)
  }

  pub fn check(&self, name: &str) -> Result<(), ValidationError> {
    if self.contains(name) {
      Ok(())
    } else {
      Err(ValidationError::InvalidDistro {
        name: name.to_string(),
        allowed: self.to_string(),
      })
    }
  }
}

impl Default for DistroSet {
  fn default() -> Self {
    Self::new(DEFAULT_DISTROS.iter().copied())
  }
}

impl std::fmt::Display for DistroSet {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let names: Vec<&str> = self.0.iter().map(String::as_str).collect();
    write!(f, "{}", names.join(", "))
  }
}

/// Fail with [`ValidationError::MissingArgument`] when `value` is empty.
pub fn require_non_empty(value: &str, field: &'static str) -> Result<(), ValidationError> {
  if value.is_empty() {
    return Err(ValidationError::MissingArgument { field });
  }
  Ok(())
}

/// True if `path` is an existing regular file (or a link to one).
///
/// A missing path is `Ok(false)`; any other stat failure is an error.
pub fn file_exists(path: &Path) -> Result<bool, ValidationError> {
  stat(path).map(|meta| meta.is_some_and(|m| !m.is_dir()))
}

/// True if `path` is an existing directory.
pub fn dir_exists(path: &Path) -> Result<bool, ValidationError> {
  stat(path).map(|meta| meta.is_some_and(|m| m.is_dir()))
}

fn stat(path: &Path) -> Result<Option<std::fs::Metadata>, ValidationError> {
  match std::fs::metadata(path) {
    Ok(meta) => Ok(Some(meta)),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
    Err(source) => Err(ValidationError::Stat {
      path: path.to_path_buf(),
      source,
    }),
  }
}
