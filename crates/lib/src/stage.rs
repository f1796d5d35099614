//! Key staging.
//!
//! Keys are copied (never moved) out of the SSH directory into locations the
//! Docker builds can see. Every staged artifact is owned by a guard that
//! deletes it when dropped, so a failed copy or a failed `docker` call does
//! not leave private keys behind.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::HostKeyVars;
use crate::validate::{ValidationError, file_exists};

#[derive(Debug, Error)]
pub enum StageError {
  #[error("SSH key does not exist: {}", path.display())]
  KeyNotFound { path: PathBuf },

  #[error("failed to create staging directory {}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to copy {} to {}", from.display(), to.display())]
  Copy {
    from: PathBuf,
    to: PathBuf,
    source: std::io::Error,
  },

  #[error("failed to list {}", path.display())]
  ReadDir { path: PathBuf, source: std::io::Error },

  #[error("failed to remove {}", path.display())]
  Remove { path: PathBuf, source: std::io::Error },

  #[error(transparent)]
  Stat(#[from] ValidationError),
}

pub fn host_public_key_name(host: &str) -> String {
  format!("{host}_public_key.pub")
}

pub fn host_private_key_name(host: &str) -> String {
  format!("{host}_private_key")
}

pub fn distro_key_name(distro: &str) -> String {
  format!("{distro}_provisioning_key.pub")
}

/// Copy `source` to `dest`, failing with [`StageError::KeyNotFound`] when the
/// source is not an existing file.
pub fn copy_key(source: &Path, dest: &Path) -> Result<(), StageError> {
  if !file_exists(source)? {
    return Err(StageError::KeyNotFound {
      path: source.to_path_buf(),
    });
  }

  debug!(from = %source.display(), to = %dest.display(), "staging key");

  fs::copy(source, dest).map_err(|e| StageError::Copy {
    from: source.to_path_buf(),
    to: dest.to_path_buf(),
    source: e,
  })?;

  Ok(())
}

/// A directory that exclusively holds staged keys for one invocation.
///
/// Removed with everything in it when dropped.
#[derive(Debug)]
pub struct StagingDir {
  path: PathBuf,
  armed: bool,
}

impl StagingDir {
  /// Create the directory, discarding anything a previous run left behind.
  pub fn create(path: impl Into<PathBuf>) -> Result<Self, StageError> {
    let path = path.into();

    if path.exists() {
      warn!(path = %path.display(), "removing stale staging directory");
      fs::remove_dir_all(&path).map_err(|e| StageError::Remove {
        path: path.clone(),
        source: e,
      })?;
    }

    fs::create_dir_all(&path).map_err(|e| StageError::CreateDir {
      path: path.clone(),
      source: e,
    })?;

    Ok(Self { path, armed: true })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Copy `source` into the directory as `name`.
  pub fn stage(&self, source: &Path, name: &str) -> Result<PathBuf, StageError> {
    let dest = self.path.join(name);
    copy_key(source, &dest)?;
    Ok(dest)
  }

  /// Stage a host's key pair under its deterministic names.
  ///
  /// The public key is checked first, so a host missing both keys reports the
  /// public one.
  pub fn stage_host(&self, ssh_dir: &Path, host: &str, vars: &HostKeyVars) -> Result<(), StageError> {
    self.stage(&ssh_dir.join(&vars.public_key_path), &host_public_key_name(host))?;
    self.stage(&ssh_dir.join(&vars.private_key_path), &host_private_key_name(host))?;
    Ok(())
  }

  /// Names of the files currently staged, sorted.
  #[cfg(test)]
  pub(crate) fn entries(&self) -> Result<Vec<String>, StageError> {
    let read = fs::read_dir(&self.path).map_err(|e| StageError::ReadDir {
      path: self.path.clone(),
      source: e,
    })?;

    let mut names: Vec<String> = read
      .filter_map(|entry| entry.ok())
      .map(|entry| entry.file_name().to_string_lossy().into_owned())
      .collect();
    names.sort();
    Ok(names)
  }

  /// Remove the directory now, reporting failure instead of logging it.
  pub fn remove(mut self) -> Result<(), StageError> {
    self.armed = false;
    remove_dir(&self.path)
  }
}

impl Drop for StagingDir {
  fn drop(&mut self) {
    if self.armed
      && let Err(e) = remove_dir(&self.path)
    {
      warn!(error = %e, "failed to clean up staging directory");
    }
  }
}

fn remove_dir(path: &Path) -> Result<(), StageError> {
  match fs::remove_dir_all(path) {
    Ok(()) => Ok(()),
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
    Err(e) => Err(StageError::Remove {
      path: path.to_path_buf(),
      source: e,
    }),
  }
}

/// A single staged key file, deleted when dropped.
#[derive(Debug)]
pub struct StagedFile {
  path: PathBuf,
  armed: bool,
}

impl StagedFile {
  pub fn copy(source: &Path, dest: impl Into<PathBuf>) -> Result<Self, StageError> {
    let path = dest.into();
    copy_key(source, &path)?;
    Ok(Self { path, armed: true })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  pub fn remove(mut self) -> Result<(), StageError> {
    self.armed = false;
    remove_file(&self.path)
  }
}

impl Drop for StagedFile {
  fn drop(&mut self) {
    if self.armed
      && let Err(e) = remove_file(&self.path)
    {
      warn!(error = %e, "failed to clean up staged key");
    }
  }
}

fn remove_file(path: &Path) -> Result<(), StageError> {
  match fs::remove_file(path) {
    Ok(()) => Ok(()),
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
    Err(e) => Err(StageError::Remove {
      path: path.to_path_buf(),
      source: e,
    }),
  }
}
