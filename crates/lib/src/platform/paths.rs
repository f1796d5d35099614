use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::consts::{DEFAULT_ROOT, ROOT_ENV, STAGING_DIR_NAME};

#[derive(Debug, Error)]
pub enum PathsError {
  #[error("failed to determine home directory: HOME is not set")]
  NoHomeDirectory,

  #[error("failed to read current directory")]
  CurrentDir(#[source] std::io::Error),
}

/// Returns the user's home directory
pub fn home_dir() -> Result<PathBuf, PathsError> {
  match std::env::var_os("HOME") {
    Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
    _ => Err(PathsError::NoHomeDirectory),
  }
}

/// Returns the directory holding the operator's SSH keys (`~/.ssh`)
pub fn ssh_dir() -> Result<PathBuf, PathsError> {
  Ok(home_dir()?.join(".ssh"))
}

/// Every location the provisioning workflows read from or write to.
///
/// The layout mirrors the homelab repository: `hss` runs from its own
/// directory and reaches `ansible/`, `iso/` and `liveconfig.yml` through the
/// repository root one level up.
#[derive(Debug, Clone)]
pub struct HssPaths {
  /// Directory `hss` was invoked from. Holds the `ssh_keys/` staging directory.
  pub work_dir: PathBuf,
  /// Repository root. Also the Docker build context for `hss build`.
  pub root: PathBuf,
  /// Source directory for every key that gets staged.
  pub ssh_dir: PathBuf,
}

impl HssPaths {
  pub fn new(work_dir: impl Into<PathBuf>, root: impl Into<PathBuf>, ssh_dir: impl Into<PathBuf>) -> Self {
    Self {
      work_dir: work_dir.into(),
      root: root.into(),
      ssh_dir: ssh_dir.into(),
    }
  }

  /// Resolve paths from the process environment.
  ///
  /// `HSS_ROOT` overrides the repository root; relative values (including the
  /// `..` default) are taken relative to the current directory.
  pub fn current() -> Result<Self, PathsError> {
    let work_dir = std::env::current_dir().map_err(PathsError::CurrentDir)?;
    let root = std::env::var_os(ROOT_ENV)
      .filter(|v| !v.is_empty())
      .map(PathBuf::from)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
    let root = work_dir.join(root);

    Ok(Self::new(work_dir, root, ssh_dir()?))
  }

  pub fn inventory_file(&self) -> PathBuf {
    self.root.join("ansible").join("inventory").join("inventory.yml")
  }

  pub fn host_vars_file(&self, host: &str) -> PathBuf {
    self
      .root
      .join("ansible")
      .join("inventory")
      .join("host_vars")
      .join(format!("{host}.yml"))
  }

  pub fn live_config_file(&self) -> PathBuf {
    self.root.join("liveconfig.yml")
  }

  pub fn staging_dir(&self) -> PathBuf {
    self.work_dir.join(STAGING_DIR_NAME)
  }

  /// Docker build context for a distro's ISO builder (`iso/<distro>`)
  pub fn iso_dir(&self, distro: &str) -> PathBuf {
    self.root.join("iso").join(distro)
  }

  /// Where a distro's ISO lands (`iso/<distro>/<output_dir>`)
  ///
  /// An absolute `output_dir` is still placed under `iso/<distro>`.
  pub fn iso_output_dir(&self, distro: &str, output_dir: &str) -> PathBuf {
    let relative: PathBuf = Path::new(output_dir)
      .components()
      .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
      .collect();
    self.iso_dir(distro).join(relative)
  }

  /// Path of a key file named relative to the SSH directory.
  pub fn ssh_key(&self, name: impl AsRef<Path>) -> PathBuf {
    self.ssh_dir.join(name)
  }
}
