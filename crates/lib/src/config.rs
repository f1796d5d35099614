//! Typed loaders for the YAML files the workflows consume.
//!
//! Schemas are structurally permissive: absent keys fall back to their
//! `Default` value, only content that cannot map onto the types is rejected.
//! Nothing is cached, so every call re-reads the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read {}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to parse {}", path.display())]
  Parse { path: PathBuf, source: serde_yaml::Error },
}

/// A machine from the Ansible inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostEntry {
  pub ansible_host: String,
  pub ansible_port: Option<u16>,
  pub primary_mac: Option<String>,
  pub ansible_user: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HostGroup {
  pub hosts: BTreeMap<String, HostEntry>,
}

/// `inventory.yml`: every host lives under the `all` group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Inventory {
  pub all: HostGroup,
}

impl Inventory {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    load_yaml(path)
  }

  /// Hosts keyed by hostname, in name order.
  pub fn hosts(&self) -> &BTreeMap<String, HostEntry> {
    &self.all.hosts
  }
}

/// Per-host key locations, relative to the SSH directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostKeyVars {
  pub private_key_path: String,
  pub public_key_path: String,
}

impl HostKeyVars {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    load_yaml(path)
  }
}

/// Key filenames used when provisioning a distro's live image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DistroKeyConfig {
  pub private_ssh_key: String,
  pub public_ssh_key: String,
}

/// `liveconfig.yml`: distro name to its provisioning keys.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LiveConfig(pub BTreeMap<String, DistroKeyConfig>);

impl LiveConfig {
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    // An empty document deserializes to unit, not an empty map.
    let config: Option<Self> = load_yaml(path)?;
    Ok(config.unwrap_or_default())
  }

  pub fn distro(&self, name: &str) -> Option<&DistroKeyConfig> {
    self.0.get(name)
  }
}

/// Read `path` and deserialize it as YAML.
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
  debug!(path = %path.display(), "loading yaml");

  let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
    path: path.to_path_buf(),
    source,
  })
}
