use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use super::WorkflowError;
use super::docker::{iso_build_command, iso_run_command};
use crate::config::LiveConfig;
use crate::consts::{DEFAULT_OUTPUT_DIR, DEFAULT_PUBLIC_KEY_NAME};
use crate::platform::HssPaths;
use crate::process::CommandRunner;
use crate::stage::{StagedFile, distro_key_name};
use crate::validate::{DistroSet, dir_exists, require_non_empty};

/// Arguments of `hss buildiso`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildIsoRequest {
  pub distro: String,
  /// Relative to `iso/<distro>`.
  pub output_dir: String,
  /// Public key filename in the SSH directory. The default name defers to
  /// the live config.
  pub public_key: String,
}

impl BuildIsoRequest {
  pub fn new(distro: impl Into<String>) -> Self {
    Self {
      distro: distro.into(),
      output_dir: DEFAULT_OUTPUT_DIR.to_string(),
      public_key: DEFAULT_PUBLIC_KEY_NAME.to_string(),
    }
  }

  /// Checks that need no filesystem access.
  pub fn validate(&self, distros: &DistroSet) -> Result<(), WorkflowError> {
    distros.check(&self.distro)?;
    require_non_empty(&self.public_key, "public SSH key")?;
    require_non_empty(&self.output_dir, "output directory")?;
    Ok(())
  }

  /// Key filename to stage: an explicit `-s` wins, otherwise the live config
  /// entry for the distro, otherwise the default name.
  pub fn key_name(&self, config: &LiveConfig) -> String {
    if self.public_key != DEFAULT_PUBLIC_KEY_NAME {
      return self.public_key.clone();
    }

    config
      .distro(&self.distro)
      .map(|c| c.public_ssh_key.as_str())
      .filter(|name| !name.is_empty())
      .unwrap_or(self.public_key.as_str())
      .to_string()
  }
}

/// Summary of a successful `hss buildiso`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildIsoOutcome {
  pub output_dir: PathBuf,
  pub public_key: PathBuf,
  /// Whether the output directory had to be created.
  pub created_output_dir: bool,
}

/// Build a distro's ISO builder image and run it, writing the ISO into
/// `iso/<distro>/<output_dir>`.
///
/// The chosen public key is staged as `iso/<distro>/<distro>_provisioning_key.pub`
/// for the image build and removed afterwards.
pub fn build_iso(
  paths: &HssPaths,
  distros: &DistroSet,
  request: &BuildIsoRequest,
  runner: &dyn CommandRunner,
) -> Result<BuildIsoOutcome, WorkflowError> {
  request.validate(distros)?;

  let distro = request.distro.as_str();
  let output_dir = paths.iso_output_dir(distro, &request.output_dir);

  let created_output_dir = !dir_exists(&output_dir)?;
  if created_output_dir {
    info!(path = %output_dir.display(), "creating output directory");
    fs::create_dir_all(&output_dir).map_err(|source| WorkflowError::DirectoryCreation {
      path: output_dir.clone(),
      source,
    })?;
  }

  let config = LiveConfig::load(&paths.live_config_file())?;
  let public_key = paths.ssh_key(request.key_name(&config));
  info!(path = %public_key.display(), "using SSH public key");

  let context = paths.iso_dir(distro);
  let staged = StagedFile::copy(&public_key, context.join(distro_key_name(distro)))?;
  debug!(path = %staged.path().display(), "staged provisioning key");

  runner.run(&iso_build_command(distro), &context)?;

  let mount = dunce::canonicalize(&output_dir).map_err(|source| WorkflowError::ResolvePath {
    path: output_dir.clone(),
    source,
  })?;
  runner.run(&iso_run_command(distro, &mount), &context)?;

  staged.remove()?;

  Ok(BuildIsoOutcome {
    output_dir: mount,
    public_key,
    created_output_dir,
  })
}
