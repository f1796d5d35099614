use std::env::{self, VarError};

use tracing::{debug, warn};

use super::WorkflowError;
use super::docker::hss_run_command;
use crate::consts::DEFAULT_GIT_KEY_ENV;
use crate::platform::HssPaths;
use crate::process::CommandRunner;

/// Arguments of `hss run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
  /// Name of the environment variable holding the Git SSH key.
  pub git_key_env: String,
}

impl Default for RunRequest {
  fn default() -> Self {
    Self {
      git_key_env: DEFAULT_GIT_KEY_ENV.to_string(),
    }
  }
}

/// Start the `hss` container with the Git SSH key from `git_key_env`.
///
/// An unset or non-UTF-8 variable forwards an empty key; the container
/// decides what to do without one.
pub fn run(paths: &HssPaths, request: &RunRequest, runner: &dyn CommandRunner) -> Result<(), WorkflowError> {
  let key = match env::var(&request.git_key_env) {
    Ok(key) if !key.is_empty() => key,
    Ok(_) | Err(VarError::NotPresent) => {
      warn!(var = %request.git_key_env, "git SSH key variable is unset or empty");
      String::new()
    }
    Err(VarError::NotUnicode(_)) => {
      warn!(var = %request.git_key_env, "git SSH key variable is not valid UTF-8, ignoring it");
      String::new()
    }
  };
  debug!(var = %request.git_key_env, "forwarding git SSH key");

  runner.run(&hss_run_command(&key), &paths.work_dir)?;
  Ok(())
}
