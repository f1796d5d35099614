//! Implementation of the `hss run` command.

use anyhow::{Context, Result};

use homelab_lib::platform::HssPaths;
use homelab_lib::process::ShellRunner;
use homelab_lib::workflow::{RunRequest, run};

/// Execute the run command.
///
/// `git_key` names the environment variable to read, not the key itself.
pub fn cmd_run(git_key: String) -> Result<()> {
  let paths = HssPaths::current().context("Failed to resolve paths")?;
  let request = RunRequest { git_key_env: git_key };

  run(&paths, &request, &ShellRunner::new()).context("Run failed")?;

  Ok(())
}
