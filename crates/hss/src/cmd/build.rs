//! Implementation of the `hss build` command.

use anyhow::{Context, Result};
use tracing::debug;

use homelab_lib::platform::HssPaths;
use homelab_lib::process::ShellRunner;
use homelab_lib::workflow::build;

use crate::output::{print_step, print_success};

/// Execute the build command.
///
/// Copies the Git provisioning key and every inventory host's key pair into
/// `ssh_keys/`, builds the `hss` image from the repository root, and removes
/// `ssh_keys/` again.
pub fn cmd_build() -> Result<()> {
  let paths = HssPaths::current().context("Failed to resolve paths")?;
  debug!(?paths, "resolved paths");

  let outcome = build(&paths, &ShellRunner::new(), |host| {
    print_step(&format!("Copying SSH keys for {host}"));
  })
  .context("Build failed")?;

  print_success(&format!("Built hss image with keys for {} host(s)", outcome.hosts.len()));

  Ok(())
}
