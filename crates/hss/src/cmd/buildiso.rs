//! Implementation of the `hss buildiso` command.

use anyhow::{Context, Result};
use tracing::debug;

use homelab_lib::platform::HssPaths;
use homelab_lib::process::ShellRunner;
use homelab_lib::validate::DistroSet;
use homelab_lib::workflow::{BuildIsoRequest, build_iso};

use crate::output::{print_stat, print_step, print_success};

/// Execute the buildiso command.
///
/// Arguments are validated before anything is written. The ISO ends up in
/// `iso/<distro>/<output_dir>` under the repository root.
pub fn cmd_buildiso(distro: String, output_dir: String, public_key: String) -> Result<()> {
  let request = BuildIsoRequest {
    distro,
    output_dir,
    public_key,
  };
  let distros = DistroSet::default();

  // Surface argument errors before path resolution can fail on something else.
  request.validate(&distros)?;

  let paths = HssPaths::current().context("Failed to resolve paths")?;
  debug!(?paths, ?request, "resolved paths");

  print_step(&format!("Building {} ISO", request.distro));

  let outcome = build_iso(&paths, &distros, &request, &ShellRunner::new()).context("ISO build failed")?;

  print_success(&format!("Built {} ISO", request.distro));
  let mut output = outcome.output_dir.display().to_string();
  if outcome.created_output_dir {
    output.push_str(" (created)");
  }
  print_stat("Output", &output);
  print_stat("SSH key", &outcome.public_key.display().to_string());

  Ok(())
}
