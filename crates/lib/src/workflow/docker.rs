//! Docker command lines.
//!
//! Arguments are interpolated as-is; they come from local configuration and
//! flags, not from untrusted input.

use std::path::Path;

use crate::consts::{DOCKER_PLATFORM, HSS_IMAGE};

/// Build the provisioning helper image from the repository root.
pub fn hss_build_command() -> String {
  format!("docker build --platform {DOCKER_PLATFORM} -t {HSS_IMAGE} .")
}

/// Run the provisioning helper interactively with the Git key injected.
pub fn hss_run_command(git_ssh_key: &str) -> String {
  format!("docker run --rm --platform {DOCKER_PLATFORM} -it -e GIT_SSH_KEY={git_ssh_key} {HSS_IMAGE}:latest")
}

pub fn iso_image(distro: &str) -> String {
  format!("{distro}-iso-builder")
}

/// Build a distro's ISO builder image from `iso/<distro>`.
pub fn iso_build_command(distro: &str) -> String {
  format!("docker build --platform {DOCKER_PLATFORM} -t {} .", iso_image(distro))
}

/// Run a distro's ISO builder with `output_dir` mounted at `/output`.
pub fn iso_run_command(distro: &str, output_dir: &Path) -> String {
  format!(
    "docker run --platform {DOCKER_PLATFORM} --privileged --rm -v {}:/output {}",
    output_dir.display(),
    iso_image(distro)
  )
}
