use tracing::{debug, info};

use super::WorkflowError;
use super::docker::hss_build_command;
use crate::config::{HostKeyVars, Inventory};
use crate::consts::{GIT_PROVISIONING_KEY, LOCALHOST};
use crate::platform::HssPaths;
use crate::process::CommandRunner;
use crate::stage::StagingDir;

/// Summary of a successful `hss build`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOutcome {
  /// Hosts whose key pairs were staged, in name order.
  pub hosts: Vec<String>,
}

/// Stage every inventory host's key pair plus the shared Git key into
/// `ssh_keys/`, build the `hss` image, then remove `ssh_keys/`.
///
/// `on_host` is called before each host's keys are copied.
pub fn build(
  paths: &HssPaths,
  runner: &dyn CommandRunner,
  mut on_host: impl FnMut(&str),
) -> Result<BuildOutcome, WorkflowError> {
  let inventory = Inventory::load(&paths.inventory_file())?;

  // Resolve every host's key vars before touching the filesystem.
  let mut hosts = Vec::new();
  for host in inventory.hosts().keys() {
    if host == LOCALHOST {
      debug!("skipping localhost");
      continue;
    }
    let vars = HostKeyVars::load(&paths.host_vars_file(host))?;
    hosts.push((host.clone(), vars));
  }

  let staging = StagingDir::create(paths.staging_dir())?;

  staging.stage(&paths.ssh_key(GIT_PROVISIONING_KEY), GIT_PROVISIONING_KEY)?;

  for (host, vars) in &hosts {
    on_host(host);
    staging.stage_host(&paths.ssh_dir, host, vars)?;
  }

  info!(hosts = hosts.len(), staging = %staging.path().display(), "keys staged");

  runner.run(&hss_build_command(), &paths.root)?;

  staging.remove()?;

  Ok(BuildOutcome {
    hosts: hosts.into_iter().map(|(host, _)| host).collect(),
  })
}
