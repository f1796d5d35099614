/// Environment variable overriding the repository root (defaults to `..`).
pub const ROOT_ENV: &str = "HSS_ROOT";

/// Default repository root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "..";

/// Staging directory created in the working directory by `hss build`.
pub const STAGING_DIR_NAME: &str = "ssh_keys";

/// Pseudo-host that never gets keys staged.
pub const LOCALHOST: &str = "localhost";

/// Shared key staged alongside the per-host keys for the provisioning image.
pub const GIT_PROVISIONING_KEY: &str = "git_provisioning_key";

/// Default value of `buildiso -s`. Any other value overrides the live config.
pub const DEFAULT_PUBLIC_KEY_NAME: &str = "provisioning_key.pub";

/// Default value of `buildiso -o`.
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Default value of `run -g`: the variable holding the Git SSH key.
pub const DEFAULT_GIT_KEY_ENV: &str = "PROVISIONER_GIT_SSH_KEY";

/// Distros accepted by `buildiso` unless a caller supplies its own set.
pub const DEFAULT_DISTROS: &[&str] = &["arch", "debian", "fedora", "ubuntu"];

/// Image tag produced by `hss build`.
pub const HSS_IMAGE: &str = "hss";

/// Platform passed to every Docker invocation.
pub const DOCKER_PLATFORM: &str = "linux/amd64";
