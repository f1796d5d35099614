//! homelab-lib: provisioning pipeline behind the `hss` helper.
//!
//! The pipeline stages SSH keys out of the Ansible inventory into a throwaway
//! directory and hands them to a Docker build:
//! - `config`: typed loaders for the inventory, host vars and live config
//! - `validate`: distro allow-list and argument checks
//! - `stage`: scoped staging directory and key copying
//! - `process`: synchronous shell runner with pass-through stdio
//! - `workflow`: `build`, `buildiso` and `run` orchestration

pub mod config;
pub mod consts;
pub mod platform;
pub mod process;
pub mod stage;
pub mod util;
pub mod validate;
pub mod workflow;
