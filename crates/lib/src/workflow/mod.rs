//! The `hss` workflows.
//!
//! Each workflow is a straight line: validate, load config, stage keys, run
//! Docker, clean up. The first failing step ends it. Staged keys are held by
//! guards from [`crate::stage`], so cleanup also happens on the failure path.

mod build;
mod buildiso;
mod docker;
mod run;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::platform::PathsError;
use crate::process::ProcessError;
use crate::stage::StageError;
use crate::validate::ValidationError;

pub use build::{BuildOutcome, build};
pub use buildiso::{BuildIsoOutcome, BuildIsoRequest, build_iso};
pub use docker::{hss_build_command, hss_run_command, iso_build_command, iso_image, iso_run_command};
pub use run::{RunRequest, run};

#[derive(Debug, Error)]
pub enum WorkflowError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Stage(#[from] StageError),

  #[error(transparent)]
  Process(#[from] ProcessError),

  #[error(transparent)]
  Paths(#[from] PathsError),

  #[error("failed to create output directory {}", path.display())]
  DirectoryCreation { path: PathBuf, source: std::io::Error },

  #[error("failed to resolve {}", path.display())]
  ResolvePath { path: PathBuf, source: std::io::Error },
}
