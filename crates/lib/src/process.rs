//! Synchronous shell execution.
//!
//! Commands run through `/bin/sh -c` with the child's stdin, stdout and
//! stderr connected to ours, so `docker build` output streams straight to the
//! terminal and `docker run -it` gets an interactive TTY. Output is never
//! captured or interpreted.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ProcessError {
  #[error("failed to start `{cmd}` in {}", dir.display())]
  Spawn {
    cmd: String,
    dir: PathBuf,
    source: std::io::Error,
  },

  #[error("command failed with exit code {}: {cmd}", exit_code(code))]
  Failed { cmd: String, code: Option<i32> },
}

fn exit_code(code: &Option<i32>) -> String {
  match code {
    Some(code) => code.to_string(),
    // Killed by a signal.
    None => "none".to_string(),
  }
}

/// Runs a shell command line to completion in a working directory.
pub trait CommandRunner {
  fn run(&self, cmd: &str, dir: &Path) -> Result<(), ProcessError>;
}

/// Runs commands through the platform shell with inherited stdio.
#[derive(Debug, Clone)]
pub struct ShellRunner {
  shell: String,
}

impl ShellRunner {
  pub fn new() -> Self {
    Self {
      shell: "/bin/sh".to_string(),
    }
  }

  /// Use a different POSIX shell (anything accepting `-c <script>`).
  #[cfg(test)]
  pub(crate) fn with_shell(shell: impl Into<String>) -> Self {
    Self { shell: shell.into() }
  }
}

impl Default for ShellRunner {
  fn default() -> Self {
    Self::new()
  }
}

impl CommandRunner for ShellRunner {
  fn run(&self, cmd: &str, dir: &Path) -> Result<(), ProcessError> {
    info!(cmd = %cmd, dir = %dir.display(), "executing command");

    let status = Command::new(&self.shell)
      .arg("-c")
      .arg(cmd)
      .current_dir(dir)
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit())
      .status()
      .map_err(|source| ProcessError::Spawn {
        cmd: cmd.to_string(),
        dir: dir.to_path_buf(),
        source,
      })?;

    debug!(status = %status, "command exited");

    if !status.success() {
      return Err(ProcessError::Failed {
        cmd: cmd.to_string(),
        code: status.code(),
      });
    }

    Ok(())
  }
}
