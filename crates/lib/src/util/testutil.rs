//! Test utilities for homelab-lib.
//!
//! Workflows shell out to Docker, so tests swap in a runner that records what
//! would have been executed, and build a scratch homelab checkout to run
//! against.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::platform::HssPaths;
use crate::process::{CommandRunner, ProcessError};

/// One recorded invocation.
#[derive(Debug, Clone)]
pub struct Call {
  pub cmd: String,
  pub dir: PathBuf,
  /// Contents of the watched directory at the time of the call, if any.
  pub watched: Option<Vec<String>>,
}

/// A [`CommandRunner`] that records calls instead of executing them.
#[derive(Default)]
pub struct RecordingRunner {
  calls: RefCell<Vec<Call>>,
  fail_matching: Option<String>,
  watch: Option<PathBuf>,
}

impl RecordingRunner {
  pub fn new() -> Self {
    Self::default()
  }

  /// Fail (exit code 1) any command containing `needle`.
  pub fn failing_on(needle: &str) -> Self {
    Self {
      fail_matching: Some(needle.to_string()),
      ..Self::default()
    }
  }

  /// Snapshot the file names in `dir` whenever a command runs.
  pub fn watching(mut self, dir: impl Into<PathBuf>) -> Self {
    self.watch = Some(dir.into());
    self
  }

  pub fn calls(&self) -> Vec<Call> {
    self.calls.borrow().clone()
  }

  pub fn commands(&self) -> Vec<String> {
    self.calls.borrow().iter().map(|c| c.cmd.clone()).collect()
  }
}

impl CommandRunner for RecordingRunner {
  fn run(&self, cmd: &str, dir: &Path) -> Result<(), ProcessError> {
    let watched = self.watch.as_ref().map(|watch| list_dir(watch));
    self.calls.borrow_mut().push(Call {
      cmd: cmd.to_string(),
      dir: dir.to_path_buf(),
      watched,
    });

    match &self.fail_matching {
      Some(needle) if cmd.contains(needle.as_str()) => Err(ProcessError::Failed {
        cmd: cmd.to_string(),
        code: Some(1),
      }),
      _ => Ok(()),
    }
  }
}

/// Sorted file names in `dir`, empty if it does not exist.
pub fn list_dir(dir: &Path) -> Vec<String> {
  let mut names: Vec<String> = fs::read_dir(dir)
    .map(|read| {
      read
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect()
    })
    .unwrap_or_default();
  names.sort();
  names
}

/// A scratch homelab checkout:
///
/// ```text
/// <temp>/repo/            root
/// <temp>/repo/hss/        work dir
/// <temp>/home/.ssh/       ssh dir
/// ```
pub struct Homelab {
  pub temp: TempDir,
  pub paths: HssPaths,
}

impl Homelab {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("repo");
    let work_dir = root.join("hss");
    let ssh_dir = temp.path().join("home").join(".ssh");
    fs::create_dir_all(&work_dir).unwrap();
    fs::create_dir_all(&ssh_dir).unwrap();

    Self {
      paths: HssPaths::new(work_dir, root, ssh_dir),
      temp,
    }
  }

  pub fn write(&self, path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
  }

  /// Inventory listing `hosts` under `all`.
  pub fn inventory(&self, hosts: &[&str]) -> &Self {
    let mut content = String::from("all:\n  hosts:\n");
    for (i, host) in hosts.iter().enumerate() {
      content.push_str(&format!("    {host}:\n      ansible_host: 10.0.0.{}\n", i + 10));
    }
    self.write(&self.paths.inventory_file(), &content);
    self
  }

  pub fn host_vars(&self, host: &str, private_key: &str, public_key: &str) -> &Self {
    let content = format!("private_key_path: {private_key}\npublic_key_path: {public_key}\n");
    self.write(&self.paths.host_vars_file(host), &content);
    self
  }

  pub fn ssh_key(&self, name: &str) -> &Self {
    self.write(&self.paths.ssh_key(name), &format!("key material for {name}\n"));
    self
  }

  pub fn live_config(&self, content: &str) -> &Self {
    self.write(&self.paths.live_config_file(), content);
    self
  }

  /// Create the `iso/<distro>` build context.
  pub fn iso_context(&self, distro: &str) -> &Self {
    fs::create_dir_all(self.paths.iso_dir(distro)).unwrap();
    self
  }
}
