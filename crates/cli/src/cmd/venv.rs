//! Implementation of the `hlcli venv` command.
//!
//! Only the argument surface exists so far; spawning the environment is not
//! wired up.

use anyhow::Result;
use clap::{Args, ValueEnum};
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum VenvKind {
  /// Run directly on the host
  #[default]
  Metal,
  /// Run inside a container
  Container,
}

#[derive(Debug, Args)]
pub struct VenvArgs {
  /// Where the environment runs
  #[arg(short = 't', long = "type", value_enum, default_value_t = VenvKind::Metal)]
  pub kind: VenvKind,

  /// Vault URL
  #[arg(short = 'u', long, env = "HLCLI_VAULT_URL")]
  pub vault_url: Option<String>,

  /// Vault token
  #[arg(short = 'k', long, env = "HLCLI_VAULT_TOKEN", hide_env_values = true)]
  pub vault_token: Option<String>,

  /// Image to start the environment from
  #[arg(short, long)]
  pub image: Option<String>,

  /// Provisioner URL
  #[arg(short, long, env = "HLCLI_PROVISIONER_URL")]
  pub provisioner_url: Option<String>,
}

/// Execute the venv command.
pub fn cmd_venv(args: &VenvArgs) -> Result<()> {
  debug!(
    kind = ?args.kind,
    vault_url = ?args.vault_url,
    image = ?args.image,
    provisioner_url = ?args.provisioner_url,
    "venv requested"
  );
  info!("venv is a stub");

  println!(
    "{} venv ({:?}) is not implemented yet",
    "•".if_supports_color(Stream::Stdout, |s| s.blue()),
    args.kind
  );

  Ok(())
}
