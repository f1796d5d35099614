mod cmd;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use owo_colors::{OwoColorize, Stream};
use tracing_subscriber::EnvFilter;

use crate::cmd::{VenvArgs, cmd_venv};

/// hlcli is a CLI tool for managing homelabs.
#[derive(Parser)]
#[command(name = "hlcli")]
#[command(author, version, about = "Homelab CLI", long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Spawn a development environment (metal or container)
  Venv(VenvArgs),
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match &cli.command {
    Commands::Venv(args) => cmd_venv(args),
  };

  if let Err(e) = result {
    eprintln!(
      "{} {:#}",
      "✗".if_supports_color(Stream::Stderr, |s| s.red()),
      e
    );
    return ExitCode::FAILURE;
  }

  ExitCode::SUCCESS
}
