mod cmd;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use homelab_lib::consts::{DEFAULT_GIT_KEY_ENV, DEFAULT_OUTPUT_DIR, DEFAULT_PUBLIC_KEY_NAME};

use crate::cmd::{cmd_build, cmd_buildiso, cmd_run, cmd_start};
use crate::output::print_error;

/// hss - homelab provisioning helper
#[derive(Parser)]
#[command(name = "hss")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Show verbose debug information
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Start the hss docker container
  Start,

  /// Build an ISO
  #[command(name = "buildiso")]
  BuildIso {
    /// Linux distribution to build the ISO for
    #[arg(short, long)]
    distro: String,

    /// Output directory for the ISO (relative to the distro directory)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: String,

    /// Public SSH key to use for provisioning (in ~/.ssh)
    #[arg(short = 's', long = "ssh-key", default_value = DEFAULT_PUBLIC_KEY_NAME)]
    public_key: String,
  },

  /// Build the hss docker container
  Build,

  /// Run the hss docker container
  Run {
    /// Environment variable containing the SSH key to use for Git
    #[arg(short, long = "git-key", default_value = DEFAULT_GIT_KEY_ENV)]
    git_key: String,
  },
}

fn init_tracing(verbose: bool) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let result = match cli.command {
    Commands::Start => cmd_start(),
    Commands::BuildIso {
      distro,
      output_dir,
      public_key,
    } => cmd_buildiso(distro, output_dir, public_key),
    Commands::Build => cmd_build(),
    Commands::Run { git_key } => cmd_run(git_key),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{e:#}"));
      ExitCode::FAILURE
    }
  }
}
