use anyhow::Result;

use crate::output::print_info;

pub fn cmd_start() -> Result<()> {
  // Placeholder until the container lifecycle is managed here.
  print_info("start is not implemented yet; use `hss run`");
  Ok(())
}
