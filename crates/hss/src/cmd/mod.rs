mod build;
mod buildiso;
mod run;
mod start;

pub use build::cmd_build;
pub use buildiso::cmd_buildiso;
pub use run::cmd_run;
pub use start::cmd_start;
