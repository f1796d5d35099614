mod venv;

pub use venv::{VenvArgs, VenvKind, cmd_venv};
