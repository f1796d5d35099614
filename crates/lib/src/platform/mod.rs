pub mod paths;

pub use paths::{HssPaths, PathsError};
