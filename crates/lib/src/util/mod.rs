//! Shared utilities.
//!
//! Currently only test helpers: a recording [`CommandRunner`](crate::process::CommandRunner)
//! and a throwaway homelab checkout.

#[cfg(test)]
pub mod testutil;
