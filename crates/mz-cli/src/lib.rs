//! mz-cli: command line front-end for mz-core
//!
//! Flag parsing, configuration layering and logging setup for the
//! `mazegen` binary.

pub mod logging;
pub mod options;

pub use options::Args;
