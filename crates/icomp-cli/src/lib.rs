//! Command-line front end: mode selection, file I/O and exit codes.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Mode};

/// Exit codes for the CLI.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
