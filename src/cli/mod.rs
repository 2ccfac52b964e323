//! CLI module for opsmodel.
//!
//! All CLI logic lives here rather than in main.rs so it can be covered by
//! tests; the entry point `run_cli` takes parsed arguments and returns an
//! exit code.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::run_cli;
pub use output::{print_help, print_report, print_version};
