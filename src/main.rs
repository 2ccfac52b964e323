//! opsmodel CLI - industrial-engineering decision models.

use std::process::ExitCode;

use opsmodel::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
