//! CLI command handlers.

use std::path::Path;
use std::process::ExitCode;

use crate::scenario::Scenario;
use crate::solver::MicrolpSolver;

use super::output::{print_help, print_report, print_version};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            scenario_path,
            json,
            verbose,
        } => run_scenario(&scenario_path, json, verbose),
        Command::Check { scenario_path } => check_scenario(&scenario_path),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Evaluate a scenario file and print the report.
#[must_use]
pub fn run_scenario(path: &Path, json: bool, verbose: bool) -> ExitCode {
    let scenario = match Scenario::load(path) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    if !json {
        let name = if scenario.name.is_empty() {
            scenario.model.model_name().to_string()
        } else {
            scenario.name.clone()
        };
        println!("Scenario: {name}\n");
    }

    match scenario.evaluate(&MicrolpSolver::new()) {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("Error: {e}");
                        return ExitCode::from(1);
                    }
                }
            } else {
                print_report(&report, verbose);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_input_error() {
                eprintln!("Adjust the scenario inputs and re-run.");
            }
            ExitCode::from(1)
        }
    }
}

/// Validate a scenario file without evaluating it.
#[must_use]
pub fn check_scenario(path: &Path) -> ExitCode {
    match Scenario::load(path) {
        Ok(scenario) => {
            println!("✓ {} is a valid {} scenario", path.display(), scenario.model.model_name());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {}: {e}", path.display());
            ExitCode::from(1)
        }
    }
}
