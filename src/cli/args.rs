//! CLI argument parsing.
//!
//! The parser accepts any iterator of strings, not just `std::env::args()`,
//! so argument handling is fully testable.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Evaluate a scenario
    Run {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
        /// Emit the report as JSON instead of the pretty printer.
        json: bool,
        /// Print full curve tables, not just their summaries.
        verbose: bool,
    },
    /// Validate a scenario file without evaluating it
    Check {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "check" => Self::parse_check_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command arguments.
    fn parse_run_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'run' command requires a scenario path");
            return Command::Help;
        }

        let mut json = false;
        let mut verbose = false;

        for arg in &args[3..] {
            match arg.as_str() {
                "--json" => json = true,
                "-v" | "--verbose" => verbose = true,
                other => {
                    eprintln!("Warning: ignoring unknown option '{other}'");
                }
            }
        }

        Command::Run {
            scenario_path: PathBuf::from(&args[2]),
            json,
            verbose,
        }
    }

    /// Parse the 'check' command arguments.
    fn parse_check_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'check' command requires a scenario path");
            return Command::Help;
        }

        Command::Check {
            scenario_path: PathBuf::from(&args[2]),
        }
    }
}
