//! microlp-backed solver with a wall-clock time limit.
//!
//! microlp is a pure-Rust MILP solver, so the solve is a bounded synchronous
//! call with no cancellation hook. The time limit is enforced from outside:
//! the solve runs on a worker thread and an expired `recv_timeout` surfaces
//! `ModelError::SolverTimeout`. The abandoned worker finishes (or keeps
//! running) in the background; its result is dropped with the channel.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};

use super::{
    LinearProgram, MilpSolver, SolveStatus, SolvedPoint, SolverOutcome, VariableKind,
};
use crate::error::{ModelError, ModelResult};

/// Default wall-clock limit per solve.
const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(10);

/// MILP solver backed by the `microlp` crate.
#[derive(Debug, Clone)]
pub struct MicrolpSolver {
    /// Wall-clock limit per solve; `None` disables the limit.
    time_limit: Option<Duration>,
}

impl Default for MicrolpSolver {
    fn default() -> Self {
        Self {
            time_limit: Some(DEFAULT_TIME_LIMIT),
        }
    }
}

impl MicrolpSolver {
    /// Create a solver with the default time limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with an explicit time limit (`None` disables it).
    #[must_use]
    pub const fn with_time_limit(time_limit: Option<Duration>) -> Self {
        Self { time_limit }
    }

    /// Configured time limit.
    #[must_use]
    pub const fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }
}

impl MilpSolver for MicrolpSolver {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, program: &LinearProgram) -> ModelResult<SolverOutcome> {
        program.check()?;

        match self.time_limit {
            None => Ok(solve_program(program)),
            Some(limit) => {
                let program = program.clone();
                let (tx, rx) = mpsc::channel();
                thread::Builder::new()
                    .name("milp-solve".to_string())
                    .spawn(move || {
                        let _ = tx.send(solve_program(&program));
                    })?;

                await_worker(&rx, limit)
            }
        }
    }
}

/// Wait for the worker's result, distinguishing an expired limit from a
/// worker that died without sending one.
fn await_worker(rx: &Receiver<SolverOutcome>, limit: Duration) -> ModelResult<SolverOutcome> {
    match rx.recv_timeout(limit) {
        Ok(outcome) => Ok(outcome),
        Err(RecvTimeoutError::Timeout) => Err(ModelError::SolverTimeout {
            limit_ms: limit.as_millis() as u64,
        }),
        Err(RecvTimeoutError::Disconnected) => Err(ModelError::SolverFailure(
            "solve worker exited before returning a result".to_string(),
        )),
    }
}

/// Tightest upper bound the constraints imply for one variable, via
/// `floor(upper_bound / coefficient)` over every `≤` constraint in which
/// the variable appears with a positive coefficient.
///
/// Valid only when every variable is non-negative with non-negative
/// coefficients, so the other terms can only consume capacity. Integer
/// variables get this cap in place of an artificial huge bound, on which
/// microlp's branch-and-bound has been observed to stop at a suboptimal
/// incumbent.
fn implied_integer_max(program: &LinearProgram, index: usize) -> Option<f64> {
    if program.variables.iter().any(|v| v.min < 0.0) {
        return None;
    }
    program
        .constraints
        .iter()
        .filter(|c| c.coefficients.iter().all(|&w| w >= 0.0))
        .filter_map(|c| {
            let coefficient = c.coefficients[index];
            (coefficient > 0.0).then(|| (c.upper_bound / coefficient).floor())
        })
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

/// Translate the program into a microlp problem and run it.
///
/// Non-optimal terminations come back as a status, never as an error;
/// `LinearProgram::check` has already rejected malformed input.
fn solve_program(program: &LinearProgram) -> SolverOutcome {
    let mut problem = Problem::new(OptimizationDirection::Maximize);

    let columns: Vec<Variable> = program
        .variables
        .iter()
        .zip(&program.objective)
        .enumerate()
        .map(|(index, (var, &objective))| match var.kind {
            VariableKind::Integer => {
                let min = var.min.round() as i32;
                let max = var
                    .max
                    .or_else(|| implied_integer_max(program, index))
                    .map_or(i32::MAX, |m| m.min(f64::from(i32::MAX)).round() as i32);
                problem.add_integer_var(objective, (min, max))
            }
            VariableKind::Continuous => {
                let max = var.max.unwrap_or(f64::INFINITY);
                problem.add_var(objective, (var.min, max))
            }
        })
        .collect();

    for constraint in &program.constraints {
        let terms: Vec<(Variable, f64)> = columns
            .iter()
            .copied()
            .zip(constraint.coefficients.iter().copied())
            .collect();
        problem.add_constraint(terms, ComparisonOp::Le, constraint.upper_bound);
    }

    match problem.solve() {
        Ok(solution) => {
            let values: Vec<f64> = columns.iter().map(|&v| solution[v]).collect();
            SolverOutcome {
                status: SolveStatus::Optimal,
                solution: Some(SolvedPoint {
                    values,
                    objective: solution.objective(),
                }),
            }
        }
        Err(microlp::Error::Infeasible) => SolverOutcome::without_solution(SolveStatus::Infeasible),
        Err(microlp::Error::Unbounded) => SolverOutcome::without_solution(SolveStatus::Unbounded),
        Err(_) => SolverOutcome::without_solution(SolveStatus::Undefined),
    }
}
