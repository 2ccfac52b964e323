//! Narrow MILP solver abstraction.
//!
//! The production optimizer is the only model with an external collaborator:
//! a general-purpose mixed-integer LP solver. The contract is deliberately
//! small — a linear objective to maximize, linear `≤` constraints over
//! bounded variables in, a status code and variable assignment out — so the
//! backend library can be swapped without touching calculator logic.

mod backend;

pub use backend::MicrolpSolver;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Terminal status of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// An optimal assignment was found.
    Optimal,
    /// The constraints admit no feasible point.
    Infeasible,
    /// The objective can be improved without bound.
    Unbounded,
    /// The solver stopped for a backend-specific reason.
    Undefined,
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Optimal => "optimal",
            Self::Infeasible => "infeasible",
            Self::Unbounded => "unbounded",
            Self::Undefined => "undefined",
        };
        write!(f, "{name}")
    }
}

/// Kind of a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// Real-valued variable.
    Continuous,
    /// Integer-valued variable.
    Integer,
}

/// A decision variable with bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionVariable {
    /// Variable name (for diagnostics).
    pub name: String,
    /// Continuous or integer.
    pub kind: VariableKind,
    /// Lower bound.
    pub min: f64,
    /// Optional upper bound; `None` means unbounded above.
    pub max: Option<f64>,
}

impl DecisionVariable {
    /// A non-negative integer variable, the form the production model uses.
    #[must_use]
    pub fn non_negative_integer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VariableKind::Integer,
            min: 0.0,
            max: None,
        }
    }
}

/// A linear `≤` constraint: `Σ coefficients[i] · x[i] ≤ upper_bound`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    /// Constraint name (for diagnostics).
    pub name: String,
    /// One coefficient per decision variable, in variable order.
    pub coefficients: Vec<f64>,
    /// Right-hand side.
    pub upper_bound: f64,
}

/// A maximization program over linear `≤` constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearProgram {
    /// Objective coefficient per variable (maximized).
    pub objective: Vec<f64>,
    /// Decision variables, in objective order.
    pub variables: Vec<DecisionVariable>,
    /// Constraints over the variables.
    pub constraints: Vec<LinearConstraint>,
}

impl LinearProgram {
    /// Create an empty program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a decision variable with its objective coefficient. Returns the
    /// variable's column index.
    pub fn add_variable(&mut self, variable: DecisionVariable, objective: f64) -> usize {
        self.variables.push(variable);
        self.objective.push(objective);
        self.variables.len() - 1
    }

    /// Add a `≤` constraint over all variables.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        coefficients: Vec<f64>,
        upper_bound: f64,
    ) {
        self.constraints.push(LinearConstraint {
            name: name.into(),
            coefficients,
            upper_bound,
        });
    }

    /// Check internal consistency before handing the program to a backend.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::MalformedProgram` when a constraint's coefficient
    /// count differs from the variable count, or any coefficient, bound, or
    /// objective entry is non-finite.
    pub fn check(&self) -> ModelResult<()> {
        if self.variables.is_empty() {
            return Err(ModelError::malformed_program("no decision variables"));
        }
        for (coeff, var) in self.objective.iter().zip(&self.variables) {
            if !coeff.is_finite() {
                return Err(ModelError::malformed_program(format!(
                    "objective coefficient for '{}' is not finite",
                    var.name
                )));
            }
        }
        for constraint in &self.constraints {
            if constraint.coefficients.len() != self.variables.len() {
                return Err(ModelError::malformed_program(format!(
                    "constraint '{}' has {} coefficients for {} variables",
                    constraint.name,
                    constraint.coefficients.len(),
                    self.variables.len()
                )));
            }
            if !constraint.upper_bound.is_finite()
                || constraint.coefficients.iter().any(|c| !c.is_finite())
            {
                return Err(ModelError::malformed_program(format!(
                    "constraint '{}' contains a non-finite value",
                    constraint.name
                )));
            }
        }
        Ok(())
    }
}

/// Optimal assignment and objective value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolvedPoint {
    /// Value per decision variable, in variable order.
    pub values: Vec<f64>,
    /// Objective value at the assignment.
    pub objective: f64,
}

/// Outcome of a solve: a status, plus the assignment when optimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverOutcome {
    /// Terminal status.
    pub status: SolveStatus,
    /// Present exactly when `status == Optimal`.
    pub solution: Option<SolvedPoint>,
}

impl SolverOutcome {
    /// Outcome for a non-optimal status.
    #[must_use]
    pub const fn without_solution(status: SolveStatus) -> Self {
        Self {
            status,
            solution: None,
        }
    }
}

/// General-purpose MILP solver collaborator.
///
/// Implementations are synchronous and must report a non-optimal status
/// in-band (via `SolverOutcome`) rather than as an error; errors are reserved
/// for malformed programs and timeouts.
pub trait MilpSolver {
    /// Backend name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Solve a maximization program.
    ///
    /// # Errors
    ///
    /// Returns an error when the program is malformed or the configured
    /// time limit expires.
    fn solve(&self, program: &LinearProgram) -> ModelResult<SolverOutcome>;
}
