//! Error types for opsmodel.
//!
//! Every invalid input combination is an expected, user-correctable
//! condition: each is detected by an explicit precondition check before the
//! corresponding formula or solve step runs, and surfaced as a descriptive
//! `Result` instead of a panic or a computed-but-meaningless number.

use thiserror::Error;

use crate::solver::SolveStatus;

/// Result type alias for opsmodel operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Unified error type for all opsmodel operations.
#[derive(Debug, Error)]
pub enum ModelError {
    // ===== Model Preconditions =====
    /// A single parameter is out of its valid range (or not finite).
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// M/M/1 stability condition violated: the queue has no steady state.
    #[error(
        "unstable queue: arrival rate {arrival_rate} must be strictly less than \
         service rate {service_rate}"
    )]
    UnstableSystem {
        /// Arrival rate λ.
        arrival_rate: f64,
        /// Service rate μ.
        service_rate: f64,
    },

    /// Selling at or below variable cost can never recover fixed cost.
    #[error(
        "no break-even point: price per unit {price_per_unit} must exceed \
         variable cost per unit {variable_cost_per_unit}"
    )]
    NoBreakEven {
        /// Selling price per unit.
        price_per_unit: f64,
        /// Variable cost per unit.
        variable_cost_per_unit: f64,
    },

    // ===== Solver Errors =====
    /// The MILP solver finished without an optimal solution.
    #[error("solver finished with non-optimal status: {0}")]
    SolverNonOptimal(SolveStatus),

    /// The solve exceeded its configured wall-clock limit.
    #[error("solver timed out after {limit_ms} ms")]
    SolverTimeout {
        /// Configured limit in milliseconds.
        limit_ms: u64,
    },

    /// The linear program itself is malformed (e.g. arity mismatch).
    #[error("malformed linear program: {0}")]
    MalformedProgram(String),

    /// The solver backend failed for a reason other than the program or
    /// the time limit (e.g. its worker thread died mid-solve).
    #[error("solver backend failed: {0}")]
    SolverFailure(String),

    // ===== Scenario Errors =====
    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Schema validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ModelError {
    /// Create an invalid-parameter error.
    #[must_use]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed-program error.
    #[must_use]
    pub fn malformed_program(message: impl Into<String>) -> Self {
        Self::MalformedProgram(message.into())
    }

    /// Check whether this error is a user-correctable input condition
    /// (adjust the inputs and re-invoke) rather than an ambient failure.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. }
                | Self::UnstableSystem { .. }
                | Self::NoBreakEven { .. }
                | Self::SolverNonOptimal(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_classification() {
        let invalid = ModelError::invalid_parameter("holding_cost", "must be > 0");
        assert!(invalid.is_input_error());

        let unstable = ModelError::UnstableSystem {
            arrival_rate: 8.0,
            service_rate: 6.0,
        };
        assert!(unstable.is_input_error());

        let no_bep = ModelError::NoBreakEven {
            price_per_unit: 10.0,
            variable_cost_per_unit: 20.0,
        };
        assert!(no_bep.is_input_error());

        let non_optimal = ModelError::SolverNonOptimal(SolveStatus::Infeasible);
        assert!(non_optimal.is_input_error());

        let timeout = ModelError::SolverTimeout { limit_ms: 1000 };
        assert!(!timeout.is_input_error());

        let malformed = ModelError::malformed_program("2 coefficients for 3 variables");
        assert!(!malformed.is_input_error());

        let failure = ModelError::SolverFailure("worker exited".to_string());
        assert!(!failure.is_input_error());
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = ModelError::invalid_parameter("holding_cost", "must be > 0, got -1");
        let msg = err.to_string();
        assert!(msg.contains("holding_cost"));
        assert!(msg.contains("must be > 0"));
    }

    #[test]
    fn test_unstable_system_display() {
        let err = ModelError::UnstableSystem {
            arrival_rate: 9.0,
            service_rate: 8.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("unstable queue"));
        assert!(msg.contains('9'));
        assert!(msg.contains('8'));
    }

    #[test]
    fn test_no_break_even_display() {
        let err = ModelError::NoBreakEven {
            price_per_unit: 15.0,
            variable_cost_per_unit: 20.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("no break-even point"));
        assert!(msg.contains("15"));
        assert!(msg.contains("20"));
    }

    #[test]
    fn test_solver_non_optimal_display() {
        let err = ModelError::SolverNonOptimal(SolveStatus::Unbounded);
        let msg = err.to_string();
        assert!(msg.contains("non-optimal"));
        assert!(msg.contains("unbounded"));
    }

    #[test]
    fn test_solver_timeout_display() {
        let err = ModelError::SolverTimeout { limit_ms: 10_000 };
        let msg = err.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("10000"));
    }

    #[test]
    fn test_malformed_program_display() {
        let err = ModelError::malformed_program("constraint arity mismatch");
        let msg = err.to_string();
        assert!(msg.contains("malformed linear program"));
        assert!(msg.contains("arity mismatch"));
    }

    #[test]
    fn test_solver_failure_display() {
        let err = ModelError::SolverFailure("worker exited before returning".to_string());
        let msg = err.to_string();
        assert!(msg.contains("solver backend failed"));
        assert!(msg.contains("worker exited"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing scenario");
        let err = ModelError::from(io);
        assert!(!err.is_input_error());
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ModelError::invalid_parameter("q", "must be > 0");
        let debug = format!("{err:?}");
        assert!(debug.contains("InvalidParameter"));
    }
}
