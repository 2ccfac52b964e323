//! Scenario files: YAML in, evaluated model report out.
//!
//! A scenario selects exactly one model and its parameters. Loading follows
//! a parse → schema validation → semantic validation pipeline: serde rejects
//! unknown fields, the `validator` derive checks field-level constraints, and
//! each model input's own precondition check runs before evaluation.

use std::path::Path;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::chart::{ChartOptions, Series};
use crate::error::ModelResult;
use crate::models::break_even::{self, BreakEvenInput, BreakEvenResult};
use crate::models::eoq::{self, EoqInput, EoqResult};
use crate::models::production::{self, ProductionInput, ProductionResult};
use crate::models::queueing::{self, QueueInput, QueueResult};
use crate::solver::MilpSolver;

/// Top-level scenario configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Human-readable scenario name.
    #[serde(default)]
    pub name: String,

    /// Curve sampling options.
    #[validate(nested)]
    #[serde(default)]
    pub chart: ChartOptions,

    /// The model to evaluate and its parameters.
    pub model: ModelSpec,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

/// One model selection with its input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelSpec {
    /// Economic order quantity.
    Eoq(EoqInput),
    /// M/M/1 queueing.
    Queue(QueueInput),
    /// Break-even analysis.
    BreakEven(BreakEvenInput),
    /// Production mix optimization.
    Production(ProductionInput),
}

impl ModelSpec {
    /// Model name for display.
    #[must_use]
    pub const fn model_name(&self) -> &'static str {
        match self {
            Self::Eoq(_) => "EOQ",
            Self::Queue(_) => "M/M/1 queue",
            Self::BreakEven(_) => "break-even",
            Self::Production(_) => "production mix",
        }
    }

    /// Run the selected model's precondition checks without evaluating.
    ///
    /// # Errors
    ///
    /// Returns the model's own validation error.
    pub fn check(&self) -> ModelResult<()> {
        match self {
            Self::Eoq(input) => input.check(),
            Self::Queue(input) => input.check(),
            Self::BreakEven(input) => input.check(),
            Self::Production(input) => input.check(),
        }
    }
}

/// Evaluated output of one scenario, ready for display or JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelReport {
    /// EOQ result with its cost curve.
    Eoq(EoqResult),
    /// Queue scalars plus the wait-time sensitivity curve.
    Queue {
        /// Steady-state scalars.
        result: QueueResult,
        /// W(λ') over `[0, μ)`.
        wait_time_curve: Series,
    },
    /// Break-even result with revenue and cost curves.
    BreakEven(BreakEvenResult),
    /// Optimal production mix with boundary lines.
    Production(ProductionResult),
}

impl Scenario {
    /// Load a scenario from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> ModelResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a scenario from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing, schema validation, or the model's
    /// precondition checks fail.
    pub fn from_yaml(yaml: &str) -> ModelResult<Self> {
        let scenario: Self = serde_yaml::from_str(yaml)?;

        // Schema constraints, then model-specific preconditions.
        scenario.validate()?;
        scenario.model.check()?;

        Ok(scenario)
    }

    /// Serialize back to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> ModelResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Evaluate the selected model.
    ///
    /// # Errors
    ///
    /// Propagates the model's validation or solver errors.
    pub fn evaluate(&self, solver: &dyn MilpSolver) -> ModelResult<ModelReport> {
        match &self.model {
            ModelSpec::Eoq(input) => Ok(ModelReport::Eoq(eoq::evaluate(input, &self.chart)?)),
            ModelSpec::Queue(input) => Ok(ModelReport::Queue {
                result: queueing::evaluate(input)?,
                wait_time_curve: queueing::wait_time_curve(input, &self.chart)?,
            }),
            ModelSpec::BreakEven(input) => {
                Ok(ModelReport::BreakEven(break_even::evaluate(input)?))
            }
            ModelSpec::Production(input) => Ok(ModelReport::Production(
                production::evaluate_with(input, solver)?,
            )),
        }
    }
}
