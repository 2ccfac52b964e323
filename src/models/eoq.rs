//! Economic order quantity (EOQ) model.
//!
//! # Governing Equations
//!
//! ```text
//! EOQ = sqrt(2·D·S / H)
//! TC(q) = (D/q)·S + (q/2)·H
//!
//! Where:
//!   D = annual demand (units/year)
//!   S = ordering cost per order
//!   H = holding cost per unit per year
//! ```
//!
//! The total-cost curve is convex with its minimum exactly at the EOQ, which
//! is what the chart is meant to show.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::require_positive;
use crate::chart::{open_grid, ChartOptions, Series};
use crate::error::ModelResult;

/// EOQ model inputs. All three parameters must be finite and `> 0`;
/// `holding_cost` is the divisor and is rejected first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EoqInput {
    /// Annual demand D (units/year).
    pub annual_demand: f64,
    /// Ordering cost S per order.
    pub order_cost: f64,
    /// Holding cost H per unit per year.
    pub holding_cost: f64,
}

impl EoqInput {
    /// Check all preconditions without computing anything.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidParameter` for any non-finite or
    /// non-positive field.
    pub fn check(&self) -> ModelResult<()> {
        require_positive("holding_cost", self.holding_cost)?;
        require_positive("annual_demand", self.annual_demand)?;
        require_positive("order_cost", self.order_cost)?;
        Ok(())
    }
}

/// EOQ model result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EoqResult {
    /// Economic order quantity (units). Left fractional: it parameterizes
    /// the cost curve, not a unit count.
    pub eoq: f64,
    /// Total cost sampled over `(0, 2·EOQ]`.
    pub cost_curve: Series,
}

/// Total annual cost at order quantity `q`. Caller guarantees `q > 0`.
#[must_use]
pub fn total_cost(input: &EoqInput, q: f64) -> f64 {
    (input.annual_demand / q) * input.order_cost + (q / 2.0) * input.holding_cost
}

/// Evaluate the EOQ model.
///
/// The cost curve samples `ChartOptions::samples` evenly spaced quantities
/// over `(0, 2·EOQ]`; `q = 0` is structurally excluded (the grid starts at
/// `2·EOQ / samples`) and the EOQ itself falls on the grid whenever the
/// sample count is even.
///
/// # Errors
///
/// Returns `ModelError::InvalidParameter` when any input is non-finite or
/// non-positive, and `ModelError::Validation` for an out-of-range sample
/// count.
pub fn evaluate(input: &EoqInput, chart: &ChartOptions) -> ModelResult<EoqResult> {
    input.check()?;
    chart.validate()?;

    let eoq = (2.0 * input.annual_demand * input.order_cost / input.holding_cost).sqrt();
    let grid = open_grid(2.0 * eoq, chart.samples);
    let cost_curve = Series::sample("total_cost", &grid, |q| total_cost(input, q));

    Ok(EoqResult { eoq, cost_curve })
}

/// Sample the total-cost curve over a caller-chosen grid of quantities.
///
/// # Errors
///
/// Returns `ModelError::InvalidParameter` for invalid inputs or for any
/// grid quantity `≤ 0` (division by zero at `q = 0`).
pub fn cost_curve(input: &EoqInput, quantities: &[f64]) -> ModelResult<Series> {
    input.check()?;
    for &q in quantities {
        require_positive("order_quantity", q)?;
    }
    Ok(Series::sample("total_cost", quantities, |q| {
        total_cost(input, q)
    }))
}
