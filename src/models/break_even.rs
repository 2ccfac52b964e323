//! Break-even model.
//!
//! # Governing Equations
//!
//! ```text
//! BEQ   = FC / (P - VC)     break-even quantity
//! TR(q) = P·q               total revenue
//! TC(q) = FC + VC·q         total cost
//! ```
//!
//! A break-even point exists only when the price exceeds the variable cost;
//! selling at or below variable cost can never recover the fixed cost.

use serde::{Deserialize, Serialize};

use super::{require_finite, require_non_negative};
use crate::chart::{stepped_grid, Series};
use crate::error::{ModelError, ModelResult};

/// Break-even model inputs. Costs must be finite and `≥ 0`; the price must
/// be finite and strictly above the variable cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakEvenInput {
    /// Fixed cost FC.
    pub fixed_cost: f64,
    /// Variable cost VC per unit.
    pub variable_cost_per_unit: f64,
    /// Selling price P per unit.
    pub price_per_unit: f64,
}

impl BreakEvenInput {
    /// Check all preconditions without computing anything.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidParameter` for out-of-range fields and
    /// `ModelError::NoBreakEven` when `price ≤ variable cost`.
    pub fn check(&self) -> ModelResult<()> {
        require_non_negative("fixed_cost", self.fixed_cost)?;
        require_non_negative("variable_cost_per_unit", self.variable_cost_per_unit)?;
        require_finite("price_per_unit", self.price_per_unit)?;
        if self.price_per_unit <= self.variable_cost_per_unit {
            return Err(ModelError::NoBreakEven {
                price_per_unit: self.price_per_unit,
                variable_cost_per_unit: self.variable_cost_per_unit,
            });
        }
        Ok(())
    }

    /// Contribution margin per unit, `P - VC`. Positive after [`Self::check`].
    #[must_use]
    pub fn contribution_margin(&self) -> f64 {
        self.price_per_unit - self.variable_cost_per_unit
    }
}

/// Break-even model result.
///
/// Rounding policy: `break_even_quantity` is the exact (fractional) solution
/// of `TR(q) = TC(q)`; `break_even_units` is its ceiling, the smallest
/// whole-unit sales volume at which revenue covers cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenResult {
    /// Exact break-even quantity, possibly fractional.
    pub break_even_quantity: f64,
    /// `ceil(break_even_quantity)`: first whole-unit volume with no loss.
    pub break_even_units: f64,
    /// Total revenue TR(q) over `[0, 2·BEQ]`.
    pub revenue_curve: Series,
    /// Total cost TC(q) over `[0, 2·BEQ]`.
    pub cost_curve: Series,
}

/// Evaluate the break-even model.
///
/// Both curves are sampled from 0 to `2·BEQ` with step `max(0.1·BEQ, 1.0)`,
/// which bounds the point count regardless of input magnitude.
///
/// # Errors
///
/// Returns `ModelError::NoBreakEven` when `price ≤ variable cost`, or
/// `ModelError::InvalidParameter` for out-of-range fields.
pub fn evaluate(input: &BreakEvenInput) -> ModelResult<BreakEvenResult> {
    input.check()?;

    let beq = input.fixed_cost / input.contribution_margin();
    let step = (0.1 * beq).max(1.0);
    let grid = stepped_grid(2.0 * beq, step);

    let revenue_curve = Series::sample("total_revenue", &grid, |q| input.price_per_unit * q);
    let cost_curve = Series::sample("total_cost", &grid, |q| {
        input.fixed_cost + input.variable_cost_per_unit * q
    });

    Ok(BreakEvenResult {
        break_even_quantity: beq,
        break_even_units: beq.ceil(),
        revenue_curve,
        cost_curve,
    })
}
