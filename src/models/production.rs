//! Production mix optimizer.
//!
//! Builds a two-variable integer linear program
//!
//! ```text
//! max  profit_a·x_a + profit_b·x_b
//! s.t. usage_a[r]·x_a + usage_b[r]·x_b ≤ capacity[r]   for each resource r
//!      x_a, x_b ∈ ℤ, ≥ 0
//! ```
//!
//! and delegates solving to a [`MilpSolver`]. The model contributes no
//! solving logic: constraint construction on the way in, status mapping and
//! boundary-line extraction on the way out. A non-optimal status is reported
//! verbatim; there is no retry and no fallback solver.

use serde::{Deserialize, Serialize};

use super::{require_finite, require_non_negative};
use crate::chart::Series;
use crate::error::{ModelError, ModelResult};
use crate::solver::{
    DecisionVariable, LinearProgram, MicrolpSolver, MilpSolver, SolveStatus,
};

/// Number of shared resources (and of products).
pub const RESOURCE_COUNT: usize = 2;

/// One product: its unit profit and how much of each resource a unit consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductPlan {
    /// Product name (used in variable and line labels).
    pub name: String,
    /// Profit contribution per unit.
    pub profit_per_unit: f64,
    /// Consumption per unit of each shared resource, in resource order.
    pub resource_usage: [f64; RESOURCE_COUNT],
}

/// One shared resource and its capacity limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceLimit {
    /// Resource name (used in constraint and line labels).
    pub name: String,
    /// Total available capacity.
    pub capacity: f64,
}

/// Production optimizer inputs: two products over two shared resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductionInput {
    /// First product (decision variable `x_a`).
    pub product_a: ProductPlan,
    /// Second product (decision variable `x_b`).
    pub product_b: ProductPlan,
    /// The shared resources, one capacity constraint each.
    pub resources: [ResourceLimit; RESOURCE_COUNT],
}

impl ProductionInput {
    /// Check all preconditions without building the program.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidParameter` for non-finite profits,
    /// negative or non-finite resource usage, or negative capacities.
    pub fn check(&self) -> ModelResult<()> {
        for product in [&self.product_a, &self.product_b] {
            require_finite(&format!("{}.profit_per_unit", product.name), product.profit_per_unit)?;
            for (usage, resource) in product.resource_usage.iter().zip(&self.resources) {
                require_non_negative(
                    &format!("{}.usage[{}]", product.name, resource.name),
                    *usage,
                )?;
            }
        }
        for resource in &self.resources {
            require_non_negative(&format!("{}.capacity", resource.name), resource.capacity)?;
        }
        Ok(())
    }

    /// Build the maximization program handed to the solver.
    #[must_use]
    pub fn to_program(&self) -> LinearProgram {
        let mut lp = LinearProgram::new();
        lp.add_variable(
            DecisionVariable::non_negative_integer(&self.product_a.name),
            self.product_a.profit_per_unit,
        );
        lp.add_variable(
            DecisionVariable::non_negative_integer(&self.product_b.name),
            self.product_b.profit_per_unit,
        );
        for (r, resource) in self.resources.iter().enumerate() {
            lp.add_constraint(
                &resource.name,
                vec![
                    self.product_a.resource_usage[r],
                    self.product_b.resource_usage[r],
                ],
                resource.capacity,
            );
        }
        lp
    }
}

/// A resource's capacity boundary expressed as `x_b` in terms of `x_a`:
/// `x_b = intercept + slope·x_a`. Lines with a vertical boundary (zero
/// product-B coefficient) are never constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintLine {
    /// Name of the resource this boundary belongs to.
    pub resource: String,
    /// `capacity / usage_b`: the `x_b` axis intercept.
    pub intercept: f64,
    /// `-usage_a / usage_b`: change in `x_b` per unit of `x_a`.
    pub slope: f64,
}

impl ConstraintLine {
    /// Boundary value of `x_b` at a given `x_a`.
    #[must_use]
    pub fn quantity_b_at(&self, quantity_a: f64) -> f64 {
        self.intercept + self.slope * quantity_a
    }

    /// Render the boundary as a plottable series over `[0, max_quantity_a]`.
    #[must_use]
    pub fn to_series(&self, max_quantity_a: f64, samples: usize) -> Series {
        let samples = samples.max(1);
        let grid: Vec<f64> = (0..=samples)
            .map(|k| max_quantity_a * (k as f64) / (samples as f64))
            .collect();
        Series::sample(&self.resource, &grid, |qa| self.quantity_b_at(qa))
    }
}

/// Production optimizer result. Present only for an `Optimal` solve; any
/// other status is reported through `ModelError::SolverNonOptimal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionResult {
    /// Always `Optimal` on this type; kept for result-record completeness.
    pub status: SolveStatus,
    /// Optimal quantity of product A.
    pub quantity_a: u64,
    /// Optimal quantity of product B.
    pub quantity_b: u64,
    /// Maximal profit at the optimum.
    pub profit: f64,
    /// Capacity boundary lines for feasible-region plotting; a resource with
    /// zero product-B usage contributes no line.
    pub boundary_lines: Vec<ConstraintLine>,
}

/// Evaluate with the default [`MicrolpSolver`].
///
/// # Errors
///
/// See [`evaluate_with`].
pub fn evaluate(input: &ProductionInput) -> ModelResult<ProductionResult> {
    evaluate_with(input, &MicrolpSolver::new())
}

/// Evaluate with a caller-supplied solver.
///
/// # Errors
///
/// Returns `ModelError::InvalidParameter` for invalid inputs,
/// `ModelError::SolverNonOptimal` for an infeasible/unbounded/undefined
/// solve (verbatim status, no retry), and the solver's own timeout error
/// when its time limit expires.
pub fn evaluate_with(
    input: &ProductionInput,
    solver: &dyn MilpSolver,
) -> ModelResult<ProductionResult> {
    input.check()?;

    let outcome = solver.solve(&input.to_program())?;
    let Some(point) = outcome.solution else {
        return Err(ModelError::SolverNonOptimal(outcome.status));
    };

    let boundary_lines = input
        .resources
        .iter()
        .enumerate()
        .filter_map(|(r, resource)| {
            let usage_a = input.product_a.resource_usage[r];
            let usage_b = input.product_b.resource_usage[r];
            // Zero product-B usage means a vertical boundary; skip it rather
            // than divide by zero.
            if usage_b == 0.0 {
                return None;
            }
            Some(ConstraintLine {
                resource: resource.name.clone(),
                intercept: resource.capacity / usage_b,
                slope: -usage_a / usage_b,
            })
        })
        .collect();

    Ok(ProductionResult {
        status: outcome.status,
        quantity_a: point.values[0].round().max(0.0) as u64,
        quantity_b: point.values[1].round().max(0.0) as u64,
        profit: point.objective,
        boundary_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverOutcome;

    /// Solver stub that always reports a fixed non-optimal status.
    struct FixedStatusSolver(SolveStatus);

    impl MilpSolver for FixedStatusSolver {
        fn name(&self) -> &'static str {
            "fixed-status"
        }

        fn solve(&self, _program: &LinearProgram) -> ModelResult<SolverOutcome> {
            Ok(SolverOutcome::without_solution(self.0))
        }
    }

    fn textbook_input() -> ProductionInput {
        ProductionInput {
            product_a: ProductPlan {
                name: "product_a".to_string(),
                profit_per_unit: 30.0,
                resource_usage: [2.0, 1.0],
            },
            product_b: ProductPlan {
                name: "product_b".to_string(),
                profit_per_unit: 50.0,
                resource_usage: [3.0, 4.0],
            },
            resources: [
                ResourceLimit {
                    name: "machine_hours".to_string(),
                    capacity: 100.0,
                },
                ResourceLimit {
                    name: "labor_hours".to_string(),
                    capacity: 120.0,
                },
            ],
        }
    }

    #[test]
    fn test_textbook_example() {
        // max 30a + 50b s.t. 2a+3b<=100, a+4b<=120.
        // The LP relaxation vertex (8, 28) is integral: profit 1640.
        let result = evaluate(&textbook_input()).unwrap();
        assert_eq!(result.status, SolveStatus::Optimal);
        assert_eq!(result.quantity_a, 8);
        assert_eq!(result.quantity_b, 28);
        assert!((result.profit - 1640.0).abs() < 1e-6);
    }

    #[test]
    fn test_optimum_respects_constraints() {
        let input = textbook_input();
        let result = evaluate(&input).unwrap();
        let (a, b) = (result.quantity_a as f64, result.quantity_b as f64);
        assert!(2.0 * a + 3.0 * b <= 100.0 + 1e-9);
        assert!(a + 4.0 * b <= 120.0 + 1e-9);
    }

    #[test]
    fn test_program_construction() {
        let lp = textbook_input().to_program();
        assert_eq!(lp.variables.len(), 2);
        assert_eq!(lp.objective, vec![30.0, 50.0]);
        assert_eq!(lp.constraints.len(), 2);
        assert_eq!(lp.constraints[0].coefficients, vec![2.0, 3.0]);
        assert!((lp.constraints[0].upper_bound - 100.0).abs() < 1e-12);
        assert_eq!(lp.constraints[1].coefficients, vec![1.0, 4.0]);
        assert!((lp.constraints[1].upper_bound - 120.0).abs() < 1e-12);
        assert!(lp.check().is_ok());
    }

    #[test]
    fn test_boundary_lines() {
        let result = evaluate(&textbook_input()).unwrap();
        assert_eq!(result.boundary_lines.len(), 2);

        // machine_hours: x_b = 100/3 - (2/3)·x_a
        let machine = &result.boundary_lines[0];
        assert_eq!(machine.resource, "machine_hours");
        assert!((machine.intercept - 100.0 / 3.0).abs() < 1e-9);
        assert!((machine.slope + 2.0 / 3.0).abs() < 1e-9);
        assert!((machine.quantity_b_at(50.0) - 0.0).abs() < 1e-9);

        // labor_hours: x_b = 30 - 0.25·x_a
        let labor = &result.boundary_lines[1];
        assert!((labor.intercept - 30.0).abs() < 1e-9);
        assert!((labor.slope + 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_vertical_boundary_skipped() {
        let mut input = textbook_input();
        input.product_b.resource_usage[1] = 0.0;
        let result = evaluate(&input).unwrap();
        assert_eq!(result.boundary_lines.len(), 1);
        assert_eq!(result.boundary_lines[0].resource, "machine_hours");
    }

    #[test]
    fn test_boundary_line_series() {
        let line = ConstraintLine {
            resource: "machine_hours".to_string(),
            intercept: 30.0,
            slope: -0.5,
        };
        let series = line.to_series(60.0, 6);
        assert_eq!(series.len(), 7);
        assert!((series.points()[0].y - 30.0).abs() < 1e-12);
        assert!((series.points()[6].y - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_capacity_forces_zero_production() {
        let mut input = textbook_input();
        input.resources[0].capacity = 0.0;
        let result = evaluate(&input).unwrap();
        assert_eq!(result.quantity_a, 0);
        assert_eq!(result.quantity_b, 0);
        assert!((result.profit - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_binding_resource() {
        // Only labor binds when machine capacity is huge. Per labor hour,
        // product A yields 30 and product B 12.5, so all 120 hours go to A.
        let mut input = textbook_input();
        input.resources[0].capacity = 1.0e6;
        let result = evaluate(&input).unwrap();
        assert_eq!(result.quantity_a, 120);
        assert_eq!(result.quantity_b, 0);
        assert!((result.profit - 3600.0).abs() < 1e-6);
    }

    #[test]
    fn test_non_optimal_status_reported_verbatim() {
        let input = textbook_input();
        for status in [
            SolveStatus::Infeasible,
            SolveStatus::Unbounded,
            SolveStatus::Undefined,
        ] {
            let err = evaluate_with(&input, &FixedStatusSolver(status)).unwrap_err();
            match err {
                ModelError::SolverNonOptimal(reported) => assert_eq!(reported, status),
                other => panic!("expected SolverNonOptimal, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_negative_usage() {
        let mut input = textbook_input();
        input.product_a.resource_usage[0] = -1.0;
        let err = evaluate(&input).unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { .. }));
    }

    #[test]
    fn test_rejects_negative_capacity() {
        let mut input = textbook_input();
        input.resources[1].capacity = -5.0;
        assert!(evaluate(&input).is_err());
    }

    #[test]
    fn test_rejects_nan_profit() {
        let mut input = textbook_input();
        input.product_b.profit_per_unit = f64::NAN;
        assert!(evaluate(&input).is_err());
    }

    #[test]
    fn test_input_serialization_round_trip() {
        let input = textbook_input();
        let yaml = serde_yaml::to_string(&input).unwrap();
        let restored: ProductionInput = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored, input);
    }

    #[test]
    fn test_result_serialization() {
        let result = evaluate(&textbook_input()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("boundary_lines"));
        let restored: ProductionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, result);
    }
}
