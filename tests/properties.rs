//! Property tests for the closed-form models.

use opsmodel::chart::ChartOptions;
use opsmodel::models::{break_even, eoq, queueing};
use opsmodel::prelude::*;
use proptest::prelude::*;

proptest! {
    /// EOQ(D, S, H) = sqrt(2DS/H) for all positive finite inputs.
    #[test]
    fn eoq_matches_closed_form(
        d in 1.0e-3..1.0e6_f64,
        s in 1.0e-3..1.0e6_f64,
        h in 1.0e-3..1.0e6_f64,
    ) {
        let input = EoqInput {
            annual_demand: d,
            order_cost: s,
            holding_cost: h,
        };
        let result = eoq::evaluate(&input, &ChartOptions::default()).unwrap();
        let expected = (2.0 * d * s / h).sqrt();
        prop_assert!((result.eoq - expected).abs() <= expected * 1e-12);
    }

    /// The cost at the EOQ is a lower bound for every sampled curve point.
    #[test]
    fn eoq_cost_curve_minimum_is_at_eoq(
        d in 1.0..1.0e4_f64,
        s in 1.0..1.0e4_f64,
        h in 1.0..1.0e4_f64,
    ) {
        let input = EoqInput {
            annual_demand: d,
            order_cost: s,
            holding_cost: h,
        };
        let result = eoq::evaluate(&input, &ChartOptions::default()).unwrap();
        let floor = eoq::total_cost(&input, result.eoq);
        for point in result.cost_curve.points() {
            prop_assert!(point.y >= floor * (1.0 - 1e-12));
        }
    }

    /// Stable queues satisfy the textbook identities and orderings.
    #[test]
    fn queue_identities_hold_for_stable_systems(
        mu in 1.0e-2..1.0e4_f64,
        rho in 1.0e-6..0.999_f64,
    ) {
        let input = QueueInput {
            arrival_rate: mu * rho,
            service_rate: mu,
        };
        let r = queueing::evaluate(&input).unwrap();

        prop_assert!(r.utilization > 0.0 && r.utilization < 1.0);
        prop_assert!(r.expected_in_system >= r.utilization);
        prop_assert!(r.expected_in_queue >= 0.0);
        prop_assert!(r.expected_wait_in_queue >= 0.0);
        // Lq = L - rho and Wq = W - 1/mu by construction; cross-check with
        // Little's Law instead: L = lambda * W.
        let littles = input.arrival_rate * r.expected_wait_in_system;
        prop_assert!((r.expected_in_system - littles).abs() <= r.expected_in_system.max(1.0) * 1e-9);
    }

    /// Unstable queues are always rejected, never evaluated.
    #[test]
    fn queue_rejects_unstable_systems(
        mu in 1.0e-2..1.0e4_f64,
        excess in 0.0..10.0_f64,
    ) {
        let input = QueueInput {
            arrival_rate: mu + excess,
            service_rate: mu,
        };
        let err = queueing::evaluate(&input).unwrap_err();
        let unstable = matches!(&err, ModelError::UnstableSystem { .. });
        prop_assert!(unstable, "unexpected error: {err}");
    }

    /// BEQ = FC/(P-VC), and revenue meets cost there.
    #[test]
    fn break_even_balances_revenue_and_cost(
        fc in 0.0..1.0e6_f64,
        vc in 0.0..1.0e3_f64,
        margin in 1.0e-2..1.0e3_f64,
    ) {
        let input = BreakEvenInput {
            fixed_cost: fc,
            variable_cost_per_unit: vc,
            price_per_unit: vc + margin,
        };
        let result = break_even::evaluate(&input).unwrap();

        let expected = fc / margin;
        prop_assert!((result.break_even_quantity - expected).abs() <= expected.max(1.0) * 1e-9);
        prop_assert!(result.break_even_units >= result.break_even_quantity);
        prop_assert!(result.break_even_units - result.break_even_quantity < 1.0 + 1e-9);

        let q = result.break_even_quantity;
        let revenue = input.price_per_unit * q;
        let cost = fc + vc * q;
        prop_assert!((revenue - cost).abs() <= revenue.max(1.0) * 1e-6);
    }

    /// Price at or below variable cost is always rejected.
    #[test]
    fn break_even_rejects_non_positive_margin(
        fc in 0.0..1.0e6_f64,
        vc in 1.0e-2..1.0e3_f64,
        deficit in 0.0..1.0_f64,
    ) {
        let input = BreakEvenInput {
            fixed_cost: fc,
            variable_cost_per_unit: vc,
            price_per_unit: vc * (1.0 - deficit),
        };
        let err = break_even::evaluate(&input).unwrap_err();
        let no_break_even = matches!(&err, ModelError::NoBreakEven { .. });
        prop_assert!(no_break_even, "unexpected error: {err}");
    }
}
