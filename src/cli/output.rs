//! CLI output formatting.

use crate::chart::Series;
use crate::scenario::ModelReport;

/// Print version information.
pub fn print_version() {
    println!("opsmodel {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"opsmodel - Industrial-engineering decision models

USAGE:
    opsmodel <COMMAND> [OPTIONS]

COMMANDS:
    run <scenario.yaml>         Evaluate a scenario
        --json                  Emit the report as JSON
        -v, --verbose           Print full curve tables

    check <scenario.yaml>       Validate a scenario without evaluating it

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    opsmodel run scenarios/eoq.yaml
    opsmodel run scenarios/production.yaml --json
    opsmodel check scenarios/queue.yaml

A scenario selects one model (eoq, queue, break_even, production) and its
parameters; see the scenarios/ directory for templates.
"
    );
}

/// Print an evaluated report.
pub fn print_report(report: &ModelReport, verbose: bool) {
    match report {
        ModelReport::Eoq(result) => {
            println!("EOQ Model");
            println!("─────────────────────────────────────────────");
            println!("  Economic order quantity: {:.2} units", result.eoq);
            print_series_summary(&result.cost_curve, verbose);
        }
        ModelReport::Queue {
            result,
            wait_time_curve,
        } => {
            println!("M/M/1 Queue Model");
            println!("─────────────────────────────────────────────");
            println!("  Utilization (ρ):            {:.4}", result.utilization);
            println!(
                "  Customers in system (L):    {:.4}",
                result.expected_in_system
            );
            println!(
                "  Time in system (W):         {:.4}",
                result.expected_wait_in_system
            );
            println!(
                "  Customers in queue (Lq):    {:.4}",
                result.expected_in_queue
            );
            println!(
                "  Wait in queue (Wq):         {:.4}",
                result.expected_wait_in_queue
            );
            print_series_summary(wait_time_curve, verbose);
        }
        ModelReport::BreakEven(result) => {
            println!("Break-Even Model");
            println!("─────────────────────────────────────────────");
            println!(
                "  Break-even quantity: {:.2} ({} whole units)",
                result.break_even_quantity, result.break_even_units
            );
            print_series_summary(&result.revenue_curve, verbose);
            print_series_summary(&result.cost_curve, verbose);
        }
        ModelReport::Production(result) => {
            println!("Production Mix Model");
            println!("─────────────────────────────────────────────");
            println!("  Status:          {}", result.status);
            println!("  Product A:       {} units", result.quantity_a);
            println!("  Product B:       {} units", result.quantity_b);
            println!("  Maximal profit:  {:.2}", result.profit);
            for line in &result.boundary_lines {
                println!(
                    "  Boundary [{}]: x_b = {:.3} {} {:.3}·x_a",
                    line.resource,
                    line.intercept,
                    if line.slope < 0.0 { "-" } else { "+" },
                    line.slope.abs()
                );
            }
        }
    }
}

/// Print a one-line series summary, or the full point table when verbose.
fn print_series_summary(series: &Series, verbose: bool) {
    if let (Some((x0, x1)), Some(min), Some(max)) =
        (series.x_range(), series.min_y(), series.max_y())
    {
        println!(
            "  Curve '{}': {} points over [{x0:.2}, {x1:.2}], y in [{min:.2}, {max:.2}]",
            series.name(),
            series.len()
        );
    } else {
        println!("  Curve '{}': empty", series.name());
    }

    if verbose {
        for point in series.points() {
            println!("    {:>12.4}  {:>14.4}", point.x, point.y);
        }
    }
}
