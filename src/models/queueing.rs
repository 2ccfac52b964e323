//! M/M/1 queueing model.
//!
//! # Governing Equations
//!
//! ```text
//! ρ  = λ/μ          utilization
//! L  = ρ/(1-ρ)      expected customers in system
//! W  = 1/(μ-λ)      expected time in system
//! Lq = L - ρ        expected customers in queue
//! Wq = W - 1/μ      expected wait in queue
//! ```
//!
//! Steady state exists only for λ < μ; the stability check runs before any
//! division so an unstable system never produces a (negative or infinite)
//! numeric result.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::require_positive;
use crate::chart::{half_open_grid, ChartOptions, Series};
use crate::error::{ModelError, ModelResult};

/// M/M/1 model inputs. Rates must be finite and `> 0`, with `arrival_rate`
/// strictly below `service_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueueInput {
    /// Arrival rate λ (customers per unit time).
    pub arrival_rate: f64,
    /// Service rate μ (customers per unit time).
    pub service_rate: f64,
}

impl QueueInput {
    /// Check positivity and the stability condition λ < μ.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidParameter` for non-finite or non-positive
    /// rates, and `ModelError::UnstableSystem` when `λ ≥ μ`.
    pub fn check(&self) -> ModelResult<()> {
        require_positive("arrival_rate", self.arrival_rate)?;
        require_positive("service_rate", self.service_rate)?;
        if self.arrival_rate >= self.service_rate {
            return Err(ModelError::UnstableSystem {
                arrival_rate: self.arrival_rate,
                service_rate: self.service_rate,
            });
        }
        Ok(())
    }
}

/// M/M/1 steady-state results. All fields are `≥ 0` for valid input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueResult {
    /// Utilization ρ = λ/μ, in (0, 1).
    pub utilization: f64,
    /// Expected customers in the system, L.
    pub expected_in_system: f64,
    /// Expected time in the system, W.
    pub expected_wait_in_system: f64,
    /// Expected customers waiting in the queue, Lq.
    pub expected_in_queue: f64,
    /// Expected wait in the queue, Wq.
    pub expected_wait_in_queue: f64,
}

/// Evaluate the M/M/1 steady state.
///
/// # Errors
///
/// Returns `ModelError::UnstableSystem` when `λ ≥ μ` (checked before any
/// division), or `ModelError::InvalidParameter` for out-of-range rates.
pub fn evaluate(input: &QueueInput) -> ModelResult<QueueResult> {
    input.check()?;

    let rho = input.arrival_rate / input.service_rate;
    let l = rho / (1.0 - rho);
    let w = 1.0 / (input.service_rate - input.arrival_rate);
    let lq = l - rho;
    let wq = w - 1.0 / input.service_rate;

    Ok(QueueResult {
        utilization: rho,
        expected_in_system: l,
        expected_wait_in_system: w,
        expected_in_queue: lq,
        expected_wait_in_queue: wq,
    })
}

/// Sensitivity of the system wait time W to the arrival rate.
///
/// Samples `W(λ') = 1/(μ - λ')` for `λ'` on `ChartOptions::samples` points
/// over `[0, μ)`; the grid stops short of μ, where W diverges.
///
/// # Errors
///
/// Returns the same validation errors as [`evaluate`], plus
/// `ModelError::Validation` for an out-of-range sample count.
pub fn wait_time_curve(input: &QueueInput, chart: &ChartOptions) -> ModelResult<Series> {
    input.check()?;
    chart.validate()?;
    let grid = half_open_grid(input.service_rate, chart.samples);
    Ok(Series::sample("wait_time", &grid, |lambda| {
        1.0 / (input.service_rate - lambda)
    }))
}
