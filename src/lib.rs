//! # opsmodel
//!
//! Industrial-engineering decision models as pure functions.
//!
//! Four independent, stateless calculators share one crate:
//! - **EOQ**: economic order quantity and total-cost curve
//! - **Queueing (M/M/1)**: steady-state utilization, population, and waits
//! - **Break-even**: break-even quantity and revenue/cost curves
//! - **Production**: two-product integer linear program delegated to a
//!   MILP solver behind a narrow trait
//!
//! Each model maps an input record to a result record (plus plain `(x, y)`
//! series for an external charting collaborator) and rejects invalid
//! parameter combinations up front rather than emitting NaN or infinity.
//!
//! ## Example
//!
//! ```rust
//! use opsmodel::prelude::*;
//!
//! let input = EoqInput {
//!     annual_demand: 1000.0,
//!     order_cost: 50.0,
//!     holding_cost: 10.0,
//! };
//! let result = opsmodel::models::eoq::evaluate(&input, &ChartOptions::default())?;
//! assert!((result.eoq - 100.0).abs() < 1e-9);
//! # Ok::<(), ModelError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops, // Formula layout mirrors the textbook forms
    clippy::missing_const_for_fn
)]

pub mod chart;
pub mod cli;
pub mod error;
pub mod models;
pub mod scenario;
pub mod solver;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::chart::{ChartOptions, SamplePoint, Series};
    pub use crate::error::{ModelError, ModelResult};
    pub use crate::models::break_even::{BreakEvenInput, BreakEvenResult};
    pub use crate::models::eoq::{EoqInput, EoqResult};
    pub use crate::models::production::{
        ConstraintLine, ProductPlan, ProductionInput, ProductionResult, ResourceLimit,
    };
    pub use crate::models::queueing::{QueueInput, QueueResult};
    pub use crate::scenario::{ModelReport, ModelSpec, Scenario};
    pub use crate::solver::{MicrolpSolver, MilpSolver, SolveStatus};
}

/// Re-export for public API
pub use error::{ModelError, ModelResult};
