//! Wealth projection library
//!
//! This crate provides the monthly projection engine behind a
//! wealth-accumulation dashboard. It supports:
//! - Monthly or annual compounding with fee drag
//! - Contributions with annual growth, gated by a date window
//! - Routine withdrawals on a monthly or annual cadence, gated by a date window
//! - One-time withdrawals on exact dates, parsed from free text
//! - Inflation-adjusted (real) balances
//! - Goal-milestone detection: the first month at or above a target value
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic parameter setup:
//!
//! ```ignore
//! use wealthsim_core::{ParametersBuilder, project};
//!
//! let params = ParametersBuilder::new()
//!     .start(2025, 1, 1)
//!     .years(20)
//!     .starting_balance(170_000.0)
//!     .monthly_contribution(3_000.0)
//!     .annual_return(7.0)
//!     .inflation(2.5)
//!     .target(2_000_000.0)
//!     .build();
//!
//! let result = project(&params);
//! if let Some(milestone) = &result.milestone {
//!     println!("{}", milestone.describe(params.target_value));
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod date_math;
pub mod error;
pub mod format;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ParametersBuilder, SimulationParameters};
pub use error::ScheduleParseError;
pub use model::{
    CompoundingFrequency, DateWindow, EXPORT_COLUMNS, Milestone, MonthlySample,
    OneTimeWithdrawals, ProjectionResult, ProjectionSummary, RoutineWithdrawalFrequency,
};
pub use simulation::project;
