//! Projection configuration
//!
//! The main configuration type is [`SimulationParameters`], the immutable
//! input record for one projection run. The presentation layer owns the
//! mapping from its input widgets to this struct; the engine never reads
//! anything else.
//!
//! # Builder DSL
//!
//! For a more ergonomic way to assemble parameters, use the builder:
//!
//! ```ignore
//! use wealthsim_core::config::ParametersBuilder;
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
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::model::{
    CompoundingFrequency, DateWindow, OneTimeWithdrawals, RoutineWithdrawalFrequency,
};

pub mod builder;

pub use builder::ParametersBuilder;

/// Complete input for one projection run.
///
/// All percentage fields are whole-number percentages (`7` means 7%); the
/// engine converts them to fractional per-period rates internally. The
/// engine assumes numeric fields are already validated and never rejects
/// them, but it degrades gracefully: an end date before the start yields
/// an empty result and an inverted window simply never matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Balance at the start of the projection.
    pub starting_balance: f64,
    /// Base monthly contribution, before annual growth.
    pub monthly_contribution: f64,
    /// Annual percentage increase applied to the contribution each January.
    #[serde(default)]
    pub contribution_growth_pct: f64,
    /// Annual fee rate, deducted alongside the return on compounding months.
    #[serde(default)]
    pub fee_pct: f64,
    /// Annual inflation rate used to deflate nominal balances.
    #[serde(default)]
    pub inflation_pct: f64,
    /// Annual nominal return rate.
    pub annual_return_pct: f64,
    /// How often interest and the fee are applied.
    #[serde(default)]
    pub compounding: CompoundingFrequency,
    /// Recurring withdrawal amount.
    #[serde(default)]
    pub routine_withdrawal_amount: f64,
    /// Recurring withdrawal cadence.
    #[serde(default)]
    pub routine_withdrawal_frequency: RoutineWithdrawalFrequency,
    /// Goal balance for the milestone check.
    pub target_value: f64,
    /// Projection start; `None` means "today" at projection time.
    #[serde(default)]
    pub start_date: Option<Date>,
    /// Projection end, inclusive.
    pub end_date: Date,
    /// Months receiving the contribution (inclusive bounds).
    pub contribution_window: DateWindow,
    /// Months eligible for the routine withdrawal (inclusive bounds).
    pub withdrawal_window: DateWindow,
    /// Ad hoc withdrawals on exact dates.
    #[serde(default)]
    pub one_time_withdrawals: OneTimeWithdrawals,
}

impl SimulationParameters {
    /// Start date with the "today" default applied.
    #[must_use]
    pub fn resolved_start(&self) -> Date {
        self.start_date.unwrap_or_else(|| jiff::Zoned::now().date())
    }
}
