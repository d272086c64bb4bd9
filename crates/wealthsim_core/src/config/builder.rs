//! Parameters builder
//!
//! Fluent API for assembling [`SimulationParameters`] with the dashboard's
//! defaults: a 20-year horizon when no end date is given, cash-flow windows
//! spanning the full projection range, and no goal unless a target is set.
//!
//! # Example
//!
//! ```ignore
//! use wealthsim_core::config::ParametersBuilder;
//! use wealthsim_core::model::RoutineWithdrawalFrequency;
//!
//! let params = ParametersBuilder::new()
//!     .start(2025, 1, 1)
//!     .years(20)
//!     .starting_balance(170_000.0)
//!     .monthly_contribution(3_000.0)
//!     .contribution_growth(2.0)
//!     .annual_return(7.0)
//!     .fee(0.25)
//!     .inflation(2.5)
//!     .routine_withdrawal(500.0, RoutineWithdrawalFrequency::Monthly)
//!     .target(2_000_000.0)
//!     .one_time_withdrawals_text("2030-06-01: 25000, 2040-01-01: 50000")
//!     .build();
//! ```

use jiff::ToSpan;
use jiff::civil::Date;

use super::SimulationParameters;
use crate::model::{
    CompoundingFrequency, DateWindow, OneTimeWithdrawals, RoutineWithdrawalFrequency,
};

/// Horizon used when neither an end date nor a duration is given, matching
/// the dashboard's default projection window.
const DEFAULT_DURATION_YEARS: usize = 20;

/// Builder for [`SimulationParameters`].
pub struct ParametersBuilder {
    starting_balance: f64,
    monthly_contribution: f64,
    contribution_growth_pct: f64,
    fee_pct: f64,
    inflation_pct: f64,
    annual_return_pct: f64,
    compounding: CompoundingFrequency,
    routine_withdrawal_amount: f64,
    routine_withdrawal_frequency: RoutineWithdrawalFrequency,
    target_value: f64,
    start_date: Option<Date>,
    end_date: Option<Date>,
    duration_years: Option<usize>,
    contribution_window: Option<DateWindow>,
    withdrawal_window: Option<DateWindow>,
    one_time_withdrawals: OneTimeWithdrawals,
}

impl Default for ParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParametersBuilder {
    /// Create a builder with everything zeroed and no goal set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            starting_balance: 0.0,
            monthly_contribution: 0.0,
            contribution_growth_pct: 0.0,
            fee_pct: 0.0,
            inflation_pct: 0.0,
            annual_return_pct: 0.0,
            compounding: CompoundingFrequency::Monthly,
            routine_withdrawal_amount: 0.0,
            routine_withdrawal_frequency: RoutineWithdrawalFrequency::None,
            target_value: f64::INFINITY,
            start_date: None,
            end_date: None,
            duration_years: None,
            contribution_window: None,
            withdrawal_window: None,
            one_time_withdrawals: OneTimeWithdrawals::new(),
        }
    }

    // =========================================================================
    // Dates and horizon
    // =========================================================================

    /// Set the projection start date.
    #[must_use]
    pub fn start_date(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Set the projection start date (convenience method).
    #[must_use]
    pub fn start(self, year: i16, month: i8, day: i8) -> Self {
        self.start_date(jiff::civil::date(year, month, day))
    }

    /// Set the projection end date.
    #[must_use]
    pub fn end_date(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Set the projection end date (convenience method).
    #[must_use]
    pub fn end(self, year: i16, month: i8, day: i8) -> Self {
        self.end_date(jiff::civil::date(year, month, day))
    }

    /// Set the horizon as a year count from the start date. An explicit
    /// end date takes precedence.
    #[must_use]
    pub fn years(mut self, years: usize) -> Self {
        self.duration_years = Some(years);
        self
    }

    // =========================================================================
    // Scalar assumptions
    // =========================================================================

    /// Set the starting balance.
    #[must_use]
    pub fn starting_balance(mut self, amount: f64) -> Self {
        self.starting_balance = amount;
        self
    }

    /// Set the base monthly contribution.
    #[must_use]
    pub fn monthly_contribution(mut self, amount: f64) -> Self {
        self.monthly_contribution = amount;
        self
    }

    /// Set the annual contribution growth percentage.
    #[must_use]
    pub fn contribution_growth(mut self, pct: f64) -> Self {
        self.contribution_growth_pct = pct;
        self
    }

    /// Set the annual fee percentage.
    #[must_use]
    pub fn fee(mut self, pct: f64) -> Self {
        self.fee_pct = pct;
        self
    }

    /// Set the annual inflation percentage.
    #[must_use]
    pub fn inflation(mut self, pct: f64) -> Self {
        self.inflation_pct = pct;
        self
    }

    /// Set the annual nominal return percentage.
    #[must_use]
    pub fn annual_return(mut self, pct: f64) -> Self {
        self.annual_return_pct = pct;
        self
    }

    /// Set the compounding frequency.
    #[must_use]
    pub fn compounding(mut self, frequency: CompoundingFrequency) -> Self {
        self.compounding = frequency;
        self
    }

    /// Set the goal balance for the milestone check.
    #[must_use]
    pub fn target(mut self, value: f64) -> Self {
        self.target_value = value;
        self
    }

    // =========================================================================
    // Withdrawals and windows
    // =========================================================================

    /// Set the recurring withdrawal amount and cadence.
    #[must_use]
    pub fn routine_withdrawal(
        mut self,
        amount: f64,
        frequency: RoutineWithdrawalFrequency,
    ) -> Self {
        self.routine_withdrawal_amount = amount;
        self.routine_withdrawal_frequency = frequency;
        self
    }

    /// Restrict contributions to an inclusive date range.
    #[must_use]
    pub fn contribution_window(mut self, start: Date, end: Date) -> Self {
        self.contribution_window = Some(DateWindow::new(start, end));
        self
    }

    /// Restrict routine withdrawals to an inclusive date range.
    #[must_use]
    pub fn withdrawal_window(mut self, start: Date, end: Date) -> Self {
        self.withdrawal_window = Some(DateWindow::new(start, end));
        self
    }

    /// Schedule one ad hoc withdrawal.
    #[must_use]
    pub fn one_time_withdrawal(mut self, date: Date, amount: f64) -> Self {
        self.one_time_withdrawals.insert(date, amount);
        self
    }

    /// Replace the ad hoc schedule with one parsed fail-soft from free text.
    #[must_use]
    pub fn one_time_withdrawals_text(mut self, text: &str) -> Self {
        self.one_time_withdrawals = OneTimeWithdrawals::parse_or_empty(text);
        self
    }

    /// Replace the ad hoc schedule wholesale.
    #[must_use]
    pub fn one_time_withdrawals(mut self, schedule: OneTimeWithdrawals) -> Self {
        self.one_time_withdrawals = schedule;
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Finalize the parameters.
    ///
    /// Unset windows default to the full projection range. An unset target
    /// never triggers a milestone.
    #[must_use]
    pub fn build(self) -> SimulationParameters {
        let anchor = self
            .start_date
            .unwrap_or_else(|| jiff::Zoned::now().date());
        let end_date = self.end_date.unwrap_or_else(|| {
            let years = self.duration_years.unwrap_or(DEFAULT_DURATION_YEARS);
            anchor.saturating_add((years as i64).years())
        });
        let full_range = DateWindow::new(anchor, end_date);

        SimulationParameters {
            starting_balance: self.starting_balance,
            monthly_contribution: self.monthly_contribution,
            contribution_growth_pct: self.contribution_growth_pct,
            fee_pct: self.fee_pct,
            inflation_pct: self.inflation_pct,
            annual_return_pct: self.annual_return_pct,
            compounding: self.compounding,
            routine_withdrawal_amount: self.routine_withdrawal_amount,
            routine_withdrawal_frequency: self.routine_withdrawal_frequency,
            target_value: self.target_value,
            start_date: self.start_date,
            end_date,
            contribution_window: self.contribution_window.unwrap_or(full_range),
            withdrawal_window: self.withdrawal_window.unwrap_or(full_range),
            one_time_withdrawals: self.one_time_withdrawals,
        }
    }
}
