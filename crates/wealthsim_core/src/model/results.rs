//! Projection results
//!
//! Output types from a projection run: the per-month samples, the goal
//! milestone, and the conversions the presentation layer needs (chart
//! series, tabular export rows, headline summary).

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::format::{format_currency_whole, format_date_mdy};

/// Column headers for the flat tabular export, in row order.
pub const EXPORT_COLUMNS: [&str; 7] = [
    "Date",
    "Portfolio Value",
    "Real Value",
    "Contribution",
    "Routine Withdrawal",
    "Custom Withdrawal",
    "Cumulative Contributions",
];

/// State of the portfolio at one projected month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySample {
    /// First day of the projected month.
    pub date: Date,
    /// Balance after this month's compounding and cash flows.
    pub nominal_balance: f64,
    /// Nominal balance deflated by cumulative inflation since the start.
    pub real_balance: f64,
    /// Contribution applied this month (0 outside the contribution window).
    pub contribution: f64,
    /// Routine withdrawal applied this month.
    pub routine_withdrawal: f64,
    /// One-time withdrawal applied this month.
    pub one_time_withdrawal: f64,
    /// Running total of contributions up to and including this month.
    pub cumulative_contributions: f64,
}

impl MonthlySample {
    /// One export row under [`EXPORT_COLUMNS`]: date as `MM/DD/YYYY`,
    /// money cells with two decimals.
    #[must_use]
    pub fn export_row(&self) -> [String; 7] {
        [
            format_date_mdy(self.date),
            format!("{:.2}", self.nominal_balance),
            format!("{:.2}", self.real_balance),
            format!("{:.2}", self.contribution),
            format!("{:.2}", self.routine_withdrawal),
            format!("{:.2}", self.one_time_withdrawal),
            format!("{:.2}", self.cumulative_contributions),
        ]
    }
}

/// First month the nominal balance met or exceeded the target value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub date_reached: Date,
    pub balance_at_reach: f64,
}

impl Milestone {
    /// Human-readable milestone sentence, e.g.
    /// `Target of $2,000,000 reached on 01/01/2035`.
    #[must_use]
    pub fn describe(&self, target_value: f64) -> String {
        format!(
            "Target of {} reached on {}",
            format_currency_whole(target_value),
            format_date_mdy(self.date_reached)
        )
    }
}

/// Headline numbers for a projection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: usize,
    pub final_balance: f64,
    pub final_real_balance: f64,
    pub total_contributions: f64,
}

/// Complete output of a projection run: one sample per projected calendar
/// month, in chronological order, plus the goal milestone if the target
/// was ever reached. Nothing is mutated after a sample is appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub samples: Vec<MonthlySample>,
    pub milestone: Option<Milestone>,
}

impl ProjectionResult {
    /// Number of projected months.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Last projected month, if any.
    #[must_use]
    pub fn final_sample(&self) -> Option<&MonthlySample> {
        self.samples.last()
    }

    /// `(date, nominal balance)` pairs for the portfolio-value chart line.
    pub fn nominal_series(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.samples.iter().map(|s| (s.date, s.nominal_balance))
    }

    /// `(date, real balance)` pairs for the inflation-adjusted chart line.
    pub fn real_series(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.samples.iter().map(|s| (s.date, s.real_balance))
    }

    /// `(date, cumulative contributions)` pairs for the
    /// contributions-vs-growth chart.
    pub fn cumulative_contribution_series(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.samples
            .iter()
            .map(|s| (s.date, s.cumulative_contributions))
    }

    /// Total contributed over the whole projection.
    #[must_use]
    pub fn total_contributions(&self) -> f64 {
        self.final_sample()
            .map_or(0.0, |s| s.cumulative_contributions)
    }

    /// One row of strings per sample, under [`EXPORT_COLUMNS`].
    #[must_use]
    pub fn export_rows(&self) -> Vec<[String; 7]> {
        self.samples.iter().map(MonthlySample::export_row).collect()
    }

    /// Headline numbers, zeros for an empty projection.
    #[must_use]
    pub fn summary(&self) -> ProjectionSummary {
        match self.final_sample() {
            Some(last) => ProjectionSummary {
                months: self.samples.len(),
                final_balance: last.nominal_balance,
                final_real_balance: last.real_balance,
                total_contributions: last.cumulative_contributions,
            },
            None => ProjectionSummary {
                months: 0,
                final_balance: 0.0,
                final_real_balance: 0.0,
                total_contributions: 0.0,
            },
        }
    }
}
