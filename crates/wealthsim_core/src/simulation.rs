//! The monthly projection engine.
//!
//! [`project`] advances the portfolio balance across the monthly date
//! sequence, applying compounding, fee drag, contribution growth, routine
//! and one-time withdrawals, and inflation adjustment, and records the
//! first month the goal balance is reached.

use tracing::debug;

use crate::config::SimulationParameters;
use crate::date_math::month_starts;
use crate::model::{Milestone, MonthlySample, ProjectionResult};

/// Project the portfolio month by month from start to end, inclusive.
///
/// Pure and deterministic: identical parameters always produce an identical
/// result, and nothing outside the returned value is touched. An end date
/// before the start date yields an empty result.
///
/// Within each month the order is fixed: interest accrues before that
/// month's cash flows (new cash does not earn the month's return), the
/// routine withdrawal precedes the one-time withdrawal, and the milestone
/// check sees the fully settled balance. Balances may go negative; no
/// floor is applied.
pub fn project(params: &SimulationParameters) -> ProjectionResult {
    let dates = month_starts(params.resolved_start(), params.end_date);
    debug!(months = dates.len(), "projecting portfolio");

    let periods_per_year = f64::from(params.compounding.periods_per_year());
    let period_rate = params.annual_return_pct / 100.0 / periods_per_year;
    let period_fee_rate = params.fee_pct / 100.0 / periods_per_year;
    // Inflation deflates monthly regardless of the compounding choice.
    let monthly_inflation = params.inflation_pct / 100.0 / 12.0;

    let mut balance = params.starting_balance;
    let mut current_contribution = params.monthly_contribution;
    let mut total_contributed = 0.0;
    let mut milestone = None;
    let mut samples = Vec::with_capacity(dates.len());

    for (i, date) in dates.into_iter().enumerate() {
        if params.compounding.compounds_on(date) {
            balance *= 1.0 + period_rate - period_fee_rate;
        }

        // Contribution growth compounds once per calendar year, ahead of
        // that January's contribution.
        if i > 0 && date.month() == 1 {
            current_contribution *= 1.0 + params.contribution_growth_pct / 100.0;
        }

        let contribution = if params.contribution_window.contains(date) {
            total_contributed += current_contribution;
            current_contribution
        } else {
            0.0
        };
        balance += contribution;

        let routine_withdrawal = if params.withdrawal_window.contains(date)
            && params.routine_withdrawal_frequency.applies_on(date)
        {
            params.routine_withdrawal_amount
        } else {
            0.0
        };
        balance -= routine_withdrawal;

        let one_time_withdrawal = params.one_time_withdrawals.amount_on(date);
        balance -= one_time_withdrawal;

        let real_balance = balance / (1.0 + monthly_inflation).powi(i as i32);

        if milestone.is_none() && balance >= params.target_value {
            milestone = Some(Milestone {
                date_reached: date,
                balance_at_reach: balance,
            });
        }

        samples.push(MonthlySample {
            date,
            nominal_balance: balance,
            real_balance,
            contribution,
            routine_withdrawal,
            one_time_withdrawal,
            cumulative_contributions: total_contributed,
        });
    }

    ProjectionResult { samples, milestone }
}
