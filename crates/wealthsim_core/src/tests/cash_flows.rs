//! Tests for pure cash-flow accounting (zero return, zero fee)
//!
//! With the return and fee at zero, the balance moves only through
//! contributions and withdrawals, so every expectation is exact.

use jiff::civil::date;

use crate::config::ParametersBuilder;
use crate::model::RoutineWithdrawalFrequency;
use crate::simulation::project;

/// Final balance equals starting balance plus contributions minus
/// withdrawals when there is no growth.
#[test]
fn test_zero_return_is_pure_accounting() {
    let params = ParametersBuilder::new()
        .start(2025, 1, 1)
        .end(2025, 12, 1)
        .starting_balance(10_000.0)
        .monthly_contribution(1_000.0)
        .routine_withdrawal(200.0, RoutineWithdrawalFrequency::Monthly)
        .one_time_withdrawal(date(2025, 6, 1), 500.0)
        .build();

    let result = project(&params);
    let summary = result.summary();

    let expected = 10_000.0 + 12.0 * 1_000.0 - 12.0 * 200.0 - 500.0;
    assert!(
        (summary.final_balance - expected).abs() < 1e-9,
        "Expected ${:.2}, got ${:.2}",
        expected,
        summary.final_balance
    );
    assert!((summary.total_contributions - 12_000.0).abs() < 1e-9);

    // No inflation: real balances track nominal exactly.
    assert!(
        result
            .samples
            .iter()
            .all(|s| s.real_balance == s.nominal_balance)
    );
}

/// Cumulative contributions are non-decreasing and equal the running sum
/// of per-month contributions.
#[test]
fn test_cumulative_contributions_track_running_sum() {
    let params = ParametersBuilder::new()
        .start(2025, 1, 1)
        .end(2027, 12, 1)
        .monthly_contribution(750.0)
        .contribution_window(date(2025, 6, 1), date(2026, 6, 1))
        .build();

    let result = project(&params);

    let mut running = 0.0;
    for sample in &result.samples {
        running += sample.contribution;
        assert!(
            (sample.cumulative_contributions - running).abs() < 1e-9,
            "cumulative total diverged from the running sum at {}",
            sample.date
        );
    }
}

/// Months outside the contribution window contribute nothing and the
/// cumulative total freezes once the window closes.
#[test]
fn test_contribution_window_narrower_than_projection() {
    let params = ParametersBuilder::new()
        .start(2025, 1, 1)
        .end(2025, 12, 1)
        .monthly_contribution(100.0)
        .contribution_window(date(2025, 1, 1), date(2025, 6, 1))
        .build();

    let result = project(&params);

    for (i, sample) in result.samples.iter().enumerate() {
        if i < 6 {
            assert_eq!(sample.contribution, 100.0, "month {} is inside the window", i);
        } else {
            assert_eq!(sample.contribution, 0.0, "month {} is outside the window", i);
            assert_eq!(sample.cumulative_contributions, 600.0);
        }
    }
}

/// A `None` frequency never withdraws, whatever the amount says.
#[test]
fn test_no_routine_frequency_never_withdraws() {
    let params = ParametersBuilder::new()
        .start(2025, 1, 1)
        .end(2026, 12, 1)
        .starting_balance(5_000.0)
        .routine_withdrawal(500.0, RoutineWithdrawalFrequency::None)
        .build();

    let result = project(&params);

    assert!(result.samples.iter().all(|s| s.routine_withdrawal == 0.0));
    assert_eq!(result.summary().final_balance, 5_000.0);
}

/// An annual routine withdrawal fires only in January.
#[test]
fn test_annual_routine_withdrawal_fires_in_january() {
    let params = ParametersBuilder::new()
        .start(2025, 6, 1)
        .end(2026, 6, 1)
        .starting_balance(10_000.0)
        .routine_withdrawal(1_200.0, RoutineWithdrawalFrequency::Annually)
        .build();

    let result = project(&params);

    for sample in &result.samples {
        if sample.date == date(2026, 1, 1) {
            assert_eq!(sample.routine_withdrawal, 1_200.0);
        } else {
            assert_eq!(sample.routine_withdrawal, 0.0, "no withdrawal at {}", sample.date);
        }
    }
    assert!((result.summary().final_balance - 8_800.0).abs() < 1e-9);
}

/// The withdrawal window gates routine withdrawals on both ends.
#[test]
fn test_withdrawal_window_gates_routine_withdrawals() {
    let params = ParametersBuilder::new()
        .start(2025, 1, 1)
        .end(2025, 12, 1)
        .starting_balance(10_000.0)
        .routine_withdrawal(100.0, RoutineWithdrawalFrequency::Monthly)
        .withdrawal_window(date(2025, 3, 1), date(2025, 5, 1))
        .build();

    let result = project(&params);

    let withdrawn: f64 = result.samples.iter().map(|s| s.routine_withdrawal).sum();
    assert!((withdrawn - 300.0).abs() < 1e-9, "Mar, Apr, May only");
    assert!((result.summary().final_balance - 9_700.0).abs() < 1e-9);
}

/// One-time withdrawals apply on an exact date match only; a mid-month
/// date never coincides with a projected month start.
#[test]
fn test_one_time_withdrawal_requires_exact_date_match() {
    let params = ParametersBuilder::new()
        .start(2025, 1, 1)
        .end(2025, 12, 1)
        .starting_balance(10_000.0)
        .one_time_withdrawal(date(2025, 6, 15), 400.0)
        .one_time_withdrawal(date(2025, 7, 1), 250.0)
        .build();

    let result = project(&params);

    let applied: Vec<_> = result
        .samples
        .iter()
        .filter(|s| s.one_time_withdrawal != 0.0)
        .collect();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].date, date(2025, 7, 1));
    assert_eq!(applied[0].one_time_withdrawal, 250.0);
    assert!((result.summary().final_balance - 9_750.0).abs() < 1e-9);
}

/// Withdrawals may drive the balance negative; no floor is applied.
#[test]
fn test_negative_balances_propagate() {
    let params = ParametersBuilder::new()
        .start(2025, 1, 1)
        .end(2025, 6, 1)
        .starting_balance(100.0)
        .routine_withdrawal(100.0, RoutineWithdrawalFrequency::Monthly)
        .build();

    let result = project(&params);

    let expected = 100.0 - 6.0 * 100.0;
    assert!(
        (result.summary().final_balance - expected).abs() < 1e-9,
        "Expected ${:.2}, got ${:.2}",
        expected,
        result.summary().final_balance
    );
    assert!(result.samples[1].nominal_balance < 0.0);
}
