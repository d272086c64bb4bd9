//! Date windows and the one-time withdrawal schedule.

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ScheduleParseError;

/// Inclusive date range gating a recurring cash flow.
///
/// A window whose `start` is after its `end` never contains any date; the
/// engine runs it as-is rather than rejecting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: Date,
    pub end: Date,
}

impl DateWindow {
    #[must_use]
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Inclusive containment on both ends.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Ad hoc withdrawals keyed by exact calendar date.
///
/// Built programmatically or from the dashboard's free-text
/// `date: amount, date: amount` field. A date only matches a projected
/// month when it falls on that month's first day, since those are the
/// dates the engine visits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OneTimeWithdrawals {
    entries: FxHashMap<Date, f64>,
}

impl OneTimeWithdrawals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `YYYY-MM-DD: amount` pairs separated by commas.
    ///
    /// Each entry is split on its first colon and both halves trimmed.
    /// The first malformed entry aborts the parse; a duplicate date keeps
    /// the later amount. Empty or whitespace-only input is a well-formed
    /// empty schedule.
    pub fn parse(text: &str) -> Result<Self, ScheduleParseError> {
        let mut entries = FxHashMap::default();
        if text.trim().is_empty() {
            return Ok(Self { entries });
        }

        for entry in text.split(',') {
            let entry = entry.trim();
            let Some((date_part, amount_part)) = entry.split_once(':') else {
                return Err(ScheduleParseError::MissingSeparator {
                    entry: entry.to_string(),
                });
            };
            let date = date_part
                .trim()
                .parse::<Date>()
                .map_err(|source| ScheduleParseError::InvalidDate {
                    entry: entry.to_string(),
                    source,
                })?;
            let amount = amount_part.trim().parse::<f64>().map_err(|source| {
                ScheduleParseError::InvalidAmount {
                    entry: entry.to_string(),
                    source,
                }
            })?;
            entries.insert(date, amount);
        }

        Ok(Self { entries })
    }

    /// Fail-soft variant of [`parse`](Self::parse): any malformed entry
    /// discards the whole schedule, yielding an empty one.
    #[must_use]
    pub fn parse_or_empty(text: &str) -> Self {
        match Self::parse(text) {
            Ok(schedule) => schedule,
            Err(err) => {
                warn!(%err, "discarding one-time withdrawal schedule");
                Self::new()
            }
        }
    }

    /// Amount scheduled for `date`, 0 when none.
    #[must_use]
    pub fn amount_on(&self, date: Date) -> f64 {
        self.entries.get(&date).copied().unwrap_or(0.0)
    }

    /// Schedule an amount, replacing any existing entry for the date.
    pub fn insert(&mut self, date: Date, amount: f64) {
        self.entries.insert(date, amount);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Date, f64)> for OneTimeWithdrawals {
    fn from_iter<I: IntoIterator<Item = (Date, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
