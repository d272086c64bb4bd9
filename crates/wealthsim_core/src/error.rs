use std::fmt;

/// Errors from parsing the one-time withdrawal text field.
///
/// Each variant carries the offending entry so callers can point at it.
/// The fail-soft "discard everything" policy lives in
/// [`OneTimeWithdrawals::parse_or_empty`](crate::model::OneTimeWithdrawals::parse_or_empty),
/// not here.
#[derive(Debug)]
pub enum ScheduleParseError {
    /// Entry had no `date: amount` colon separator.
    MissingSeparator { entry: String },
    /// The date half did not parse as a calendar date.
    InvalidDate { entry: String, source: jiff::Error },
    /// The amount half did not parse as a number.
    InvalidAmount {
        entry: String,
        source: std::num::ParseFloatError,
    },
}

impl fmt::Display for ScheduleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleParseError::MissingSeparator { entry } => {
                write!(f, "entry {entry:?} is missing a ':' separator")
            }
            ScheduleParseError::InvalidDate { entry, .. } => {
                write!(f, "entry {entry:?} has an invalid date")
            }
            ScheduleParseError::InvalidAmount { entry, .. } => {
                write!(f, "entry {entry:?} has an invalid amount")
            }
        }
    }
}

impl std::error::Error for ScheduleParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleParseError::MissingSeparator { .. } => None,
            ScheduleParseError::InvalidDate { source, .. } => Some(source),
            ScheduleParseError::InvalidAmount { source, .. } => Some(source),
        }
    }
}
