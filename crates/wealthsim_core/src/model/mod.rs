mod cadence;
mod results;
mod schedule;

pub use cadence::{CompoundingFrequency, RoutineWithdrawalFrequency};
pub use results::{
    EXPORT_COLUMNS, Milestone, MonthlySample, ProjectionResult, ProjectionSummary,
};
pub use schedule::{DateWindow, OneTimeWithdrawals};
