use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// How often interest and the fee are applied to the balance.
///
/// Annual rates are divided by the period count, so `Annually` applies the
/// full annual rate once per year, in January.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    #[default]
    Monthly,
    Annually,
}

impl CompoundingFrequency {
    /// Compounding periods per year: the divisor for annual rates.
    #[must_use]
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Annually => 1,
        }
    }

    /// Whether `date`'s month is a compounding month.
    #[must_use]
    pub fn compounds_on(self, date: Date) -> bool {
        match self {
            CompoundingFrequency::Monthly => true,
            CompoundingFrequency::Annually => date.month() == 1,
        }
    }
}

/// Cadence of the recurring withdrawal inside the withdrawal window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutineWithdrawalFrequency {
    /// No recurring withdrawal.
    #[default]
    None,
    Monthly,
    /// Once per year, in January.
    Annually,
}

impl RoutineWithdrawalFrequency {
    /// Whether a routine withdrawal fires at `date`. The window check is
    /// the caller's.
    #[must_use]
    pub fn applies_on(self, date: Date) -> bool {
        match self {
            RoutineWithdrawalFrequency::None => false,
            RoutineWithdrawalFrequency::Monthly => true,
            RoutineWithdrawalFrequency::Annually => date.month() == 1,
        }
    }
}
