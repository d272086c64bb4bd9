//! Month-boundary date helpers for the projection loop.
//!
//! The engine walks calendar month starts, so everything here is direct
//! year/month arithmetic on `jiff::civil::Date`, with no `jiff::Span`
//! construction or normalisation in the hot path.

use jiff::civil::Date;

/// First day of the month containing `d`.
#[inline]
pub fn month_start(d: Date) -> Date {
    jiff::civil::date(d.year(), d.month(), 1)
}

/// First day of the month after the one containing `d`.
#[inline]
pub fn next_month_start(d: Date) -> Date {
    if d.month() == 12 {
        jiff::civil::date(d.year() + 1, 1, 1)
    } else {
        jiff::civil::date(d.year(), d.month() + 1, 1)
    }
}

/// Ascending first-of-month dates in `[from, to]`.
///
/// Anchors to calendar month boundaries: when `from` is not itself a month
/// start, the sequence begins on the next month's first day. `from > to`
/// yields an empty sequence, as does a sub-month range containing no
/// month start.
pub fn month_starts(from: Date, to: Date) -> Vec<Date> {
    if from > to {
        return Vec::new();
    }

    let span_months = (i32::from(to.year()) - i32::from(from.year())) * 12
        + (i32::from(to.month()) - i32::from(from.month()))
        + 1;
    let mut out = Vec::with_capacity(span_months.max(0) as usize);

    let mut cursor = if from.day() == 1 {
        from
    } else {
        next_month_start(from)
    };
    while cursor <= to {
        out.push(cursor);
        cursor = next_month_start(cursor);
    }
    out
}
