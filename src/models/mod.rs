//! Static tables of pre-aggregated December 2025 service-request statistics.
//!
//! Every table is built from literals in [`embedded`] by [`Dataset::load`];
//! derived columns are computed at construction and nothing is mutated
//! afterwards.

pub mod agency;
pub mod borough;
pub mod channel;
pub mod complaint;
pub mod consistency;
pub mod daily;
pub mod dataset;
pub mod embedded;
pub mod insights;
pub mod status;
pub mod summary;

use std::fmt;

pub use dataset::Dataset;

#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    ClosedExceedsTotal {
        table: &'static str,
        row: String,
        closed: u64,
        total: u64,
    },
    DateOutOfRange { offset: usize },
    InvalidMonthStart { year: i32, month: u32, day: u32 },
    EmptyTable { table: &'static str },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::ClosedExceedsTotal { table, row, closed, total } => write!(
                f,
                "{table} row '{row}' has {closed} closed out of {total} total"
            ),
            DataError::DateOutOfRange { offset } => {
                write!(f, "daily row {offset} falls outside the calendar")
            }
            DataError::InvalidMonthStart { year, month, day } => {
                write!(f, "month start {year}-{month:02}-{day:02} is not a calendar date")
            }
            DataError::EmptyTable { table } => write!(f, "{table} table is empty"),
        }
    }
}

impl std::error::Error for DataError {}

/// Closed share of total as a percentage, rounded to one decimal.
/// A zero total has no meaningful rate and reports 0.0.
pub fn resolution_rate(closed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(closed as f64 / total as f64 * 100.0)
}

/// Unrounded percentage share of `part` in `whole`.
pub fn share_pct(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub(crate) fn check_closed(
    table: &'static str,
    row: &str,
    closed: u64,
    total: u64,
) -> Result<(), DataError> {
    if closed > total {
        return Err(DataError::ClosedExceedsTotal {
            table,
            row: row.to_string(),
            closed,
            total,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_rounds_to_one_decimal() {
        assert_eq!(resolution_rate(5664, 9692), 58.4);
        assert_eq!(resolution_rate(301_350, 332_102), 90.7);
        assert_eq!(resolution_rate(10, 10), 100.0);
    }

    #[test]
    fn zero_total_has_zero_rate() {
        assert_eq!(resolution_rate(0, 0), 0.0);
        assert_eq!(share_pct(5, 0), 0.0);
    }

    #[test]
    fn bad_month_start_names_the_date() {
        let err = DataError::InvalidMonthStart { year: 2025, month: 2, day: 30 };
        assert_eq!(err.to_string(), "month start 2025-02-30 is not a calendar date");
    }

    #[test]
    fn closed_over_total_is_rejected() {
        let err = check_closed("agency", "NYPD", 11, 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "agency row 'NYPD' has 11 closed out of 10 total"
        );
    }
}
