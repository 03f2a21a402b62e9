//! Error types for shire-reckoning.
//!
//! Every failure in the library is a deterministic input-validation failure,
//! so the hierarchy is a single `thiserror`-derived enum with one variant per
//! kind of bad input. The [`ensure!`](crate::ensure) macro is the shorthand
//! used for precondition checks.

use thiserror::Error;

use crate::{DayOfYear, Year};

/// The top-level error type used throughout shire-reckoning.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A day-of-year index outside `[1, days_in_year]`.
    #[error("day of year {ordinal} out of range [1, {days_in_year}] for year {year}")]
    InvalidOrdinal {
        /// The rejected day-of-year index.
        ordinal: DayOfYear,
        /// The year the index was resolved against.
        year: Year,
        /// Number of days in `year`.
        days_in_year: DayOfYear,
    },

    /// A name that is neither a month nor a holiday.
    #[error("unrecognized calendar unit {0:?}")]
    InvalidUnit(String),

    /// A name that is not one of the seven weekdays.
    #[error("unrecognized weekday {0:?}")]
    InvalidWeekday(String),

    /// Text named a month or holiday that does not exist.
    #[error("invalid month {0:?}")]
    InvalidMonth(String),

    /// A day number outside the bound of its month or holiday.
    #[error("day {day} out of range [1, {max}] for {unit}")]
    InvalidDay {
        /// The rejected day number. Parsed text holding a number too large
        /// for `u32` saturates to `u32::MAX`.
        day: u32,
        /// Name of the month or holiday.
        unit: &'static str,
        /// Largest valid day for `unit`.
        max: u8,
    },

    /// Overlithe requested in a year that has none.
    #[error("{year} is not a leap year")]
    NotLeapYear {
        /// The non-leap year.
        year: Year,
    },

    /// Text that does not match `[<day> ]<unit-name> <year>`.
    #[error("malformed date text {0:?}")]
    MalformedText(String),
}

/// Shorthand `Result` type used throughout shire-reckoning.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function unless `$cond` holds.
///
/// # Example
/// ```
/// use sr_core::{ensure, errors::{Error, Result}};
/// fn leap_only(year: i32) -> Result<i32> {
///     ensure!(year % 4 == 0, Error::NotLeapYear { year });
///     Ok(year)
/// }
/// assert!(leap_only(1420).is_ok());
/// assert_eq!(leap_only(1419), Err(Error::NotLeapYear { year: 1419 }));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
