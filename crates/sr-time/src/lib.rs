//! # sr-time
//!
//! Dates in the Shire Reckoning: twelve months of thirty days, Yule and
//! Lithe spanning two days each, Mid-year's Day, and an Overlithe in leap
//! years.
//!
//! ```
//! use sr_time::{Month, ShireDate, Unit, Weekday};
//!
//! let d: ShireDate = "29 afteryule 1419".parse().unwrap();
//! assert_eq!(d + 3, ShireDate::new(1419, Month::Solmath, 2).unwrap());
//!
//! let yule = ShireDate::new(1419, Unit::YULE, 1).unwrap();
//! assert_eq!(yule.weekday(), Some(Weekday::Highday));
//! assert_eq!(format!("{:#}", yule.next_day()), "Sterday, 2 Yule 1420");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ShireDate` type and date arithmetic.
pub mod date;

/// Text rendering.
pub mod format;

/// `Month` — the twelve months.
pub mod month;

/// Day-of-year ⇄ (unit, day) conversion.
pub mod ordinal;

/// Text parsing.
pub mod parse;

/// `DateRange` — iteration over consecutive dates.
pub mod range;

/// `Unit` — month or holiday.
pub mod unit;

/// Day-of-week and week-of-year.
pub mod week;

/// `Weekday` — day of the week.
pub mod weekday;

/// Leap rule and year length.
pub mod year;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::ShireDate;
pub use format::{format_date, DateFormat};
pub use month::Month;
pub use ordinal::{ordinal_from_unit_and_day, unit_and_day_from_ordinal};
pub use parse::parse_date;
pub use range::DateRange;
pub use unit::{DoubledHoliday, SingletonHoliday, Unit};
pub use week::{day_of_week, week_of_year};
pub use weekday::Weekday;
pub use year::{days_in_year, is_leap_year};
