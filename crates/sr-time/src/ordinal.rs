//! Day-of-year conversion.
//!
//! Every conversion between a `(unit, day)` pair and a date routes through
//! the 1-based day-of-year index. The layout of a year is
//!
//! ```text
//!   1          2 Yule
//!   2..=181    Afteryule .. Forelithe   (6 × 30)
//!   182        1 Lithe
//!   183        Mid-year's Day
//!   184        Overlithe                (leap years only)
//!   184/185    2 Lithe
//!   ..         Afterlithe .. Foreyule   (6 × 30)
//!   365/366    1 Yule
//! ```

use sr_core::errors::{Error, Result};
use sr_core::{ensure, Day, DayOfYear, Year};

use crate::month::Month;
use crate::unit::{DoubledHoliday, SingletonHoliday, Unit};
use crate::year::{days_in_year, is_leap_year, COMMON_YEAR_DAYS, DAYS_PER_HALF};

/// 2 Yule, the first day of every year.
pub const YULE_SECOND: DayOfYear = 1;

/// 1 Lithe, the day after the last day of Forelithe.
pub const LITHE_FIRST: DayOfYear = YULE_SECOND + DAYS_PER_HALF + 1;

/// Mid-year's Day.
pub const MID_YEARS_DAY: DayOfYear = LITHE_FIRST + 1;

/// Overlithe, present only in leap years.
pub const OVERLITHE: DayOfYear = MID_YEARS_DAY + 1;

/// 2 Lithe: the day after Mid-year's Day, pushed back one by Overlithe.
pub const fn lithe_second(leap: bool) -> DayOfYear {
    MID_YEARS_DAY + 1 + leap as DayOfYear
}

/// Holiday days that precede the first day of a month in the given half.
const fn holidays_before_half(first_half: bool, leap: bool) -> DayOfYear {
    if first_half {
        YULE_SECOND
    } else {
        lithe_second(leap) - DAYS_PER_HALF
    }
}

/// Resolve a day-of-year index to its unit and day.
///
/// # Errors
/// Returns [`Error::InvalidOrdinal`] unless `1 <= ordinal <= days_in_year(year)`.
///
/// # Example
/// ```
/// use sr_time::ordinal::unit_and_day_from_ordinal;
/// use sr_time::Unit;
/// assert_eq!(unit_and_day_from_ordinal(1, 1419).unwrap(), (Unit::YULE, 2));
/// assert_eq!(unit_and_day_from_ordinal(365, 1419).unwrap(), (Unit::YULE, 1));
/// ```
pub fn unit_and_day_from_ordinal(ordinal: DayOfYear, year: Year) -> Result<(Unit, Day)> {
    let days_in_year = days_in_year(year);
    ensure!(
        (1..=days_in_year).contains(&ordinal),
        Error::InvalidOrdinal {
            ordinal,
            year,
            days_in_year,
        }
    );
    Ok(resolve(ordinal, is_leap_year(year)))
}

/// Unchecked core of [`unit_and_day_from_ordinal`]; `ordinal` must be in range.
pub(crate) fn resolve(ordinal: DayOfYear, leap: bool) -> (Unit, Day) {
    let last = COMMON_YEAR_DAYS + DayOfYear::from(leap);
    debug_assert!((1..=last).contains(&ordinal), "ordinal {ordinal} out of range");
    match ordinal {
        YULE_SECOND => (Unit::YULE, 2),
        o if o == last => (Unit::YULE, 1),
        LITHE_FIRST => (Unit::LITHE, 1),
        MID_YEARS_DAY => (Unit::MID_YEARS_DAY, 1),
        OVERLITHE if leap => (Unit::OVERLITHE, 1),
        o if o == lithe_second(leap) => (Unit::LITHE, 2),
        o => {
            let offset = o - holidays_before_half(o < LITHE_FIRST, leap) - 1;
            let days = DayOfYear::from(Month::DAYS);
            let month = Month::ALL[usize::from(offset / days)];
            (Unit::Month(month), (offset % days) as Day + 1)
        }
    }
}

/// Day-of-year index of `day` within `unit` in `year`.
///
/// The exact inverse of [`unit_and_day_from_ordinal`].
///
/// # Errors
/// * [`Error::InvalidDay`] if `day` is outside `1..=unit.max_day()`.
/// * [`Error::NotLeapYear`] for Overlithe in a common year.
///
/// # Example
/// ```
/// use sr_time::ordinal::ordinal_from_unit_and_day;
/// use sr_time::Month;
/// assert_eq!(ordinal_from_unit_and_day(Month::Afteryule, 2, 1419).unwrap(), 3);
/// ```
pub fn ordinal_from_unit_and_day(
    unit: impl Into<Unit>,
    day: Day,
    year: Year,
) -> Result<DayOfYear> {
    let unit = unit.into();
    let max = unit.max_day();
    ensure!(
        (1..=max).contains(&day),
        Error::InvalidDay {
            day: u32::from(day),
            unit: unit.name(),
            max,
        }
    );
    let leap = is_leap_year(year);
    let ordinal = match unit {
        Unit::Doubled(DoubledHoliday::Yule) if day == 2 => YULE_SECOND,
        Unit::Doubled(DoubledHoliday::Yule) => days_in_year(year),
        Unit::Doubled(DoubledHoliday::Lithe) if day == 1 => LITHE_FIRST,
        Unit::Doubled(DoubledHoliday::Lithe) => lithe_second(leap),
        Unit::Singleton(SingletonHoliday::MidYearsDay) => MID_YEARS_DAY,
        Unit::Singleton(SingletonHoliday::Overlithe) => {
            ensure!(leap, Error::NotLeapYear { year });
            OVERLITHE
        }
        Unit::Month(m) => {
            DayOfYear::from(m.index()) * DayOfYear::from(Month::DAYS)
                + holidays_before_half(m.is_first_half(), leap)
                + DayOfYear::from(day)
        }
    };
    Ok(ordinal)
}
