//! Leap rule and year length.
//!
//! A year is leap when it is divisible by 4 but not by 100. There is no
//! 400-year exception, so every run of 100 consecutive years holds exactly
//! 24 leap years and [`DAYS_PER_CENTURY`] days.

use sr_core::{DayOfYear, Year};

use crate::month::Month;
use crate::unit::{DoubledHoliday, SingletonHoliday};

/// Days covered by the six months of one half of the year.
pub const DAYS_PER_HALF: DayOfYear = Month::DAYS as DayOfYear * Month::PER_HALF as DayOfYear;

/// Holiday days in a common year: two Yule, two Lithe, Mid-year's Day.
pub const HOLIDAYS_PER_COMMON_YEAR: DayOfYear =
    2 * DoubledHoliday::DAYS as DayOfYear + SingletonHoliday::DAYS as DayOfYear;

/// Length of a common (non-leap) year.
pub const COMMON_YEAR_DAYS: DayOfYear = 2 * DAYS_PER_HALF + HOLIDAYS_PER_COMMON_YEAR;

/// Leap years in any 100 consecutive years.
pub const LEAP_YEARS_PER_CENTURY: i64 = 24;

/// Days in any 100 consecutive years.
pub const DAYS_PER_CENTURY: i64 = 100 * COMMON_YEAR_DAYS as i64 + LEAP_YEARS_PER_CENTURY;

/// Whether `year` carries an Overlithe.
pub fn is_leap_year(year: Year) -> bool {
    year % 4 == 0 && year % 100 != 0
}

/// Number of days in `year`: 366 if leap, else 365.
pub fn days_in_year(year: Year) -> DayOfYear {
    COMMON_YEAR_DAYS + DayOfYear::from(is_leap_year(year))
}

/// Days from the first day of year 0 to the first day of `year`.
///
/// Negative for years before 0.
pub(crate) fn days_before_year(year: Year) -> i64 {
    let y = i64::from(year);
    // Multiples of k in [0, y), counted negatively below zero.
    let multiples_below = |k: i64| -(-y).div_euclid(k);
    y * i64::from(COMMON_YEAR_DAYS) + multiples_below(4) - multiples_below(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_rule() {
        assert!(is_leap_year(1420));
        assert!(!is_leap_year(1419));
        assert!(!is_leap_year(1400));
        assert!(!is_leap_year(2000));
        assert!(!is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(!is_leap_year(-3));
    }

    #[test]
    fn test_year_length() {
        assert_eq!(COMMON_YEAR_DAYS, 365);
        assert_eq!(days_in_year(1419), 365);
        assert_eq!(days_in_year(1420), 366);
        for y in -1000..=3000 {
            let leap = y % 4 == 0 && y % 100 != 0;
            assert_eq!(days_in_year(y) == 366, leap, "year {y}");
        }
    }

    #[test]
    fn test_days_before_year() {
        assert_eq!(days_before_year(0), 0);
        assert_eq!(days_before_year(1), 365);
        assert_eq!(days_before_year(5), 4 * 365 + 366);
        assert_eq!(days_before_year(-1), -365);
        assert_eq!(days_before_year(-4), -(3 * 365 + 366));
        for y in -500..500 {
            assert_eq!(
                days_before_year(y + 1) - days_before_year(y),
                i64::from(days_in_year(y)),
                "year {y}"
            );
            assert_eq!(days_before_year(y + 100) - days_before_year(y), DAYS_PER_CENTURY);
        }
    }
}
