//! Day-of-week and week-of-year derivation.
//!
//! The week runs unbroken through the year except across the singleton
//! holidays, which belong to no week. Every year therefore starts on a
//! Sterday (2 Yule) and ends on a Highday (1 Yule).

use sr_core::DayOfYear;

use crate::date::ShireDate;
use crate::ordinal::{MID_YEARS_DAY, OVERLITHE};
use crate::unit::Unit;
use crate::weekday::Weekday;

/// Days in a week.
pub const DAYS_PER_WEEK: DayOfYear = 7;

/// Zero-based position of `ordinal` in the year's uninterrupted run of
/// week days, i.e. with the singleton holidays before it removed.
fn week_position(ordinal: DayOfYear, leap: bool) -> DayOfYear {
    let skipped = DayOfYear::from(ordinal > MID_YEARS_DAY)
        + DayOfYear::from(leap && ordinal > OVERLITHE);
    ordinal - 1 - skipped
}

/// Day of the week of `date`, or `None` for Mid-year's Day and Overlithe.
///
/// The second day of Yule and of Lithe is always a Sterday, the first
/// always a Highday.
pub fn day_of_week(date: &ShireDate) -> Option<Weekday> {
    match date.unit() {
        Unit::Singleton(_) => None,
        Unit::Doubled(_) if date.day() == 2 => Some(Weekday::Sterday),
        Unit::Doubled(_) => Some(Weekday::Highday),
        Unit::Month(_) => {
            let pos = week_position(date.ordinal(), date.is_leap_year());
            Weekday::from_index((pos % DAYS_PER_WEEK) as u8)
        }
    }
}

/// 1-based week of the year containing `date`, or `None` for Mid-year's Day
/// and Overlithe.
pub fn week_of_year(date: &ShireDate) -> Option<u8> {
    match date.unit() {
        Unit::Singleton(_) => None,
        _ => {
            let pos = week_position(date.ordinal(), date.is_leap_year());
            Some((pos / DAYS_PER_WEEK) as u8 + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;
    use crate::year::days_in_year;

    fn date(year: i32, unit: impl Into<Unit>, day: u8) -> ShireDate {
        ShireDate::new(year, unit, day).unwrap()
    }

    #[test]
    fn test_fixed_days() {
        for year in [1419, 1420, 1400, -4, 0] {
            assert_eq!(day_of_week(&date(year, Unit::YULE, 2)), Some(Weekday::Sterday));
            assert_eq!(day_of_week(&date(year, Unit::YULE, 1)), Some(Weekday::Highday));
            assert_eq!(day_of_week(&date(year, Unit::LITHE, 1)), Some(Weekday::Highday));
            assert_eq!(day_of_week(&date(year, Unit::LITHE, 2)), Some(Weekday::Sterday));
            assert_eq!(day_of_week(&date(year, Unit::MID_YEARS_DAY, 1)), None);
            assert_eq!(week_of_year(&date(year, Unit::MID_YEARS_DAY, 1)), None);
        }
        assert_eq!(day_of_week(&date(1420, Unit::OVERLITHE, 1)), None);
        assert_eq!(week_of_year(&date(1420, Unit::OVERLITHE, 1)), None);
    }

    #[test]
    fn test_months() {
        assert_eq!(day_of_week(&date(1419, Month::Afteryule, 1)), Some(Weekday::Sunday));
        assert_eq!(day_of_week(&date(1419, Month::Forelithe, 30)), Some(Weekday::Mersday));
        assert_eq!(day_of_week(&date(1419, Month::Afterlithe, 1)), Some(Weekday::Sunday));
        assert_eq!(day_of_week(&date(1420, Month::Afterlithe, 1)), Some(Weekday::Sunday));
        assert_eq!(week_of_year(&date(1419, Unit::YULE, 2)), Some(1));
        assert_eq!(week_of_year(&date(1419, Month::Afteryule, 6)), Some(1));
        assert_eq!(week_of_year(&date(1419, Month::Afteryule, 7)), Some(2));
        assert_eq!(week_of_year(&date(1419, Unit::LITHE, 1)), Some(26));
        assert_eq!(week_of_year(&date(1419, Unit::LITHE, 2)), Some(27));
        assert_eq!(week_of_year(&date(1420, Unit::LITHE, 2)), Some(27));
        assert_eq!(week_of_year(&date(1419, Unit::YULE, 1)), Some(52));
        assert_eq!(week_of_year(&date(1420, Unit::YULE, 1)), Some(52));
    }

    /// Walking a year day by day, the week advances by one weekday per day
    /// and simply pauses over the singleton holidays.
    #[test]
    fn test_week_is_unbroken() {
        for year in [1419, 1420, 1400, -8, -7] {
            let mut expected = Weekday::Sterday;
            for ordinal in 1..=days_in_year(year) {
                let d = ShireDate::from_ordinal(year, ordinal).unwrap();
                match day_of_week(&d) {
                    None => assert!(matches!(d.unit(), Unit::Singleton(_))),
                    Some(w) => {
                        assert_eq!(w, expected, "{d:?}");
                        let week = week_of_year(&d).unwrap();
                        assert!((1..=52).contains(&week));
                        expected = expected.succ();
                    }
                }
            }
            assert_eq!(expected, Weekday::Sterday);
        }
    }
}
