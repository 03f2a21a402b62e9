//! Rendering dates as text.
//!
//! The short form is `"<day> <Unit> <year>"`, e.g. `"22 Halimath 1419"`. The
//! singleton holidays carry no day number: `"Mid-Year's Day 1419"`. The long
//! form prefixes the weekday, `"Highday, 1 Lithe 1419"`, except on the
//! singleton holidays, which belong to no week.

use crate::date::ShireDate;
use crate::unit::Unit;

/// Text style used by [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// `"22 Halimath 1419"`.
    #[default]
    Short,
    /// `"Trewsday, 22 Halimath 1419"`.
    Long,
}

/// Render `date` in the given style.
///
/// ```
/// use sr_time::{format_date, DateFormat, Month, ShireDate};
/// let d = ShireDate::new(1419, Month::Halimath, 22).unwrap();
/// assert_eq!(format_date(&d, DateFormat::Short), "22 Halimath 1419");
/// ```
pub fn format_date(date: &ShireDate, style: DateFormat) -> String {
    let short = match date.unit() {
        Unit::Singleton(_) => format!("{} {}", date.unit(), date.year()),
        unit => format!("{} {} {}", date.day(), unit, date.year()),
    };
    match (style, date.weekday()) {
        (DateFormat::Long, Some(weekday)) => format!("{weekday}, {short}"),
        _ => short,
    }
}

/// Short form by default; the alternate flag (`{:#}`) selects the long form.
impl std::fmt::Display for ShireDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let style = if f.alternate() {
            DateFormat::Long
        } else {
            DateFormat::Short
        };
        f.write_str(&format_date(self, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;

    fn date(year: i32, unit: impl Into<Unit>, day: u8) -> ShireDate {
        ShireDate::new(year, unit, day).unwrap()
    }

    #[test]
    fn test_short() {
        assert_eq!(date(1419, Month::Halimath, 22).to_string(), "22 Halimath 1419");
        assert_eq!(date(1419, Unit::YULE, 2).to_string(), "2 Yule 1419");
        assert_eq!(date(1419, Unit::MID_YEARS_DAY, 1).to_string(), "Mid-Year's Day 1419");
        assert_eq!(date(1420, Unit::OVERLITHE, 1).to_string(), "Overlithe 1420");
        assert_eq!(date(-12, Month::Rethe, 3).to_string(), "3 Rethe -12");
    }

    #[test]
    fn test_long() {
        assert_eq!(
            format_date(&date(1419, Unit::LITHE, 1), DateFormat::Long),
            "Highday, 1 Lithe 1419"
        );
        assert_eq!(
            format!("{:#}", date(1419, Unit::YULE, 2)),
            "Sterday, 2 Yule 1419"
        );
        assert_eq!(
            format!("{:#}", date(1419, Month::Afteryule, 1)),
            "Sunday, 1 Afteryule 1419"
        );
        assert_eq!(
            format!("{:#}", date(1419, Unit::MID_YEARS_DAY, 1)),
            "Mid-Year's Day 1419"
        );
    }
}
