//! `Unit` — the month-or-holiday part of a date.
//!
//! A year is made of twelve months and four named holidays. Yule and Lithe
//! are *doubled*: each covers two days (Yule brackets the year boundary,
//! Lithe brackets Mid-year's Day). Mid-year's Day and Overlithe are
//! *singletons* of one day each, and Overlithe only exists in leap years.

use std::str::FromStr;

use sr_core::errors::{Error, Result};
use sr_core::utilities::title_case;
use sr_core::Day;

use crate::month::Month;

/// A holiday spanning two days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum DoubledHoliday {
    /// 1 Yule closes a year, 2 Yule opens the next.
    Yule,
    /// 1 Lithe precedes Mid-year's Day, 2 Lithe follows it (or Overlithe).
    Lithe,
}

impl DoubledHoliday {
    /// Number of days a doubled holiday spans.
    pub const DAYS: Day = 2;

    /// Return the canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            DoubledHoliday::Yule => "yule",
            DoubledHoliday::Lithe => "lithe",
        }
    }
}

/// A holiday standing outside the week, one day long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SingletonHoliday {
    /// The middle day of every year.
    #[cfg_attr(feature = "serde", serde(rename = "mid-year's day"))]
    MidYearsDay,
    /// The leap day, following Mid-year's Day.
    #[cfg_attr(feature = "serde", serde(rename = "overlithe"))]
    Overlithe,
}

impl SingletonHoliday {
    /// Number of days a singleton holiday spans.
    pub const DAYS: Day = 1;

    /// Return the canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            SingletonHoliday::MidYearsDay => "mid-year's day",
            SingletonHoliday::Overlithe => "overlithe",
        }
    }
}

/// Month or holiday: the named part of a [`ShireDate`](crate::ShireDate).
///
/// Each variant bounds its day number: 30 for months, 2 for doubled
/// holidays and 1 for singletons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Unit {
    /// One of the twelve ordinary months.
    Month(Month),
    /// Yule or Lithe.
    Doubled(DoubledHoliday),
    /// Mid-year's Day or Overlithe.
    Singleton(SingletonHoliday),
}

impl Unit {
    /// Shorthand for `Unit::Doubled(DoubledHoliday::Yule)`.
    pub const YULE: Unit = Unit::Doubled(DoubledHoliday::Yule);
    /// Shorthand for `Unit::Doubled(DoubledHoliday::Lithe)`.
    pub const LITHE: Unit = Unit::Doubled(DoubledHoliday::Lithe);
    /// Shorthand for `Unit::Singleton(SingletonHoliday::MidYearsDay)`.
    pub const MID_YEARS_DAY: Unit = Unit::Singleton(SingletonHoliday::MidYearsDay);
    /// Shorthand for `Unit::Singleton(SingletonHoliday::Overlithe)`.
    pub const OVERLITHE: Unit = Unit::Singleton(SingletonHoliday::Overlithe);

    /// Return the canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Month(m) => m.name(),
            Unit::Doubled(h) => h.name(),
            Unit::Singleton(h) => h.name(),
        }
    }

    /// Largest valid day number for this unit.
    pub fn max_day(&self) -> Day {
        match self {
            Unit::Month(_) => Month::DAYS,
            Unit::Doubled(_) => DoubledHoliday::DAYS,
            Unit::Singleton(_) => SingletonHoliday::DAYS,
        }
    }

    /// Return `true` for the four holidays.
    pub fn is_holiday(&self) -> bool {
        !matches!(self, Unit::Month(_))
    }

    /// Return the month, if this unit is one.
    pub fn month(&self) -> Option<Month> {
        match self {
            Unit::Month(m) => Some(*m),
            _ => None,
        }
    }

    /// Look a unit up by name, ignoring ASCII case.
    ///
    /// # Errors
    /// Returns [`Error::InvalidUnit`] for names outside the month and
    /// holiday tables.
    pub fn from_name(name: &str) -> Result<Self> {
        if let Some(m) = Month::from_name(name) {
            return Ok(Unit::Month(m));
        }
        let unit = match name.to_ascii_lowercase().as_str() {
            "yule" => Unit::YULE,
            "lithe" => Unit::LITHE,
            "mid-year's day" => Unit::MID_YEARS_DAY,
            "overlithe" => Unit::OVERLITHE,
            _ => return Err(Error::InvalidUnit(name.to_string())),
        };
        Ok(unit)
    }
}

impl From<Month> for Unit {
    fn from(m: Month) -> Self {
        Unit::Month(m)
    }
}

impl From<DoubledHoliday> for Unit {
    fn from(h: DoubledHoliday) -> Self {
        Unit::Doubled(h)
    }
}

impl From<SingletonHoliday> for Unit {
    fn from(h: SingletonHoliday) -> Self {
        Unit::Singleton(h)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&title_case(self.name()))
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Unit::from_name(s.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(Unit::from_name("Yule"), Ok(Unit::YULE));
        assert_eq!(Unit::from_name("MID-YEAR'S DAY"), Ok(Unit::MID_YEARS_DAY));
        assert_eq!(
            Unit::from_name("afteryule"),
            Ok(Unit::Month(Month::Afteryule))
        );
        assert_eq!(
            Unit::from_name("midyear"),
            Err(Error::InvalidUnit("midyear".into()))
        );
    }

    #[test]
    fn test_day_bounds() {
        assert_eq!(Unit::Month(Month::Rethe).max_day(), 30);
        assert_eq!(Unit::LITHE.max_day(), 2);
        assert_eq!(Unit::OVERLITHE.max_day(), 1);
        assert!(Unit::YULE.is_holiday());
        assert!(!Unit::Month(Month::Rethe).is_holiday());
    }

    #[test]
    fn test_display() {
        assert_eq!(Unit::MID_YEARS_DAY.to_string(), "Mid-Year's Day");
        assert_eq!(Unit::YULE.to_string(), "Yule");
        assert_eq!(Unit::from(Month::Blotmath).to_string(), "Blotmath");
    }
}
