//! `ShireDate` type.
//!
//! A date is a year together with its 1-based day-of-year index. The
//! month-or-holiday and the day within it are resolved once at construction
//! and carried alongside, so equality, ordering and hashing all reduce to
//! `(year, ordinal)`.

use std::cmp::Ordering;

use sr_core::errors::Result;
use sr_core::{Day, DayCount, DayOfYear, Year};
use tracing::trace;

use crate::month::Month;
use crate::ordinal::{ordinal_from_unit_and_day, resolve, unit_and_day_from_ordinal, YULE_SECOND};
use crate::range::DateRange;
use crate::unit::Unit;
use crate::week;
use crate::weekday::Weekday;
use crate::year::{days_before_year, days_in_year, is_leap_year, DAYS_PER_CENTURY};

/// A date in the Shire Reckoning.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShireDate {
    year: Year,
    ordinal: DayOfYear,
    unit: Unit,
    day: Day,
}

impl ShireDate {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a year, a month or holiday, and a day within it.
    ///
    /// # Errors
    /// * [`Error::InvalidDay`](sr_core::Error::InvalidDay) if `day` exceeds
    ///   the unit's bound (30, 2 or 1) or is zero.
    /// * [`Error::NotLeapYear`](sr_core::Error::NotLeapYear) for Overlithe
    ///   in a common year.
    pub fn new(year: Year, unit: impl Into<Unit>, day: Day) -> Result<Self> {
        let unit = unit.into();
        let ordinal = ordinal_from_unit_and_day(unit, day, year)?;
        Ok(Self {
            year,
            ordinal,
            unit,
            day,
        })
    }

    /// Create a date from a year and a 1-based day-of-year index.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOrdinal`](sr_core::Error::InvalidOrdinal)
    /// unless `1 <= ordinal <= days_in_year(year)`.
    pub fn from_ordinal(year: Year, ordinal: DayOfYear) -> Result<Self> {
        let (unit, day) = unit_and_day_from_ordinal(ordinal, year)?;
        Ok(Self {
            year,
            ordinal,
            unit,
            day,
        })
    }

    /// Create a date from an ordinal already known to be in range.
    fn from_ordinal_unchecked(year: Year, ordinal: DayOfYear) -> Self {
        let (unit, day) = resolve(ordinal, is_leap_year(year));
        Self {
            year,
            ordinal,
            unit,
            day,
        }
    }

    /// 2 Yule, the first day of `year`.
    pub fn first_of_year(year: Year) -> Self {
        Self::from_ordinal_unchecked(year, YULE_SECOND)
    }

    /// 1 Yule, the last day of `year`.
    pub fn last_of_year(year: Year) -> Self {
        Self::from_ordinal_unchecked(year, days_in_year(year))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month or holiday.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Return the month, or `None` on a holiday.
    pub fn month(&self) -> Option<Month> {
        self.unit.month()
    }

    /// Return the day within the month or holiday.
    pub fn day(&self) -> Day {
        self.day
    }

    /// Return the 1-based day of the year.
    ///
    /// This is the only ordinal accessor; weekday, week and arithmetic all
    /// resolve through it.
    pub fn ordinal(&self) -> DayOfYear {
        self.ordinal
    }

    /// Return `true` if the date's year has an Overlithe.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in the date's year.
    pub fn days_in_year(&self) -> DayOfYear {
        days_in_year(self.year)
    }

    /// Day of the week, or `None` on Mid-year's Day and Overlithe.
    pub fn weekday(&self) -> Option<Weekday> {
        week::day_of_week(self)
    }

    /// 1-based week of the year, or `None` on Mid-year's Day and Overlithe.
    pub fn week_of_year(&self) -> Option<u8> {
        week::week_of_year(self)
    }

    /// Days elapsed since 2 Yule of year 0.
    pub fn day_number(&self) -> i64 {
        days_before_year(self.year) + i64::from(self.ordinal) - 1
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days, or return `None` if the resulting year does not
    /// fit in a [`Year`].
    pub fn checked_add_days(self, n: DayCount) -> Option<Self> {
        self.checked_shift(i64::from(n))
    }

    /// Shift by `n` days; `n` is wide enough to hold `-DayCount::MIN`.
    fn checked_shift(self, n: i64) -> Option<Self> {
        let mut ordinal = i64::from(self.ordinal) + n;
        if !(1..=i64::from(self.days_in_year())).contains(&ordinal) {
            trace!(
                year = self.year,
                ordinal = self.ordinal,
                delta = n,
                "normalizing across year boundary"
            );
        }

        // Every 100 consecutive years have the same length, so whole
        // centuries can be stepped over at once.
        let centuries = (ordinal - 1) / DAYS_PER_CENTURY;
        ordinal -= centuries * DAYS_PER_CENTURY;
        let mut year = Year::try_from(i64::from(self.year) + 100 * centuries).ok()?;

        while ordinal > i64::from(days_in_year(year)) {
            ordinal -= i64::from(days_in_year(year));
            year = year.checked_add(1)?;
        }
        while ordinal < 1 {
            year = year.checked_sub(1)?;
            ordinal += i64::from(days_in_year(year));
        }
        let ordinal = DayOfYear::try_from(ordinal).ok()?;
        Some(Self::from_ordinal_unchecked(year, ordinal))
    }

    /// Advance by `n` days (negative `n` moves backward).
    ///
    /// # Panics
    /// Panics if the resulting year overflows [`Year`]; see
    /// [`checked_add_days`](Self::checked_add_days).
    pub fn add_days(self, n: DayCount) -> Self {
        self.checked_add_days(n)
            .expect("date arithmetic overflowed the year range")
    }

    /// The following day.
    pub fn next_day(self) -> Self {
        self.add_days(1)
    }

    /// The preceding day.
    pub fn prev_day(self) -> Self {
        self.add_days(-1)
    }

    /// Return the number of days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: ShireDate) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Every date from `start` to `end`, both inclusive.
    pub fn range(start: ShireDate, end: ShireDate) -> DateRange {
        DateRange::new(start, end)
    }

    /// Every date of `year`, 2 Yule through 1 Yule.
    pub fn year_dates(year: Year) -> DateRange {
        DateRange::new(Self::first_of_year(year), Self::last_of_year(year))
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

impl PartialOrd for ShireDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShireDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.ordinal).cmp(&(other.year, other.ordinal))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<DayCount> for ShireDate {
    type Output = Self;
    fn add(self, rhs: DayCount) -> Self {
        self.add_days(rhs)
    }
}

impl std::ops::Sub<DayCount> for ShireDate {
    type Output = Self;
    fn sub(self, rhs: DayCount) -> Self {
        self.checked_shift(-i64::from(rhs))
            .expect("date arithmetic overflowed the year range")
    }
}

impl std::ops::Sub<ShireDate> for ShireDate {
    type Output = i64;
    fn sub(self, rhs: ShireDate) -> i64 {
        rhs.days_between(self)
    }
}

impl std::ops::AddAssign<DayCount> for ShireDate {
    fn add_assign(&mut self, rhs: DayCount) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign<DayCount> for ShireDate {
    fn sub_assign(&mut self, rhs: DayCount) {
        *self = *self - rhs;
    }
}

// ── Debug ─────────────────────────────────────────────────────────────────────

impl std::fmt::Debug for ShireDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ShireDate({} {} {}, #{})",
            self.day,
            self.unit.name(),
            self.year,
            self.ordinal
        )
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for ShireDate {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ShireDate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
