//! `Weekday` — the seven-day week of the Shire Reckoning.

use std::str::FromStr;

use sr_core::errors::{Error, Result};
use sr_core::utilities::title_case;

/// Day of the week.
///
/// Variants are numbered 0–6 (Sterday = 0, Highday = 6). Every year opens
/// on a Sterday and closes on a Highday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Weekday {
    /// Sterday (0).
    Sterday = 0,
    /// Sunday (1).
    Sunday = 1,
    /// Monday (2).
    Monday = 2,
    /// Trewsday (3).
    Trewsday = 3,
    /// Hevensday (4).
    Hevensday = 4,
    /// Mersday (5).
    Mersday = 5,
    /// Highday (6).
    Highday = 6,
}

impl Weekday {
    /// Every weekday in order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sterday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Trewsday,
        Weekday::Hevensday,
        Weekday::Mersday,
        Weekday::Highday,
    ];

    /// Construct from the 0-based index (0 = Sterday … 6 = Highday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n)).copied()
    }

    /// Return the 0-based index.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Return the canonical lower-case name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sterday => "sterday",
            Weekday::Sunday => "sunday",
            Weekday::Monday => "monday",
            Weekday::Trewsday => "trewsday",
            Weekday::Hevensday => "hevensday",
            Weekday::Mersday => "mersday",
            Weekday::Highday => "highday",
        }
    }

    /// The following day of the week, wrapping Highday to Sterday.
    pub fn succ(&self) -> Self {
        Self::ALL[usize::from((self.index() + 1) % 7)]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&title_case(self.name()))
    }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::InvalidWeekday(s.to_string()))
    }
}
