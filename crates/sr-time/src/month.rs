//! `Month` — the twelve thirty-day months of the Shire Reckoning.

use std::str::FromStr;

use sr_core::errors::{Error, Result};
use sr_core::utilities::title_case;
use sr_core::Day;

/// Month of the year.
///
/// Variants are numbered 0–11 in calendar order. Indices 0–5 form the first
/// half of the year (before Lithe), indices 6–11 the second half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
#[repr(u8)]
pub enum Month {
    /// Afteryule (0).
    Afteryule = 0,
    /// Solmath (1).
    Solmath = 1,
    /// Rethe (2).
    Rethe = 2,
    /// Astron (3).
    Astron = 3,
    /// Thrimidge (4).
    Thrimidge = 4,
    /// Forelithe (5).
    Forelithe = 5,
    /// Afterlithe (6).
    Afterlithe = 6,
    /// Wedmath (7).
    Wedmath = 7,
    /// Halimath (8).
    Halimath = 8,
    /// Winterfilth (9).
    Winterfilth = 9,
    /// Blotmath (10).
    Blotmath = 10,
    /// Foreyule (11).
    Foreyule = 11,
}

impl Month {
    /// Every month in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Afteryule,
        Month::Solmath,
        Month::Rethe,
        Month::Astron,
        Month::Thrimidge,
        Month::Forelithe,
        Month::Afterlithe,
        Month::Wedmath,
        Month::Halimath,
        Month::Winterfilth,
        Month::Blotmath,
        Month::Foreyule,
    ];

    /// Number of days in every month.
    pub const DAYS: Day = 30;

    /// Number of months in each half of the year.
    pub const PER_HALF: u8 = 6;

    /// Construct from a 0-based index (0 = Afteryule … 11 = Foreyule).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n)).copied()
    }

    /// Return the 0-based month index.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Return `true` for Afteryule through Forelithe.
    pub fn is_first_half(&self) -> bool {
        self.index() < Self::PER_HALF
    }

    /// Return the canonical lower-case name (`"afteryule"`, `"solmath"`, …).
    pub fn name(&self) -> &'static str {
        match self {
            Month::Afteryule => "afteryule",
            Month::Solmath => "solmath",
            Month::Rethe => "rethe",
            Month::Astron => "astron",
            Month::Thrimidge => "thrimidge",
            Month::Forelithe => "forelithe",
            Month::Afterlithe => "afterlithe",
            Month::Wedmath => "wedmath",
            Month::Halimath => "halimath",
            Month::Winterfilth => "winterfilth",
            Month::Blotmath => "blotmath",
            Month::Foreyule => "foreyule",
        }
    }

    /// Look a month up by name, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not one of the twelve month names.
    pub fn from_name(name: &str) -> Option<Self> {
        let m = match name.to_ascii_lowercase().as_str() {
            "afteryule" => Month::Afteryule,
            "solmath" => Month::Solmath,
            "rethe" => Month::Rethe,
            "astron" => Month::Astron,
            "thrimidge" => Month::Thrimidge,
            "forelithe" => Month::Forelithe,
            "afterlithe" => Month::Afterlithe,
            "wedmath" => Month::Wedmath,
            "halimath" => Month::Halimath,
            "winterfilth" => Month::Winterfilth,
            "blotmath" => Month::Blotmath,
            "foreyule" => Month::Foreyule,
            _ => return None,
        };
        Some(m)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&title_case(self.name()))
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Month::from_name(s.trim()).ok_or_else(|| Error::InvalidMonth(s.to_string()))
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}
