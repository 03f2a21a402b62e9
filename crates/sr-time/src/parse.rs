//! Parsing dates from text.
//!
//! Accepted input is `[<day> ]<unit-name> <year>` with fields separated by
//! whitespace. The day defaults to 1, the unit name is matched without
//! regard to case, and the year may carry a leading `-`.

use std::str::FromStr;

use sr_core::errors::{Error, Result};
use sr_core::{Day, Year};
use tracing::debug;

use crate::date::ShireDate;
use crate::unit::Unit;

/// Parse a date such as `"22 Halimath 1419"` or `"mid-year's day 1419"`.
///
/// Checks run in this order, and the first failure wins:
/// 1. shape of the text ([`Error::MalformedText`]),
/// 2. unit name ([`Error::InvalidMonth`]),
/// 3. day within the unit's bound ([`Error::InvalidDay`]),
/// 4. Overlithe in a leap year ([`Error::NotLeapYear`]).
///
/// # Example
/// ```
/// use sr_time::{parse_date, Month, Unit};
/// let d = parse_date("22 halimath 1419").unwrap();
/// assert_eq!((d.day(), d.unit(), d.year()), (22, Unit::Month(Month::Halimath), 1419));
/// assert!(parse_date("overlithe 1419").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<ShireDate> {
    parse_fields(input).map_err(|err| {
        debug!(input, reason = %err, "rejected date text");
        err
    })
}

fn parse_fields(input: &str) -> Result<ShireDate> {
    let malformed = || Error::MalformedText(input.to_string());

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let (year_token, rest) = tokens.split_last().ok_or_else(malformed)?;
    let year = parse_year(year_token).ok_or_else(malformed)?;

    let (day, name_tokens) = match rest {
        [first, name @ ..] if !name.is_empty() && is_digits(first) => {
            // All digits, so the only failure is overflow. Saturate: out of
            // any bound, and reported as `u32::MAX`.
            (first.parse::<u32>().unwrap_or(u32::MAX), name)
        }
        _ => (1, rest),
    };
    if name_tokens.is_empty() || !name_tokens.iter().all(|t| is_name_word(t)) {
        return Err(malformed());
    }

    let name = name_tokens.join(" ").to_ascii_lowercase();
    let unit = Unit::from_name(&name).map_err(|_| Error::InvalidMonth(name))?;

    let max = unit.max_day();
    let day = Day::try_from(day)
        .ok()
        .filter(|d| (1..=max).contains(d))
        .ok_or(Error::InvalidDay {
            day,
            unit: unit.name(),
            max,
        })?;

    ShireDate::new(year, unit, day)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_name_word(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_alphabetic())
        && s.bytes().all(|b| b.is_ascii_alphabetic() || b == b'\'' || b == b'-')
}

fn parse_year(s: &str) -> Option<Year> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if !is_digits(digits) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for ShireDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_date(s)
    }
}
