//! Text form: parsing, formatting and the optional serde encoding.

use sr_core::Error;
use sr_time::{format_date, parse_date, DateFormat, Month, ShireDate, Unit};

#[test]
fn parse_scenarios() {
    let d = parse_date("22 halimath 1419").unwrap();
    assert_eq!(d, ShireDate::new(1419, Month::Halimath, 22).unwrap());
    assert_eq!(
        parse_date("overlithe 1419"),
        Err(Error::NotLeapYear { year: 1419 })
    );
    assert_eq!(
        parse_date("Overlithe 1420").unwrap(),
        ShireDate::new(1420, Unit::OVERLITHE, 1).unwrap()
    );
    assert_eq!(
        parse_date("Tuesday 1419"),
        Err(Error::InvalidMonth("tuesday".into()))
    );
    assert!(matches!(
        parse_date("22/09/1419"),
        Err(Error::MalformedText(_))
    ));
}

#[test]
fn short_form_roundtrip() {
    for year in [-401, -4, 0, 7, 1419, 1420, 2100] {
        for d in ShireDate::year_dates(year) {
            let text = d.to_string();
            assert_eq!(parse_date(&text), Ok(d), "{text}");
            assert_eq!(text.to_uppercase().parse::<ShireDate>(), Ok(d), "{text}");
        }
    }
}

#[test]
fn long_form() {
    let d = ShireDate::new(1419, Month::Halimath, 22).unwrap();
    let weekday = d.weekday().unwrap();
    assert_eq!(
        format_date(&d, DateFormat::Long),
        format!("{weekday}, 22 Halimath 1419")
    );
    assert_eq!(format_date(&d, DateFormat::default()), "22 Halimath 1419");

    let midyear = ShireDate::new(1420, Unit::MID_YEARS_DAY, 1).unwrap();
    assert_eq!(format!("{midyear:#}"), "Mid-Year's Day 1420");
}

#[cfg(feature = "serde")]
mod serde_encoding {
    use super::*;
    use sr_time::Weekday;

    #[test]
    fn date_as_text() {
        let d = ShireDate::new(1420, Unit::MID_YEARS_DAY, 1).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"Mid-Year's Day 1420\"");
        assert_eq!(serde_json::from_str::<ShireDate>(&json).unwrap(), d);
    }

    #[test]
    fn invalid_text_is_rejected() {
        assert!(serde_json::from_str::<ShireDate>("\"overlithe 1419\"").is_err());
        assert!(serde_json::from_str::<ShireDate>("1419").is_err());
    }

    #[test]
    fn tables() {
        assert_eq!(serde_json::to_string(&Month::Halimath).unwrap(), "\"halimath\"");
        assert_eq!(serde_json::to_string(&Weekday::Highday).unwrap(), "\"highday\"");
        assert_eq!(
            serde_json::to_string(&Unit::MID_YEARS_DAY).unwrap(),
            "{\"singleton\":\"mid-year's day\"}"
        );
        let unit: Unit = serde_json::from_str("{\"doubled\":\"yule\"}").unwrap();
        assert_eq!(unit, Unit::YULE);
    }
}
