//! # shire-reckoning
//!
//! The calendar of the Shire: twelve thirty-day months, the two-day
//! holidays Yule and Lithe, Mid-year's Day, and an Overlithe every fourth
//! year except at the turn of a century.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than on the individual `sr-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! shire-reckoning = "0.1"
//! ```
//!
//! ```rust
//! use shire_reckoning::time::{ShireDate, Unit};
//!
//! let d: ShireDate = "mid-year's day 1419".parse().unwrap();
//! assert_eq!(d.ordinal(), 183);
//! assert_eq!(d.weekday(), None);
//! assert_eq!((d + 1).unit(), Unit::LITHE);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core type aliases, error definitions and text utilities.
pub use sr_core as core;

/// Calendar tables, day-of-year conversion, weekdays, arithmetic and text form.
pub use sr_time as time;

pub use sr_core::{Error, Result};
pub use sr_time::{DateFormat, Month, ShireDate, Unit, Weekday};
