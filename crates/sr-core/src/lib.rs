//! # sr-core
//!
//! Core types, error definitions, and text utilities for shire-reckoning.
//!
//! This crate provides the building blocks shared by the calendar crates:
//! the primitive type aliases used for years, days and day-of-year indices,
//! the error hierarchy, and the title-casing helper used when dates are
//! rendered as text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Year number. Non-positive years are valid and follow the same leap rule.
pub type Year = i32;

/// 1-based day within a year (`1..=365`, or `1..=366` in a leap year).
pub type DayOfYear = u16;

/// 1-based day within a month or holiday (`1..=30`, `1..=2`, or `1`).
pub type Day = u8;

/// Signed day count used by date arithmetic.
pub type DayCount = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
