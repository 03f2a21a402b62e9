//! Miscellaneous utilities.

/// Text helpers shared by the formatters.
pub mod text;

pub use text::title_case;
