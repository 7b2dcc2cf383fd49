//! Income calculations for side-hustle estimates.
//!
//! The derivation is a pure function of the input record; rounding helpers
//! used when presenting figures live in [`common`].

pub mod common;
pub mod income;

pub use income::{MONTHS_PER_YEAR, WEEKS_PER_MONTH, derive};
