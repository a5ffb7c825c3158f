//! Utility modules for bujo-labels.
//!
//! - [`datetime`] - Date formatting, parsing and timezone helpers

pub mod datetime;
