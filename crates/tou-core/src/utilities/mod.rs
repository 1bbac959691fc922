//! Miscellaneous utilities.

/// Token and text parsing helpers.
pub mod data_parsers;
