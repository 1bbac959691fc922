//! # tou-core
//!
//! Core types and error definitions for tou.
//!
//! This crate provides the building blocks shared by every other crate in
//! the workspace: the error hierarchy with its `ensure!` macro,
//! and [`IntegerRange`], the immutable interval type that tariff rules use to
//! constrain calendar fields.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// `IntegerRange` and its endpoint type.
pub mod range;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use range::{Endpoint, IntegerRange, DEFAULT_UNBOUNDED_TOKEN};
