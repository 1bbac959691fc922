//! Error types for tou.
//!
//! A single `thiserror`-derived enum covers every fallible operation in the
//! workspace. Construction-time validation uses the [`ensure!`](crate::ensure)
//! macro defined here; query-time operations never return errors.

use thiserror::Error;

/// The top-level error type used throughout tou.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A tariff amount that is not a decimal number.
    #[error("rate `{id}`: amount `{amount}` is not a number")]
    InvalidAmount {
        /// Identifier of the offending rate.
        id: String,
        /// The rejected amount text.
        amount: String,
    },

    /// Two ranges that neither intersect nor touch were merged.
    #[error("range {left} cannot be merged with {right}")]
    NotMergeable {
        /// Display form of the receiver.
        left: String,
        /// Display form of the argument.
        right: String,
    },

    /// A field value could not be parsed into a range.
    #[error("cannot parse {field} value `{input}`")]
    Parse {
        /// Name of the field being parsed.
        field: String,
        /// The rejected input text.
        input: String,
    },
}

/// Shorthand `Result` type used throughout tou.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use tou_core::{ensure, errors::Error};
/// fn non_empty(id: &str) -> tou_core::errors::Result<&str> {
///     ensure!(!id.is_empty(), "id must not be empty");
///     Ok(id)
/// }
/// assert!(non_empty("peak").is_ok());
/// assert_eq!(
///     non_empty(""),
///     Err(Error::Precondition("id must not be empty".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
