//! Conversion errors.
//!
//! Every fallible conversion in this crate reports a [`ConversionError`].
//! Callers are expected to surface it as an invalid attribute value.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// An attribute value that could not be converted to the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The value is not a decimal integer.
    #[error("can't read int from '{input}'")]
    Int {
        /// The offending textual form.
        input: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The value is not a floating-point number (optionally followed by `%`).
    #[error("can't read float from '{input}'")]
    Float {
        /// The offending textual form.
        input: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },

    /// The text parsed to infinity or NaN, which no attribute accepts.
    #[error("non-finite number in '{input}'")]
    NotFinite {
        /// The offending textual form.
        input: String,
    },

    /// The value is not a boolean. Strings are never coerced.
    #[error("can't read boolean from '{input}'")]
    Boolean {
        /// The offending textual form.
        input: String,
    },

    /// The value is not of the form `<int>%`.
    #[error("not a percent format '{input}'")]
    Percent {
        /// The offending text.
        input: String,
    },

    /// Nothing left to parse after trimming.
    #[error("empty color string")]
    EmptyColor,

    /// A malformed hex color or an unknown color name.
    #[error("unknown color string '{input}'")]
    UnknownColor {
        /// The trimmed color text.
        input: String,
    },
}
