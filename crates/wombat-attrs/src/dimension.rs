//! Dimensions with units and their parsing.
//!
//! A dimension is a number followed by an optional unit suffix (`10px`,
//! `3dp`, `1.5em`). Unknown suffixes are not an error: they resolve to
//! [`Unit::Unset`] so markup written for newer units still renders.

use serde::Serialize;
use strum_macros::{Display, EnumString};
use wombat_common::warning::warn_once;

use crate::density::{Density, EM_BASE_PX};
use crate::error::ConversionError;
use crate::numeric::{parse_float, parse_int, to_float};
use crate::value::AttributeValue;

/// The measurement unit of a [`PixelValue`].
///
/// The set is closed; adding a unit means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Physical pixels.
    #[strum(to_string = "px")]
    Px,
    /// Density-independent pixels, scaled by the screen density.
    #[strum(to_string = "dp", serialize = "dip")]
    Dp,
    /// Scale-independent pixels. Treated like [`Unit::Dp`] at this layer.
    #[strum(to_string = "sp")]
    Sp,
    /// Multiples of the base font size ([`EM_BASE_PX`]).
    #[strum(to_string = "em")]
    Em,
    /// No recognized suffix. The value is used as a plain number.
    #[strum(to_string = "")]
    Unset,
}

impl Unit {
    /// Every unit, suffixed ones first.
    pub const ALL: [Self; 5] = [Self::Px, Self::Dp, Self::Sp, Self::Em, Self::Unset];

    /// The canonical suffix for this unit (empty for [`Unit::Unset`]).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Dp => "dp",
            Self::Sp => "sp",
            Self::Em => "em",
            Self::Unset => "",
        }
    }
}

/// A single dimension: a value and the unit it is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelValue {
    /// The numeric part, already percent-normalized when parsed from `%` text.
    pub value: f32,
    /// The unit the value is measured in.
    pub unit: Unit,
}

impl PixelValue {
    /// Create a dimension from a value and a unit.
    #[must_use]
    pub const fn new(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Resolve this dimension to physical pixels.
    ///
    /// `dp` and `sp` scale by the density, `em` by [`EM_BASE_PX`]; `px` and
    /// unit-less values are returned unchanged.
    #[must_use]
    pub fn to_px(self, density: Density) -> f32 {
        match self.unit {
            Unit::Px | Unit::Unset => self.value,
            Unit::Dp | Unit::Sp => self.value * density.get(),
            Unit::Em => self.value * EM_BASE_PX,
        }
    }
}

/// Resolve a unit suffix, case-insensitively.
///
/// `px`, `dp`/`dip`, `sp` and `em` are recognized. Anything else, including
/// the empty string, is [`Unit::Unset`]. This never fails.
#[must_use]
pub fn get_unit(suffix: &str) -> Unit {
    suffix.parse().unwrap_or_else(|_| {
        warn_once("attrs", &unsupported_unit_message(suffix));
        Unit::Unset
    })
}

/// Longest suffix quoted in a warning; longer ones are cut.
const MAX_QUOTED_SUFFIX: usize = 8;

fn unsupported_unit_message(suffix: &str) -> String {
    let quoted: String = suffix.chars().take(MAX_QUOTED_SUFFIX).collect();
    let ellipsis = if suffix.chars().nth(MAX_QUOTED_SUFFIX).is_some() {
        "..."
    } else {
        ""
    };
    format!("unsupported unit '{quoted}{ellipsis}', treating as unset")
}

/// Parse a dimension such as `10px`, `3dp` or `2em`.
///
/// Text is split at the trailing run of ASCII letters; the letters are the
/// unit suffix and the rest is parsed with [`to_float`]. The first character
/// always belongs to the number, and `%` is not a letter, so `50%` has no
/// suffix and its number is percent-normalized. Numbers are taken as pixels.
///
/// # Errors
///
/// Returns [`ConversionError::Float`] if the numeric part does not parse.
pub fn to_pixel(value: &AttributeValue) -> Result<PixelValue, ConversionError> {
    match value {
        AttributeValue::Text(text) => {
            let (number, suffix) = split_unit_suffix(text);
            Ok(PixelValue::new(parse_float(number)?, get_unit(suffix)))
        }
        AttributeValue::Number(_) | AttributeValue::Bool(_) => {
            Ok(PixelValue::new(to_float(value)?, Unit::Px))
        }
    }
}

/// Parse a space-separated group of dimensions, such as a margin shorthand.
///
/// Tokens are split on single ASCII spaces; trailing empty tokens are
/// dropped, interior empty tokens are kept (and fail to parse).
///
/// # Errors
///
/// Fails with the first token's error if any token is not a dimension.
pub fn pixel_groups(text: &str) -> Result<Vec<PixelValue>, ConversionError> {
    let mut tokens: Vec<&str> = text.split(' ').collect();
    if tokens.len() > 1 {
        while tokens.last().is_some_and(|token| token.is_empty()) {
            let _ = tokens.pop();
        }
    }
    tokens
        .into_iter()
        .map(|token| to_pixel(&AttributeValue::from(token.trim())))
        .collect()
}

/// Read a pixel count, ignoring a literal `px` suffix.
///
/// Unlike [`to_pixel`] no other suffix is recognized: `"3dp"` fails.
///
/// # Errors
///
/// Returns [`ConversionError::Float`] if the remaining text is not a number.
pub fn px(value: &AttributeValue) -> Result<f32, ConversionError> {
    match value {
        AttributeValue::Text(text) => parse_float(text.strip_suffix("px").unwrap_or(text)),
        AttributeValue::Number(_) | AttributeValue::Bool(_) => to_float(value),
    }
}

/// Read an integer percentage such as `"50%"` as a fraction.
///
/// The last two characters are removed before the integer is parsed, so
/// `"50%"` yields `0.05` and `"100%"` yields `0.1`. Call sites rely on this
/// exact slice; it is pinned by tests.
///
/// # Errors
///
/// Returns [`ConversionError::Percent`] if the text does not end with `%` or
/// is shorter than two characters, and [`ConversionError::Int`] if the
/// remainder is not an integer.
pub fn get_percent(text: &str) -> Result<f32, ConversionError> {
    let percent_error = || ConversionError::Percent {
        input: text.to_string(),
    };
    if !text.ends_with('%') {
        return Err(percent_error());
    }
    let cut = text
        .char_indices()
        .rev()
        .nth(1)
        .map(|(index, _)| index)
        .ok_or_else(percent_error)?;
    #[allow(clippy::cast_precision_loss)]
    let fraction = parse_int(&text[..cut])? as f32 / 100.0;
    Ok(fraction)
}

/// Split text into its numeric prefix and trailing ASCII-letter suffix.
fn split_unit_suffix(text: &str) -> (&str, &str) {
    let bytes = text.as_bytes();
    let mut split = bytes.len();
    while split > 1 && bytes[split - 1].is_ascii_alphabetic() {
        split -= 1;
    }
    text.split_at(split)
}
