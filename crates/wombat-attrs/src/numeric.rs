//! Integer, float and boolean coercion of attribute values.

use crate::error::ConversionError;
use crate::value::AttributeValue;

/// Coerce an attribute value to an integer.
///
/// Integral numbers within `i32` range are taken as-is. Anything else is
/// rendered to text and parsed as a decimal integer, so `12.5` and `"12px"`
/// both fail.
///
/// # Errors
///
/// Returns [`ConversionError::Int`] if the textual form is not a valid `i32`.
pub fn to_int(value: &AttributeValue) -> Result<i32, ConversionError> {
    if let AttributeValue::Number(n) = *value
        && let Some(int) = exact_i32(n)
    {
        return Ok(int);
    }
    parse_int(&value.to_string())
}

/// Coerce an attribute value to a float.
///
/// Numbers are taken as-is. Text is parsed as a float; a trailing `%` is
/// stripped and the result divided by 100, so `"50%"` yields `0.5`.
///
/// # Errors
///
/// Returns [`ConversionError::Float`] on malformed numeric text and
/// [`ConversionError::NotFinite`] for text such as `inf` or `NaN`.
pub fn to_float(value: &AttributeValue) -> Result<f32, ConversionError> {
    match value {
        AttributeValue::Number(n) => {
            #[allow(clippy::cast_possible_truncation)]
            let narrowed = *n as f32;
            if narrowed.is_finite() {
                Ok(narrowed)
            } else {
                Err(ConversionError::NotFinite {
                    input: value.to_string(),
                })
            }
        }
        AttributeValue::Text(text) => parse_float(text),
        AttributeValue::Bool(_) => parse_float(&value.to_string()),
    }
}

/// Coerce an attribute value to a boolean.
///
/// Only [`AttributeValue::Bool`] is accepted; `"true"` is not a boolean.
///
/// # Errors
///
/// Returns [`ConversionError::Boolean`] for any other variant.
pub fn to_boolean(value: &AttributeValue) -> Result<bool, ConversionError> {
    match value {
        AttributeValue::Bool(b) => Ok(*b),
        AttributeValue::Number(_) | AttributeValue::Text(_) => Err(ConversionError::Boolean {
            input: value.to_string(),
        }),
    }
}

/// Parse decimal integer text.
pub(crate) fn parse_int(text: &str) -> Result<i32, ConversionError> {
    text.parse().map_err(|source| ConversionError::Int {
        input: text.to_string(),
        source,
    })
}

/// Parse float text with optional percent normalization.
///
/// `inf`, `NaN` and values that overflow `f32` are rejected.
pub(crate) fn parse_float(text: &str) -> Result<f32, ConversionError> {
    let (number, is_percentage) = match text.strip_suffix('%') {
        Some(number) => (number, true),
        None => (text, false),
    };
    let parsed: f32 = number
        .trim()
        .parse()
        .map_err(|source| ConversionError::Float {
            input: text.to_string(),
            source,
        })?;
    if !parsed.is_finite() {
        return Err(ConversionError::NotFinite {
            input: text.to_string(),
        });
    }
    Ok(if is_percentage {
        parsed / 100.0
    } else {
        parsed
    })
}

/// The number as an `i32` when it is integral and in range.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn exact_i32(n: f64) -> Option<i32> {
    let truncated = n as i32;
    (f64::from(truncated) == n).then_some(truncated)
}
