//! Typed conversion of loosely-typed style attribute values.
//!
//! Markup and inline styles hand attribute values over as text, numbers or
//! booleans. This crate turns them into values ready for layout and paint:
//!
//! - **Numeric coercion** - integers, floats (with `%` normalization), booleans
//! - **Dimensions** - `10px`, `3dp`, `2em`, and space-separated groups such
//!   as margin shorthands
//! - **Colors** - `#RGB`, `#RRGGBB`, `#AARRGGBB` and named colors, packed as ARGB
//! - **Style strings** - `key: value; key: value` into an ordered map
//! - **Density calibration** - dp/px and em/px conversion
//!
//! # Example
//!
//! ```
//! use wombat_attrs::{AttributeValue, Unit, color, parse_style, to_pixel};
//!
//! let style = parse_style("color: #f00; margin: 10dp;");
//! let margin = to_pixel(&AttributeValue::from(style.get("margin").unwrap())).unwrap();
//! assert_eq!(margin.unit, Unit::Dp);
//!
//! let red = color(&AttributeValue::from(style.get("color").unwrap())).unwrap();
//! assert_eq!(red.to_hex_string(), "#ff0000");
//! ```

/// Packed ARGB colors and hex/named color parsing.
pub mod color;
/// Screen density calibration and dp/px/em conversion.
pub mod density;
/// Dimensions with units and their parsing.
pub mod dimension;
/// The single conversion error type.
pub mod error;
/// Integer, float and boolean coercion.
pub mod numeric;
/// Inline style string tokenization.
pub mod style;
/// The loosely-typed attribute value handed over by markup.
pub mod value;

// Re-exports for convenience
pub use color::{Argb, color};
pub use density::{
    Density, EM_BASE_PX, dp_to_px, em_to_px, init, px_to_dp, px_to_em, screen_density,
    update_screen_density,
};
pub use dimension::{PixelValue, Unit, get_percent, get_unit, pixel_groups, px, to_pixel};
pub use error::ConversionError;
pub use numeric::{to_boolean, to_float, to_int};
pub use style::{StyleMap, parse_style};
pub use value::AttributeValue;
