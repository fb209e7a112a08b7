//! Color values and parsing.
//!
//! Colors are packed into a single 32-bit ARGB word (`0xAARRGGBB`), the
//! representation paint backends consume directly.

use std::fmt;

use serde::Serialize;

use crate::error::ConversionError;
use crate::value::AttributeValue;

/// A color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black (`#000000`).
    pub const BLACK: Self = Self(0xFF00_0000);

    /// Opaque white (`#ffffff`).
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    /// Pack individual channels.
    #[must_use]
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(u32::from_be_bytes([alpha, red, green, blue]))
    }

    /// The alpha channel (255 = fully opaque).
    #[must_use]
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// The red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// The green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// The blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0.to_be_bytes()[3]
    }

    /// Parse `#RRGGBB` (opaque) or `#AARRGGBB`.
    ///
    /// Returns `None` for any other length or a non-hex digit.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let packed = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self(packed | 0xFF00_0000)),
            8 => Some(Self(packed)),
            _ => None,
        }
    }

    /// Expand the `#RGB` shorthand, replicating each digit (`#f80` is
    /// `#ff8800`). The result is always opaque.
    #[must_use]
    pub fn from_short_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?.as_bytes();
        let &[r, g, b] = digits else {
            return None;
        };
        let expand = |digit: u8| {
            let nibble = char::from(digit).to_digit(16)?;
            u8::try_from(nibble * 16 + nibble).ok()
        };
        Some(Self::from_argb(0xFF, expand(r)?, expand(g)?, expand(b)?))
    }

    /// Look up a color name, case-insensitively.
    ///
    /// The table is the one Android's `Color.parseColor` accepts, so `green`
    /// is `#00ff00` and `gray` is `#888888`.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        let packed = match name.to_ascii_lowercase().as_str() {
            "black" => 0xFF00_0000,
            "darkgray" | "darkgrey" => 0xFF44_4444,
            "gray" | "grey" => 0xFF88_8888,
            "lightgray" | "lightgrey" => 0xFFCC_CCCC,
            "white" => 0xFFFF_FFFF,
            "red" => 0xFFFF_0000,
            "green" | "lime" => 0xFF00_FF00,
            "blue" => 0xFF00_00FF,
            "yellow" => 0xFFFF_FF00,
            "cyan" | "aqua" => 0xFF00_FFFF,
            "magenta" | "fuchsia" => 0xFFFF_00FF,
            "maroon" => 0xFF80_0000,
            "navy" => 0xFF00_0080,
            "olive" => 0xFF80_8000,
            "purple" => 0xFF80_0080,
            "silver" => 0xFFC0_C0C0,
            "teal" => 0xFF00_8080,
            _ => return None,
        };
        Some(Self(packed))
    }

    /// Convert to hex notation: `#rrggbb` when opaque, `#aarrggbb` otherwise.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        if self.alpha() == 0xFF {
            format!("#{:06x}", self.0 & 0x00FF_FFFF)
        } else {
            format!("#{:08x}", self.0)
        }
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

/// Parse a color attribute into a packed ARGB value.
///
/// The textual form is trimmed, then read as:
/// - `#RGB` - shorthand, each digit replicated, always opaque
/// - `#RRGGBB` / `#AARRGGBB` - long hex forms
/// - anything else - a color name (see [`Argb::from_named`])
///
/// # Errors
///
/// Returns [`ConversionError::EmptyColor`] if nothing is left after trimming
/// and [`ConversionError::UnknownColor`] for a malformed hex form or an
/// unknown name.
pub fn color(value: &AttributeValue) -> Result<Argb, ConversionError> {
    let text = value.to_string();
    let text = text.trim();
    if text.is_empty() {
        return Err(ConversionError::EmptyColor);
    }

    let parsed = if text.starts_with('#') {
        match text.len() {
            4 => Argb::from_short_hex(text),
            len if len > 4 => Argb::from_hex(text),
            _ => None,
        }
    } else {
        Argb::from_named(text)
    };

    parsed.ok_or_else(|| ConversionError::UnknownColor {
        input: text.to_string(),
    })
}
