//! Wombat CLI
//!
//! Shows how a raw attribute value converts, for debugging markup.

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use serde_json::{Value, json};
use wombat_attrs::{
    AttributeValue, ConversionError, Density, color, dp_to_px, em_to_px, get_percent, init,
    parse_style, pixel_groups, px, screen_density, to_boolean, to_float, to_int, to_pixel,
};

/// Wombat — inspect attribute value conversion
#[derive(Parser, Debug)]
#[command(name = "wombat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r##"EXAMPLES:
    # Parse a dimension
    wombat pixel 12dp

    # Parse a margin shorthand
    wombat groups "4dp 8dp 4dp 8dp"

    # Parse a color
    wombat color "#f80"

    # Parse an inline style
    wombat style "color: red; width: 10px;"

    # Convert dp to physical pixels on a 2.625x screen
    wombat dp 16 --density 2.625

    # Pass a typed value instead of text
    wombat bool true --typed
"##)]
struct Cli {
    /// How to read the value
    #[arg(value_enum)]
    kind: Kind,

    /// The raw attribute value
    value: String,

    /// Screen density used for dp conversion
    #[arg(long, value_name = "FACTOR")]
    density: Option<f32>,

    /// Read the value as a JSON scalar (number, boolean or string)
    #[arg(long)]
    typed: bool,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

/// The conversion to apply.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// Decimal integer
    Int,
    /// Float, `%` normalized
    Float,
    /// Boolean (typed values only)
    Bool,
    /// Dimension with unit
    Pixel,
    /// Space-separated dimensions
    Groups,
    /// Pixel count with optional `px`
    Px,
    /// Integer percentage
    Percent,
    /// Hex or named color
    Color,
    /// Inline style string
    Style,
    /// dp to physical pixels (needs --density)
    Dp,
    /// em to whole pixels
    Em,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(density) = cli.density {
        init(Density::new(density));
    }
    if matches!(cli.kind, Kind::Dp) && screen_density().is_none() {
        bail!("dp conversion needs --density");
    }

    let value = if cli.typed {
        serde_json::from_str(&cli.value)
            .with_context(|| format!("'{}' is not a JSON scalar", cli.value))?
    } else {
        AttributeValue::Text(cli.value.clone())
    };

    match convert(cli.kind, &value) {
        Ok(result) => {
            let rendered = if cli.pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                result.to_string()
            };
            println!("{}", rendered.green());
        }
        Err(err) => {
            eprintln!("{} {err}", "invalid attribute value:".red());
            std::process::exit(1);
        }
    }

    Ok(())
}

fn convert(kind: Kind, value: &AttributeValue) -> Result<Value, ConversionError> {
    let text = value.to_string();
    Ok(match kind {
        Kind::Int => json!(to_int(value)?),
        Kind::Float => json!(to_float(value)?),
        Kind::Bool => json!(to_boolean(value)?),
        Kind::Pixel => {
            let pixel = to_pixel(value)?;
            match screen_density() {
                Some(density) => json!({
                    "value": pixel.value,
                    "unit": pixel.unit,
                    "px": pixel.to_px(density),
                }),
                None => json!(pixel),
            }
        }
        Kind::Groups => json!(pixel_groups(&text)?),
        Kind::Px => json!(px(value)?),
        Kind::Percent => json!(get_percent(&text)?),
        Kind::Color => {
            let argb = color(value)?;
            json!({ "argb": argb.0, "hex": argb.to_hex_string() })
        }
        Kind::Style => json!(parse_style(&text)),
        Kind::Dp => json!(dp_to_px(to_float(value)?)),
        Kind::Em => json!(em_to_px(to_float(value)?)),
    })
}
