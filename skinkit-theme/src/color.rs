//! Color parsing and formatting for skin documents.
//!
//! Skin documents store colors as strings. Accepted forms:
//!
//! - `#rgb` - shorthand, opaque
//! - `#rrggbb` - opaque
//! - `#aarrggbb` - alpha first
//! - a CSS color name such as `blue` or `white` (case-insensitive)

use vello::peniko::Color;

use crate::error::ThemeError;

const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("transparent", [255, 255, 255, 0]),
    ("black", [0, 0, 0, 255]),
    ("white", [255, 255, 255, 255]),
    ("red", [255, 0, 0, 255]),
    ("green", [0, 128, 0, 255]),
    ("lime", [0, 255, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("aqua", [0, 255, 255, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("fuchsia", [255, 0, 255, 255]),
    ("gray", [128, 128, 128, 255]),
    ("grey", [128, 128, 128, 255]),
    ("darkgray", [169, 169, 169, 255]),
    ("lightgray", [211, 211, 211, 255]),
    ("silver", [192, 192, 192, 255]),
    ("maroon", [128, 0, 0, 255]),
    ("olive", [128, 128, 0, 255]),
    ("teal", [0, 128, 128, 255]),
    ("navy", [0, 0, 128, 255]),
    ("purple", [128, 0, 128, 255]),
    ("orange", [255, 165, 0, 255]),
    ("pink", [255, 192, 203, 255]),
    ("brown", [165, 42, 42, 255]),
    ("gold", [255, 215, 0, 255]),
    ("crimson", [220, 20, 60, 255]),
    ("indigo", [75, 0, 130, 255]),
    ("violet", [238, 130, 238, 255]),
];

/// Parse a color string from a skin document.
///
/// # Examples
///
/// ```rust
/// use skinkit_theme::color::{parse_color, to_hex};
///
/// assert_eq!(to_hex(parse_color("#343B48").unwrap()), "#343B48");
/// assert_eq!(to_hex(parse_color("blue").unwrap()), "#0000FF");
/// ```
pub fn parse_color(input: &str) -> Result<Color, ThemeError> {
    let trimmed = input.trim();
    match trimmed.strip_prefix('#') {
        Some(hex) => parse_hex(hex).ok_or_else(|| ThemeError::InvalidColor(input.to_string())),
        None => named_color(trimmed).ok_or_else(|| ThemeError::InvalidColor(input.to_string())),
    }
}

/// Look up a CSS color name.
pub fn named_color(name: &str) -> Option<Color> {
    let lower = name.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(candidate, _)| *candidate == lower)
        .map(|(_, [r, g, b, a])| Color::from_rgba8(*r, *g, *b, *a))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::from_rgba8(nibble(1)?, nibble(2)?, nibble(3)?, nibble(0)?)),
        6 => Some(Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_rgba8(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
        _ => None,
    }
}

/// Format a color the way skin documents store it.
///
/// Opaque colors become `#RRGGBB`, translucent ones `#AARRGGBB`.
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    if rgba.a == 255 {
        format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", rgba.a, rgba.r, rgba.g, rgba.b)
    }
}

/// The 8-bit RGB channels of a color.
pub fn channels(color: Color) -> [u8; 3] {
    let rgba = color.to_rgba8();
    [rgba.r, rgba.g, rgba.b]
}
