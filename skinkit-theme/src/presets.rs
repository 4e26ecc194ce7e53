use vello::peniko::Color;

use crate::record::{
    FontFamily, FontWeight, ThemeRecord, Thickness, DEFAULT_FONT_FAMILY, DEFAULT_MONOSPACE_FAMILY,
};
use crate::typography::TypographyScale;

/// Names of the presets shipped with the crate.
pub const BUILTIN_NAMES: [&str; 2] = ["Dark", "Light"];

/// The "Dark" gunmetal preset. This is also [ThemeRecord::default].
pub fn dark() -> ThemeRecord {
    ThemeRecord {
        name: "Dark".to_string(),
        primary_color: Color::from_rgb8(0x34, 0x3B, 0x48),
        secondary_color: Color::from_rgb8(0x3D, 0x46, 0x54),
        accent_color: Color::from_rgb8(0x34, 0x98, 0xDB),
        primary_background: Color::from_rgb8(0x2C, 0x31, 0x3D),
        secondary_background: Color::from_rgb8(0x46, 0x4F, 0x62),
        primary_text_color: Color::from_rgb8(0xFF, 0xFF, 0xFF),
        secondary_text_color: Color::from_rgb8(0xCC, 0xCC, 0xCC),
        border_color: Color::from_rgb8(0x5D, 0x67, 0x78),
        border_thickness: Thickness::uniform(1.0),
        border_radius: 4.0,
        font_size_small: 10.0,
        font_size_medium: 12.0,
        font_size_large: 16.0,
        font_weight: FontWeight::Normal,
        font_family: FontFamily::new(DEFAULT_FONT_FAMILY),
        header_font_family: FontFamily::new(DEFAULT_FONT_FAMILY),
        body_font_family: FontFamily::new(DEFAULT_FONT_FAMILY),
        monospace_font_family: FontFamily::new(DEFAULT_MONOSPACE_FAMILY),
        line_height: 1.5,
        letter_spacing: 0.0,
        enable_ligatures: true,
        typography: TypographyScale::new(),
        error_color: Color::from_rgb8(0xE7, 0x4C, 0x3C),
        warning_color: Color::from_rgb8(0xF3, 0x9C, 0x12),
        success_color: Color::from_rgb8(0x2E, 0xCC, 0x71),
    }
}

/// A light preset with dark text on white surfaces. Its larger sizes pass
/// [ThemeValidator::strict](crate::validator::ThemeValidator::strict).
pub fn light() -> ThemeRecord {
    ThemeRecord {
        name: "Light".to_string(),
        primary_color: Color::from_rgb8(0xE1, 0xE5, 0xEB),
        secondary_color: Color::from_rgb8(0xCD, 0xD3, 0xDC),
        accent_color: Color::from_rgb8(0x19, 0x76, 0xD2),
        primary_background: Color::from_rgb8(0xFF, 0xFF, 0xFF),
        secondary_background: Color::from_rgb8(0xF0, 0xF2, 0xF5),
        primary_text_color: Color::from_rgb8(0x1A, 0x1A, 0x1A),
        secondary_text_color: Color::from_rgb8(0x4A, 0x4A, 0x4A),
        border_color: Color::from_rgb8(0x8A, 0x94, 0xA6),
        font_size_small: 12.0,
        font_size_medium: 14.0,
        font_size_large: 18.0,
        error_color: Color::from_rgb8(0xC6, 0x28, 0x28),
        warning_color: Color::from_rgb8(0xB3, 0x5C, 0x00),
        success_color: Color::from_rgb8(0x2E, 0x7D, 0x32),
        ..dark()
    }
}

/// Look up a preset by name, case-insensitively.
pub fn builtin(name: &str) -> Option<ThemeRecord> {
    match name.to_lowercase().as_str() {
        "dark" => Some(dark()),
        "light" => Some(light()),
        _ => None,
    }
}

/// All presets, in [BUILTIN_NAMES] order.
pub fn all() -> Vec<ThemeRecord> {
    vec![dark(), light()]
}
