//! # Theme Records
//!
//! [ThemeRecord] is the value type every other part of the crate works on:
//! the validator inspects it, the inheritance resolver produces it and the
//! codec converts it to and from JSON documents.
//!
//! Records carry no invariants of their own. A record with a negative border
//! radius or inverted font sizes is a perfectly good value; the
//! [validator](crate::validator::ThemeValidator) is what reports it.

use std::fmt;

use serde::{Deserialize, Serialize};
use vello::peniko::Color;

use crate::presets;
use crate::typography::TypographyScale;

/// Default UI font stack.
pub const DEFAULT_FONT_FAMILY: &str = "Segoe UI, San Francisco, Helvetica, Arial, sans-serif";
/// Default monospace font stack.
pub const DEFAULT_MONOSPACE_FAMILY: &str = "Consolas, Monaco, 'Courier New', monospace";

/// All visual properties of one named skin.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeRecord {
    /// Display name; unique within a registry.
    pub name: String,
    /// Main color for UI chrome.
    pub primary_color: Color,
    /// Medium-tone companion of the primary color.
    pub secondary_color: Color,
    /// Highlight color, also used for focus indicators.
    pub accent_color: Color,
    /// Main window background.
    pub primary_background: Color,
    /// Background for raised or alternate surfaces.
    pub secondary_background: Color,
    /// Main text color.
    pub primary_text_color: Color,
    /// Muted text color.
    pub secondary_text_color: Color,
    /// Outline and separator color.
    pub border_color: Color,
    /// Per-side border thickness.
    pub border_thickness: Thickness,
    /// Corner radius applied to bordered elements.
    pub border_radius: f64,
    /// Small font size.
    pub font_size_small: f64,
    /// Medium font size.
    pub font_size_medium: f64,
    /// Large font size.
    pub font_size_large: f64,
    /// Default font weight.
    pub font_weight: FontWeight,
    /// Default font stack.
    pub font_family: FontFamily,
    /// Font stack for headers.
    pub header_font_family: FontFamily,
    /// Font stack for body text.
    pub body_font_family: FontFamily,
    /// Font stack for code and other monospace content.
    pub monospace_font_family: FontFamily,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    /// Extra space between letters.
    pub letter_spacing: f64,
    /// Whether ligatures are enabled.
    pub enable_ligatures: bool,
    /// Extended type scale.
    pub typography: TypographyScale,
    /// Color for error states.
    pub error_color: Color,
    /// Color for warnings.
    pub warning_color: Color,
    /// Color for success states.
    pub success_color: Color,
}

impl ThemeRecord {
    /// Create the default ("Dark") record.
    pub fn new() -> Self {
        presets::dark()
    }

    /// Create the default record under a different name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// Return a copy of this record with a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Copy every property of `source` into `self`, including the name, the
    /// per-role font families, the line metrics and the typography scale.
    pub fn copy_scalars_from(&mut self, source: &ThemeRecord) {
        self.name = source.name.clone();
        self.primary_color = source.primary_color;
        self.secondary_color = source.secondary_color;
        self.accent_color = source.accent_color;
        self.primary_background = source.primary_background;
        self.secondary_background = source.secondary_background;
        self.primary_text_color = source.primary_text_color;
        self.secondary_text_color = source.secondary_text_color;
        self.font_family = source.font_family.clone();
        self.font_size_small = source.font_size_small;
        self.font_size_medium = source.font_size_medium;
        self.font_size_large = source.font_size_large;
        self.font_weight = source.font_weight;
        self.header_font_family = source.header_font_family.clone();
        self.body_font_family = source.body_font_family.clone();
        self.monospace_font_family = source.monospace_font_family.clone();
        self.line_height = source.line_height;
        self.letter_spacing = source.letter_spacing;
        self.enable_ligatures = source.enable_ligatures;
        self.typography = source.typography;
        self.border_color = source.border_color;
        self.border_thickness = source.border_thickness;
        self.border_radius = source.border_radius;
        self.error_color = source.error_color;
        self.warning_color = source.warning_color;
        self.success_color = source.success_color;
    }
}

impl Default for ThemeRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Border thickness for each side of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Thickness {
    /// Left side.
    pub left: f64,
    /// Top side.
    pub top: f64,
    /// Right side.
    pub right: f64,
    /// Bottom side.
    pub bottom: f64,
}

impl Thickness {
    /// Create a thickness from its four sides.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same value on every side.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Horizontal value for left/right and vertical value for top/bottom.
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// The four sides in left, top, right, bottom order.
    pub fn sides(&self) -> [f64; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    /// The thickest side.
    pub fn max_side(&self) -> f64 {
        self.sides().into_iter().fold(f64::MIN, f64::max)
    }

    /// Whether any side is negative.
    pub fn any_negative(&self) -> bool {
        self.sides().iter().any(|side| *side < 0.0)
    }

    /// Whether every side is zero.
    pub fn is_zero(&self) -> bool {
        self.sides().iter().all(|side| *side == 0.0)
    }
}

/// Font weight, from thinnest to heaviest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FontWeight {
    /// 100
    Thin,
    /// 200
    ExtraLight,
    /// 300
    Light,
    /// 350
    SemiLight,
    /// 400
    #[default]
    Normal,
    /// 500
    Medium,
    /// 600
    SemiBold,
    /// 700
    Bold,
    /// 800
    ExtraBold,
    /// 900
    Black,
    /// 950
    ExtraBlack,
}

impl FontWeight {
    const ALL: [FontWeight; 11] = [
        FontWeight::Thin,
        FontWeight::ExtraLight,
        FontWeight::Light,
        FontWeight::SemiLight,
        FontWeight::Normal,
        FontWeight::Medium,
        FontWeight::SemiBold,
        FontWeight::Bold,
        FontWeight::ExtraBold,
        FontWeight::Black,
        FontWeight::ExtraBlack,
    ];

    /// The name used in skin documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Thin => "Thin",
            FontWeight::ExtraLight => "ExtraLight",
            FontWeight::Light => "Light",
            FontWeight::SemiLight => "SemiLight",
            FontWeight::Normal => "Normal",
            FontWeight::Medium => "Medium",
            FontWeight::SemiBold => "SemiBold",
            FontWeight::Bold => "Bold",
            FontWeight::ExtraBold => "ExtraBold",
            FontWeight::Black => "Black",
            FontWeight::ExtraBlack => "ExtraBlack",
        }
    }

    /// The numeric OpenType weight.
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::SemiLight => 350,
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
            FontWeight::ExtraBlack => 950,
        }
    }

    /// Parse a weight name, case-insensitively. Accepts the usual aliases
    /// (`Regular`, `DemiBold`, `Heavy`, ...) and numeric strings.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Ok(value) = name.parse::<u16>() {
            return Self::from_value(value);
        }
        match name.to_ascii_lowercase().as_str() {
            "thin" => Some(FontWeight::Thin),
            "extralight" | "ultralight" => Some(FontWeight::ExtraLight),
            "light" => Some(FontWeight::Light),
            "semilight" => Some(FontWeight::SemiLight),
            "normal" | "regular" => Some(FontWeight::Normal),
            "medium" => Some(FontWeight::Medium),
            "semibold" | "demibold" => Some(FontWeight::SemiBold),
            "bold" => Some(FontWeight::Bold),
            "extrabold" | "ultrabold" => Some(FontWeight::ExtraBold),
            "black" | "heavy" => Some(FontWeight::Black),
            "extrablack" | "ultrablack" => Some(FontWeight::ExtraBlack),
            _ => None,
        }
    }

    /// Parse a weight name, falling back to [FontWeight::Normal].
    pub fn parse_or_normal(name: &str) -> Self {
        Self::from_name(name).unwrap_or(FontWeight::Normal)
    }

    /// Map an exact numeric weight to its variant.
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|weight| weight.value() == value)
    }

    /// The variant whose numeric weight is closest to `value`.
    ///
    /// Returns `None` outside the OpenType range `1..=1000`.
    pub fn nearest(value: f64) -> Option<Self> {
        if !(1.0..=1000.0).contains(&value) {
            return None;
        }
        Self::ALL.into_iter().min_by(|a, b| {
            let da = (a.value() as f64 - value).abs();
            let db = (b.value() as f64 - value).abs();
            da.total_cmp(&db)
        })
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comma-separated font fallback list, e.g. `"Inter, Arial, sans-serif"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontFamily(String);

impl FontFamily {
    /// Wrap a font stack string.
    pub fn new(stack: impl Into<String>) -> Self {
        Self(stack.into())
    }

    /// The stack as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Individual family names, trimmed, in fallback order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.0
            .split(',')
            .map(|family| family.trim().trim_matches('\'').trim_matches('"'))
            .filter(|family| !family.is_empty())
    }

    /// The preferred family.
    pub fn primary(&self) -> Option<&str> {
        self.families().next()
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_FAMILY)
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FontFamily {
    fn from(stack: &str) -> Self {
        Self::new(stack)
    }
}

impl From<String> for FontFamily {
    fn from(stack: String) -> Self {
        Self(stack)
    }
}
