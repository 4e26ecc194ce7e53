use indexmap::IndexMap;
use vello::peniko::Color;

use crate::color::parse_color;
use crate::error::ConversionError;
use crate::record::{FontFamily, FontWeight, Thickness};

/// A loosely typed override value, as found in skin documents.
///
/// Values are coerced into the target property's type when the override is
/// applied; see the `as_*` methods for the accepted shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum OverrideValue {
    /// A JSON number.
    Number(f64),
    /// A JSON string.
    Text(String),
    /// A JSON boolean.
    Bool(bool),
    /// A JSON object, keys in document order.
    Structured(IndexMap<String, OverrideValue>),
}

impl OverrideValue {
    /// Short description of the value's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            OverrideValue::Number(_) => "number",
            OverrideValue::Text(_) => "text",
            OverrideValue::Bool(_) => "boolean",
            OverrideValue::Structured(_) => "object",
        }
    }

    fn mismatch(&self, expected: &'static str) -> ConversionError {
        ConversionError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Convert from JSON. `null` and arrays have no override meaning and give `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map(OverrideValue::Number),
            serde_json::Value::String(s) => Some(OverrideValue::Text(s.clone())),
            serde_json::Value::Bool(b) => Some(OverrideValue::Bool(*b)),
            serde_json::Value::Object(map) => Some(OverrideValue::Structured(
                map.iter()
                    .filter_map(|(key, value)| Some((key.clone(), Self::from_json(value)?)))
                    .collect(),
            )),
            serde_json::Value::Null | serde_json::Value::Array(_) => None,
        }
    }

    /// Convert back to JSON.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            OverrideValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            OverrideValue::Text(s) => serde_json::Value::String(s.clone()),
            OverrideValue::Bool(b) => serde_json::Value::Bool(*b),
            OverrideValue::Structured(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }

    /// A finite number, from a number or numeric text.
    pub fn as_number(&self) -> Result<f64, ConversionError> {
        match self {
            OverrideValue::Number(n) => finite(*n, || n.to_string()),
            OverrideValue::Text(s) => parse_number(s),
            other => Err(other.mismatch("number")),
        }
    }

    /// A flag, from a boolean or `"true"`/`"false"` text.
    pub fn as_bool(&self) -> Result<bool, ConversionError> {
        match self {
            OverrideValue::Bool(b) => Ok(*b),
            OverrideValue::Text(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
            OverrideValue::Text(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
            other => Err(other.mismatch("boolean")),
        }
    }

    /// Text, as-is.
    pub fn as_text(&self) -> Result<&str, ConversionError> {
        match self {
            OverrideValue::Text(s) => Ok(s),
            other => Err(other.mismatch("text")),
        }
    }

    /// A color, from hex or named color text.
    pub fn as_color(&self) -> Result<Color, ConversionError> {
        let text = self.as_text()?;
        parse_color(text).map_err(|_| ConversionError::InvalidColor(text.to_string()))
    }

    /// A font stack, from text.
    pub fn as_font_family(&self) -> Result<FontFamily, ConversionError> {
        self.as_text().map(FontFamily::from)
    }

    /// A font weight, from a name (unknown names give [FontWeight::Normal]) or
    /// a numeric weight (snapped to the nearest variant).
    pub fn as_font_weight(&self) -> Result<FontWeight, ConversionError> {
        match self {
            OverrideValue::Text(s) => Ok(FontWeight::parse_or_normal(s)),
            OverrideValue::Number(n) => {
                FontWeight::nearest(*n).ok_or_else(|| ConversionError::InvalidNumber(n.to_string()))
            }
            other => Err(other.mismatch("font weight")),
        }
    }

    /// A border thickness.
    ///
    /// Accepts a number (all sides), text with 1, 2 or 4 comma or space
    /// separated numbers, or an object with `left`/`top`/`right`/`bottom`
    /// members where missing sides are 0.
    pub fn as_thickness(&self) -> Result<Thickness, ConversionError> {
        match self {
            OverrideValue::Number(_) => self.as_number().map(Thickness::uniform),
            OverrideValue::Text(s) => parse_thickness(s),
            OverrideValue::Structured(map) => {
                let side = |key: &str| match map.get(key) {
                    Some(value) => value.as_number(),
                    None => Ok(0.0),
                };
                Ok(Thickness::new(
                    side("left")?,
                    side("top")?,
                    side("right")?,
                    side("bottom")?,
                ))
            }
            other => Err(other.mismatch("thickness")),
        }
    }

    /// A corner radius, from a number, numeric text or an object with a
    /// `radius` or `topLeft` member.
    pub fn as_radius(&self) -> Result<f64, ConversionError> {
        match self {
            OverrideValue::Structured(map) => map
                .get("radius")
                .or_else(|| map.get("topLeft"))
                .ok_or(ConversionError::TypeMismatch {
                    expected: "radius",
                    found: "object without radius",
                })?
                .as_number(),
            other => other.as_number(),
        }
    }
}

impl From<serde_json::Value> for OverrideValue {
    /// `null` and arrays become empty text, which every typed conversion rejects.
    fn from(value: serde_json::Value) -> Self {
        Self::from_json(&value).unwrap_or_else(|| OverrideValue::Text(String::new()))
    }
}

impl From<f64> for OverrideValue {
    fn from(value: f64) -> Self {
        OverrideValue::Number(value)
    }
}

impl From<bool> for OverrideValue {
    fn from(value: bool) -> Self {
        OverrideValue::Bool(value)
    }
}

impl From<&str> for OverrideValue {
    fn from(value: &str) -> Self {
        OverrideValue::Text(value.to_string())
    }
}

impl From<String> for OverrideValue {
    fn from(value: String) -> Self {
        OverrideValue::Text(value)
    }
}

fn finite(value: f64, text: impl FnOnce() -> String) -> Result<f64, ConversionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::InvalidNumber(text()))
    }
}

// `f64::from_str` accepts "NaN" and "inf"; sizes must stay finite.
fn parse_number(text: &str) -> Result<f64, ConversionError> {
    let value = text
        .trim()
        .parse::<f64>()
        .map_err(|_| ConversionError::InvalidNumber(text.to_string()))?;
    finite(value, || text.to_string())
}

fn parse_thickness(text: &str) -> Result<Thickness, ConversionError> {
    let parts: Vec<f64> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_number)
        .collect::<Result<_, _>>()
        .map_err(|_| ConversionError::InvalidThickness(text.to_string()))?;

    match parts.as_slice() {
        [all] => Ok(Thickness::uniform(*all)),
        [horizontal, vertical] => Ok(Thickness::symmetric(*horizontal, *vertical)),
        [left, top, right, bottom] => Ok(Thickness::new(*left, *top, *right, *bottom)),
        _ => Err(ConversionError::InvalidThickness(text.to_string())),
    }
}
