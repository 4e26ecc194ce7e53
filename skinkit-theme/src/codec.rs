//! # Skin Documents
//!
//! JSON import and export for skins.
//!
//! A [ThemeDocument] mirrors the on-disk format: camelCase keys, colors as
//! strings, and every member optional on input (missing members take the
//! "Dark" preset values). Documents are converted to and from
//! [ThemeRecord]s and [InheritableTheme]s, and can be bundled into a
//! [ThemePack].
//!
//! ## Document Format
//!
//! ```json
//! {
//!   "name": "Ocean",
//!   "version": "1.0",
//!   "primaryColor": "#1B3A4B",
//!   "primaryBackground": "#0B1A24",
//!   "fontSizeSmall": 10,
//!   "fontWeight": "Normal",
//!   "borderThickness": { "left": 1, "top": 1, "right": 1, "bottom": 1 },
//!   "baseTheme": "Dark",
//!   "propertyOverrides": { "accentColor": "#00BCD4" }
//! }
//! ```
//!
//! Importing validates the document with the standard
//! [ThemeValidator](crate::validator::ThemeValidator) and reports the outcome
//! as a [ThemeImportResult] instead of failing.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::color::{parse_color, to_hex};
use crate::error::{ConversionError, ThemeError, ThemeResult};
use crate::inheritance::{InheritableTheme, OverrideValue};
use crate::record::{
    FontFamily, FontWeight, ThemeRecord, Thickness, DEFAULT_FONT_FAMILY, DEFAULT_MONOSPACE_FAMILY,
};
use crate::typography::TypographyScale;
use crate::validation::ValidationResult;
use crate::validator::ThemeValidator;

/// Document format version written on export.
pub const DOCUMENT_VERSION: &str = "1.0";

/// A skin as stored in a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeDocument {
    /// Skin name. Required for a valid document.
    pub name: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Document format version.
    pub version: String,
    /// Author credit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// When the document was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// Primary color.
    pub primary_color: String,
    /// Secondary color.
    pub secondary_color: String,
    /// Accent color.
    pub accent_color: String,
    /// Primary background.
    pub primary_background: String,
    /// Secondary background.
    pub secondary_background: String,
    /// Primary text color.
    pub primary_text_color: String,
    /// Secondary text color.
    pub secondary_text_color: String,
    /// Border color.
    pub border_color: String,
    /// Error color.
    pub error_color: String,
    /// Warning color.
    pub warning_color: String,
    /// Success color.
    pub success_color: String,
    /// Default font stack.
    pub font_family: String,
    /// Small font size.
    pub font_size_small: f64,
    /// Medium font size.
    pub font_size_medium: f64,
    /// Large font size.
    pub font_size_large: f64,
    /// Weight name such as `"Normal"` or `"SemiBold"`.
    pub font_weight: String,
    /// Border radius.
    pub border_radius: f64,
    /// Border thickness.
    pub border_thickness: Thickness,
    /// Extended typography, written only by advanced export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_typography: Option<TypographyDocument>,
    /// Name of the skin this one inherits from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_theme: Option<String>,
    /// Overrides applied on top of the base skin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_overrides: Option<IndexMap<String, serde_json::Value>>,
}

/// The `advancedTypography` section of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyDocument {
    /// The fifteen size tiers.
    #[serde(flatten)]
    pub scale: TypographyScale,
    /// Header font family.
    pub header_font_family: String,
    /// Body font family.
    pub body_font_family: String,
    /// Monospace font family.
    pub monospace_font_family: String,
    /// Line height as a multiple of the font size.
    pub line_height: f64,
    /// Letter spacing.
    pub letter_spacing: f64,
    /// Whether ligatures are enabled.
    pub enable_ligatures: bool,
}

impl Default for TypographyDocument {
    fn default() -> Self {
        Self {
            scale: TypographyScale::new(),
            header_font_family: DEFAULT_FONT_FAMILY.to_string(),
            body_font_family: DEFAULT_FONT_FAMILY.to_string(),
            monospace_font_family: DEFAULT_MONOSPACE_FAMILY.to_string(),
            line_height: 1.5,
            letter_spacing: 0.0,
            enable_ligatures: true,
        }
    }
}

impl TypographyDocument {
    /// Capture a record's typography settings.
    pub fn from_record(record: &ThemeRecord) -> Self {
        Self {
            scale: record.typography,
            header_font_family: record.header_font_family.to_string(),
            body_font_family: record.body_font_family.to_string(),
            monospace_font_family: record.monospace_font_family.to_string(),
            line_height: record.line_height,
            letter_spacing: record.letter_spacing,
            enable_ligatures: record.enable_ligatures,
        }
    }

    /// Write these settings into a record.
    pub fn apply_to(&self, record: &mut ThemeRecord) {
        record.typography = self.scale;
        record.header_font_family = FontFamily::new(self.header_font_family.as_str());
        record.body_font_family = FontFamily::new(self.body_font_family.as_str());
        record.monospace_font_family = FontFamily::new(self.monospace_font_family.as_str());
        record.line_height = self.line_height;
        record.letter_spacing = self.letter_spacing;
        record.enable_ligatures = self.enable_ligatures;
    }
}

impl Default for ThemeDocument {
    fn default() -> Self {
        Self {
            name: String::new(),
            ..Self::from_record(&ThemeRecord::default())
        }
    }
}

impl ThemeDocument {
    /// Capture a record's plain properties. Typography and inheritance
    /// sections are left out.
    pub fn from_record(record: &ThemeRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: None,
            version: DOCUMENT_VERSION.to_string(),
            author: None,
            created_date: None,
            primary_color: to_hex(record.primary_color),
            secondary_color: to_hex(record.secondary_color),
            accent_color: to_hex(record.accent_color),
            primary_background: to_hex(record.primary_background),
            secondary_background: to_hex(record.secondary_background),
            primary_text_color: to_hex(record.primary_text_color),
            secondary_text_color: to_hex(record.secondary_text_color),
            border_color: to_hex(record.border_color),
            error_color: to_hex(record.error_color),
            warning_color: to_hex(record.warning_color),
            success_color: to_hex(record.success_color),
            font_family: record.font_family.to_string(),
            font_size_small: record.font_size_small,
            font_size_medium: record.font_size_medium,
            font_size_large: record.font_size_large,
            font_weight: record.font_weight.to_string(),
            border_radius: record.border_radius,
            border_thickness: record.border_thickness,
            advanced_typography: None,
            base_theme: None,
            property_overrides: None,
        }
    }

    /// Capture a record including its typography section.
    pub fn from_record_advanced(record: &ThemeRecord) -> Self {
        Self {
            advanced_typography: Some(TypographyDocument::from_record(record)),
            ..Self::from_record(record)
        }
    }

    /// Capture an inheritable theme, including its base name and overrides.
    pub fn from_inheritable(theme: &InheritableTheme) -> Self {
        let overrides = (!theme.overrides.is_empty()).then(|| {
            theme
                .overrides
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect()
        });
        Self {
            base_theme: theme.base_theme.clone(),
            property_overrides: overrides,
            ..Self::from_record(&theme.theme)
        }
    }

    /// Set description and author. Empty strings clear them.
    pub fn with_metadata(mut self, description: Option<&str>, author: Option<&str>) -> Self {
        self.description = description.filter(|s| !s.is_empty()).map(str::to_string);
        self.author = author.filter(|s| !s.is_empty()).map(str::to_string);
        self
    }

    /// Stamp the document with the current time.
    pub fn stamped(mut self) -> Self {
        self.created_date = Some(Utc::now());
        self
    }

    /// Convert to a record. Fails on the first color that does not parse.
    ///
    /// Unknown font weights become [FontWeight::Normal]. The typography
    /// section is applied when present.
    pub fn to_record(&self) -> ThemeResult<ThemeRecord> {
        let color = |property: &'static str, value: &str| {
            parse_color(value).map_err(|_| {
                ThemeError::conversion(property, ConversionError::InvalidColor(value.to_string()))
            })
        };

        let mut record = ThemeRecord {
            name: self.name.clone(),
            primary_color: color("primaryColor", &self.primary_color)?,
            secondary_color: color("secondaryColor", &self.secondary_color)?,
            accent_color: color("accentColor", &self.accent_color)?,
            primary_background: color("primaryBackground", &self.primary_background)?,
            secondary_background: color("secondaryBackground", &self.secondary_background)?,
            primary_text_color: color("primaryTextColor", &self.primary_text_color)?,
            secondary_text_color: color("secondaryTextColor", &self.secondary_text_color)?,
            border_color: color("borderColor", &self.border_color)?,
            error_color: color("errorColor", &self.error_color)?,
            warning_color: color("warningColor", &self.warning_color)?,
            success_color: color("successColor", &self.success_color)?,
            font_family: FontFamily::new(self.font_family.as_str()),
            font_size_small: self.font_size_small,
            font_size_medium: self.font_size_medium,
            font_size_large: self.font_size_large,
            font_weight: FontWeight::parse_or_normal(&self.font_weight),
            border_radius: self.border_radius,
            border_thickness: self.border_thickness,
            ..ThemeRecord::default()
        };

        if let Some(typography) = &self.advanced_typography {
            typography.apply_to(&mut record);
        }
        Ok(record)
    }

    /// Convert to an inheritable theme. `null` and array override values are dropped.
    pub fn to_inheritable(&self) -> ThemeResult<InheritableTheme> {
        let overrides = self
            .property_overrides
            .iter()
            .flatten()
            .filter_map(|(key, value)| Some((key.clone(), OverrideValue::from_json(value)?)))
            .collect();

        Ok(InheritableTheme {
            theme: self.to_record()?,
            base_theme: self.base_theme.clone().filter(|base| !base.is_empty()),
            overrides,
        })
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as indented JSON.
    pub fn to_json(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Outcome of importing a skin document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeImportResult {
    /// The imported skin, when the import succeeded.
    pub theme: Option<ThemeRecord>,
    /// Validation warnings.
    pub warnings: Vec<String>,
    /// Why the import failed.
    pub error: Option<String>,
}

impl ThemeImportResult {
    /// Whether a skin was imported.
    pub fn is_success(&self) -> bool {
        self.theme.is_some() && self.error.is_none()
    }

    fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Check a document: required name, color conversion and the standard rules.
pub fn validate_document(document: &ThemeDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    if document.name.trim().is_empty() {
        result.add_error("Theme name is required");
    }

    match document.to_record() {
        Ok(record) => result.merge(ThemeValidator::new().validate_theme(&record)),
        Err(err) => result.add_error(format!("Invalid theme data: {err}")),
    }

    result
}

/// Parse and check a JSON document.
pub fn validate_json(json: &str) -> ValidationResult {
    match ThemeDocument::from_json(json) {
        Ok(document) => validate_document(&document),
        Err(err) => {
            let mut result = ValidationResult::new();
            result.add_error(format!("Invalid JSON format: {err}"));
            result
        }
    }
}

/// Import a skin from JSON, validating it first.
pub fn import_theme(json: &str) -> ThemeImportResult {
    let document = match ThemeDocument::from_json(json) {
        Ok(document) => document,
        Err(err) => return ThemeImportResult::failed(format!("JSON parsing error: {err}")),
    };
    import_document(&document)
}

/// Import an already parsed document, validating it first.
pub fn import_document(document: &ThemeDocument) -> ThemeImportResult {
    let validation = validate_document(document);
    if !validation.is_valid() {
        return ThemeImportResult {
            theme: None,
            warnings: validation.warnings,
            error: Some(format!(
                "Theme validation failed: {}",
                validation.errors.join(", ")
            )),
        };
    }

    match document.to_record() {
        Ok(theme) => {
            log::info!("Imported theme '{}'", theme.name);
            ThemeImportResult {
                theme: Some(theme),
                warnings: validation.warnings,
                error: None,
            }
        }
        Err(err) => ThemeImportResult::failed(err.to_string()),
    }
}

/// Import an inheritable skin from JSON. No validation is applied; the
/// resolved skin is what should be validated.
pub fn import_inheritable_theme(json: &str) -> ThemeResult<InheritableTheme> {
    ThemeDocument::from_json(json)?.to_inheritable()
}

/// Export a skin's plain properties as JSON.
pub fn export_theme(
    theme: &ThemeRecord,
    description: Option<&str>,
    author: Option<&str>,
) -> ThemeResult<String> {
    ThemeDocument::from_record(theme)
        .with_metadata(description, author)
        .stamped()
        .to_json()
}

/// Export a skin including its typography section.
pub fn export_advanced_theme(
    theme: &ThemeRecord,
    description: Option<&str>,
    author: Option<&str>,
) -> ThemeResult<String> {
    ThemeDocument::from_record_advanced(theme)
        .with_metadata(description, author)
        .stamped()
        .to_json()
}

/// Export an inheritable skin with its base name and overrides.
pub fn export_inheritable_theme(
    theme: &InheritableTheme,
    description: Option<&str>,
    author: Option<&str>,
) -> ThemeResult<String> {
    ThemeDocument::from_inheritable(theme)
        .with_metadata(description, author)
        .stamped()
        .to_json()
}

/// Several skins bundled in one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePack {
    /// Pack name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pack format version.
    #[serde(default = "default_version")]
    pub version: String,
    /// When the pack was written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    /// The bundled skins.
    #[serde(default)]
    pub themes: Vec<ThemeDocument>,
}

fn default_version() -> String {
    DOCUMENT_VERSION.to_string()
}

impl ThemePack {
    /// Bundle `themes` under `name`, stamped with the current time.
    pub fn new<'a>(
        name: impl Into<String>,
        description: Option<&str>,
        themes: impl IntoIterator<Item = &'a ThemeRecord>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
            version: default_version(),
            created_date: Some(Utc::now()),
            themes: themes.into_iter().map(ThemeDocument::from_record).collect(),
        }
    }

    /// Import every bundled skin. Each entry is validated on its own.
    pub fn import_all(&self) -> Vec<ThemeImportResult> {
        self.themes.iter().map(import_document).collect()
    }

    /// Parse a pack from JSON.
    pub fn from_json(json: &str) -> ThemeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as indented JSON.
    pub fn to_json(&self) -> ThemeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_document_is_dark_without_name() {
        let document = ThemeDocument::from_json("{}").unwrap();
        assert_eq!(document.name, "");
        assert_eq!(document.primary_color, "#343B48");
        assert_eq!(document.border_thickness, Thickness::uniform(1.0));

        let record = document.to_record().unwrap();
        assert_eq!(record, ThemeRecord::named(""));
    }

    #[test]
    fn test_export_then_import() {
        let light = presets::light();
        let json = export_theme(&light, Some("Bright"), None).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Light");
        assert_eq!(value["description"], "Bright");
        assert_eq!(value["primaryBackground"], "#FFFFFF");
        assert!(value.get("author").is_none());
        assert!(value.get("advancedTypography").is_none());
        assert!(value["createdDate"].is_string());

        let imported = import_theme(&json);
        assert!(imported.is_success(), "{:?}", imported.error);
        assert_eq!(imported.theme, Some(light));
    }

    #[test]
    fn test_advanced_export_keeps_typography() {
        let mut record = ThemeRecord::named("Roomy");
        record.typography.apply_scale(1.25);
        record.line_height = 1.8;
        record.monospace_font_family = FontFamily::new("Iosevka");

        let json = export_advanced_theme(&record, None, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["advancedTypography"]["lineHeight"], 1.8);
        assert_eq!(value["advancedTypography"]["bodySmall"], 15.0);

        let parsed = ThemeDocument::from_json(&json).unwrap().to_record().unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_import_rejects_invalid_theme() {
        let json = json!({
            "name": "Squint",
            "primaryTextColor": "#2C313D",
            "fontSizeSmall": 30
        })
        .to_string();

        let result = import_theme(&json);
        assert!(!result.is_success());
        assert!(result.theme.is_none());
        let error = result.error.unwrap();
        assert!(error.starts_with("Theme validation failed: "));
        assert!(error.contains("Primary text contrast ratio"));
    }

    #[test]
    fn test_bad_color_and_missing_name() {
        let document = ThemeDocument {
            accent_color: "#NOPE".to_string(),
            ..ThemeDocument::default()
        };
        let result = validate_document(&document);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0], "Theme name is required");
        assert!(result.errors[1].contains("accentColor"));
    }

    #[test]
    fn test_malformed_json() {
        let result = import_theme("{ not json");
        assert!(result.error.unwrap().starts_with("JSON parsing error"));
        assert!(!validate_json("[").is_valid());
    }

    #[test]
    fn test_inheritable_round_trip() {
        let theme = InheritableTheme::new(ThemeRecord::named("Dusk"))
            .with_base("Dark")
            .with_override("accentColor", "#FF9800")
            .with_override("borderThickness", OverrideValue::from(2.0));

        let json = export_inheritable_theme(&theme, None, Some("me")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["baseTheme"], "Dark");
        assert_eq!(value["propertyOverrides"]["accentColor"], "#FF9800");

        let imported = import_inheritable_theme(&json).unwrap();
        assert_eq!(imported, theme);
    }

    #[test]
    fn test_inheritable_import_drops_null_overrides() {
        let json = json!({
            "name": "Sparse",
            "baseTheme": "Light",
            "propertyOverrides": { "fontSizeLarge": 18, "borderColor": null }
        })
        .to_string();

        let imported = import_inheritable_theme(&json).unwrap();
        assert_eq!(imported.base_theme.as_deref(), Some("Light"));
        assert_eq!(imported.overrides.len(), 1);
        assert_eq!(imported.overrides["fontSizeLarge"], OverrideValue::Number(18.0));
    }

    #[test]
    fn test_theme_pack() {
        let pack = ThemePack::new("Basics", Some("Shipped skins"), &presets::all());
        let json = pack.to_json().unwrap();

        let parsed = ThemePack::from_json(&json).unwrap();
        assert_eq!(parsed.name, "Basics");
        assert_eq!(parsed.version, DOCUMENT_VERSION);
        assert_eq!(parsed.themes.len(), 2);

        let imported = parsed.import_all();
        assert!(imported.iter().all(ThemeImportResult::is_success));
        assert_eq!(imported[1].theme.as_ref().map(|t| t.name.as_str()), Some("Light"));
    }
}
