use crate::error::ConversionError;
use crate::record::ThemeRecord;

use super::value::OverrideValue;

/// Generate the name table for [ThemeProperty].
macro_rules! impl_property_names {
    ($enum_name:ident, { $($variant:ident => $str:literal),* $(,)? }) => {
        impl $enum_name {
            /// Every property, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$(Self::$variant,)*];

            /// The camelCase name used in skin documents.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)*
                }
            }
        }
    };
}

/// A record property that overrides can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeProperty {
    /// [ThemeRecord::name]
    Name,
    /// [ThemeRecord::primary_color]
    PrimaryColor,
    /// [ThemeRecord::secondary_color]
    SecondaryColor,
    /// [ThemeRecord::accent_color]
    AccentColor,
    /// [ThemeRecord::primary_background]
    PrimaryBackground,
    /// [ThemeRecord::secondary_background]
    SecondaryBackground,
    /// [ThemeRecord::primary_text_color]
    PrimaryTextColor,
    /// [ThemeRecord::secondary_text_color]
    SecondaryTextColor,
    /// [ThemeRecord::border_color]
    BorderColor,
    /// [ThemeRecord::error_color]
    ErrorColor,
    /// [ThemeRecord::warning_color]
    WarningColor,
    /// [ThemeRecord::success_color]
    SuccessColor,
    /// [ThemeRecord::font_family]
    FontFamily,
    /// [ThemeRecord::header_font_family]
    HeaderFontFamily,
    /// [ThemeRecord::body_font_family]
    BodyFontFamily,
    /// [ThemeRecord::monospace_font_family]
    MonospaceFontFamily,
    /// [ThemeRecord::font_size_small]
    FontSizeSmall,
    /// [ThemeRecord::font_size_medium]
    FontSizeMedium,
    /// [ThemeRecord::font_size_large]
    FontSizeLarge,
    /// [ThemeRecord::font_weight]
    FontWeight,
    /// [ThemeRecord::border_thickness]
    BorderThickness,
    /// [ThemeRecord::border_radius]
    BorderRadius,
    /// [ThemeRecord::line_height]
    LineHeight,
    /// [ThemeRecord::letter_spacing]
    LetterSpacing,
    /// [ThemeRecord::enable_ligatures]
    EnableLigatures,
}

impl_property_names!(ThemeProperty, {
    Name => "name",
    PrimaryColor => "primaryColor",
    SecondaryColor => "secondaryColor",
    AccentColor => "accentColor",
    PrimaryBackground => "primaryBackground",
    SecondaryBackground => "secondaryBackground",
    PrimaryTextColor => "primaryTextColor",
    SecondaryTextColor => "secondaryTextColor",
    BorderColor => "borderColor",
    ErrorColor => "errorColor",
    WarningColor => "warningColor",
    SuccessColor => "successColor",
    FontFamily => "fontFamily",
    HeaderFontFamily => "headerFontFamily",
    BodyFontFamily => "bodyFontFamily",
    MonospaceFontFamily => "monospaceFontFamily",
    FontSizeSmall => "fontSizeSmall",
    FontSizeMedium => "fontSizeMedium",
    FontSizeLarge => "fontSizeLarge",
    FontWeight => "fontWeight",
    BorderThickness => "borderThickness",
    BorderRadius => "borderRadius",
    LineHeight => "lineHeight",
    LetterSpacing => "letterSpacing",
    EnableLigatures => "enableLigatures",
});

/// Lowercase and drop `_` and `-`, so `PrimaryColor`, `primaryColor` and
/// `primary_color` all compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

impl ThemeProperty {
    /// Look up a property by name, ignoring case, `_` and `-`.
    pub fn lookup(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL
            .iter()
            .copied()
            .find(|property| normalize(property.as_str()) == wanted)
    }

    /// Coerce `value` to this property's type and store it in `record`.
    ///
    /// On error the record is left unchanged.
    pub fn apply(
        &self,
        record: &mut ThemeRecord,
        value: &OverrideValue,
    ) -> Result<(), ConversionError> {
        match self {
            ThemeProperty::Name => record.name = value.as_text()?.to_string(),
            ThemeProperty::PrimaryColor => record.primary_color = value.as_color()?,
            ThemeProperty::SecondaryColor => record.secondary_color = value.as_color()?,
            ThemeProperty::AccentColor => record.accent_color = value.as_color()?,
            ThemeProperty::PrimaryBackground => record.primary_background = value.as_color()?,
            ThemeProperty::SecondaryBackground => record.secondary_background = value.as_color()?,
            ThemeProperty::PrimaryTextColor => record.primary_text_color = value.as_color()?,
            ThemeProperty::SecondaryTextColor => record.secondary_text_color = value.as_color()?,
            ThemeProperty::BorderColor => record.border_color = value.as_color()?,
            ThemeProperty::ErrorColor => record.error_color = value.as_color()?,
            ThemeProperty::WarningColor => record.warning_color = value.as_color()?,
            ThemeProperty::SuccessColor => record.success_color = value.as_color()?,
            ThemeProperty::FontFamily => record.font_family = value.as_font_family()?,
            ThemeProperty::HeaderFontFamily => record.header_font_family = value.as_font_family()?,
            ThemeProperty::BodyFontFamily => record.body_font_family = value.as_font_family()?,
            ThemeProperty::MonospaceFontFamily => {
                record.monospace_font_family = value.as_font_family()?
            }
            ThemeProperty::FontSizeSmall => record.font_size_small = value.as_number()?,
            ThemeProperty::FontSizeMedium => record.font_size_medium = value.as_number()?,
            ThemeProperty::FontSizeLarge => record.font_size_large = value.as_number()?,
            ThemeProperty::FontWeight => record.font_weight = value.as_font_weight()?,
            ThemeProperty::BorderThickness => record.border_thickness = value.as_thickness()?,
            ThemeProperty::BorderRadius => record.border_radius = value.as_radius()?,
            ThemeProperty::LineHeight => record.line_height = value.as_number()?,
            ThemeProperty::LetterSpacing => record.letter_spacing = value.as_number()?,
            ThemeProperty::EnableLigatures => record.enable_ligatures = value.as_bool()?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_color;
    use crate::record::Thickness;

    #[test]
    fn test_lookup_ignores_case_and_separators() {
        for name in ["PrimaryColor", "primaryColor", "primary_color", "PRIMARY-COLOR"] {
            assert_eq!(ThemeProperty::lookup(name), Some(ThemeProperty::PrimaryColor));
        }
        assert_eq!(ThemeProperty::lookup("glowColor"), None);
    }

    #[test]
    fn test_every_property_round_trips_its_name() {
        for property in ThemeProperty::ALL {
            assert_eq!(ThemeProperty::lookup(property.as_str()), Some(*property));
        }
    }

    #[test]
    fn test_apply_sets_typed_value() {
        let mut record = ThemeRecord::default();
        ThemeProperty::AccentColor
            .apply(&mut record, &OverrideValue::from("#00FF00"))
            .unwrap();
        assert_eq!(record.accent_color, parse_color("#00FF00").unwrap());

        ThemeProperty::BorderThickness
            .apply(&mut record, &OverrideValue::from("2,4"))
            .unwrap();
        assert_eq!(record.border_thickness, Thickness::symmetric(2.0, 4.0));

        ThemeProperty::EnableLigatures
            .apply(&mut record, &OverrideValue::from(false))
            .unwrap();
        assert!(!record.enable_ligatures);
    }

    #[test]
    fn test_failed_apply_leaves_record_alone() {
        let mut record = ThemeRecord::default();
        let before = record.clone();
        assert!(ThemeProperty::FontSizeSmall
            .apply(&mut record, &OverrideValue::from("huge"))
            .is_err());
        assert_eq!(record, before);
    }
}
