use crate::contrast::{contrast_ratio, WCAG_AA, WCAG_AAA, WCAG_AA_LARGE};
use crate::record::ThemeRecord;

use super::{ValidationResult, ValidationRule};

/// Checks text readability against the backgrounds it is drawn on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorContrastRule;

impl ValidationRule for ColorContrastRule {
    fn name(&self) -> &'static str {
        "color-contrast"
    }

    fn validate(&self, theme: &ThemeRecord) -> ValidationResult {
        let mut result = ValidationResult::new();

        let primary = contrast_ratio(theme.primary_text_color, theme.primary_background);
        if primary < WCAG_AA {
            result.add_error(format!(
                "Primary text contrast ratio ({primary:.2}) is below WCAG AA standard (4.5:1)"
            ));
        } else if primary < WCAG_AAA {
            result.add_warning(format!(
                "Primary text contrast ratio ({primary:.2}) is below WCAG AAA standard (7.0:1)"
            ));
        }

        let secondary = contrast_ratio(theme.secondary_text_color, theme.secondary_background);
        if secondary < WCAG_AA_LARGE {
            result.add_error(format!(
                "Secondary text contrast ratio ({secondary:.2}) is below minimum standard (3.0:1)"
            ));
        }

        let accent = contrast_ratio(theme.primary_text_color, theme.accent_color);
        if accent < WCAG_AA_LARGE {
            result.add_warning(format!(
                "Accent color contrast with primary text ({accent:.2}) may be difficult to read"
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vello::peniko::Color;

    #[test]
    fn test_default_record_passes() {
        let result = ColorContrastRule.validate(&ThemeRecord::default());
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_low_primary_contrast_is_error() {
        let mut theme = ThemeRecord::default();
        theme.primary_text_color = Color::from_rgb8(0x40, 0x45, 0x50);
        let result = ColorContrastRule.validate(&theme);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Primary text contrast ratio"));
    }

    #[test]
    fn test_aa_but_not_aaa_is_warning() {
        let mut theme = ThemeRecord::default();
        // Roughly 5:1 against #2C313D.
        theme.primary_text_color = Color::from_rgb8(0xA0, 0xA0, 0xA0);
        let result = ColorContrastRule.validate(&theme);
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("below WCAG AAA standard")));
    }

    #[test]
    fn test_weak_secondary_contrast_is_error() {
        let mut theme = ThemeRecord::default();
        theme.secondary_text_color = theme.secondary_background;
        let result = ColorContrastRule.validate(&theme);
        assert_eq!(
            result.errors,
            vec!["Secondary text contrast ratio (1.00) is below minimum standard (3.0:1)"]
        );
    }

    #[test]
    fn test_accent_close_to_text_is_warning() {
        let mut theme = ThemeRecord::default();
        theme.accent_color = Color::from_rgb8(0xEE, 0xEE, 0xEE);
        let result = ColorContrastRule.validate(&theme);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].starts_with("Accent color contrast"));
    }
}
