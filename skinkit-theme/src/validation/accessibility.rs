use vello::peniko::Color;

use crate::contrast::{contrast_ratio, is_high_saturation, WCAG_AA, WCAG_AAA, WCAG_AA_LARGE};
use crate::record::ThemeRecord;

use super::{ValidationResult, ValidationRule};

const MINIMUM_FONT_SIZE: f64 = 12.0;
const RECOMMENDED_MINIMUM_FONT_SIZE: f64 = 14.0;
const MAXIMUM_RECOMMENDED_FONT_SIZE: f64 = 32.0;
const EYE_STRAIN_RATIO: f64 = 15.0;

/// A broad accessibility review: text contrast on every surface, font size
/// hierarchy, color differentiation, focus visibility, status colors and
/// visual comfort.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessibilityRule;

impl AccessibilityRule {
    fn check_text_contrast(theme: &ThemeRecord, result: &mut ValidationResult) {
        let pairs = [
            (
                "Primary text on primary background",
                theme.primary_text_color,
                theme.primary_background,
                false,
            ),
            (
                "Primary text on secondary background",
                theme.primary_text_color,
                theme.secondary_background,
                false,
            ),
            (
                "Secondary text on primary background",
                theme.secondary_text_color,
                theme.primary_background,
                true,
            ),
            (
                "Secondary text on secondary background",
                theme.secondary_text_color,
                theme.secondary_background,
                true,
            ),
        ];

        for (context, text, background, secondary) in pairs {
            let (minimum, recommended) = if secondary {
                (WCAG_AA_LARGE, WCAG_AA)
            } else {
                (WCAG_AA, WCAG_AAA)
            };
            let ratio = contrast_ratio(text, background);
            if ratio < minimum {
                result.add_error(format!(
                    "{context} contrast ratio ({ratio:.2}:1) fails WCAG AA minimum ({minimum:.1}:1)"
                ));
            } else if ratio < recommended {
                result.add_warning(format!(
                    "{context} contrast ratio ({ratio:.2}:1) meets minimum but not enhanced WCAG AAA standard ({recommended:.1}:1)"
                ));
            }
        }

        let accent = contrast_ratio(theme.accent_color, theme.primary_background);
        if accent < WCAG_AA_LARGE {
            result.add_warning(format!(
                "Accent color on primary background has low contrast ({accent:.2}:1). May not be distinguishable for users with visual impairments"
            ));
        }
    }

    fn check_font_sizes(theme: &ThemeRecord, result: &mut ValidationResult) {
        let small = theme.font_size_small;
        let medium = theme.font_size_medium;
        let large = theme.font_size_large;

        if small < MINIMUM_FONT_SIZE {
            result.add_error(format!(
                "Small font size ({small}px) is below accessibility minimum ({MINIMUM_FONT_SIZE}px)"
            ));
        } else if small < RECOMMENDED_MINIMUM_FONT_SIZE {
            result.add_warning(format!(
                "Small font size ({small}px) is below recommended minimum ({RECOMMENDED_MINIMUM_FONT_SIZE}px) for good accessibility"
            ));
        }

        if medium < RECOMMENDED_MINIMUM_FONT_SIZE {
            result.add_warning(format!(
                "Medium font size ({medium}px) is below recommended size ({RECOMMENDED_MINIMUM_FONT_SIZE}px) for primary content"
            ));
        }

        if large > MAXIMUM_RECOMMENDED_FONT_SIZE {
            result.add_warning(format!(
                "Large font size ({large}px) exceeds recommended maximum ({MAXIMUM_RECOMMENDED_FONT_SIZE}px) and may cause layout issues"
            ));
        }

        // Non-finite ratios (zero sizes) compare false and stay silent.
        if medium / small < 1.1 {
            result.add_warning(
                "Small and medium font sizes are too similar. Consider larger difference for better visual hierarchy",
            );
        }
        if large / medium < 1.2 {
            result.add_warning(
                "Medium and large font sizes are too similar. Consider larger difference for better visual hierarchy",
            );
        }
    }

    fn check_differentiation(theme: &ThemeRecord, result: &mut ValidationResult) {
        let primary_secondary = contrast_ratio(theme.primary_color, theme.secondary_color);
        if primary_secondary < 1.5 {
            result.add_warning(format!(
                "Primary and secondary colors are very similar ({primary_secondary:.2}:1). Users may have difficulty distinguishing them"
            ));
        }

        let backgrounds = contrast_ratio(theme.primary_background, theme.secondary_background);
        if backgrounds < 1.3 {
            result.add_warning(format!(
                "Primary and secondary backgrounds are very similar ({backgrounds:.2}:1). May reduce visual hierarchy"
            ));
        }

        let accent_primary = contrast_ratio(theme.accent_color, theme.primary_color);
        if accent_primary < 2.0 {
            result.add_warning(format!(
                "Accent color is too similar to primary color ({accent_primary:.2}:1). May not provide sufficient emphasis"
            ));
        }
    }

    fn check_focus(theme: &ThemeRecord, result: &mut ValidationResult) {
        let accent = contrast_ratio(theme.accent_color, theme.primary_background);
        if accent < WCAG_AA_LARGE {
            result.add_error(format!(
                "Accent color (focus indicator) has insufficient contrast against primary background ({accent:.2}:1). Focus may not be visible to all users"
            ));
        }

        let border = contrast_ratio(theme.border_color, theme.primary_background);
        if border < 2.0 {
            result.add_warning(format!(
                "Border color has low contrast against primary background ({border:.2}:1). May impact focus indicator visibility"
            ));
        }
    }

    fn check_status_colors(theme: &ThemeRecord, result: &mut ValidationResult) {
        let error = contrast_ratio(theme.error_color, theme.primary_background);
        if error < WCAG_AA_LARGE {
            result.add_error(format!(
                "Error color has insufficient contrast ({error:.2}:1). Critical error messages may not be visible"
            ));
        }

        for (label, color) in [("Warning", theme.warning_color), ("Success", theme.success_color)] {
            let ratio = contrast_ratio(color, theme.primary_background);
            if ratio < WCAG_AA_LARGE {
                result.add_warning(format!(
                    "{label} color has low contrast ({ratio:.2}:1). {label} messages may not be clearly visible"
                ));
            }
        }

        let pairs: [(&str, Color, &str, Color); 3] = [
            ("Error", theme.error_color, "warning", theme.warning_color),
            ("Error", theme.error_color, "success", theme.success_color),
            ("Warning", theme.warning_color, "success", theme.success_color),
        ];
        for (first, a, second, b) in pairs {
            let ratio = contrast_ratio(a, b);
            if ratio < 2.0 {
                result.add_warning(format!(
                    "{first} and {second} colors are too similar ({ratio:.2}:1). Users may confuse {} and {second} states",
                    first.to_lowercase()
                ));
            }
        }
    }

    fn check_visual_comfort(theme: &ThemeRecord, result: &mut ValidationResult) {
        if is_high_saturation(theme.accent_color) || is_high_saturation(theme.error_color) {
            result.add_warning(
                "Theme contains very bright, saturated colors that could be problematic for users with photosensitive conditions",
            );
        }

        let ratio = contrast_ratio(theme.primary_text_color, theme.primary_background);
        if ratio > EYE_STRAIN_RATIO {
            result.add_warning(format!(
                "Very high contrast ratio ({ratio:.2}:1) may cause eye strain for some users during extended use"
            ));
        }
    }
}

impl ValidationRule for AccessibilityRule {
    fn name(&self) -> &'static str {
        "accessibility"
    }

    fn validate(&self, theme: &ThemeRecord) -> ValidationResult {
        let mut result = ValidationResult::new();
        Self::check_text_contrast(theme, &mut result);
        Self::check_font_sizes(theme, &mut result);
        Self::check_differentiation(theme, &mut result);
        Self::check_focus(theme, &mut result);
        Self::check_status_colors(theme, &mut result);
        Self::check_visual_comfort(theme, &mut result);
        result
    }
}
