use crate::contrast::contrast_ratio;
use crate::record::ThemeRecord;

use super::{ValidationResult, ValidationRule};

const MAX_THICKNESS: f64 = 10.0;
const MAX_RADIUS: f64 = 50.0;

/// Checks border thickness, corner radius and border color visibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderRule;

impl BorderRule {
    fn check_thickness(theme: &ThemeRecord, result: &mut ValidationResult) {
        let thickness = theme.border_thickness;

        if thickness.any_negative() {
            result.add_error("Border thickness values cannot be negative");
        }

        let max = thickness.max_side();
        if max > MAX_THICKNESS {
            result.add_warning(format!(
                "Border thickness ({max}) is very large and may impact usability"
            ));
        }

        if thickness.is_zero() {
            result.add_warning("All border thickness values are zero - borders will be invisible");
        }
    }

    fn check_radius(theme: &ThemeRecord, result: &mut ValidationResult) {
        let radius = theme.border_radius;

        if radius < 0.0 {
            result.add_error(format!("Border radius ({radius}) cannot be negative"));
        }
        if radius > MAX_RADIUS {
            result.add_warning(format!(
                "Border radius ({radius}) is very large and may cause visual issues"
            ));
        }
        if radius > 0.0 && radius < 1.0 {
            result.add_warning(format!(
                "Border radius ({radius}) is very small and may not be visible"
            ));
        }
    }

    fn check_colors(theme: &ThemeRecord, result: &mut ValidationResult) {
        for (surface, background) in [
            ("primary", theme.primary_background),
            ("secondary", theme.secondary_background),
        ] {
            let ratio = contrast_ratio(theme.border_color, background);
            if ratio < 1.5 {
                result.add_error(format!(
                    "Border color has insufficient contrast against {surface} background (ratio: {ratio:.2})"
                ));
            } else if ratio < 2.0 {
                result.add_warning(format!(
                    "Border color has low contrast against {surface} background (ratio: {ratio:.2})"
                ));
            }
        }

        if contrast_ratio(theme.border_color, theme.primary_text_color) < 1.2 {
            result.add_warning(
                "Border color is very similar to primary text color, which may cause visual confusion",
            );
        }
    }
}

impl ValidationRule for BorderRule {
    fn name(&self) -> &'static str {
        "border"
    }

    fn validate(&self, theme: &ThemeRecord) -> ValidationResult {
        let mut result = ValidationResult::new();
        Self::check_thickness(theme, &mut result);
        Self::check_radius(theme, &mut result);
        Self::check_colors(theme, &mut result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Thickness;
    use vello::peniko::Color;

    fn with_border(border_color: Color) -> ThemeRecord {
        ThemeRecord {
            border_color,
            primary_background: Color::BLACK,
            secondary_background: Color::BLACK,
            primary_text_color: Color::WHITE,
            ..ThemeRecord::default()
        }
    }

    #[test]
    fn test_visible_border_passes() {
        let result = BorderRule.validate(&with_border(Color::from_rgb8(0x80, 0x80, 0x80)));
        assert!(result.errors.is_empty(), "{:?}", result.errors);
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn test_thickness_findings() {
        let mut theme = with_border(Color::from_rgb8(0x80, 0x80, 0x80));
        theme.border_thickness = Thickness::new(-1.0, 12.0, 0.0, 0.0);
        let result = BorderRule.validate(&theme);
        assert_eq!(result.errors, vec!["Border thickness values cannot be negative"]);
        assert_eq!(
            result.warnings,
            vec!["Border thickness (12) is very large and may impact usability"]
        );

        theme.border_thickness = Thickness::uniform(0.0);
        let result = BorderRule.validate(&theme);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].starts_with("All border thickness values are zero"));
    }

    #[test]
    fn test_radius_findings() {
        let mut theme = with_border(Color::from_rgb8(0x80, 0x80, 0x80));

        theme.border_radius = -2.0;
        assert_eq!(BorderRule.validate(&theme).errors.len(), 1);

        theme.border_radius = 60.0;
        let result = BorderRule.validate(&theme);
        assert!(result.is_valid());
        assert!(result.warnings[0].contains("very large"));

        theme.border_radius = 0.5;
        let result = BorderRule.validate(&theme);
        assert!(result.warnings[0].contains("very small"));

        theme.border_radius = 0.0;
        assert!(BorderRule.validate(&theme).warnings.is_empty());
    }

    #[test]
    fn test_invisible_border_is_error_on_both_surfaces() {
        let result = BorderRule.validate(&with_border(Color::from_rgb8(0x08, 0x08, 0x08)));
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].contains("primary background"));
        assert!(result.errors[1].contains("secondary background"));
    }

    #[test]
    fn test_border_like_text_is_warning() {
        let result = BorderRule.validate(&with_border(Color::from_rgb8(0xF8, 0xF8, 0xF8)));
        assert!(result.is_valid());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("very similar to primary text")));
    }
}
