use crate::record::ThemeRecord;

use super::{ValidationResult, ValidationRule};

/// Allowed range for the small font size.
pub const SMALL_RANGE: (f64, f64) = (8.0, 20.0);
/// Allowed range for the medium font size.
pub const MEDIUM_RANGE: (f64, f64) = (10.0, 24.0);
/// Allowed range for the large font size.
pub const LARGE_RANGE: (f64, f64) = (12.0, 32.0);

/// Checks that the three font sizes are in range and strictly increasing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontSizeRule;

fn check_range(result: &mut ValidationResult, label: &str, size: f64, (min, max): (f64, f64)) {
    if !(min..=max).contains(&size) {
        result.add_error(format!(
            "{label} font size ({size}) should be between {min} and {max}"
        ));
    }
}

impl ValidationRule for FontSizeRule {
    fn name(&self) -> &'static str {
        "font-size"
    }

    fn validate(&self, theme: &ThemeRecord) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_range(&mut result, "Small", theme.font_size_small, SMALL_RANGE);
        check_range(&mut result, "Medium", theme.font_size_medium, MEDIUM_RANGE);
        check_range(&mut result, "Large", theme.font_size_large, LARGE_RANGE);

        if theme.font_size_small >= theme.font_size_medium {
            result.add_error("Small font size should be smaller than medium font size");
        }
        if theme.font_size_medium >= theme.font_size_large {
            result.add_error("Medium font size should be smaller than large font size");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(small: f64, medium: f64, large: f64) -> ThemeRecord {
        ThemeRecord {
            font_size_small: small,
            font_size_medium: medium,
            font_size_large: large,
            ..ThemeRecord::default()
        }
    }

    #[test]
    fn test_default_sizes_pass() {
        let result = FontSizeRule.validate(&sized(10.0, 12.0, 16.0));
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_small_not_below_medium() {
        let result = FontSizeRule.validate(&sized(14.0, 12.0, 16.0));
        assert_eq!(
            result.errors,
            vec!["Small font size should be smaller than medium font size"]
        );
    }

    #[test]
    fn test_out_of_range_sizes() {
        let result = FontSizeRule.validate(&sized(6.0, 30.0, 40.0));
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.errors[0], "Small font size (6) should be between 8 and 20");
        assert_eq!(result.errors[2], "Large font size (40) should be between 12 and 32");
    }

    #[test]
    fn test_equal_sizes_fail_ordering() {
        let result = FontSizeRule.validate(&sized(12.0, 12.0, 12.0));
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_non_finite_sizes_are_out_of_range() {
        let result = FontSizeRule.validate(&sized(f64::NAN, 12.0, f64::INFINITY));
        assert_eq!(
            result.errors,
            vec![
                "Small font size (NaN) should be between 8 and 20",
                "Large font size (inf) should be between 12 and 32",
            ]
        );
    }
}
