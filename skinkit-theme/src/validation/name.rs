use std::sync::LazyLock;

use regex::Regex;

use crate::record::ThemeRecord;

use super::{ValidationResult, ValidationRule};

static VALID_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9\s\-_\.]+$").expect("Failed to create VALID_NAME_REGEX")
});
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bv?\d+(\.\d+)*\b").expect("Failed to create VERSION_REGEX")
});

const RESERVED_NAMES: [&str; 6] = ["default", "system", "auto", "none", "null", "empty"];
const CONFUSING_NAMES: [&str; 4] = ["test", "debug", "temp", "sample"];
const GENERIC_NAMES: [&str; 4] = ["theme", "skin", "custom", "new"];
const DEVICE_NAME_FRAGMENTS: [&str; 4] = ["con", "prn", "aux", "nul"];
const DEVICE_NAME_PREFIXES: [&str; 2] = ["com", "lpt"];

const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 50;
const LONG_NAME_LENGTH: usize = 30;

/// Checks skin names for format, length and naming conventions.
///
/// An empty name only reports that a name is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRule;

impl NameRule {
    fn check_format(name: &str, result: &mut ValidationResult) {
        if !VALID_NAME_REGEX.is_match(name) {
            result.add_error(
                "Theme name contains invalid characters. Only letters, numbers, spaces, hyphens, underscores, and periods are allowed",
            );
        }
        if name != name.trim() {
            result.add_warning("Theme name has leading or trailing whitespace");
        }
        if name.contains("  ") {
            result.add_warning("Theme name contains multiple consecutive spaces");
        }
        if name.starts_with(['-', '_', '.']) {
            result.add_warning(
                "Theme name starts with a special character, which may cause sorting issues",
            );
        }
    }

    fn check_length(name: &str, result: &mut ValidationResult) {
        if name.trim().chars().count() < MIN_LENGTH {
            result.add_error("Theme name must be at least 2 characters long");
        }

        let length = name.chars().count();
        if length > MAX_LENGTH {
            result.add_error(format!(
                "Theme name is too long ({length} characters). Maximum length is 50 characters"
            ));
        } else if length > LONG_NAME_LENGTH {
            result.add_warning(format!(
                "Theme name is quite long ({length} characters). Consider a shorter name for better UI display"
            ));
        }
    }

    fn check_reserved(name: &str, result: &mut ValidationResult) {
        let lower = name.trim().to_lowercase();

        if RESERVED_NAMES.contains(&lower.as_str()) {
            result.add_error(format!(
                "'{name}' is a reserved name and cannot be used for custom themes"
            ));
        }
        if CONFUSING_NAMES.contains(&lower.as_str()) {
            result.add_warning(format!(
                "'{name}' might be confusing as it suggests a temporary or development theme"
            ));
        }
        if DEVICE_NAME_FRAGMENTS.iter().any(|fragment| lower.contains(fragment))
            || DEVICE_NAME_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
        {
            result.add_warning(format!(
                "'{name}' contains patterns that might cause issues on some file systems"
            ));
        }
    }

    fn check_conventions(name: &str, result: &mut ValidationResult) {
        let name = name.trim();
        let lower = name.to_lowercase();

        let starts_upper = name.chars().next().is_some_and(char::is_uppercase);
        if name.chars().count() < 4 && !starts_upper {
            result.add_warning(
                "Very short theme names should be capitalized for better readability",
            );
        }

        if VERSION_REGEX.is_match(name) {
            result.add_warning(
                "Theme name contains version numbers. Consider using metadata for versioning instead",
            );
        }

        let letters = name.chars().filter(|c| c.is_alphabetic()).count();
        let upper = name.chars().filter(|c| c.is_uppercase()).count();
        if letters > 0 && upper as f64 / letters as f64 > 0.6 {
            result.add_warning(
                "Theme name has excessive capitalization, which may impact readability",
            );
        }

        if lower.ends_with("theme") || lower.ends_with("skin") {
            result.add_warning(
                "Theme name ends with 'theme' or 'skin', which is redundant in this context",
            );
        }

        if GENERIC_NAMES.contains(&lower.as_str()) {
            result.add_warning(format!(
                "'{name}' is too generic. Consider a more descriptive name that reflects the theme's characteristics"
            ));
        }
    }
}

impl ValidationRule for NameRule {
    fn name(&self) -> &'static str {
        "name"
    }

    fn validate(&self, theme: &ThemeRecord) -> ValidationResult {
        let mut result = ValidationResult::new();
        let name = theme.name.as_str();

        if name.is_empty() {
            result.add_error("Theme name is required and cannot be null or empty");
            return result;
        }
        if name.trim().is_empty() {
            result.add_error("Theme name cannot be only whitespace");
        }

        Self::check_format(name, &mut result);
        Self::check_length(name, &mut result);
        Self::check_reserved(name, &mut result);
        Self::check_conventions(name, &mut result);

        result
    }
}
