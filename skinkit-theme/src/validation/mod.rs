//! # Validation Rules
//!
//! A [ValidationRule] inspects a [ThemeRecord] and reports what it finds as
//! plain messages in a [ValidationResult]. Errors make a skin unusable,
//! warnings are advisory. Rules never fail and never modify the record.
//!
//! The shipped rules are:
//!
//! - [ColorContrastRule]: text against background contrast
//! - [FontSizeRule]: font size ranges and ordering
//! - [BorderRule]: border thickness, radius and color
//! - [NameRule]: naming conventions
//! - [AccessibilityRule]: a broader WCAG-oriented review
//!
//! Rules are combined by the [ThemeValidator](crate::validator::ThemeValidator).

use crate::record::ThemeRecord;

mod accessibility;
mod border;
mod color_contrast;
mod font_size;
mod name;

pub use accessibility::AccessibilityRule;
pub use border::BorderRule;
pub use color_contrast::ColorContrastRule;
pub use font_size::{FontSizeRule, LARGE_RANGE, MEDIUM_RANGE, SMALL_RANGE};
pub use name::NameRule;

/// Errors and warnings collected while validating a skin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Problems that make the skin unusable, in the order they were found.
    pub errors: Vec<String>,
    /// Advisory findings, in the order they were found.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Record a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// A result is valid when it holds no errors. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether any warnings were recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Append another result's errors and warnings after this one's.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// A single, independent check over a skin.
pub trait ValidationRule: Send + Sync {
    /// Short identifier used in log output.
    fn name(&self) -> &'static str;

    /// Inspect `theme` and report findings.
    fn validate(&self, theme: &ThemeRecord) -> ValidationResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_ignores_warnings() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());

        result.add_warning("just a hint");
        assert!(result.is_valid());
        assert!(result.has_warnings());

        result.add_error("broken");
        assert!(!result.is_valid());
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut first = ValidationResult::new();
        first.add_error("a");
        first.add_warning("w1");

        let mut second = ValidationResult::new();
        second.add_error("b");
        second.add_warning("w2");

        first.merge(second);
        assert_eq!(first.errors, vec!["a", "b"]);
        assert_eq!(first.warnings, vec!["w1", "w2"]);
    }
}
