//! # Theme Validator
//!
//! Runs an ordered list of [ValidationRule]s over a skin and concatenates
//! their findings, and repairs the problems that have an obvious fix.
//!
//! ```rust
//! use skinkit_theme::record::ThemeRecord;
//! use skinkit_theme::validator::ThemeValidator;
//!
//! let validator = ThemeValidator::new();
//! let mut theme = ThemeRecord::named("Cramped");
//! theme.font_size_small = 14.0;
//!
//! let result = validator.validate_theme(&theme);
//! assert_eq!(result.errors.len(), 1);
//!
//! let fixed = validator.auto_fix_theme(&theme);
//! assert_eq!(fixed.font_size_small, 14.0); // in range, ordering is not auto-fixed
//! ```

use std::fmt;

use crate::contrast::{adjust_for_contrast, contrast_ratio, WCAG_AA, WCAG_AA_LARGE};
use crate::record::ThemeRecord;
use crate::validation::{
    AccessibilityRule, BorderRule, ColorContrastRule, FontSizeRule, NameRule, ValidationResult,
    ValidationRule, LARGE_RANGE, MEDIUM_RANGE, SMALL_RANGE,
};

/// Name given to skins whose name is blank when auto-fixing.
pub const FALLBACK_THEME_NAME: &str = "Custom Theme";

// Non-finite sizes fall to the bottom of the range.
fn clamp_size(size: f64, (min, max): (f64, f64)) -> f64 {
    if size.is_finite() {
        size.clamp(min, max)
    } else {
        min
    }
}

/// Applies validation rules in registration order.
pub struct ThemeValidator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ThemeValidator {
    /// The standard validator: color contrast and font sizes.
    pub fn new() -> Self {
        Self::with_rules(vec![Box::new(ColorContrastRule), Box::new(FontSizeRule)])
    }

    /// Every shipped rule: the standard ones followed by border, name and
    /// accessibility checks.
    pub fn strict() -> Self {
        Self::with_rules(vec![
            Box::new(ColorContrastRule),
            Box::new(FontSizeRule),
            Box::new(BorderRule),
            Box::new(NameRule),
            Box::new(AccessibilityRule),
        ])
    }

    /// A validator over a custom rule list.
    pub fn with_rules(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Pick [ThemeValidator::strict] or [ThemeValidator::new].
    pub fn for_strictness(strict: bool) -> Self {
        if strict {
            Self::strict()
        } else {
            Self::new()
        }
    }

    /// Append a rule after the existing ones.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run every rule and concatenate the results in rule order.
    pub fn validate_theme(&self, theme: &ThemeRecord) -> ValidationResult {
        let mut result = ValidationResult::new();
        for rule in &self.rules {
            let findings = rule.validate(theme);
            log::trace!(
                "Rule '{}' on '{}': {} errors, {} warnings",
                rule.name(),
                theme.name,
                findings.errors.len(),
                findings.warnings.len()
            );
            result.merge(findings);
        }
        result
    }

    /// Return a repaired copy of `theme`.
    ///
    /// Blank names become [FALLBACK_THEME_NAME], font sizes are clamped to
    /// their allowed ranges (non-finite sizes take the range minimum), a
    /// negative or non-finite radius becomes 0 and text colors are
    /// nudged toward readable contrast. The contrast search is bounded and
    /// may stop short of the target.
    pub fn auto_fix_theme(&self, theme: &ThemeRecord) -> ThemeRecord {
        let mut fixed = theme.clone();

        if fixed.name.trim().is_empty() {
            fixed.name = FALLBACK_THEME_NAME.to_string();
        }

        fixed.font_size_small = clamp_size(fixed.font_size_small, SMALL_RANGE);
        fixed.font_size_medium = clamp_size(fixed.font_size_medium, MEDIUM_RANGE);
        fixed.font_size_large = clamp_size(fixed.font_size_large, LARGE_RANGE);

        if !fixed.border_radius.is_finite() || fixed.border_radius < 0.0 {
            fixed.border_radius = 0.0;
        }

        if contrast_ratio(fixed.primary_text_color, fixed.primary_background) < WCAG_AA {
            fixed.primary_text_color =
                adjust_for_contrast(fixed.primary_text_color, fixed.primary_background, WCAG_AA);
        }
        if contrast_ratio(fixed.secondary_text_color, fixed.secondary_background) < WCAG_AA_LARGE {
            fixed.secondary_text_color = adjust_for_contrast(
                fixed.secondary_text_color,
                fixed.secondary_background,
                WCAG_AA_LARGE,
            );
        }

        if fixed != *theme {
            log::debug!("Auto-fixed theme '{}'", fixed.name);
        }
        fixed
    }
}

impl Default for ThemeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThemeValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeValidator")
            .field("rules", &self.rule_names())
            .finish()
    }
}
