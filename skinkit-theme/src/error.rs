//! # Theme Error Types
//!
//! Error types for the skin system. Validation findings are never reported
//! through these types; they are collected in a
//! [ValidationResult](crate::validation::ValidationResult) instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the skin system.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Theme with the specified name was not found.
    #[error("Theme '{name}' not found")]
    ThemeNotFound {
        /// The name of the theme that was not found.
        name: String,
    },

    /// Theme file was not found.
    #[error("Theme file not found: {path:?}")]
    ThemeFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a theme document or configuration file.
    #[error("Failed to parse theme file {path:?}: {details}")]
    ThemeParseError {
        /// The path of the file that failed to parse.
        path: PathBuf,
        /// Details about the parse error.
        details: String,
    },

    /// A color string could not be parsed.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// An override value could not be converted to its property type.
    #[error("Failed to convert '{property}': {source}")]
    Conversion {
        /// The property the override targeted.
        property: String,
        /// What went wrong.
        #[source]
        source: ConversionError,
    },

    /// An override named a property that does not exist.
    #[error("Unknown theme property '{0}'")]
    UnknownProperty(String),

    /// Theme inheritance chain loops back on itself.
    #[error("Cyclic theme inheritance: {}", chain.join(" -> "))]
    CyclicInheritance {
        /// The names along the cycle, starting and ending with the same theme.
        chain: Vec<String>,
    },

    /// A theme failed validation where a valid theme was required.
    #[error("Theme '{name}' failed validation: {}", errors.join(", "))]
    ValidationFailed {
        /// The name of the rejected theme.
        name: String,
        /// The validation errors.
        errors: Vec<String>,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing or deserializing theme data.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a theme not found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ThemeNotFound { name: name.into() }
    }

    /// Create a theme file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ThemeFileNotFound { path: path.into() }
    }

    /// Create a theme parse error.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::ThemeParseError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create a conversion error for an override.
    pub fn conversion(property: impl Into<String>, source: ConversionError) -> Self {
        Self::Conversion {
            property: property.into(),
            source,
        }
    }

    /// Create a validation failure error.
    pub fn validation_failed(name: impl Into<String>, errors: Vec<String>) -> Self {
        Self::ValidationFailed {
            name: name.into(),
            errors,
        }
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Why an override value could not be coerced into a property type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The value had the wrong shape for the target type.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// The kind of value the property needs.
        expected: &'static str,
        /// The kind of value that was supplied.
        found: &'static str,
    },

    /// A color string could not be parsed.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// A numeric string could not be parsed.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// A thickness string did not have 1, 2 or 4 components.
    #[error("invalid thickness '{0}'")]
    InvalidThickness(String),
}
