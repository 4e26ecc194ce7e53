#![warn(missing_docs)]

//! # Skinkit Theming Core
//!
//! Named color and typography skins, checked for accessibility, composable
//! through inheritance and portable as JSON documents.
//!
//! ## Overview
//!
//! - **[ThemeRecord](record::ThemeRecord)**: the flat bag of colors, sizes and fonts a skin is made of
//! - **[TypographyScale](typography::TypographyScale)**: the fifteen-tier font size ladder
//! - **[contrast]**: WCAG luminance, contrast ratios and contrast repair
//! - **[ThemeValidator](validator::ThemeValidator)**: runs [validation] rules and auto-fixes records
//! - **[InheritanceResolver](inheritance::InheritanceResolver)**: resolves skins derived from other skins
//! - **[codec]**: JSON skin documents and theme packs
//! - **[ThemeConfig](config::ThemeConfig)**: configuration from environment variables and files
//! - **Built-in skins**: [Dark](presets::dark) and [Light](presets::light)
//!
//! ## Quick Start
//!
//! ```rust
//! use skinkit_theme::presets;
//! use skinkit_theme::validator::ThemeValidator;
//!
//! let result = ThemeValidator::new().validate_theme(&presets::dark());
//! assert!(result.is_valid());
//!
//! // The full rule set also checks borders, names and accessibility.
//! let result = ThemeValidator::strict().validate_theme(&presets::light());
//! assert!(result.is_valid());
//! ```
//!
//! ## Contrast
//!
//! ```rust
//! use skinkit_theme::contrast::{contrast_ratio, WCAG_AA};
//! use vello::peniko::Color;
//!
//! let ratio = contrast_ratio(Color::BLACK, Color::WHITE);
//! assert!(ratio >= WCAG_AA);
//! ```
//!
//! ## Inheritance
//!
//! ```rust
//! use skinkit_theme::inheritance::{InheritableTheme, InheritanceResolver};
//! use skinkit_theme::presets;
//!
//! let mut resolver = InheritanceResolver::new();
//! resolver.register_inheritable_theme("Dark", InheritableTheme::new(presets::dark()));
//! resolver.register_inheritable_theme(
//!     "Dark Teal",
//!     InheritableTheme::new(presets::dark())
//!         .with_base("Dark")
//!         .with_override("accentColor", "#009688"),
//! );
//!
//! let teal = resolver.get_resolved_theme("Dark Teal").unwrap().unwrap();
//! assert_eq!(teal.name, "Dark Teal");
//! ```
//!
//! ## Documents
//!
//! ```rust
//! use skinkit_theme::codec;
//! use skinkit_theme::presets;
//!
//! let json = codec::export_theme(&presets::light(), None, None).unwrap();
//! let imported = codec::import_theme(&json);
//! assert!(imported.is_success());
//! ```

/// Contains the error types for the theming core.
pub mod error;

/// Contains color parsing and formatting.
pub mod color;

/// Contains the typography scale.
pub mod typography;

/// Contains the theme record and its value types.
pub mod record;

/// Contains the built-in skins.
pub mod presets;

/// Contains the contrast engine.
pub mod contrast;

/// Contains validation results and rules.
pub mod validation;

/// Contains the theme validator.
pub mod validator;

/// Contains the skin registry.
pub mod registry;

/// Contains theme inheritance and override resolution.
pub mod inheritance;

/// Contains the JSON document codec.
pub mod codec;

/// Contains skin configuration.
pub mod config;
