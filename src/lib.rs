#![warn(missing_docs)]

//! Named color and typography skins with accessibility validation and theme inheritance.

pub use vello::peniko as color;

pub use skinkit_services as services;
pub use skinkit_theme as theme;

/// A "prelude" for users of skinkit.
///
/// Importing this module brings into scope the most common types
/// needed to load, check and apply skins.
///
/// ```rust
/// use skinkit::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::theme::record::{FontFamily, FontWeight, ThemeRecord, Thickness};
    pub use crate::theme::typography::TypographyScale;
    pub use crate::theme::presets;

    // Checking
    pub use crate::theme::contrast::{adjust_for_contrast, contrast_ratio, relative_luminance};
    pub use crate::theme::validation::{ValidationResult, ValidationRule};
    pub use crate::theme::validator::ThemeValidator;

    // Inheritance
    pub use crate::theme::inheritance::{
        InheritableTheme, InheritanceResolver, OverrideValue, UnknownPropertyPolicy,
    };
    pub use crate::theme::registry::{SkinRegistry, ThemeSource};

    // Documents
    pub use crate::theme::codec::{ThemeDocument, ThemeImportResult, ThemePack};

    // Configuration and errors
    pub use crate::theme::config::{ThemeConfig, ThemeSelection};
    pub use crate::theme::error::{ThemeError, ThemeResult};

    // Services
    pub use crate::services::{Settings, SettingsStore, SkinManager};

    // Color
    pub use crate::color::Color;
}
