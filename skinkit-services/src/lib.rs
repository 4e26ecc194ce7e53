// SPDX-License-Identifier: MIT OR Apache-2.0
pub mod manager;
pub mod settings;
pub mod theme_files;

// Re-export commonly used types
pub use manager::{SkinListener, SkinManager};
pub use settings::{Settings, SettingsStore};
