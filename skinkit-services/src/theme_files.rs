// SPDX-License-Identifier: MIT OR Apache-2.0

//! Async file helpers for skin documents and theme packs.
//!
//! A themes directory holds documents either directly (`ocean.json`) or one
//! per sub-directory (`ocean/theme.json`).

use anyhow::{Context, Result};
use skinkit_theme::codec::{self, ThemeDocument, ThemeImportResult, ThemePack};
use skinkit_theme::inheritance::InheritableTheme;
use skinkit_theme::record::ThemeRecord;
use skinkit_theme::validation::ValidationResult;
use smol::fs;
use smol::stream::StreamExt;
use std::path::{Path, PathBuf};

/// File name looked up inside theme sub-directories.
pub const THEME_DOCUMENT_FILE: &str = "theme.json";

/// A document read from a themes directory.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    /// Where the document was read from.
    pub path: PathBuf,
    /// The parsed document.
    pub document: ThemeDocument,
}

impl LoadedDocument {
    /// Whether the document derives from another skin.
    pub fn is_inheritable(&self) -> bool {
        self.document
            .base_theme
            .as_deref()
            .is_some_and(|base| !base.is_empty())
    }
}

/// List the document files in `dir`, sorted by path.
pub async fn theme_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read themes directory {:?}", dir))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries.next().await {
        let path = entry?.path();
        if path.is_dir() {
            let nested = path.join(THEME_DOCUMENT_FILE);
            if nested.is_file() {
                paths.push(nested);
            }
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Read and parse one document.
pub async fn read_document(path: &Path) -> Result<ThemeDocument> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read theme {:?}", path))?;
    ThemeDocument::from_json(&content).with_context(|| format!("Failed to parse theme {:?}", path))
}

/// Read every document in `dir`. Files that cannot be read or parsed are
/// logged and skipped.
pub async fn load_documents(dir: &Path) -> Result<Vec<LoadedDocument>> {
    let mut loaded = Vec::new();
    for path in theme_paths(dir).await? {
        match read_document(&path).await {
            Ok(document) => {
                log::info!("Loaded theme '{}' from: {:?}", document.name, path);
                loaded.push(LoadedDocument { path, document });
            },
            Err(e) => log::warn!("Skipping {:?}: {:#}", path, e),
        }
    }
    Ok(loaded)
}

/// Import and validate a plain skin document.
pub async fn import_theme_file(path: &Path) -> Result<ThemeImportResult> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read theme {:?}", path))?;
    Ok(codec::import_theme(&content))
}

/// Import a skin, turning a failed import into an error and logging warnings.
pub async fn load_theme_file(path: &Path) -> Result<ThemeRecord> {
    let result = import_theme_file(path).await?;
    for warning in &result.warnings {
        log::warn!("{:?}: {}", path, warning);
    }
    match (result.theme, result.error) {
        (Some(theme), _) => Ok(theme),
        (None, error) => Err(anyhow::anyhow!(
            "Failed to import theme {:?}: {}",
            path,
            error.unwrap_or_else(|| "unknown error".to_string())
        )),
    }
}

/// Import an inheritable skin document.
pub async fn load_inheritable_theme_file(path: &Path) -> Result<InheritableTheme> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read theme {:?}", path))?;
    Ok(codec::import_inheritable_theme(&content)?)
}

/// Check a document file without importing it.
pub async fn validate_theme_file(path: &Path) -> Result<ValidationResult> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read theme {:?}", path))?;
    Ok(codec::validate_json(&content))
}

async fn write_text(path: &Path, content: String) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {:?}", path))?;
    log::info!("Wrote {:?}", path);
    Ok(())
}

/// Export a skin's plain properties.
pub async fn export_theme_file(
    path: &Path,
    theme: &ThemeRecord,
    description: Option<&str>,
    author: Option<&str>,
) -> Result<()> {
    write_text(path, codec::export_theme(theme, description, author)?).await
}

/// Export a skin with its typography section.
pub async fn export_advanced_theme_file(
    path: &Path,
    theme: &ThemeRecord,
    description: Option<&str>,
    author: Option<&str>,
) -> Result<()> {
    write_text(path, codec::export_advanced_theme(theme, description, author)?).await
}

/// Export an inheritable skin with its base name and overrides.
pub async fn export_inheritable_theme_file(
    path: &Path,
    theme: &InheritableTheme,
    description: Option<&str>,
    author: Option<&str>,
) -> Result<()> {
    write_text(path, codec::export_inheritable_theme(theme, description, author)?).await
}

/// Write a theme pack.
pub async fn export_pack_file(path: &Path, pack: &ThemePack) -> Result<()> {
    write_text(path, pack.to_json()?).await
}

/// Read a theme pack.
pub async fn import_pack_file(path: &Path) -> Result<ThemePack> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read theme pack {:?}", path))?;
    ThemePack::from_json(&content).with_context(|| format!("Failed to parse theme pack {:?}", path))
}
