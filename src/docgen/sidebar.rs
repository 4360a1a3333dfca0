//! Sidebar configuration generation.
//!
//! Builds the `models_sidebar` navigation tree (family → model → tutorial)
//! from the registry's family list and the tutorial files on disk, and
//! serializes it to `sidebar_config.json` for the site renderer.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::docgen::markdown::{first_heading_title, list_tutorials};
use crate::docgen::registry::SidebarSettings;
use crate::error::{ModelDocsError, Result};

/// Top-level document written to `sidebar_config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SidebarConfig {
    /// Family groups in registry order.
    pub models_sidebar: Vec<FamilyGroup>,
}

/// A collapsible sidebar group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup<T> {
    /// Group label.
    pub text: String,
    /// Whether the group starts collapsed.
    pub collapsed: bool,
    /// Child entries.
    pub items: Vec<T>,
}

/// A tutorial leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    /// Tutorial title.
    pub text: String,
    /// Site-relative link.
    pub link: String,
}

/// Group of tutorials belonging to one model directory.
pub type ModelGroup = SidebarGroup<SidebarLink>;

/// Group of models belonging to one family.
pub type FamilyGroup = SidebarGroup<ModelGroup>;

impl SidebarConfig {
    /// Total number of tutorial leaves across all groups.
    #[must_use]
    pub fn total_tutorials(&self) -> usize {
        self.models_sidebar
            .iter()
            .flat_map(|family| &family.items)
            .map(|model| model.items.len())
            .sum()
    }

    /// Serialize as 2-space indented JSON with non-ASCII text kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns a JSON error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Tutorial leaves for one model directory, in file-name order.
///
/// # Errors
///
/// Returns an error if the directory listing fails.
pub fn model_tutorials(
    model_dir: &Path,
    model: &str,
    link_prefix: &str,
) -> Result<Vec<SidebarLink>> {
    let prefix = link_prefix.trim_end_matches('/');
    Ok(list_tutorials(model_dir)?
        .iter()
        .map(|path| {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            SidebarLink {
                text: first_heading_title(path),
                link: format!("{prefix}/{model}/{file_name}"),
            }
        })
        .collect())
}

/// Build the sidebar tree for `models_root` from the registry settings.
///
/// Models absent on disk are skipped. A model appears only if it has at
/// least one tutorial, and a family only if at least one model appears.
///
/// # Errors
///
/// Returns an error if a model directory cannot be listed.
pub fn build(models_root: &Path, settings: &SidebarSettings) -> Result<SidebarConfig> {
    let mut config = SidebarConfig::default();

    for family in &settings.families {
        let mut models = Vec::new();

        for model in &family.models {
            let model_dir = models_root.join(model);
            if !model_dir.is_dir() {
                log_missing_model(models_root, model);
                continue;
            }

            let tutorials = model_tutorials(&model_dir, model, &settings.link_prefix)?;
            if tutorials.is_empty() {
                tracing::debug!(model = %model, "no tutorials, omitted");
                continue;
            }
            models.push(ModelGroup {
                text: model.clone(),
                collapsed: true,
                items: tutorials,
            });
        }

        if models.is_empty() {
            tracing::debug!(family = %family.name, "no models with tutorials, omitted");
            continue;
        }
        config.models_sidebar.push(FamilyGroup {
            text: family.name.clone(),
            collapsed: true,
            items: models,
        });
    }

    Ok(config)
}

/// Write the sidebar JSON to `path`, creating its parent directory.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_sidebar(config: &SidebarConfig, path: &Path) -> Result<()> {
    let json = config.to_json()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| ModelDocsError::io("failed to create", parent, e))?;
    }
    fs::write(path, json).map_err(|e| ModelDocsError::io("failed to write", path, e))
}

/// Closest existing directory name to `model`, within edit distance 3.
#[must_use]
pub fn suggest_model_dir<'a, I>(model: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .map(|name| (name, strsim::damerau_levenshtein(model, name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name.to_string())
}

fn log_missing_model(models_root: &Path, model: &str) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    let existing: Vec<String> = fs::read_dir(models_root)
        .into_iter()
        .flatten()
        .flatten()
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();

    match suggest_model_dir(model, existing.iter().map(String::as_str)) {
        Some(suggestion) => {
            tracing::debug!(
                model = %model,
                suggestion = %suggestion,
                "model directory not found, did you mean the suggestion?"
            );
        }
        None => tracing::debug!(model = %model, "model directory not found, skipped"),
    }
}
