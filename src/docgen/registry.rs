//! Registry parsing and validation.
//!
//! The registry (`registry.yaml`) is the explicit configuration passed into
//! the index and sidebar generators: model-family grouping and ordering,
//! sidebar output settings, and the landing-page template. A built-in
//! registry is embedded in the binary; `--registry <file>` replaces it.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ModelDocsError, RegistryError};

/// The registry compiled into the binary.
pub const BUILTIN_REGISTRY: &str = include_str!("../../registry.yaml");

/// Source label used in errors for the embedded registry.
pub const BUILTIN_SOURCE: &str = "<built-in>";

/// Parsed registry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registry {
    /// Sidebar generation settings.
    #[serde(default)]
    pub sidebar: SidebarSettings,

    /// Landing-page template for generated `index.md` files.
    #[serde(default)]
    pub index: IndexTemplate,
}

/// Sidebar generation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SidebarSettings {
    /// Output file, relative to the working directory.
    pub output: PathBuf,

    /// Site path prefix for tutorial links.
    pub link_prefix: String,

    /// Model families in display order.
    pub families: Vec<Family>,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("sidebar_config.json"),
            link_prefix: "/models".to_string(),
            families: Vec::new(),
        }
    }
}

/// A model family: a display name and its model directories, in order.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Family {
    /// Display name of the sidebar group.
    pub name: String,

    /// Model directory names under the models root.
    #[serde(default)]
    pub models: Vec<String>,
}

/// Text used when rendering a generated landing page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexTemplate {
    /// Description line; `{model}` is replaced by the directory name.
    pub description: String,

    /// Heading above the tutorial list.
    pub tutorials_heading: String,

    /// Placeholder line when the directory has no tutorials.
    pub empty: String,

    /// Model directories the batch generator never touches.
    pub skip: Vec<String>,
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            description: "本目录包含 {model} 模型的教程文档。".to_string(),
            tutorials_heading: "教程列表".to_string(),
            empty: "暂无教程文档。".to_string(),
            skip: vec!["General-Setting".to_string()],
        }
    }
}

impl IndexTemplate {
    /// Render the description line for a model.
    #[must_use]
    pub fn description_for(&self, model: &str) -> String {
        self.description.replace("{model}", model)
    }
}

/// Non-fatal registry findings.
#[derive(Debug, Default)]
pub struct RegistryValidation {
    /// Families that list no models.
    pub empty_families: Vec<String>,

    /// Models listed in more than one family.
    pub duplicate_models: Vec<String>,
}

impl RegistryValidation {
    /// Returns `true` if there are no findings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.empty_families.is_empty() && self.duplicate_models.is_empty()
    }
}

/// Parse and validate registry YAML.
///
/// `source` names where the content came from and is only used in errors.
///
/// # Errors
///
/// Returns `RegistryError::Parse` for malformed YAML, and a validation
/// error for empty or duplicated family names.
pub fn parse_registry(content: &str, source: &str) -> Result<Registry, RegistryError> {
    let registry: Registry = serde_yaml::from_str(content).map_err(|e| RegistryError::Parse {
        path: source.to_string(),
        message: e.to_string(),
    })?;

    let mut seen = HashSet::new();
    for (index, family) in registry.sidebar.families.iter().enumerate() {
        if family.name.trim().is_empty() {
            return Err(RegistryError::EmptyFamilyName {
                path: source.to_string(),
                index,
            });
        }
        if !seen.insert(family.name.as_str()) {
            return Err(RegistryError::DuplicateFamily {
                path: source.to_string(),
                name: family.name.clone(),
            });
        }
    }

    Ok(registry)
}

/// Load the registry from `path`, or the built-in registry when `None`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a registry error if
/// it does not parse or validate.
pub fn load_registry(path: Option<&Path>) -> Result<Registry, ModelDocsError> {
    let registry = match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .map_err(|e| ModelDocsError::io("failed to read registry", path, e))?;
            parse_registry(&content, &path.display().to_string())?
        }
        None => parse_registry(BUILTIN_REGISTRY, BUILTIN_SOURCE)?,
    };

    let validation = check_registry(&registry);
    for family in &validation.empty_families {
        tracing::warn!(family = %family, "registry family lists no models");
    }
    for model in &validation.duplicate_models {
        tracing::warn!(model = %model, "model listed in more than one family");
    }

    Ok(registry)
}

/// Collect non-fatal findings: empty families and models listed twice.
#[must_use]
pub fn check_registry(registry: &Registry) -> RegistryValidation {
    let mut validation = RegistryValidation::default();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for family in &registry.sidebar.families {
        if family.models.is_empty() {
            validation.empty_families.push(family.name.clone());
        }
        for model in &family.models {
            let count = counts.entry(model.as_str()).or_default();
            *count += 1;
            if *count == 2 {
                validation.duplicate_models.push(model.clone());
            }
        }
    }

    validation
}
