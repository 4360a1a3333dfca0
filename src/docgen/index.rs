//! Landing page generation for model directories.
//!
//! A model directory without `README.md` or `index.md` gets a generated
//! `index.md` listing its tutorials. Generation is create-only: once any
//! landing page exists the directory is left alone.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::docgen::markdown::{LANDING_PAGES, first_line_title, list_tutorials};
use crate::docgen::registry::IndexTemplate;
use crate::error::{ModelDocsError, Result};

/// File name of the generated landing page.
pub const INDEX_FILE: &str = "index.md";

/// One line of the tutorial list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialLink {
    /// Display title.
    pub title: String,
    /// File name, linked relative to the landing page.
    pub file_name: String,
}

/// What happened to one model directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    /// A landing page with this file name already exists.
    Existing(&'static str),
    /// A new `index.md` was written (or would be, in dry-run mode).
    Generated {
        /// Path of the generated page.
        path: PathBuf,
        /// Number of tutorials listed.
        tutorials: usize,
    },
}

/// Totals for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexSummary {
    /// Directories that received a new `index.md`.
    pub generated: usize,
    /// Directories that already had a landing page.
    pub existing: usize,
    /// Directories excluded by the registry's skip list.
    pub skipped: usize,
}

/// Render the landing page for `model`.
#[must_use]
pub fn render_index_page(
    model: &str,
    tutorials: &[TutorialLink],
    template: &IndexTemplate,
) -> String {
    let mut content = format!("# {model}\n\n{}\n\n", template.description_for(model));

    if tutorials.is_empty() {
        content.push_str(&template.empty);
        content.push('\n');
        return content;
    }

    content.push_str(&format!("## {}\n\n", template.tutorials_heading));
    for tutorial in tutorials {
        content.push_str(&format!("- [{}](./{})\n", tutorial.title, tutorial.file_name));
    }
    content
}

/// Existing landing page in `model_dir`, checking `README.md` first.
#[must_use]
pub fn existing_landing_page(model_dir: &Path) -> Option<&'static str> {
    LANDING_PAGES.into_iter().find(|name| model_dir.join(name).exists())
}

/// Collect tutorial links for `model_dir`, titled by their first line.
///
/// # Errors
///
/// Returns an error if the directory listing fails.
pub fn collect_tutorials(model_dir: &Path) -> Result<Vec<TutorialLink>> {
    Ok(list_tutorials(model_dir)?
        .iter()
        .map(|path| TutorialLink {
            title: first_line_title(path),
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        })
        .collect())
}

/// Generate `index.md` for one model directory if it has no landing page.
///
/// # Errors
///
/// Returns an error if listing the directory or writing the page fails.
pub fn generate(
    model_dir: &Path,
    template: &IndexTemplate,
    dry_run: bool,
) -> Result<IndexOutcome> {
    if let Some(existing) = existing_landing_page(model_dir) {
        tracing::debug!(dir = %model_dir.display(), existing, "landing page present");
        return Ok(IndexOutcome::Existing(existing));
    }

    let model = model_name(model_dir);
    let tutorials = collect_tutorials(model_dir)?;
    let page = render_index_page(&model, &tutorials, template);
    let path = model_dir.join(INDEX_FILE);

    if !dry_run {
        write_new(&path, &page)?;
        tracing::info!(path = %path.display(), tutorials = tutorials.len(), "generated index");
    }

    Ok(IndexOutcome::Generated {
        path,
        tutorials: tutorials.len(),
    })
}

/// Generate landing pages for every model directory under `models_root`.
///
/// Directories are visited in name order. Plain files and directories named
/// in `template.skip` are ignored. `on_outcome` receives the model name and
/// result for each directory processed.
///
/// # Errors
///
/// Returns an error if the root cannot be listed or any page write fails.
pub fn generate_all<F>(
    models_root: &Path,
    template: &IndexTemplate,
    dry_run: bool,
    mut on_outcome: F,
) -> Result<IndexSummary>
where
    F: FnMut(&str, &IndexOutcome),
{
    let mut summary = IndexSummary::default();

    for model_dir in model_dirs(models_root)? {
        let model = model_name(&model_dir);
        if template.skip.iter().any(|s| *s == model) {
            tracing::debug!(model = %model, "skipped by registry");
            summary.skipped += 1;
            continue;
        }

        let outcome = generate(&model_dir, template, dry_run)?;
        match outcome {
            IndexOutcome::Existing(_) => summary.existing += 1,
            IndexOutcome::Generated { .. } => summary.generated += 1,
        }
        on_outcome(&model, &outcome);
    }

    Ok(summary)
}

/// Immediate subdirectories of `models_root`, sorted by name.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be read.
pub fn model_dirs(models_root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(models_root)
        .map_err(|e| ModelDocsError::io("failed to list", models_root, e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| ModelDocsError::io("failed to list", models_root, e))?
            .path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dirs)
}

fn model_name(model_dir: &Path) -> String {
    model_dir.file_name().map_or_else(
        || model_dir.to_string_lossy().to_string(),
        |n| n.to_string_lossy().to_string(),
    )
}

/// Write `content` to a file that must not exist yet.
fn write_new(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| ModelDocsError::io("failed to create", path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| ModelDocsError::io("failed to write", path, e))
}
