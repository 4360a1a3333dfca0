//! Dangling image reference detection and annotation.
//!
//! Finds `![alt](images/...)` and `![alt](./images/...)` embeds whose target
//! does not exist next to the document, and comments them out in place as
//! `<!-- ![alt](images/...) Image missing -->`.
//!
//! References that already sit inside an HTML comment are inactive. They are
//! never matched again, so a second run over the same tree is a no-op.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::docgen::markdown::find_markdown_files;
use crate::error::{ModelDocsError, Result};

/// `![alt](images/path)` or `![alt](./images/path)`.
static IMAGE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\((?:\./)?images/([^)]+)\)").expect("valid regex")
});

/// An HTML comment. An unterminated comment runs to the end of the document.
static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?(?:-->|\z)").expect("valid regex"));

/// Annotation appended inside the comment wrapper.
pub const MISSING_MARKER: &str = "Image missing";

/// One active image reference in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef<'a> {
    /// The full matched text, e.g. `![x](./images/a.png)`.
    pub literal: &'a str,
    /// Alt text between the brackets.
    pub alt: &'a str,
    /// Path below `images/`.
    pub target: &'a str,
    /// Byte offset of the match in the document.
    pub start: usize,
}

impl ImageRef<'_> {
    /// Path of the referenced image relative to the document's directory.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        Path::new("images").join(self.target)
    }
}

/// Wrap a reference literal in the "missing" comment.
#[must_use]
pub fn comment_out(literal: &str) -> String {
    format!("<!-- {literal} {MISSING_MARKER} -->")
}

/// Every image reference in `content` that is not inside an HTML comment.
///
/// Comment detection is not markdown-aware: an unterminated `<!--`, even one
/// written inside inline code or a fenced block, hides every later reference.
#[must_use]
pub fn active_image_refs(content: &str) -> Vec<ImageRef<'_>> {
    let comments: Vec<_> = HTML_COMMENT
        .find_iter(content)
        .map(|m| m.range())
        .collect();

    IMAGE_REF
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let commented = comments.iter().any(|range| range.contains(&whole.start()));
            (!commented).then(|| ImageRef {
                literal: whole.as_str(),
                alt: caps.get(1).map_or("", |m| m.as_str()),
                target: caps.get(2).map_or("", |m| m.as_str()),
                start: whole.start(),
            })
        })
        .collect()
}

/// Comment out every active reference for which `exists` returns `false`.
///
/// Returns the rewritten content and the missing references, in document
/// order. Identical reference literals are each checked and wrapped, so a
/// dangling reference repeated verbatim is annotated at every active
/// occurrence, and each occurrence counts as one fix.
pub fn annotate_missing<'a, F>(content: &'a str, mut exists: F) -> (String, Vec<ImageRef<'a>>)
where
    F: FnMut(&ImageRef<'a>) -> bool,
{
    let mut output = String::with_capacity(content.len());
    let mut missing = Vec::new();
    let mut cursor = 0;

    for reference in active_image_refs(content) {
        if exists(&reference) {
            continue;
        }
        output.push_str(&content[cursor..reference.start]);
        output.push_str(&comment_out(reference.literal));
        cursor = reference.start + reference.literal.len();
        missing.push(reference);
    }
    output.push_str(&content[cursor..]);

    (output, missing)
}

/// Outcome of auditing one markdown file.
#[derive(Debug, Clone)]
pub struct FileAudit {
    /// The audited file.
    pub path: PathBuf,
    /// Missing image paths (relative to the file), one per occurrence.
    pub missing: Vec<PathBuf>,
    /// Whether the file content changed (written unless in dry-run mode).
    pub modified: bool,
}

/// Run totals for an audit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    /// Markdown files examined.
    pub files_scanned: usize,
    /// Files whose content changed.
    pub files_modified: usize,
    /// Image references commented out.
    pub references_fixed: usize,
}

/// Audit a single markdown file, rewriting it unless `dry_run` is set.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or written back.
pub fn audit_file(path: &Path, dry_run: bool) -> Result<FileAudit> {
    let content =
        fs::read_to_string(path).map_err(|e| ModelDocsError::io("failed to read", path, e))?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    let (rewritten, missing) =
        annotate_missing(&content, |reference| base.join(reference.relative_path()).exists());

    let modified = rewritten != content;
    if modified && !dry_run {
        fs::write(path, &rewritten).map_err(|e| ModelDocsError::io("failed to write", path, e))?;
        tracing::info!(path = %path.display(), fixed = missing.len(), "annotated missing images");
    }

    Ok(FileAudit {
        path: path.to_path_buf(),
        missing: missing.iter().map(ImageRef::relative_path).collect(),
        modified,
    })
}

/// Audit every markdown file under `root`.
///
/// `on_file` is called after each file so callers can report progress as the
/// run advances. Files are processed in path order; the first I/O failure
/// aborts the run and leaves earlier rewrites in place.
///
/// # Errors
///
/// Returns an error if discovery fails or any file cannot be read or written.
pub fn audit<F>(root: &Path, dry_run: bool, mut on_file: F) -> Result<AuditSummary>
where
    F: FnMut(&FileAudit),
{
    let files = find_markdown_files(root)?;
    let mut summary = AuditSummary::default();

    for path in &files {
        tracing::debug!(path = %path.display(), "auditing");
        let file = audit_file(path, dry_run)?;
        summary.files_scanned += 1;
        summary.references_fixed += file.missing.len();
        if file.modified {
            summary.files_modified += 1;
        }
        on_file(&file);
    }

    Ok(summary)
}
