//! Markdown discovery and title extraction shared by the index and sidebar
//! generators and the image auditor.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ModelDocsError, Result};

/// Landing page file names. These never count as tutorials.
pub const LANDING_PAGES: [&str; 2] = ["README.md", "index.md"];

/// Returns `true` if `name` is a landing page file name.
#[must_use]
pub fn is_landing_page(name: &str) -> bool {
    LANDING_PAGES.contains(&name)
}

/// Extract heading text from a single line.
///
/// The line is trimmed; if it then starts with `#`, every leading `#` is
/// removed and the remainder trimmed. Returns `None` for non-heading lines.
#[must_use]
pub fn heading_text(line: &str) -> Option<&str> {
    let line = line.trim();
    line.starts_with('#').then(|| line.trim_start_matches('#').trim())
}

/// Filename without its extension, used whenever no heading is available.
#[must_use]
pub fn file_stem(path: &Path) -> String {
    path.file_stem().map_or_else(
        || path.to_string_lossy().to_string(),
        |s| s.to_string_lossy().to_string(),
    )
}

/// Title taken from the first line of the file only.
///
/// Falls back to the file stem when the first line is not a heading or the
/// file cannot be read.
#[must_use]
pub fn first_line_title(path: &Path) -> String {
    match read_first_line(path) {
        Ok(line) => heading_text(&line).map_or_else(|| file_stem(path), str::to_string),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot read first line");
            file_stem(path)
        }
    }
}

/// Title taken from the first heading line anywhere in the file.
///
/// Unreadable files are logged and fall back to the file stem.
#[must_use]
pub fn first_heading_title(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .find_map(heading_text)
            .map_or_else(|| file_stem(path), str::to_string),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "cannot read file, using file name as title"
            );
            file_stem(path)
        }
    }
}

fn read_first_line(path: &Path) -> std::io::Result<String> {
    let mut line = String::new();
    BufReader::new(File::open(path)?).read_line(&mut line)?;
    Ok(line)
}

/// List the tutorial documents of one model directory.
///
/// Non-recursive: every regular `*.md` file except the landing pages,
/// sorted by file name.
///
/// # Errors
///
/// Returns an error if the directory pattern is invalid or an entry cannot
/// be read.
pub fn list_tutorials(model_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut tutorials = Vec::new();
    for entry in glob::glob(&markdown_pattern(model_dir, "*.md"))? {
        let path = entry?;
        let is_tutorial = path
            .file_name()
            .is_some_and(|name| !is_landing_page(&name.to_string_lossy()));
        if is_tutorial && path.is_file() {
            tutorials.push(path);
        }
    }
    tutorials.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(tutorials)
}

/// Find every markdown file under `root`, recursively, in path order.
///
/// Symlinked directories are not descended into, so a link back up the tree
/// or an aliased model directory never yields a document twice. A missing
/// root has no documents.
///
/// # Errors
///
/// Returns an I/O error if a directory entry below `root` cannot be read.
pub fn find_markdown_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "models root not found");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            ModelDocsError::io("failed to walk", path, e.into())
        })?;
        let path = entry.path();
        let is_markdown = path.extension().is_some_and(|ext| ext == "md");
        if is_markdown && path.is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Build a glob pattern below `dir`, escaping any metacharacters in the
/// directory itself.
fn markdown_pattern(dir: &Path, suffix: &str) -> String {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    if escaped.is_empty() {
        suffix.to_string()
    } else {
        format!("{}/{suffix}", escaped.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_heading_text() {
        assert_eq!(heading_text("# Getting Started"), Some("Getting Started"));
        assert_eq!(heading_text("### Deep  "), Some("Deep"));
        assert_eq!(heading_text("   ## Indented"), Some("Indented"));
        assert_eq!(heading_text("#NoSpace"), Some("NoSpace"));
        assert_eq!(heading_text("#"), Some(""));
        assert_eq!(heading_text("plain text"), None);
        assert_eq!(heading_text(""), None);
    }

    #[test]
    fn test_is_landing_page() {
        assert!(is_landing_page("README.md"));
        assert!(is_landing_page("index.md"));
        assert!(!is_landing_page("readme.md"));
        assert!(!is_landing_page("01-intro.md"));
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("models/Qwen/2-setup.md")), "2-setup");
        assert_eq!(file_stem(Path::new("a.b.md")), "a.b");
    }

    #[test]
    fn test_first_line_title() {
        let dir = tempfile::tempdir().unwrap();
        let with_heading = dir.path().join("1-intro.md");
        fs::write(&with_heading, "# Getting Started\n\nbody\n").unwrap();
        let no_heading = dir.path().join("2-setup.md");
        fs::write(&no_heading, "intro text\n# Later Heading\n").unwrap();

        assert_eq!(first_line_title(&with_heading), "Getting Started");
        assert_eq!(first_line_title(&no_heading), "2-setup");
    }

    #[test]
    fn test_first_heading_title_scans_past_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2-setup.md");
        fs::write(&path, "intro text\n\n## Later Heading\n# Another\n").unwrap();
        assert_eq!(first_heading_title(&path), "Later Heading");
    }

    #[test]
    fn test_unreadable_file_falls_back_to_stem() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.md");
        assert_eq!(first_line_title(&missing), "gone");
        assert_eq!(first_heading_title(&missing), "gone");

        let binary = dir.path().join("binary.md");
        fs::write(&binary, [0xff, 0xfe, b'#', b'\n']).unwrap();
        assert_eq!(first_line_title(&binary), "binary");
        assert_eq!(first_heading_title(&binary), "binary");
    }

    #[test]
    fn test_list_tutorials_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.md", "README.md", "a.md", "index.md", "notes.txt"] {
            fs::write(dir.path().join(name), "# x\n").unwrap();
        }
        fs::create_dir(dir.path().join("nested.md")).unwrap();
        fs::create_dir(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/c.md"), "# deep\n").unwrap();

        let names: Vec<_> = list_tutorials(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_find_markdown_files_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Qwen/sub")).unwrap();
        fs::write(dir.path().join("Qwen/a.md"), "").unwrap();
        fs::write(dir.path().join("Qwen/sub/b.md"), "").unwrap();
        fs::write(dir.path().join("Qwen/README.md"), "").unwrap();
        fs::write(dir.path().join("Qwen/c.txt"), "").unwrap();

        let files = find_markdown_files(dir.path()).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.windows(2).all(|w| w[0] <= w[1]));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_markdown_files_skips_symlinked_dirs() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let qwen = dir.path().join("Qwen");
        fs::create_dir(&qwen).unwrap();
        fs::write(qwen.join("a.md"), "").unwrap();
        symlink("..", qwen.join("loop")).unwrap();
        symlink(&qwen, dir.path().join("QwenAlias")).unwrap();

        let files = find_markdown_files(dir.path()).unwrap();
        assert_eq!(files, vec![qwen.join("a.md")]);
    }

    #[test]
    fn test_find_markdown_files_missing_root() {
        let files = find_markdown_files(Path::new("/nonexistent/models")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_pattern_escapes_directory() {
        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join("Qwen[2]");
        fs::create_dir(&odd).unwrap();
        fs::write(odd.join("a.md"), "").unwrap();
        assert_eq!(list_tutorials(&odd).unwrap().len(), 1);
    }

    proptest! {
        #[test]
        fn heading_title_strips_markers(
            level in 1usize..7,
            title in "[A-Za-z0-9][A-Za-z0-9 ]{0,20}[A-Za-z0-9]",
        ) {
            let line = format!("{} {title}", "#".repeat(level));
            prop_assert_eq!(heading_text(&line), Some(title.as_str()));
        }

        #[test]
        fn non_heading_lines_are_rejected(line in "[A-Za-z0-9 ][^#\n]{0,30}") {
            prop_assume!(!line.trim().starts_with('#'));
            prop_assert_eq!(heading_text(&line), None);
        }
    }
}
