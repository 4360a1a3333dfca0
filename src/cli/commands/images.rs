//! `fix-images` command handler.

use serde_json::json;

use crate::cli::args::{FixImagesArgs, OutputFormat};
use crate::docgen::images;
use crate::error::ModelDocsError;

/// Execute `fix-images`.
///
/// Audits every markdown file under the models root and comments out image
/// references whose file is missing. Progress lines are printed as each
/// file completes, so an aborted run still shows what was already rewritten.
///
/// # Errors
///
/// Returns an error if a markdown file cannot be read or written.
pub fn run(args: &FixImagesArgs) -> Result<(), ModelDocsError> {
    let human = args.format == OutputFormat::Human;

    let summary = images::audit(&args.models, args.dry_run, |file| {
        if !human {
            return;
        }
        for missing in &file.missing {
            println!("Missing: {} -> {}", file.path.display(), missing.display());
        }
    })?;

    match args.format {
        OutputFormat::Human => {
            println!();
            println!("Summary:");
            println!("Total files scanned: {}", summary.files_scanned);
            println!("Files modified: {}", summary.files_modified);
            println!("Missing images commented out: {}", summary.references_fixed);
            if args.dry_run {
                println!("(dry run: no files were written)");
            }
        }
        OutputFormat::Json => {
            let report = json!({
                "files_scanned": summary.files_scanned,
                "files_modified": summary.files_modified,
                "references_fixed": summary.references_fixed,
                "dry_run": args.dry_run,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
