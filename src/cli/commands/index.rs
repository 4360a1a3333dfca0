//! `gen-index` command handler.

use serde_json::json;

use crate::cli::args::{GenIndexArgs, OutputFormat};
use crate::docgen::index::{self, IndexOutcome};
use crate::docgen::registry::load_registry;
use crate::error::ModelDocsError;

/// Execute `gen-index`.
///
/// Generates `index.md` for every model directory that has neither
/// `README.md` nor `index.md`, using the registry's landing-page template.
///
/// # Errors
///
/// Returns an error if the registry is invalid, the models root cannot be
/// listed, or a page cannot be written.
pub fn run(args: &GenIndexArgs) -> Result<(), ModelDocsError> {
    let registry = load_registry(args.registry.as_deref())?;
    let human = args.format == OutputFormat::Human;
    let verb = if args.dry_run { "would generate" } else { "generated" };

    let report_outcome = |model: &str, outcome: &IndexOutcome| {
        if !human {
            return;
        }
        match outcome {
            IndexOutcome::Existing(name) => println!("✓ {model}: {name} exists"),
            IndexOutcome::Generated { tutorials, .. } => {
                println!("✓ {model}: {verb} index.md ({tutorials} tutorials)");
            }
        }
    };
    let summary =
        index::generate_all(&args.models, &registry.index, args.dry_run, report_outcome)?;

    match args.format {
        OutputFormat::Human => {
            println!();
            println!(
                "Summary: {} {verb}, {} with existing landing page, {} skipped",
                summary.generated, summary.existing, summary.skipped
            );
        }
        OutputFormat::Json => {
            let report = json!({
                "generated": summary.generated,
                "existing": summary.existing,
                "skipped": summary.skipped,
                "dry_run": args.dry_run,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
