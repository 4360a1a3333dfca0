//! `gen-sidebar` command handler.

use serde_json::json;

use crate::cli::args::{GenSidebarArgs, OutputFormat};
use crate::docgen::registry::load_registry;
use crate::docgen::sidebar;
use crate::error::ModelDocsError;

/// Execute `gen-sidebar`.
///
/// Builds the sidebar tree from the registry's families and writes it to
/// the configured output file, or prints it with `--stdout`.
///
/// # Errors
///
/// Returns an error if the registry is invalid, a model directory cannot be
/// listed, or the output cannot be written.
pub fn run(args: &GenSidebarArgs) -> Result<(), ModelDocsError> {
    let registry = load_registry(args.registry.as_deref())?;
    let human = args.format == OutputFormat::Human && !args.stdout;

    if human {
        println!("Generating sidebar configuration...");
    }

    let config = sidebar::build(&args.models, &registry.sidebar)?;
    let families = config.models_sidebar.len();
    let tutorials = config.total_tutorials();

    if args.stdout {
        println!("{}", config.to_json()?);
        tracing::info!(families, tutorials, "sidebar printed");
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| registry.sidebar.output.clone());
    sidebar::write_sidebar(&config, &output)?;
    tracing::info!(path = %output.display(), families, tutorials, "sidebar written");

    match args.format {
        OutputFormat::Human => {
            println!("✓ Generated sidebar with {families} model families");
            println!("✓ Saved to {}", output.display());
            println!("✓ Found {tutorials} tutorials");
        }
        OutputFormat::Json => {
            let report = json!({
                "output": output.display().to_string(),
                "families": families,
                "tutorials": tutorials,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
