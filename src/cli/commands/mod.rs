//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod images;
pub mod index;
pub mod sidebar;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::ModelDocsError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), ModelDocsError> {
    match cli.command {
        Commands::FixImages(args) => images::run(&args),
        Commands::GenIndex(args) => index::run(&args),
        Commands::GenSidebar(args) => sidebar::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
