//! CLI argument definitions
//!
//! All Clap derive structs for `modeldocs` command-line parsing. Every
//! maintenance subcommand runs with no arguments against `./models`.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

/// Default models root, relative to the working directory.
pub const DEFAULT_MODELS_DIR: &str = "models";

// ============================================================================
// Root CLI
// ============================================================================

/// Maintenance tooling for per-model markdown tutorial sites.
#[derive(Parser, Debug)]
#[command(name = "modeldocs", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "MODELDOCS_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Comment out markdown image references whose file is missing.
    FixImages(FixImagesArgs),

    /// Generate index.md for model directories without a landing page.
    GenIndex(GenIndexArgs),

    /// Generate the sidebar configuration JSON from model directories.
    GenSidebar(GenSidebarArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Maintenance Commands
// ============================================================================

/// Arguments for `fix-images`.
#[derive(Args, Debug)]
pub struct FixImagesArgs {
    /// Root directory containing the model directories.
    #[arg(long, default_value = DEFAULT_MODELS_DIR, env = "MODELDOCS_MODELS_DIR")]
    pub models: PathBuf,

    /// Report missing images without rewriting files.
    #[arg(long)]
    pub dry_run: bool,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `gen-index`.
#[derive(Args, Debug)]
pub struct GenIndexArgs {
    /// Root directory containing the model directories.
    #[arg(long, default_value = DEFAULT_MODELS_DIR, env = "MODELDOCS_MODELS_DIR")]
    pub models: PathBuf,

    /// Registry file overriding the built-in registry.
    #[arg(long, env = "MODELDOCS_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Report what would be generated without writing files.
    #[arg(long)]
    pub dry_run: bool,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `gen-sidebar`.
#[derive(Args, Debug)]
pub struct GenSidebarArgs {
    /// Root directory containing the model directories.
    #[arg(long, default_value = DEFAULT_MODELS_DIR, env = "MODELDOCS_MODELS_DIR")]
    pub models: PathBuf,

    /// Registry file overriding the built-in registry.
    #[arg(long, env = "MODELDOCS_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Output file (defaults to the registry's `sidebar.output`).
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the sidebar JSON to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,

    /// Output format for the run summary.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
