/// The Big IDEA:
/// Coverage skip lists always end up hand-edited. A path gets renamed,
/// the entry in the manifest doesn't, and the coverage run silently
/// instruments a mock you never wanted counted — or worse, skips a
/// contract you did. This tool owns that manifest: it creates it,
/// edits it, validates it against the actual project tree, imports the
/// legacy `.solcover.js` form, and tells you exactly which sources the
/// next coverage run will and won't instrument.
use anyhow::Result;
use clap::{Parser, Subcommand};

use solcover_manifest::utils;

#[derive(Parser)]
#[command(name = "solcover-manifest")]
#[command(about = "Manage a code-coverage exclusion manifest for Solidity projects")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a default coverage manifest for this project
    Init,
    /// Check the manifest for structural issues
    Validate,
    /// List files excluded from instrumentation
    List,
    /// Exclude a file from instrumentation
    Add { path: String },
    /// Put a file back under instrumentation
    Remove { path: String },
    /// Report whether a file would be instrumented
    Check { path: String },
    /// Enable or disable coverage metrics
    SetFlags {
        /// Per-statement coverage accounting
        #[arg(long)]
        statements: Option<bool>,
        /// Per-function coverage accounting
        #[arg(long)]
        functions: Option<bool>,
    },
    /// Show instrumentation status for every source in the project
    Status,
    /// Import an existing .solcover.js manifest
    Import { file: String },
    /// Export the manifest
    Export {
        file: String,
        /// Output format: toml, json or yaml
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => utils::initialize_project(),
        Commands::Validate => utils::validate_manifest(),
        Commands::List => utils::list_skips(),
        Commands::Add { path } => utils::add_skip(path),
        Commands::Remove { path } => utils::remove_skip(path),
        Commands::Check { path } => utils::check_file(path),
        Commands::SetFlags {
            statements,
            functions,
        } => utils::set_flags(statements, functions),
        Commands::Status => utils::show_status(),
        Commands::Import { file } => utils::import_manifest(file),
        Commands::Export { file, format } => utils::export_manifest(file, format),
    }
}
