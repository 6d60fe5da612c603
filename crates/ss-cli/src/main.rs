//! CLI entry point for the specsync tool.
//!
//! This binary provides the command-line interface for checking a structured
//! document specification repository: prose/schema vocabulary sync and
//! cross-reference validity.
//!
//! # Usage
//!
//! ```bash
//! specsync [OPTIONS] <COMMAND>
//!
//! # Check prose/schema vocabulary drift
//! specsync sync --root /path/to/spec-repo
//!
//! # Validate cross-references
//! specsync xrefs --root /path/to/spec-repo
//!
//! # Run both checks, failing the process on findings
//! specsync check --strict
//!
//! # Generate JSON report
//! specsync report --format json --output report.json
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use ss_core::{Config, StructuralType, SyncReport, XrefReport};
use ss_scanner::{ConsistencyChecker, ScanError, SyncOutcome, XrefOutcome};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Consistency checker for structured document specifications.
///
/// Extracts the structural-type vocabulary from prose and schema corpora,
/// reports drift between them, and validates cross-references between prose
/// documents.
#[derive(Parser)]
#[command(name = "specsync", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to the spec repository root.
    ///
    /// Defaults to the current directory if not specified.
    #[arg(short, long, global = true, env = "SPECSYNC_ROOT")]
    root: Option<Utf8PathBuf>,

    /// Prose corpus subdirectory under the root.
    ///
    /// Defaults to `spec` if not specified.
    #[arg(long, global = true, env = "SPECSYNC_PROSE_DIR")]
    prose_dir: Option<String>,

    /// Schema corpus subdirectory under the root.
    ///
    /// Defaults to `schemas` if not specified.
    #[arg(long, global = true, env = "SPECSYNC_SCHEMA_DIR")]
    schema_dir: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Exit with a failure status when a check finds drift or broken
    /// references.
    ///
    /// Checks are advisory by default; this flag turns findings into a
    /// non-zero exit for CI.
    #[arg(long, global = true)]
    strict: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Check prose/schema structural-type vocabulary sync.
    Sync {
        /// List every entry, including synced names.
        #[arg(short, long)]
        detailed: bool,
    },

    /// Validate cross-references across the prose corpus.
    Xrefs {
        /// List valid references as well as broken ones.
        #[arg(short, long)]
        detailed: bool,
    },

    /// Run both checks.
    Check,

    /// Generate a consistency report.
    Report {
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,

        /// Output file (defaults to stdout).
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
}

/// Report output format.
#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    /// JSON format.
    Json,
    /// CSV format (one row per finding).
    Csv,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging
/// * `no_color` - Disable ANSI colors in output
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},ignore=warn"))
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_ansi(use_ansi))
        .with(filter)
        .init();
}

/// Builds a [`Config`] from CLI arguments.
///
/// Validates that the root exists and is a directory.
///
/// # Errors
///
/// Returns an error if the root doesn't exist or isn't a directory.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let root = cli.root.clone().unwrap_or_else(|| Utf8PathBuf::from("."));

    if !root.exists() {
        return Err(color_eyre::eyre::eyre!("Root does not exist: {}", root));
    }
    if !root.is_dir() {
        return Err(color_eyre::eyre::eyre!("Root is not a directory: {}", root));
    }

    let mut config = Config::default();
    config.corpus.root = root;
    if let Some(prose_dir) = &cli.prose_dir {
        config.corpus.prose_dir.clone_from(prose_dir);
    }
    if let Some(schema_dir) = &cli.schema_dir {
        config.corpus.schema_dir.clone_from(schema_dir);
    }

    Ok(config)
}

/// Creates a [`ConsistencyChecker`] from the configuration.
fn create_checker(config: &Config) -> color_eyre::Result<ConsistencyChecker> {
    ConsistencyChecker::new(config.clone())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to create checker: {}", e))
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the sync check with summary output.
///
/// Returns the number of findings, for `--strict` accounting.
///
/// # Errors
///
/// Returns an error if scanning fails or output cannot be written.
fn run_sync(config: &Config, detailed: bool) -> color_eyre::Result<usize> {
    info!(root = %config.corpus.root, "Checking vocabulary sync");

    let checker = create_checker(config)?;
    let outcome = checker.check_sync()?;

    print_sync_summary(&outcome.report, detailed)?;
    print_skipped_files(&outcome.errors)?;

    Ok(outcome.report.drift_count())
}

/// Runs the cross-reference check with summary output.
///
/// Returns the number of findings, for `--strict` accounting.
///
/// # Errors
///
/// Returns an error if scanning fails or output cannot be written.
fn run_xrefs(config: &Config, detailed: bool) -> color_eyre::Result<usize> {
    info!(root = %config.corpus.root, "Validating cross-references");

    let checker = create_checker(config)?;
    let outcome = checker.check_xrefs()?;

    print_xref_summary(&outcome.report, detailed)?;
    print_skipped_files(&outcome.errors)?;

    Ok(outcome.report.broken.len())
}

/// Generates a consistency report in the specified format.
///
/// # Errors
///
/// Returns an error if scanning or writing fails.
fn run_report(
    config: &Config,
    format: ReportFormat,
    output: Option<Utf8PathBuf>,
) -> color_eyre::Result<usize> {
    info!(root = %config.corpus.root, "Generating report");

    let checker = create_checker(config)?;
    let sync = checker.check_sync()?;
    let xrefs = checker.check_xrefs()?;

    let findings = sync.report.drift_count() + xrefs.report.broken.len();

    let content = match format {
        ReportFormat::Json => generate_json_report(&sync, &xrefs)?,
        ReportFormat::Csv => generate_csv_report(&sync.report, &xrefs.report),
    };

    if let Some(output_path) = output {
        std::fs::write(output_path.as_std_path(), &content)?;
        info!(path = %output_path, "Report written");
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{content}")?;
    }

    Ok(findings)
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Prints a summary of the sync report.
fn print_sync_summary(report: &SyncReport, detailed: bool) -> color_eyre::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle)?;
    writeln!(handle, "Vocabulary Sync Summary")?;
    writeln!(handle, "=======================")?;
    writeln!(handle)?;
    writeln!(handle, "In sync:     {}", report.synced.len())?;
    writeln!(handle, "Prose only:  {}", report.prose_only.len())?;
    writeln!(handle, "Schema only: {}", report.schema_only.len())?;

    if detailed && !report.synced.is_empty() {
        writeln!(handle)?;
        writeln!(handle, "Synced types:")?;
        for name in &report.synced {
            writeln!(handle, "  {name}")?;
        }
    }

    print_drift_entries(&mut handle, "Documented but not in any schema", &report.prose_only)?;
    print_drift_entries(&mut handle, "In a schema but undocumented", &report.schema_only)?;

    if report.is_synced() {
        writeln!(handle)?;
        writeln!(handle, "Prose and schemas agree.")?;
    }

    Ok(())
}

/// Prints one drift partition, with declaration sites.
fn print_drift_entries(
    handle: &mut impl Write,
    label: &str,
    entries: &[StructuralType],
) -> color_eyre::Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    writeln!(handle)?;
    writeln!(handle, "{label} ({}):", entries.len())?;
    for entry in entries {
        writeln!(handle, "  {}  ({})", entry.name, entry.location)?;
    }

    Ok(())
}

/// Prints a summary of the cross-reference report.
fn print_xref_summary(report: &XrefReport, detailed: bool) -> color_eyre::Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle)?;
    writeln!(handle, "Cross-Reference Summary")?;
    writeln!(handle, "=======================")?;
    writeln!(handle)?;
    writeln!(handle, "Sections indexed: {}", report.sections_indexed)?;
    writeln!(handle, "References found: {}", report.references_found)?;
    writeln!(handle, "Valid:            {}", report.valid.len())?;
    writeln!(handle, "Broken:           {}", report.broken.len())?;

    if detailed && !report.valid.is_empty() {
        writeln!(handle)?;
        writeln!(handle, "Valid references:")?;
        for reference in &report.valid {
            writeln!(
                handle,
                "  {}:{}  {}",
                reference.file, reference.line, reference.target
            )?;
        }
    }

    if !report.broken.is_empty() {
        writeln!(handle)?;
        writeln!(handle, "Broken references ({}):", report.broken.len())?;
        for reference in &report.broken {
            writeln!(
                handle,
                "  {}:{}  {}  (in: {})",
                reference.file, reference.line, reference.target, reference.context
            )?;
        }
    }

    if report.is_clean() {
        writeln!(handle)?;
        writeln!(handle, "All references resolve.")?;
    }

    Ok(())
}

/// Prints files skipped due to recoverable errors, if any.
fn print_skipped_files(errors: &[(Utf8PathBuf, ScanError)]) -> color_eyre::Result<()> {
    if errors.is_empty() {
        return Ok(());
    }

    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    writeln!(handle)?;
    writeln!(handle, "Skipped files ({}):", errors.len())?;
    for (path, error) in errors {
        writeln!(handle, "  {path} - {error}")?;
    }

    Ok(())
}

/// Generates a JSON report.
fn generate_json_report(sync: &SyncOutcome, xrefs: &XrefOutcome) -> color_eyre::Result<String> {
    #[derive(serde::Serialize)]
    struct Report<'a> {
        sync: &'a SyncReport,
        xrefs: &'a XrefReport,
        skipped_files: Vec<String>,
    }

    let mut skipped_files: Vec<String> = sync
        .errors
        .iter()
        .chain(&xrefs.errors)
        .map(|(path, _)| path.to_string())
        .collect();
    skipped_files.sort_unstable();
    skipped_files.dedup();

    let report = Report {
        sync: &sync.report,
        xrefs: &xrefs.report,
        skipped_files,
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to serialize JSON: {}", e))
}

/// Generates a CSV report with one row per finding.
fn generate_csv_report(sync: &SyncReport, xrefs: &XrefReport) -> String {
    use std::fmt::Write;

    let mut output = String::from("check,finding,name,file,line\n");

    for entry in &sync.prose_only {
        let _ = writeln!(
            output,
            "sync,prose-only,{},{},{}",
            escape_csv(&entry.name),
            escape_csv(entry.location.file.as_str()),
            entry.location.line.map_or_else(String::new, |l| l.to_string())
        );
    }
    for entry in &sync.schema_only {
        let _ = writeln!(
            output,
            "sync,schema-only,{},{},{}",
            escape_csv(&entry.name),
            escape_csv(entry.location.file.as_str()),
            entry.location.line.map_or_else(String::new, |l| l.to_string())
        );
    }
    for reference in &xrefs.broken {
        let _ = writeln!(
            output,
            "xrefs,broken,{},{},{}",
            escape_csv(&reference.target),
            escape_csv(reference.file.as_str()),
            reference.line
        );
    }

    output
}

/// Escapes a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_owned()
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Route to appropriate command
    let config = build_config(&cli)?;
    let findings = match &cli.command {
        Commands::Sync { detailed } => run_sync(&config, *detailed)?,
        Commands::Xrefs { detailed } => run_xrefs(&config, *detailed)?,
        Commands::Check => run_sync(&config, false)? + run_xrefs(&config, false)?,
        Commands::Report { format, output } => run_report(&config, *format, output.clone())?,
    };

    // 5. Checks are advisory unless --strict asks for a hard failure
    if cli.strict && findings > 0 {
        return Err(color_eyre::eyre::eyre!(
            "consistency check failed with {} finding(s)",
            findings
        ));
    }

    Ok(())
}
