//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use namelist_core::{DocumentReport, ListRenderer, OutputDir, SheetLayout, Template};
use namelist_data::SourceLocator;

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "namelist")]
#[command(
    author,
    version,
    about = "Turn collaborative name-list spreadsheets into Stellaris name lists",
    long_about = None
)]
struct Cli {
    /// Comma-separated Google Sheets URLs or .xlsx/.csv paths (prompted for when omitted)
    sources: Option<String>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Template file (defaults to the built-in Stellaris template)
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Request timeout for remote documents, in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Render and report without writing any files
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Everything a conversion run needs, after merging config and flags
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub output_dir: PathBuf,
    /// `None` selects the built-in template
    pub template: Option<PathBuf>,
    pub timeout: Duration,
    pub skip_sheets: Vec<String>,
    pub dry_run: bool,
}

impl From<Settings> for ConvertOptions {
    fn from(settings: Settings) -> Self {
        Self {
            output_dir: settings.output.dir,
            template: settings.template.path,
            timeout: Duration::from_secs(settings.source.timeout_secs),
            skip_sheets: settings.layout.skip_sheets,
            dry_run: false,
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Settings::default().into()
    }
}

impl ConvertOptions {
    /// Command-line flags take precedence over the config file
    fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.output {
            self.output_dir = dir.clone();
        }
        if let Some(template) = &cli.template {
            self.template = Some(template.clone());
        }
        if let Some(secs) = cli.timeout {
            self.timeout = Duration::from_secs(secs);
        }
        self.dry_run = cli.dry_run;
        self
    }
}

/// Result of one document
#[derive(Debug, Clone)]
pub struct DocumentSummary {
    pub source: String,
    pub processed: usize,
    pub skipped: usize,
    pub files: Vec<PathBuf>,
}

/// A document that could not be converted
#[derive(Debug, Clone)]
pub struct DocumentFailure {
    /// The locator as the user gave it
    pub source: String,
    pub error: String,
}

/// Result of a whole run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub documents: Vec<DocumentSummary>,
    /// Documents that failed to locate, fetch, parse, render or write
    pub failed: Vec<DocumentFailure>,
}

impl RunSummary {
    pub fn files_written(&self) -> usize {
        self.documents.iter().map(|d| d.files.len()).sum()
    }
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::discover(cli.config.as_deref())?;

    let input = match &cli.sources {
        Some(sources) => sources.clone(),
        None => prompt_sources()?,
    };
    let sources = SourceLocator::split_list(&input);
    if sources.is_empty() {
        anyhow::bail!("No spreadsheet URLs or files given");
    }

    let options = ConvertOptions::from(settings).with_cli_overrides(&cli);
    let summary = convert_command(&sources, &options)?;

    println!();
    println!(
        "Done: {} file(s) written from {} document(s)",
        summary.files_written(),
        summary.documents.len()
    );

    if !summary.failed.is_empty() {
        let sources: Vec<&str> = summary.failed.iter().map(|f| f.source.as_str()).collect();
        anyhow::bail!(
            "{} document(s) failed: {}",
            summary.failed.len(),
            sources.join(", ")
        );
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Ask for sources on stdin
fn prompt_sources() -> Result<String> {
    print!("Enter the spreadsheet URL(s), separated by commas: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read sources from stdin")?;
    Ok(line)
}

/// Load the configured template, or the built-in one
pub fn load_template(path: Option<&Path>) -> Result<Template> {
    match path {
        Some(path) => Template::load(path)
            .with_context(|| format!("Failed to load template: {}", path.display())),
        None => Template::builtin().context("Built-in template is invalid"),
    }
}

/// Execute the conversion for every source, in order
///
/// Each source is parsed, fetched and rendered on its own: a malformed or
/// failing document is reported and counted while the remaining documents
/// still run. Template problems abort before anything is fetched.
pub fn convert_command<S: AsRef<str>>(
    sources: &[S],
    options: &ConvertOptions,
) -> Result<RunSummary> {
    println!("namelist v{}", namelist_core::VERSION);

    let template = load_template(options.template.as_deref())?;
    let layout = SheetLayout::default().with_skip_sheets(options.skip_sheets.clone());
    let renderer = ListRenderer::new(template).with_layout(layout);
    renderer
        .check_template()
        .context("Template does not match the name-list slots")?;

    let output = OutputDir::new(&options.output_dir);
    if !options.dry_run {
        let created = output.ensure().with_context(|| {
            format!(
                "Failed to create output directory: {}",
                options.output_dir.display()
            )
        })?;
        if created {
            println!("Created output directory: {}", output.path().display());
        } else {
            println!("Output directory exists: {}", output.path().display());
        }
    }

    let mut summary = RunSummary::default();
    for source in sources {
        let source = source.as_ref();
        println!("Processing document: {}", source);
        match process_document(source, &renderer, &output, options) {
            Ok(doc) => {
                println!(
                    "  {} list(s) processed, {} sheet(s) skipped",
                    doc.processed, doc.skipped
                );
                summary.documents.push(doc);
            }
            Err(err) => {
                error!(source = %source, "{:#}", err);
                summary.failed.push(DocumentFailure {
                    source: source.to_string(),
                    error: format!("{:#}", err),
                });
            }
        }
    }

    Ok(summary)
}

/// Locate, fetch, render and write one document
///
/// Every sheet is rendered before the first file is written. If a write
/// fails, the error names the files this document already produced.
fn process_document(
    entry: &str,
    renderer: &ListRenderer,
    output: &OutputDir,
    options: &ConvertOptions,
) -> Result<DocumentSummary> {
    let locator = SourceLocator::parse(entry)?;
    let source = locator
        .open(options.timeout)
        .with_context(|| format!("Failed to open source: {}", locator))?;
    let workbook = source
        .read_workbook()
        .with_context(|| format!("Failed to read workbook: {}", source.describe()))?;
    debug!(sheets = workbook.len(), "workbook loaded");

    let report: DocumentReport = renderer
        .render_workbook(&workbook)
        .with_context(|| format!("Failed to render: {}", source.describe()))?;

    for (sheet, reason) in report.skipped() {
        println!("  Skipped: {} ({})", sheet, reason);
    }

    let mut files = Vec::new();
    for list in report.rendered() {
        if options.dry_run {
            println!("  Would create: {}", output.file_for(&list.name).display());
            continue;
        }
        let path = output
            .write(list)
            .with_context(|| already_written(&files))?;
        println!("  Created: {}", path.display());
        files.push(path);
    }

    Ok(DocumentSummary {
        source: source.describe(),
        processed: report.processed_count(),
        skipped: report.skipped_count(),
        files,
    })
}

fn already_written(files: &[PathBuf]) -> String {
    if files.is_empty() {
        return "no files were written for this document".to_string();
    }
    let names: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
    format!("files already written for this document: {}", names.join(", "))
}
