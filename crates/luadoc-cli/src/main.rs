//! luadoc CLI - generate a Lua API reference page

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use luadoc_core::config::CONFIG_FILE_NAME;
use luadoc_core::extract::{self, DEFAULT_SERVER};
use luadoc_core::{AnchorStyle, Extractor, OutputFormat, RenderConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Directory, relative to the project, that holds generated documentation
const DOC_DIR: &str = "doc";

#[derive(Parser)]
#[command(name = "luadoc")]
#[command(version = luadoc_core::VERSION)]
#[command(
    about = "Generate an AsciiDoc or Markdown API reference for a Lua project",
    long_about = None
)]
struct Cli {
    /// Output file ("-" for stdout; defaults to doc/api.adoc or doc/api.md in the project)
    output: Option<PathBuf>,

    /// Root of the Lua project to document
    #[arg(short, long, default_value = ".")]
    project: PathBuf,

    /// Configuration file (defaults to luadoc.toml in the project, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use an existing doc.json instead of running the language server
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format (asciidoc or markdown), overriding the config file
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Anchor naming (collapsed or raw), overriding the config file
    #[arg(long)]
    anchor_style: Option<AnchorStyle>,

    /// Language server executable
    #[arg(long, default_value = DEFAULT_SERVER)]
    server: String,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let objects = match &cli.input {
        Some(input) => {
            debug!(input = %input.display(), "using existing API description");
            extract::load_objects(input)
                .with_context(|| format!("Failed to load '{}'", input.display()))?
        }
        None => Extractor::new(&cli.project, cli.project.join(DOC_DIR))
            .with_program(&cli.server)
            .run()?,
    };

    // Rendering finishes before anything is written, so a failed lookup
    // leaves no partial document behind.
    let document = config.renderer().render(&objects)?;

    let output = cli.output.clone().unwrap_or_else(|| {
        cli.project
            .join(DOC_DIR)
            .join(format!("api.{}", config.format.extension()))
    });
    debug!(
        output = %output.display(),
        format = ?config.format,
        bytes = document.len(),
        "writing document"
    );
    write_document(&output, &document)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Load the configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<RenderConfig> {
    let mut config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::load_or_default(&cli.project.join(CONFIG_FILE_NAME))?,
    };

    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(style) = cli.anchor_style {
        config.anchor_style = style;
    }

    Ok(config)
}

fn write_document(output: &Path, document: &str) -> Result<()> {
    if output == Path::new("-") {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory '{}'", parent.display()))?;
    }
    std::fs::write(output, document)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    println!("Generated: {}", output.display());
    Ok(())
}
