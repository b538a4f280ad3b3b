use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use labtrend::comparison::{ComparisonEngine, DefaultComparisonEngine, KeywordTaxonomy};
use labtrend::export::{comparison_to_json, measurements_to_csv, ExportFormat};
use labtrend::{config, EngineSettings, Measurement};

/// Compare two lab reports and print a progress report.
#[derive(Parser, Debug)]
#[command(name = "labtrend", version)]
struct Cli {
    /// JSON file holding `{"old": [...], "new": [...]}` measurement lists
    request: PathBuf,

    /// Output format: json (comparison report) or csv (newer measurements)
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,

    /// Keyword taxonomy override (JSON)
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Threshold settings override (JSON)
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[derive(Deserialize)]
struct ComparisonRequest {
    old: Vec<Measurement>,
    new: Vec<Measurement>,
}

fn main() -> anyhow::Result<()> {
    labtrend::init_tracing();
    let cli = Cli::parse();

    let format = cli.format;

    let taxonomy = match &cli.taxonomy {
        Some(path) => KeywordTaxonomy::load(path)?,
        None => KeywordTaxonomy::builtin(),
    };
    let settings = match &cli.settings {
        Some(path) => EngineSettings::load(path)?,
        None => EngineSettings::default(),
    };

    let raw = std::fs::read_to_string(&cli.request)
        .with_context(|| format!("reading {}", cli.request.display()))?;
    let request: ComparisonRequest = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", cli.request.display()))?;

    tracing::info!(
        old = request.old.len(),
        new = request.new.len(),
        format = format.as_str(),
        "{} v{} comparing reports",
        config::APP_NAME,
        config::APP_VERSION
    );

    let engine = DefaultComparisonEngine::new(taxonomy, settings);
    let output = match format {
        ExportFormat::Json => comparison_to_json(&engine.run(&request.old, &request.new))?,
        ExportFormat::Csv => measurements_to_csv(&request.new, engine.taxonomy()),
    };
    println!("{}", output);
    Ok(())
}
