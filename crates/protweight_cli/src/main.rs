//! Batch driver for the protein weight pipeline.
//!
//! # Responsibility
//! - Resolve configuration from the TOML file and command-line overrides.
//! - Run one pipeline phase per invocation and print its outcome.

mod cli;
mod error;

use crate::cli::{AnalyzeArgs, Cli, Commands, IngestArgs};
use crate::error::{CliError, Result};
use clap::Parser;
use log::{debug, error};
use protweight_core::{
    default_log_level, init_logging, read_identifier_listing, HttpFastaSource, LogTarget,
    PipelineConfig, PipelineService,
};

fn main() {
    if let Err(err) = run() {
        error!("event=run module=cli status=error error={}", err);
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    start_logging(&config)?;
    debug!("event=config module=cli status=ok config={:?}", config);

    let source = HttpFastaSource::new(config.fetch.url_template.clone())?;
    let service = PipelineService::new(source, config.store.database.clone());

    match cli.command {
        Commands::Ingest(args) => ingest(&service, &args),
        Commands::Analyze(args) => analyze(&service, &config, &args),
    }
}

fn resolve_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(database) = &cli.database {
        config.store.database = database.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = Some(level.clone());
    }
    Ok(config)
}

fn start_logging(config: &PipelineConfig) -> Result<()> {
    let level = config
        .logging
        .level
        .as_deref()
        .unwrap_or(default_log_level());
    let target = match &config.logging.dir {
        Some(dir) => LogTarget::Directory(dir.clone()),
        None => LogTarget::Stderr,
    };
    init_logging(level, target).map_err(CliError::Logging)
}

fn ingest(service: &PipelineService<HttpFastaSource>, args: &IngestArgs) -> Result<()> {
    let summary = if let Some(listing) = &args.ids {
        let identifiers = read_identifier_listing(listing)?;
        service.ingest(&identifiers)?
    } else if let Some(fasta) = &args.fasta {
        let text = std::fs::read_to_string(fasta).map_err(|source| CliError::ReadInput {
            path: fasta.clone(),
            source,
        })?;
        service.ingest_fasta_text(&text)?
    } else {
        return Err(CliError::MissingInput);
    };

    println!(
        "stored {} record(s) in {}",
        summary.protein_ids.len(),
        service.database().display()
    );
    if !summary.skipped.is_empty() {
        println!(
            "skipped {} of {} identifier(s): {}",
            summary.skipped.len(),
            summary.requested,
            summary.skipped.join(", ")
        );
    }
    Ok(())
}

fn analyze(
    service: &PipelineService<HttpFastaSource>,
    config: &PipelineConfig,
    args: &AnalyzeArgs,
) -> Result<()> {
    let report_path = args.report.as_ref().unwrap_or(&config.report.path);
    let rows = service.analyze(report_path)?;
    println!("wrote {} row(s) to {}", rows.len(), report_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ingest, CliError, IngestArgs};
    use protweight_core::{HttpFastaSource, PipelineService};

    #[test]
    fn ingest_without_any_input_returns_error() {
        let service = PipelineService::new(HttpFastaSource::default(), "never-opened.db");
        let args = IngestArgs {
            ids: None,
            fasta: None,
        };

        let err = ingest(&service, &args).unwrap_err();

        assert!(matches!(err, CliError::MissingInput));
        assert!(!service.database().exists());
    }
}
