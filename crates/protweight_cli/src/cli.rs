use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Fetch protein FASTA entries into SQLite and report per-sequence molecular weights."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML configuration file; built-in defaults apply when omitted
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database file, overriding `[store] database`
    #[arg(long, global = true, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error), overriding `[logging] level`
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch or read FASTA entries and store them.
    Ingest(IngestArgs),
    /// Weigh every stored protein and write the CSV report.
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct IngestArgs {
    /// Identifier listing: one identifier per line, optional second column
    #[arg(long, value_name = "PATH")]
    pub ids: Option<PathBuf>,

    /// Local FASTA file to store without any network access
    #[arg(long, value_name = "PATH")]
    pub fasta: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Report file, overriding `[report] path`
    #[arg(short, long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}
