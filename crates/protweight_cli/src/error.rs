use protweight_core::{ConfigError, FetchError, ListingError, PipelineError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Logging(String),
    Listing(ListingError),
    Fetch(FetchError),
    Pipeline(PipelineError),
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    /// `ingest` was given neither `--ids` nor `--fasta`.
    MissingInput,
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Listing(err) => write!(f, "{err}"),
            Self::Fetch(err) => write!(f, "{err}"),
            Self::Pipeline(err) => write!(f, "{err}"),
            Self::ReadInput { path, source } => {
                write!(f, "cannot read `{}`: {source}", path.display())
            }
            Self::MissingInput => write!(f, "ingest needs --ids <PATH> or --fasta <PATH>"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Logging(_) => None,
            Self::Listing(err) => Some(err),
            Self::Fetch(err) => Some(err),
            Self::Pipeline(err) => Some(err),
            Self::ReadInput { source, .. } => Some(source),
            Self::MissingInput => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ListingError> for CliError {
    fn from(value: ListingError) -> Self {
        Self::Listing(value)
    }
}

impl From<FetchError> for CliError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

impl From<PipelineError> for CliError {
    fn from(value: PipelineError) -> Self {
        Self::Pipeline(value)
    }
}
