use crate::model::protein::AnalysisRow;
use log::{error, info};
use serde::{Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Fixed column header of the report file.
pub const REPORT_HEADER: [&str; 3] = ["Protein ID", "Name", "Molecular Weight"];

pub type ReportResult<T> = Result<T, ReportError>;

/// Report export error; always fatal for the run.
#[derive(Debug)]
pub enum ReportError {
    /// The report file could not be created or truncated.
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: csv::Error,
    },
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open report `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "cannot write report `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

#[derive(Serialize)]
struct ReportRow<'a> {
    id: i64,
    name: &'a str,
    #[serde(serialize_with = "serialize_weight")]
    molecular_weight: f64,
}

fn serialize_weight<S: Serializer>(weight: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{weight:.2}"))
}

/// Writes `rows` to `path`, replacing any existing file.
///
/// The header row is always written, even for an empty row list.
pub fn write_report(path: impl AsRef<Path>, rows: &[AnalysisRow]) -> ReportResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| {
        error!(
            "event=report_open module=analysis status=error path={} error={}",
            path.display(),
            source
        );
        ReportError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let write_err = |source: csv::Error| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(REPORT_HEADER).map_err(write_err)?;
    for row in rows {
        writer
            .serialize(ReportRow {
                id: row.id,
                name: row.name.as_str(),
                molecular_weight: row.molecular_weight,
            })
            .map_err(write_err)?;
    }
    writer
        .flush()
        .map_err(|source| write_err(csv::Error::from(source)))?;

    info!(
        "event=report_write module=analysis status=ok path={} rows={}",
        path.display(),
        rows.len()
    );
    Ok(())
}
