//! Process-wide log setup for batch runs.
//!
//! Two destinations exist: stderr only, or rotating files in a directory
//! with warnings and errors mirrored to stderr. Either way the operator sees
//! skipped fetches and unknown residues on the console.

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, LogSpecification, Logger, LoggerHandle, Naming,
    WriteMode,
};
use log::{info, LevelFilter};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

const LOG_FILE_BASENAME: &str = "protweight";
const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 5;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Absolute directory for rotating `protweight*.log` files.
    Directory(PathBuf),
}

struct ActiveLogger {
    level: LevelFilter,
    target: LogTarget,
    _handle: LoggerHandle,
}

/// Starts logging at `level` (`trace|debug|info|warn|error|off`).
///
/// Repeating the call with the same level and target is a no-op; any other
/// combination after the first call is refused.
pub fn init_logging(level: &str, target: LogTarget) -> Result<(), String> {
    let level: LevelFilter = level
        .trim()
        .parse()
        .map_err(|_| format!("unknown log level `{}`", level.trim()))?;
    if let LogTarget::Directory(dir) = &target {
        if !dir.is_absolute() {
            return Err(format!("log directory `{}` is not absolute", dir.display()));
        }
    }

    let active = ACTIVE.get_or_try_init(|| start(level, target.clone()))?;
    if active.level != level || active.target != target {
        return Err(format!(
            "logging already running at {} -> {:?}; refusing {} -> {:?}",
            active.level, active.target, level, target
        ));
    }
    Ok(())
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start(level: LevelFilter, target: LogTarget) -> Result<ActiveLogger, String> {
    let logger = Logger::with(LogSpecification::builder().default(level).build());
    let logger = match &target {
        LogTarget::Stderr => logger.log_to_stderr(),
        LogTarget::Directory(dir) => {
            std::fs::create_dir_all(dir)
                .map_err(|err| format!("cannot create `{}`: {err}", dir.display()))?;
            logger
                .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                .rotate(
                    Criterion::Size(ROTATE_AT_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(KEEP_LOG_FILES),
                )
                .append()
                .write_mode(WriteMode::BufferAndFlush)
                .format_for_files(flexi_logger::detailed_format)
                .duplicate_to_stderr(Duplicate::Warn)
        }
    };
    let handle = logger
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=logging_init module=core status=ok level={} target={:?} version={}",
        level,
        target,
        env!("CARGO_PKG_VERSION")
    );
    Ok(ActiveLogger {
        level,
        target,
        _handle: handle,
    })
}

#[cfg(test)]
mod tests {
    use super::{init_logging, LogTarget};

    #[test]
    fn rejects_bad_level_and_relative_directory_before_starting() {
        let err = init_logging("loud", LogTarget::Stderr).unwrap_err();
        assert!(err.contains("loud"));

        let err = init_logging("info", LogTarget::Directory("logs".into())).unwrap_err();
        assert!(err.contains("not absolute"));
    }

    #[test]
    fn directory_target_is_sticky_for_the_process() {
        let dir = tempfile::tempdir().unwrap();
        let target = LogTarget::Directory(dir.path().to_path_buf());

        init_logging("warn", target.clone()).unwrap();
        init_logging(" WARN ", target.clone()).unwrap();

        assert!(init_logging("debug", target).is_err());
        assert!(init_logging("warn", LogTarget::Stderr).is_err());
    }
}
