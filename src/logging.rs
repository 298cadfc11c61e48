// Diagnostic log bootstrap.
// The log is a single plain text file, `library.log`, appended to across
// runs; every line carries a timestamp and level (flexi_logger's detailed
// format).

use anyhow::{Context, Result};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use std::path::Path;

const LOG_FILE_BASENAME: &str = "library";

/// Start file logging to `<log_dir>/library.log` at `level`.
///
/// The returned handle must be kept alive for the whole program run;
/// dropping it flushes and stops the logger.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle> {
    let level = normalize_level(level)?;
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let handle = Logger::try_with_str(level)
        .with_context(|| format!("Invalid log level `{level}`"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME)
                .suppress_timestamp(),
        )
        .write_mode(WriteMode::Direct)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .context("Failed to start logger")?;

    log::info!(
        "event=app_start status=ok version={} level={level}",
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

/// Map user-facing level names onto the ones flexi_logger understands.
pub fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => anyhow::bail!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        ),
    }
}
