//! Logging bootstrap for the host binary.
//!
//! The library only talks to the `log` facade. The binary installs a stderr
//! logger once; later calls with the same level are no-ops.

use crate::error::{NotelistError, Result};
use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

/// Level used when the host does not ask for one. `RUST_LOG` still wins.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

static LOGGER: OnceCell<(&'static str, LoggerHandle)> = OnceCell::new();

/// Starts stderr logging at `level` (trace|debug|info|warn|error).
pub fn init_logging(level: &str) -> Result<()> {
    let level = normalize_level(level)?;

    if let Some((active, _)) = LOGGER.get() {
        if *active != level {
            return Err(NotelistError::Logging(format!(
                "logging already initialized with level `{}`; refusing to switch to `{}`",
                active, level
            )));
        }
        return Ok(());
    }

    LOGGER.get_or_try_init(|| -> Result<(&'static str, LoggerHandle)> {
        let handle = Logger::try_with_env_or_str(level)
            .map_err(|err| NotelistError::Logging(format!("invalid log level `{level}`: {err}")))?
            .log_to_stderr()
            .start()
            .map_err(|err| NotelistError::Logging(format!("failed to start logger: {err}")))?;
        info!(
            "event=app_start module=notelist status=ok version={}",
            env!("CARGO_PKG_VERSION")
        );
        Ok((level, handle))
    })?;
    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(NotelistError::Logging(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        ))),
    }
}
