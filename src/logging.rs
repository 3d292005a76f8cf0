//! Stderr logging for the command-line tool.

use flexi_logger::{Logger, LoggerHandle};

/// Start logging to stderr
///
/// `RUST_LOG` wins when set; otherwise `verbosity` picks the level
/// (0 = warn, 1 = info, 2 = debug, 3+ = trace). The returned handle must be
/// kept alive for the lifetime of the process.
pub fn init_logging(verbosity: u8) -> anyhow::Result<LoggerHandle> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let handle = Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}
