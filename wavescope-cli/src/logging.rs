// ============================================================================
// wavescope-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: fern dispatch for console and optional file output
//
// Console lines look like `[12:04:31] INFO Rendering: song.mp3` with the
// level colored when the terminal supports it. The optional log file gets
// the same lines without styling, prefixed with the full date.
//
// KEY COMPONENTS:
// - setup_logging: installs the global logger
// - get_timestamp: wall-clock time for console lines

use console::Style;
use log::{Level, LevelFilter};
use std::path::Path;
use wavescope_core::CoreError;

use crate::error::CliResult;

/// Returns the current local time formatted as "HH:MM:SS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

fn level_style(level: Level) -> Style {
    match level {
        Level::Error => Style::new().red().bold(),
        Level::Warn => Style::new().yellow(),
        Level::Info => Style::new().green(),
        Level::Debug => Style::new().blue(),
        Level::Trace => Style::new().dim(),
    }
}

/// Installs the global logger. Info by default, Debug when `verbose` is set.
pub fn setup_logging(verbose: bool, log_file: Option<&Path>) -> CliResult<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let console = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {} {}",
                get_timestamp(),
                level_style(record.level()).apply_to(record.level()),
                message
            ))
        })
        .chain(std::io::stdout());

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        // ffmpeg-sidecar logs its own diagnostics; keep them out of the default view
        .level_for("ffmpeg_sidecar", LevelFilter::Warn)
        .chain(console);

    if let Some(path) = log_file {
        let file = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {} {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    message
                ))
            })
            .chain(fern::log_file(path)?);
        dispatch = dispatch.chain(file);
    }

    dispatch
        .apply()
        .map_err(|e| CoreError::OperationFailed(format!("Failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_shape() {
        let ts = get_timestamp();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.as_bytes()[2], b':');
        assert_eq!(ts.as_bytes()[5], b':');
    }
}
