// ============================================================================
// wavescope-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for Wavescope Core
//
// This module defines the error types used throughout the wavescope-core
// library. Every variant here is fatal for the run: per-file render failures
// are reported through `RenderOutcome::Failed` instead of `CoreError`.
//
// KEY COMPONENTS:
// - CoreError: Enum of all fatal error conditions
// - CoreResult: Type alias for Result with CoreError
// - Helper functions for building command errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal error conditions raised while validating options or preparing a batch.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("ffmpeg not found or not a recognized command ({0})")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed to wait for command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("ffmpeg event stream unavailable: {0}")]
    EventStream(String),

    #[error("FFmpeg path is invalid or does not point to an ffmpeg executable: {0}")]
    InvalidEngine(String),

    #[error("Invalid `{name}` value: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        expected: String,
    },

    #[error("Invalid hexcode for `{name}`: {value}")]
    InvalidHexColor { name: &'static str, value: String },

    #[error("Invalid `{name}` value: {value} (options: {})", .options.join(", "))]
    InvalidChoice {
        name: &'static str,
        value: String,
        options: &'static [&'static str],
    },

    #[error("Invalid input: {}", .0.display())]
    InvalidInput(PathBuf),

    #[error("Invalid types: {}", .0.display())]
    InvalidFileType(PathBuf),

    #[error("No input detected.")]
    NoFilesFound,

    #[error("Path error: {0}")]
    PathError(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Result type for wavescope-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

pub fn command_wait_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}
