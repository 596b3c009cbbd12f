//! Command implementations for the CLI.

/// Validates the flags and renders the batch.
pub mod render;
