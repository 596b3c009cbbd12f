//! Batch rendering of audio files into visualization videos.
//!
//! [`render_batch`] drives the engine once per input and collects a
//! [`BatchSummary`] of what happened to each file.

mod render;

pub use render::{build_render_command, output_path_for, partial_path_for, render_batch};

use std::fmt;
use std::path::PathBuf;

/// What happened to a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { output: PathBuf },
    /// The output already existed; the engine was not invoked.
    SkippedExisting { output: PathBuf },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub input: PathBuf,
    pub outcome: RenderOutcome,
}

/// Per-batch tally. Skipped files count toward `total` but not `succeeded`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub results: Vec<RenderResult>,
}

impl BatchSummary {
    pub fn record(&mut self, result: RenderResult) {
        self.total += 1;
        match result.outcome {
            RenderOutcome::Rendered { .. } => self.succeeded += 1,
            RenderOutcome::SkippedExisting { .. } => self.skipped += 1,
            RenderOutcome::Failed { .. } => self.failed += 1,
        }
        self.results.push(result);
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rendered {}/{} file(s)", self.succeeded, self.total)?;
        if self.skipped > 0 || self.failed > 0 {
            write!(f, " ({} skipped, {} failed)", self.skipped, self.failed)?;
        }
        Ok(())
    }
}
