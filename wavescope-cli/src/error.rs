// ============================================================================
// wavescope-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and exit-code policy
//
// The CLI reports core errors unchanged. Any fatal error ends the process
// with exit code 1.

use wavescope_core::CoreResult;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit code for a completed batch, whatever the per-file outcomes.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for fatal errors, including rejected command-line arguments.
pub const EXIT_FAILURE: i32 = 1;
