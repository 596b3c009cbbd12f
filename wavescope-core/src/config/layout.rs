//! Default input/output directory layout.
//!
//! The default directories live next to the installed program rather than
//! under the invoking shell's working directory.

use crate::error::{CoreError, CoreResult};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the install root.
pub const HOME_ENV_VAR: &str = "WAVESCOPE_HOME";

/// Keep-file seeded in the default input directory; never a candidate.
pub const PLACEHOLDER_FILE: &str = ".gitkeep";

/// Default `input/` and `output/` directories under an install root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl InstallLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            input_dir: root.join("input"),
            output_dir: root.join("output"),
        }
    }

    /// Resolves the layout from `WAVESCOPE_HOME`, falling back to the
    /// directory containing the running executable.
    pub fn from_env() -> CoreResult<Self> {
        Self::locate(env::var_os(HOME_ENV_VAR).map(PathBuf::from))
    }

    /// Resolves the layout from an explicit root or the executable location.
    pub fn locate(root_override: Option<PathBuf>) -> CoreResult<Self> {
        if let Some(root) = root_override {
            return Ok(Self::new(&root));
        }

        let exe = env::current_exe()?;
        let root = exe.parent().ok_or_else(|| {
            CoreError::PathError(format!(
                "Could not determine install directory from '{}'",
                exe.display()
            ))
        })?;
        Ok(Self::new(root))
    }
}
