// ============================================================================
// wavescope-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffmpeg Engine
//
// This module encapsulates every interaction with the external ffmpeg
// binary: checking that a custom engine path looks like an executable,
// probing that the engine can be launched at all, and spawning the render
// processes.
//
// KEY COMPONENTS:
// - EngineProbe trait with the SystemProbe implementation
// - check_dependency: `-version` liveness probe
// - validate_engine_path: shape check for user-supplied engine paths
// - FfmpegSpawner / FfmpegProcess traits (see ffmpeg_executor)

use crate::config::DEFAULT_ENGINE;
use crate::error::{CoreError, CoreResult};

use std::env;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner};

// ============================================================================
// ENGINE PROBING
// ============================================================================

/// Something that can tell whether an engine command is runnable.
pub trait EngineProbe {
    fn probe(&self, engine: &str) -> CoreResult<()>;
}

/// Probes the engine by actually launching it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl EngineProbe for SystemProbe {
    fn probe(&self, engine: &str) -> CoreResult<()> {
        check_dependency(engine)
    }
}

/// Checks that `cmd_name` can be launched by running it with `-version`.
///
/// Only a launch failure is an error. The exit status is ignored: an engine
/// that starts but complains about `-version` is still considered usable.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", cmd_name, e);
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}

/// Validates the shape of the configured engine.
///
/// The default command name is resolved through the search path and trusted
/// as is. Anything else must name an existing file carrying the platform's
/// executable extension (`.exe` on Windows, none elsewhere).
pub fn validate_engine_path(engine: &str) -> CoreResult<()> {
    if engine == DEFAULT_ENGINE {
        return Ok(());
    }

    let path = Path::new(engine);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_lowercase();

    if path.is_file() && extension == env::consts::EXE_EXTENSION {
        Ok(())
    } else {
        Err(CoreError::InvalidEngine(engine.to_string()))
    }
}
