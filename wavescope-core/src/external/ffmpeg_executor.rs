// ============================================================================
// wavescope-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// RENDER PROCESS SEAM: how a render run reaches the ffmpeg engine
//
// The batch renderer hands one fully built command per input file to an
// `FfmpegSpawner` and reads the run back through `FfmpegProcess`: engine log
// and progress events first, then the exit status that decides whether the
// partial output is renamed or discarded. The engine may be a user-supplied
// binary, so spawn and wait errors name the program that was launched.
//
// KEY COMPONENTS:
// - FfmpegProcess: a running render (events, then exit status)
// - FfmpegSpawner: launches a render command
// - SidecarSpawner / SidecarProcess: the ffmpeg-sidecar backed implementation

use crate::error::{CoreError, CoreResult, command_start_error, command_wait_error};
use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::FfmpegEvent;
use std::process::ExitStatus;

// --- FFmpeg Execution Abstraction ---

/// A render in flight.
pub trait FfmpegProcess {
    /// Feeds every engine event to `handler` until the stream ends.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Exit status of the engine; only a zero exit counts as rendered.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Launches render commands built by the batch renderer.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using ffmpeg-sidecar ---

/// A running engine child together with the program name used in errors.
pub struct SidecarProcess {
    child: FfmpegChild,
    program: String,
}

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let iterator = self.child.iter().map_err(|e| {
            log::error!("Failed to read events from {}: {}", self.program, e);
            CoreError::EventStream(e.to_string())
        })?;
        for event in iterator {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        let program = &self.program;
        self.child
            .wait()
            .map_err(|e| command_wait_error(program.as_str(), e))
    }
}

/// Spawns the engine through `ffmpeg-sidecar`.
#[derive(Debug, Clone, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        let program = cmd.as_inner().get_program().to_string_lossy().into_owned();
        log::debug!("Launching {}", program);
        match cmd.spawn() {
            Ok(child) => Ok(SidecarProcess { child, program }),
            Err(e) => Err(command_start_error(program, e)),
        }
    }
}
