// ============================================================================
// wavescope-core/src/processing/render.rs
// ============================================================================
//
// BATCH RENDERING: One engine run per input file
//
// For each candidate the renderer derives the output path, skips inputs that
// already have a rendered video, builds the filter graph and runs the engine
// synchronously. The engine writes to a hidden partial file that is renamed
// into place only after a zero exit.
//
// Per-file failures are recorded and the batch moves on; only failing to
// prepare the output directory aborts the run.

use crate::config::{OUTPUT_EXTENSION, RenderConfig};
use crate::error::{CoreError, CoreResult};
use crate::external::{FfmpegProcess, FfmpegSpawner};
use crate::graph::{OUTPUT_LABEL, build_filter_graph};

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};

use std::fs;
use std::path::{Path, PathBuf};

use super::{BatchSummary, RenderOutcome, RenderResult};

fn file_stem(input: &Path) -> CoreResult<String> {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CoreError::PathError(format!("Failed to get filename stem for {}", input.display()))
        })
}

/// Final location of the video rendered from `input`: `<stem>.mp4`.
pub fn output_path_for(output_dir: &Path, input: &Path) -> CoreResult<PathBuf> {
    Ok(output_dir.join(format!("{}.{}", file_stem(input)?, OUTPUT_EXTENSION)))
}

/// Hidden file the engine writes to before the rename: `.<stem>.partial.mp4`.
pub fn partial_path_for(output_dir: &Path, input: &Path) -> CoreResult<PathBuf> {
    Ok(output_dir.join(format!(".{}.partial.{}", file_stem(input)?, OUTPUT_EXTENSION)))
}

/// Assembles the engine invocation for one file.
pub fn build_render_command(
    config: &RenderConfig,
    input: &Path,
    graph: &str,
    output: &Path,
) -> FfmpegCommand {
    let mut cmd = FfmpegCommand::new_with_path(&config.engine);
    cmd.args(["-loglevel", "level+error", "-stats", "-hwaccel", "auto"]);
    cmd.input(input);
    cmd.args(["-filter_complex", graph]);
    let video_map = format!("[{OUTPUT_LABEL}]");
    cmd.args(["-map", video_map.as_str(), "-map", "0:a"]);
    cmd.args(config.codec.to_args());
    cmd.args(["-c:a", "copy"]);
    let frame_rate = config.frame_rate.to_string();
    cmd.args(["-r", frame_rate.as_str()]);
    // a partial left by an interrupted run must not make the engine refuse
    cmd.overwrite();
    cmd.output(output);
    cmd
}

/// Forwards engine output to the log while the render runs.
fn log_engine_event(filename: &str, event: FfmpegEvent) {
    match event {
        FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) | FfmpegEvent::Error(line) => {
            log::warn!("[{}] {}", filename, line);
        }
        FfmpegEvent::Progress(progress) => {
            log::debug!("[{}] time={} speed={}x", filename, progress.time, progress.speed);
        }
        FfmpegEvent::Log(_, line) => log::debug!("[{}] {}", filename, line),
        _ => {}
    }
}

fn run_engine<S: FfmpegSpawner>(
    spawner: &S,
    config: &RenderConfig,
    input: &Path,
    partial: &Path,
    filename: &str,
) -> Result<(), String> {
    let graph = build_filter_graph(config).build();
    log::debug!("Filter graph for {}: {}", filename, graph);

    let cmd = build_render_command(config, input, &graph, partial);
    let mut child = spawner.spawn(cmd).map_err(|e| e.to_string())?;

    child
        .handle_events(|event| {
            log_engine_event(filename, event);
            Ok(())
        })
        .map_err(|e| e.to_string())?;

    let status = child.wait().map_err(|e| e.to_string())?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("ffmpeg exited with status {status}"))
    }
}

fn render_one<S: FfmpegSpawner>(spawner: &S, config: &RenderConfig, input: &Path) -> RenderOutcome {
    let filename = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    let (output, partial) = match (
        output_path_for(&config.output_dir, input),
        partial_path_for(&config.output_dir, input),
    ) {
        (Ok(output), Ok(partial)) => (output, partial),
        (Err(e), _) | (_, Err(e)) => {
            log::warn!("Skipping {}: {}", filename, e);
            return RenderOutcome::Failed {
                reason: e.to_string(),
            };
        }
    };

    if output.exists() {
        log::info!("{} already exists, skipping.", output.display());
        return RenderOutcome::SkippedExisting { output };
    }

    log::info!("Rendering: {}", filename);

    let result = run_engine(spawner, config, input, &partial, &filename).and_then(|()| {
        fs::rename(&partial, &output).map_err(|e| {
            format!(
                "Failed to move {} to {}: {}",
                partial.display(),
                output.display(),
                e
            )
        })
    });

    match result {
        Ok(()) => {
            log::info!("Rendered: {}", output.display());
            RenderOutcome::Rendered { output }
        }
        Err(reason) => {
            log::warn!("Failed to render {}: {}", filename, reason);
            if partial.exists() {
                if let Err(e) = fs::remove_file(&partial) {
                    log::warn!("Could not remove partial file {}: {}", partial.display(), e);
                }
            }
            RenderOutcome::Failed { reason }
        }
    }
}

/// Renders every input of `config` in order.
///
/// Returns an error only if the output directory cannot be created; each
/// file's own success, skip or failure is recorded in the summary.
pub fn render_batch<S: FfmpegSpawner>(spawner: &S, config: &RenderConfig) -> CoreResult<BatchSummary> {
    fs::create_dir_all(&config.output_dir)?;

    let mut summary = BatchSummary::default();
    for input in &config.inputs {
        let outcome = render_one(spawner, config, input);
        summary.record(RenderResult {
            input: input.clone(),
            outcome,
        });
    }

    log::info!("{}", summary);
    Ok(summary)
}
