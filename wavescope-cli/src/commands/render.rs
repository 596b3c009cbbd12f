//! Implementation of the render command.
//!
//! Maps the parsed flags onto [`RenderOptions`], validates them against the
//! install layout and hands the batch to wavescope-core.

use crate::cli::Cli;
use crate::error::CliResult;

use wavescope_core::config::{InstallLayout, RenderOptions};
use wavescope_core::external::{FfmpegSpawner, SidecarSpawner, SystemProbe};
use wavescope_core::{BatchSummary, EngineProbe, RenderConfig, render_batch};

use std::time::Instant;

impl From<&Cli> for RenderOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            engine: cli.ffmpeg.clone(),
            use_gpu: cli.use_gpu.clone(),
            quality: cli.quality,
            frame_rate: cli.frame_rate,
            title_font: cli.title_font.clone(),
            title_color: cli.title_color.clone(),
            pad_color: cli.pad_color.clone(),
            cqt_color_left: cli.cqt_color_left.clone(),
            cqt_color_right: cli.cqt_color_right.clone(),
            cqt_gamma: cli.cqt_gamma,
            cqt_bar_transparency: cli.cqt_bar_transparency,
            cqt_bar_volume: cli.cqt_bar_volume,
            cqt_timeclamp: cli.cqt_timeclamp,
            cqt_notes_font: cli.cqt_notes_font.clone(),
            diff_color_add: cli.diff_color_add.clone(),
            diff_color_fade: cli.diff_color_fade.clone(),
            diff_rotate: cli.diff_rotate,
            spec_color: cli.spec_color.clone(),
            spec_scale: cli.spec_scale.clone(),
            spec_saturation: cli.spec_saturation,
            spec_win_func: cli.spec_win_func.clone(),
            spec_drange: cli.spec_drange,
            waves_color_left: cli.waves_color_left.clone(),
            waves_color_right: cli.waves_color_right.clone(),
            vol_color: cli.vol_color.clone(),
        }
    }
}

/// Validates and renders with explicit collaborators.
pub fn run_render_with<S, P>(
    cli: &Cli,
    layout: &InstallLayout,
    probe: &P,
    spawner: &S,
) -> CliResult<BatchSummary>
where
    S: FfmpegSpawner,
    P: EngineProbe,
{
    let start = Instant::now();
    let options = RenderOptions::from(cli);
    let config = RenderConfig::from_options(&options, layout, probe)?;

    let summary = render_batch(spawner, &config)?;
    log::info!("Finished in {:.1}s", start.elapsed().as_secs_f64());
    Ok(summary)
}

/// Runs the batch with the real engine and the install layout from the
/// environment.
pub fn run_render(cli: &Cli) -> CliResult<BatchSummary> {
    let layout = InstallLayout::from_env()?;
    log::debug!(
        "Install layout: input={} output={}",
        layout.input_dir.display(),
        layout.output_dir.display()
    );
    run_render_with(cli, &layout, &SystemProbe, &SidecarSpawner)
}
