// ============================================================================
// wavescope-core/src/config/validation.rs
// ============================================================================
//
// PARAMETER VALIDATION: RenderOptions -> RenderConfig
//
// Validation runs in a fixed order and stops at the first failure:
// GPU selector, numeric ranges, enumerated styles, colors, engine, inputs,
// output directory, codec directive.

use super::{
    CqtStyle, DiffStyle, InstallLayout, RenderConfig, RenderOptions, SpectrumColor,
    SpectrumScale, SpectrumStyle, TitleStyle, WavesStyle, WindowFunction,
};
use crate::color::HexColor;
use crate::discovery::{resolve_candidates, resolve_output_dir};
use crate::encoder::{CodecDirective, GpuVendor};
use crate::error::{CoreError, CoreResult};
use crate::external::{EngineProbe, validate_engine_path};

use std::fmt::Display;
use std::ops::RangeInclusive;

/// Checks that `value` lies in the closed interval `range`.
///
/// NaN never passes.
pub fn check_range<T>(name: &'static str, value: T, range: RangeInclusive<T>) -> CoreResult<T>
where
    T: PartialOrd + Display + Copy,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::InvalidParameter {
            name,
            value: value.to_string(),
            expected: format!("a value in [{}, {}]", range.start(), range.end()),
        })
    }
}

/// Range check followed by narrowing into the stored integer type.
fn check_int<T>(name: &'static str, value: i64, range: RangeInclusive<i64>) -> CoreResult<T>
where
    T: TryFrom<i64>,
{
    let expected = format!("a value in [{}, {}]", range.start(), range.end());
    let value = check_range(name, value, range)?;
    T::try_from(value).map_err(|_| CoreError::InvalidParameter {
        name,
        value: value.to_string(),
        expected,
    })
}

impl RenderConfig {
    /// Validates `opts` and resolves inputs and output against `layout`.
    ///
    /// `probe` is asked whether the engine can be launched once its path has
    /// passed the shape check.
    pub fn from_options(
        opts: &RenderOptions,
        layout: &InstallLayout,
        probe: &impl EngineProbe,
    ) -> CoreResult<Self> {
        log::info!("Validating the arguments..");

        let gpu = GpuVendor::parse(opts.use_gpu.as_deref())?;

        let quality: u8 = check_int("quality", opts.quality, 0..=51)?;
        let frame_rate: u8 = check_int("frame_rate", opts.frame_rate, 1..=120)?;
        let cqt_gamma: u8 = check_int("cqt_gamma", opts.cqt_gamma, 1..=7)?;
        let cqt_bar_transparency =
            check_range("cqt_bar_transparency", opts.cqt_bar_transparency, 0.0..=1.0)?;
        let cqt_bar_volume: u8 = check_int("cqt_bar_volume", opts.cqt_bar_volume, 0..=100)?;
        let cqt_timeclamp = check_range("cqt_timeclamp", opts.cqt_timeclamp, 0.002..=1.0)?;
        let diff_rotate: u16 = check_int("diff_rotate", opts.diff_rotate, 0..=359)?;
        let spec_saturation = check_range("spec_saturation", opts.spec_saturation, -10.0..=10.0)?;
        let spec_drange: u8 = check_int("spec_drange", opts.spec_drange, 10..=200)?;

        let spec_color = SpectrumColor::parse(&opts.spec_color)?;
        let spec_scale = SpectrumScale::parse(&opts.spec_scale)?;
        let spec_win_func = WindowFunction::parse(&opts.spec_win_func)?;

        let title_color = HexColor::parse("title_color", &opts.title_color)?;
        let pad_color = HexColor::parse("pad_color", &opts.pad_color)?;
        let cqt_color_left = HexColor::parse("cqt_color_left", &opts.cqt_color_left)?;
        let cqt_color_right = HexColor::parse("cqt_color_right", &opts.cqt_color_right)?;
        let diff_color_add = HexColor::parse("diff_color_add", &opts.diff_color_add)?;
        let diff_color_fade = HexColor::parse("diff_color_fade", &opts.diff_color_fade)?;
        let waves_color_left = HexColor::parse("waves_color_left", &opts.waves_color_left)?;
        let waves_color_right = HexColor::parse("waves_color_right", &opts.waves_color_right)?;
        let vol_color = HexColor::parse("vol_color", &opts.vol_color)?.swap_red_blue();

        validate_engine_path(&opts.engine)?;
        probe.probe(&opts.engine)?;
        log::info!("ffmpeg valid and usable.");

        let inputs = resolve_candidates(opts.input.as_deref(), layout)?;
        log::info!("Inputs: {} file(s) found.", inputs.len());

        let output_dir = resolve_output_dir(opts.input.as_deref(), opts.output.as_deref(), layout);
        log::info!("output dir set to: {}", output_dir.display());

        let codec = CodecDirective::new(gpu, quality);
        log::info!("Rendering with {}", codec);

        Ok(Self {
            engine: opts.engine.clone(),
            codec,
            frame_rate,
            title: TitleStyle {
                font: opts.title_font.clone(),
                color: title_color,
            },
            pad_color,
            cqt: CqtStyle {
                color_left: cqt_color_left,
                color_right: cqt_color_right,
                gamma: cqt_gamma,
                bar_transparency: cqt_bar_transparency,
                bar_volume: cqt_bar_volume,
                timeclamp: cqt_timeclamp,
                notes_font: opts.cqt_notes_font.clone(),
            },
            diff: DiffStyle {
                color_add: diff_color_add,
                color_fade: diff_color_fade,
                rotate: diff_rotate,
            },
            spectrum: SpectrumStyle {
                color: spec_color,
                scale: spec_scale,
                saturation: spec_saturation,
                win_func: spec_win_func,
                drange: spec_drange,
            },
            waves: WavesStyle {
                color_left: waves_color_left,
                color_right: waves_color_right,
            },
            vol_color,
            inputs,
            output_dir,
        })
    }
}
