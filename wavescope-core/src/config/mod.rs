//! Configuration structures and constants for the wavescope-core library.
//!
//! Raw user input is collected in [`RenderOptions`] (whose `Default` holds
//! the documented defaults). [`RenderConfig::from_options`] validates it once
//! and produces the immutable [`RenderConfig`] the renderer reads.

mod layout;
mod styles;
mod validation;

use crate::color::HexColor;
use crate::encoder::CodecDirective;
use std::path::PathBuf;

pub use layout::{HOME_ENV_VAR, InstallLayout, PLACEHOLDER_FILE};
pub use styles::{SpectrumColor, SpectrumScale, WindowFunction};
pub use validation::check_range;

// Default constants

/// Engine command used when no explicit path is given.
pub const DEFAULT_ENGINE: &str = "ffmpeg";

/// Default encoder quality (CRF / QP). Range: 0-51, 0 being lossless.
pub const DEFAULT_QUALITY: i64 = 18;

/// Default output frame rate.
pub const DEFAULT_FRAME_RATE: i64 = 24;

pub const DEFAULT_TITLE_COLOR: &str = "#cacbca";
pub const DEFAULT_PAD_COLOR: &str = "#e6cbe6";
pub const DEFAULT_CQT_COLOR_LEFT: &str = "#2673d9";
pub const DEFAULT_CQT_COLOR_RIGHT: &str = "#03753d";
pub const DEFAULT_CQT_GAMMA: i64 = 1;
pub const DEFAULT_CQT_BAR_TRANSPARENCY: f64 = 0.9;
pub const DEFAULT_CQT_BAR_VOLUME: i64 = 10;
pub const DEFAULT_CQT_TIMECLAMP: f64 = 0.15;
pub const DEFAULT_DIFF_COLOR_ADD: &str = "#bddefa";
pub const DEFAULT_DIFF_COLOR_FADE: &str = "#fdbbdc";
pub const DEFAULT_DIFF_ROTATE: i64 = 9;
pub const DEFAULT_SPEC_COLOR: &str = "intensity";
pub const DEFAULT_SPEC_SCALE: &str = "5thrt";
pub const DEFAULT_SPEC_SATURATION: f64 = 1.0;
pub const DEFAULT_SPEC_WIN_FUNC: &str = "dolph";
pub const DEFAULT_SPEC_DRANGE: i64 = 24;
pub const DEFAULT_WAVES_COLOR_LEFT: &str = "#ff4949";
pub const DEFAULT_WAVES_COLOR_RIGHT: &str = "#4dbffc";
pub const DEFAULT_VOL_COLOR: &str = "#032341";

/// Font used for the pane titles ("CQT", "Diff", ...).
#[cfg(target_os = "windows")]
pub const DEFAULT_TITLE_FONT: &str = "C:/Windows/Fonts/arial.ttf";
#[cfg(target_os = "macos")]
pub const DEFAULT_TITLE_FONT: &str = "/Library/Fonts/Arial.ttf";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_TITLE_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Monospace font used for the note names under the CQT bars.
#[cfg(target_os = "windows")]
pub const DEFAULT_CQT_NOTES_FONT: &str = "C:/Windows/Fonts/courbd.ttf";
#[cfg(target_os = "macos")]
pub const DEFAULT_CQT_NOTES_FONT: &str = "/Library/Fonts/Courier New Bold.ttf";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_CQT_NOTES_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono-Bold.ttf";

/// Recognized audio file extensions (lowercase, with the leading dot).
pub const AUDIO_EXTENSIONS: &[&str] = &[
    ".mp3", ".m4a", ".wav", ".aac", ".ogg", ".flac", ".wma", ".alac", ".aiff",
];

/// Container extension of the rendered videos.
pub const OUTPUT_EXTENSION: &str = "mp4";

/// Raw, unvalidated render parameters.
///
/// Field names follow the command-line flags. Numeric fields are wide signed
/// types so out-of-range input reaches the validator instead of failing to
/// parse.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Input file or directory; `None` selects the default input directory
    pub input: Option<PathBuf>,
    /// Output directory; `None` derives it from the input
    pub output: Option<PathBuf>,
    /// Engine binary path or command name
    pub engine: String,
    /// GPU selector: `a` (AMD), `n` (NVIDIA) or `None` for CPU
    pub use_gpu: Option<String>,
    pub quality: i64,
    pub frame_rate: i64,

    pub title_font: String,
    pub title_color: String,
    pub pad_color: String,

    pub cqt_color_left: String,
    pub cqt_color_right: String,
    pub cqt_gamma: i64,
    pub cqt_bar_transparency: f64,
    pub cqt_bar_volume: i64,
    pub cqt_timeclamp: f64,
    pub cqt_notes_font: String,

    pub diff_color_add: String,
    pub diff_color_fade: String,
    pub diff_rotate: i64,

    pub spec_color: String,
    pub spec_scale: String,
    pub spec_saturation: f64,
    pub spec_win_func: String,
    pub spec_drange: i64,

    pub waves_color_left: String,
    pub waves_color_right: String,
    pub vol_color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            engine: DEFAULT_ENGINE.to_string(),
            use_gpu: None,
            quality: DEFAULT_QUALITY,
            frame_rate: DEFAULT_FRAME_RATE,
            title_font: DEFAULT_TITLE_FONT.to_string(),
            title_color: DEFAULT_TITLE_COLOR.to_string(),
            pad_color: DEFAULT_PAD_COLOR.to_string(),
            cqt_color_left: DEFAULT_CQT_COLOR_LEFT.to_string(),
            cqt_color_right: DEFAULT_CQT_COLOR_RIGHT.to_string(),
            cqt_gamma: DEFAULT_CQT_GAMMA,
            cqt_bar_transparency: DEFAULT_CQT_BAR_TRANSPARENCY,
            cqt_bar_volume: DEFAULT_CQT_BAR_VOLUME,
            cqt_timeclamp: DEFAULT_CQT_TIMECLAMP,
            cqt_notes_font: DEFAULT_CQT_NOTES_FONT.to_string(),
            diff_color_add: DEFAULT_DIFF_COLOR_ADD.to_string(),
            diff_color_fade: DEFAULT_DIFF_COLOR_FADE.to_string(),
            diff_rotate: DEFAULT_DIFF_ROTATE,
            spec_color: DEFAULT_SPEC_COLOR.to_string(),
            spec_scale: DEFAULT_SPEC_SCALE.to_string(),
            spec_saturation: DEFAULT_SPEC_SATURATION,
            spec_win_func: DEFAULT_SPEC_WIN_FUNC.to_string(),
            spec_drange: DEFAULT_SPEC_DRANGE,
            waves_color_left: DEFAULT_WAVES_COLOR_LEFT.to_string(),
            waves_color_right: DEFAULT_WAVES_COLOR_RIGHT.to_string(),
            vol_color: DEFAULT_VOL_COLOR.to_string(),
        }
    }
}

/// Title text style shared by every pane label.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleStyle {
    pub font: String,
    pub color: HexColor,
}

/// Constant-Q transform (spectral bars) pane.
#[derive(Debug, Clone, PartialEq)]
pub struct CqtStyle {
    pub color_left: HexColor,
    pub color_right: HexColor,
    pub gamma: u8,
    pub bar_transparency: f64,
    pub bar_volume: u8,
    pub timeclamp: f64,
    pub notes_font: String,
}

/// Stereo difference (vectorscope) pane.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffStyle {
    pub color_add: HexColor,
    pub color_fade: HexColor,
    /// Rotation in degrees, applied on top of the fixed -90 degree base
    pub rotate: u16,
}

/// Spectrogram pane.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumStyle {
    pub color: SpectrumColor,
    pub scale: SpectrumScale,
    pub saturation: f64,
    pub win_func: WindowFunction,
    pub drange: u8,
}

/// Waveform and per-band power panes (one color per stereo channel).
#[derive(Debug, Clone, PartialEq)]
pub struct WavesStyle {
    pub color_left: HexColor,
    pub color_right: HexColor,
}

/// Validated, immutable configuration of a render run.
///
/// Built once by [`RenderConfig::from_options`] and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub engine: String,
    pub codec: CodecDirective,
    pub frame_rate: u8,
    pub title: TitleStyle,
    /// Border color of the padded panes
    pub pad_color: HexColor,
    pub cqt: CqtStyle,
    pub diff: DiffStyle,
    pub spectrum: SpectrumStyle,
    pub waves: WavesStyle,
    /// Volume meter color, red and blue already exchanged
    pub vol_color: HexColor,
    /// Candidate input files in processing order (never empty)
    pub inputs: Vec<PathBuf>,
    pub output_dir: PathBuf,
}
