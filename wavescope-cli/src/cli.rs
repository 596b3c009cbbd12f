// wavescope-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.
//
// Numeric flags are parsed as wide signed values and negative numbers are
// allowed, so out-of-range input is reported by the core validator with the
// parameter's accepted interval.

use clap::Parser;
use std::path::PathBuf;
use wavescope_core::config::{
    DEFAULT_CQT_BAR_TRANSPARENCY, DEFAULT_CQT_BAR_VOLUME, DEFAULT_CQT_COLOR_LEFT,
    DEFAULT_CQT_COLOR_RIGHT, DEFAULT_CQT_GAMMA, DEFAULT_CQT_NOTES_FONT, DEFAULT_CQT_TIMECLAMP,
    DEFAULT_DIFF_COLOR_ADD, DEFAULT_DIFF_COLOR_FADE, DEFAULT_DIFF_ROTATE, DEFAULT_ENGINE,
    DEFAULT_FRAME_RATE, DEFAULT_PAD_COLOR, DEFAULT_QUALITY, DEFAULT_SPEC_COLOR,
    DEFAULT_SPEC_DRANGE, DEFAULT_SPEC_SATURATION, DEFAULT_SPEC_SCALE, DEFAULT_SPEC_WIN_FUNC,
    DEFAULT_TITLE_COLOR, DEFAULT_TITLE_FONT, DEFAULT_VOL_COLOR, DEFAULT_WAVES_COLOR_LEFT,
    DEFAULT_WAVES_COLOR_RIGHT,
};

// --- CLI Argument Definition ---

#[derive(Parser, Debug, Clone)]
#[command(
    name = "wavescope",
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Wavescope: batch music visualization renderer",
    long_about = "Renders audio files into 1920x1080 visualization videos using ffmpeg via wavescope-core.",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Input audio file or directory (defaults to the `input` directory next to the program)
    #[arg(short = 'i', long = "input", value_name = "INPUT_PATH")]
    pub input: Option<PathBuf>,

    /// Directory where rendered videos are saved
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Path to the ffmpeg executable
    #[arg(
        short = 'f',
        long = "ffmpeg",
        value_name = "FFMPEG",
        env = "WAVESCOPE_FFMPEG",
        default_value = DEFAULT_ENGINE
    )]
    pub ffmpeg: String,

    /// Render on the GPU: `a` for AMD, `n` for NVIDIA
    #[arg(short = 'g', long = "use-gpu", value_name = "VENDOR")]
    pub use_gpu: Option<String>,

    /// Encoder quality, 0-51 (0 is lossless)
    #[arg(short = 'q', long, default_value_t = DEFAULT_QUALITY)]
    pub quality: i64,

    /// Output frame rate, 1-120
    #[arg(short = 'r', long, default_value_t = DEFAULT_FRAME_RATE)]
    pub frame_rate: i64,

    // --- Titles and borders ---
    /// Font file for the pane titles
    #[arg(long, value_name = "FONT", default_value = DEFAULT_TITLE_FONT)]
    pub title_font: String,

    /// Pane title color (#RRGGBB)
    #[arg(long, value_name = "HEX", default_value = DEFAULT_TITLE_COLOR)]
    pub title_color: String,

    /// Pane border color (#RRGGBB)
    #[arg(long, value_name = "HEX", default_value = DEFAULT_PAD_COLOR)]
    pub pad_color: String,

    // --- Spectral bars (CQT) ---
    #[arg(long, value_name = "HEX", default_value = DEFAULT_CQT_COLOR_LEFT)]
    pub cqt_color_left: String,

    #[arg(long, value_name = "HEX", default_value = DEFAULT_CQT_COLOR_RIGHT)]
    pub cqt_color_right: String,

    /// Bar gamma, 1-7
    #[arg(long, default_value_t = DEFAULT_CQT_GAMMA)]
    pub cqt_gamma: i64,

    /// Bar transparency, 0-1
    #[arg(long, default_value_t = DEFAULT_CQT_BAR_TRANSPARENCY)]
    pub cqt_bar_transparency: f64,

    /// Bar volume, 0-100
    #[arg(long, default_value_t = DEFAULT_CQT_BAR_VOLUME)]
    pub cqt_bar_volume: i64,

    /// Time clamp, 0.002-1
    #[arg(long, default_value_t = DEFAULT_CQT_TIMECLAMP)]
    pub cqt_timeclamp: f64,

    /// Font file for the note names
    #[arg(long, value_name = "FONT", default_value = DEFAULT_CQT_NOTES_FONT)]
    pub cqt_notes_font: String,

    // --- Stereo difference ---
    #[arg(long, value_name = "HEX", default_value = DEFAULT_DIFF_COLOR_ADD)]
    pub diff_color_add: String,

    #[arg(long, value_name = "HEX", default_value = DEFAULT_DIFF_COLOR_FADE)]
    pub diff_color_fade: String,

    /// Extra rotation in degrees, 0-359
    #[arg(long, default_value_t = DEFAULT_DIFF_ROTATE)]
    pub diff_rotate: i64,

    // --- Spectrogram ---
    #[arg(long, value_name = "SCHEME", default_value = DEFAULT_SPEC_COLOR)]
    pub spec_color: String,

    #[arg(long, value_name = "SCALE", default_value = DEFAULT_SPEC_SCALE)]
    pub spec_scale: String,

    /// Color saturation, -10 to 10
    #[arg(long, default_value_t = DEFAULT_SPEC_SATURATION)]
    pub spec_saturation: f64,

    #[arg(long, value_name = "WINDOW", default_value = DEFAULT_SPEC_WIN_FUNC)]
    pub spec_win_func: String,

    /// Dynamic range in dB, 10-200
    #[arg(long, default_value_t = DEFAULT_SPEC_DRANGE)]
    pub spec_drange: i64,

    // --- Waveform, power and volume ---
    #[arg(long, value_name = "HEX", default_value = DEFAULT_WAVES_COLOR_LEFT)]
    pub waves_color_left: String,

    #[arg(long, value_name = "HEX", default_value = DEFAULT_WAVES_COLOR_RIGHT)]
    pub waves_color_right: String,

    #[arg(long, value_name = "HEX", default_value = DEFAULT_VOL_COLOR)]
    pub vol_color: String,

    // --- Logging ---
    /// Enable debug logging (includes engine progress lines)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Also append log lines to this file
    #[arg(long, value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
