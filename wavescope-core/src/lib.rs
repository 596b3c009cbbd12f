//! Core library for turning audio files into music-visualization videos with ffmpeg.
//!
//! The crate validates render options, resolves the batch of input files,
//! builds the composite filter graph (spectral bars, stereo vectorscope,
//! spectrogram, waveform, per-band power and volume meter) and runs the
//! engine once per file.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use wavescope_core::{InstallLayout, RenderConfig, RenderOptions, SidecarSpawner, SystemProbe, render_batch};
//! use std::path::PathBuf;
//!
//! let options = RenderOptions {
//!     input: Some(PathBuf::from("/music/album")),
//!     quality: 20,
//!     ..RenderOptions::default()
//! };
//! let layout = InstallLayout::from_env().unwrap();
//! let config = RenderConfig::from_options(&options, &layout, &SystemProbe).unwrap();
//!
//! let summary = render_batch(&SidecarSpawner, &config).unwrap();
//! println!("{summary}");
//! ```

pub mod color;
pub mod config;
pub mod discovery;
pub mod encoder;
pub mod error;
pub mod external;
pub mod graph;
pub mod processing;

// Re-exports for public API
pub use color::HexColor;
pub use config::{InstallLayout, RenderConfig, RenderOptions};
pub use discovery::{is_audio_file, resolve_candidates, resolve_output_dir};
pub use encoder::{CodecDirective, GpuVendor};
pub use error::{CoreError, CoreResult};
pub use external::{
    EngineProbe, FfmpegProcess, FfmpegSpawner, SidecarSpawner, SystemProbe, check_dependency,
};
pub use graph::{FilterGraph, build_filter_graph, escape_graph_path};
pub use processing::{BatchSummary, RenderOutcome, RenderResult, render_batch};
