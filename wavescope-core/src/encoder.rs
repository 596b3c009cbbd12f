// ============================================================================
// wavescope-core/src/encoder.rs
// ============================================================================
//
// VIDEO ENCODER SELECTION: CPU and GPU codec directives
//
// The rendered visualization is encoded either in software (libx264) or on
// an AMD/NVIDIA GPU. Each path takes the same validated quality value but
// spells its rate control options differently.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// GPU vendor selected with `--use-gpu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpuVendor {
    /// `a`: AMD AMF encoder
    Amd,
    /// `n`: NVIDIA NVENC encoder
    Nvidia,
}

impl GpuVendor {
    /// Accepted values of the GPU selector.
    pub const OPTIONS: &'static [&'static str] = &["a", "n"];

    /// Parses the optional selector. `None` means CPU rendering.
    pub fn parse(value: Option<&str>) -> CoreResult<Option<Self>> {
        match value {
            None => Ok(None),
            Some("a") => Ok(Some(Self::Amd)),
            Some("n") => Ok(Some(Self::Nvidia)),
            Some(other) => Err(CoreError::InvalidChoice {
                name: "use_gpu",
                value: other.to_string(),
                options: Self::OPTIONS,
            }),
        }
    }
}

/// The video codec arguments handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecDirective {
    Cpu { quality: u8 },
    Gpu { vendor: GpuVendor, quality: u8 },
}

impl CodecDirective {
    pub fn new(gpu: Option<GpuVendor>, quality: u8) -> Self {
        match gpu {
            None => Self::Cpu { quality },
            Some(vendor) => Self::Gpu { vendor, quality },
        }
    }

    /// Name of the ffmpeg encoder this directive selects.
    pub fn encoder_name(&self) -> &'static str {
        match self {
            Self::Cpu { .. } => "libx264",
            Self::Gpu {
                vendor: GpuVendor::Amd,
                ..
            } => "h264_amf",
            Self::Gpu {
                vendor: GpuVendor::Nvidia,
                ..
            } => "h264_nvenc",
        }
    }

    /// Builds the `-c:v ...` argument list.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["-c:v".to_string(), self.encoder_name().to_string()];
        match *self {
            Self::Cpu { quality } => {
                args.extend(["-crf".to_string(), quality.to_string()]);
            }
            Self::Gpu {
                vendor: GpuVendor::Amd,
                quality,
            } => {
                let q = quality.to_string();
                let q = q.as_str();
                args.extend(["-rc", "cqp", "-qp_i", q, "-qp_p", q, "-qp_b", q].map(String::from));
            }
            Self::Gpu {
                vendor: GpuVendor::Nvidia,
                quality,
            } => {
                let q = quality.to_string();
                args.extend(["-rc", "vbr", "-qp", q.as_str()].map(String::from));
            }
        }
        args
    }
}

impl fmt::Display for CodecDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu { .. } => write!(f, "CPU ({})", self.encoder_name()),
            Self::Gpu { .. } => write!(f, "GPU ({})", self.encoder_name()),
        }
    }
}
