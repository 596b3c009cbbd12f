//! Enumerated style options for the spectrogram pane.
//!
//! Each option set mirrors the literal values ffmpeg's `showspectrum` filter
//! accepts, so the validated value is written into the graph unchanged.

use crate::error::{CoreError, CoreResult};
use std::fmt;

macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $param:literal {
            $($variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every literal accepted for this option.
            pub const OPTIONS: &'static [&'static str] = &[$($literal),+];

            /// Parses an exact (case-sensitive) option literal.
            pub fn parse(value: &str) -> CoreResult<Self> {
                match value {
                    $($literal => Ok(Self::$variant),)+
                    _ => Err(CoreError::InvalidChoice {
                        name: $param,
                        value: value.to_string(),
                        options: Self::OPTIONS,
                    }),
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $literal),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

literal_enum! {
    /// Spectrogram color scheme (`showspectrum=color=`).
    SpectrumColor, "spec_color" {
        Channel => "channel",
        Intensity => "intensity",
        Rainbow => "rainbow",
        Moreland => "moreland",
        Nebulae => "nebulae",
        Fire => "fire",
        Fiery => "fiery",
        Fruit => "fruit",
        Cool => "cool",
        Magma => "magma",
        Green => "green",
        Viridis => "viridis",
        Plasma => "plasma",
        Cividis => "cividis",
        Terrain => "terrain",
    }
}

literal_enum! {
    /// Spectrogram intensity scale (`showspectrum=scale=`).
    SpectrumScale, "spec_scale" {
        Lin => "lin",
        Sqrt => "sqrt",
        Cbrt => "cbrt",
        FourthRoot => "4thrt",
        FifthRoot => "5thrt",
        Log => "log",
    }
}

literal_enum! {
    /// FFT window function (`showspectrum=win_func=`).
    WindowFunction, "spec_win_func" {
        Rect => "rect",
        Bartlett => "bartlett",
        Hann => "hann",
        Hanning => "hanning",
        Hamming => "hamming",
        Blackman => "blackman",
        Welch => "welch",
        Flattop => "flattop",
        Bharris => "bharris",
        Bnuttall => "bnuttall",
        Bhann => "bhann",
        Sine => "sine",
        Nuttall => "nuttall",
        Lanczos => "lanczos",
        Gauss => "gauss",
        Tukey => "tukey",
        Dolph => "dolph",
        Cauchy => "cauchy",
        Parzen => "parzen",
        Poisson => "poisson",
        Bohman => "bohman",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_option_parses_back_to_itself() {
        for &literal in SpectrumColor::OPTIONS {
            assert_eq!(SpectrumColor::parse(literal).unwrap().as_str(), literal);
        }
        for &literal in SpectrumScale::OPTIONS {
            assert_eq!(SpectrumScale::parse(literal).unwrap().as_str(), literal);
        }
        for &literal in WindowFunction::OPTIONS {
            assert_eq!(WindowFunction::parse(literal).unwrap().as_str(), literal);
        }
        assert_eq!(SpectrumColor::OPTIONS.len(), 15);
        assert_eq!(SpectrumScale::OPTIONS.len(), 6);
        assert_eq!(WindowFunction::OPTIONS.len(), 21);
    }

    #[test]
    fn unknown_or_miscased_values_are_rejected() {
        assert!(matches!(
            SpectrumColor::parse("Intensity"),
            Err(CoreError::InvalidChoice { name: "spec_color", .. })
        ));
        assert!(matches!(
            SpectrumScale::parse("6thrt"),
            Err(CoreError::InvalidChoice { name: "spec_scale", .. })
        ));
        assert!(matches!(
            WindowFunction::parse(""),
            Err(CoreError::InvalidChoice { name: "spec_win_func", .. })
        ));
    }
}
