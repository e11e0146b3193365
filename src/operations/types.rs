//! Enumerated options accepted by the plotting functions.
//!
//! Every option parses from the same lower-case spelling it displays as, and
//! anything else is rejected with [`PlotError::InvalidConfig`]. Matching is
//! case-sensitive: `"db"` is a scale, `"dB"` is not.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{PlotError, PlotResult};

/// Amplitude scale applied to plotted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmplitudeScale {
    /// Values are plotted unchanged.
    #[default]
    Linear,
    /// Values are plotted as `20 * log10(|x|)`.
    Db,
}

/// How a time-domain signal is laid out along its time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sides {
    /// Samples in order against `0 .. (N-1)/fs`.
    #[default]
    Onesided,
    /// Halves swapped and plotted against a symmetric time vector.
    Twosided,
}

/// Which quantity of the spectrum is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpectrumMode {
    /// One-sided amplitude spectrum, `(2/N)|X|`.
    #[default]
    Magnitude,
    /// Unwrapped phase in radians.
    Phase,
    /// Power spectral density, `|X|² / (N fs)`.
    Psd,
}

/// Panel arrangement of the combined two-axes figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TfLayout {
    /// Linear time plot on top, dB magnitude spectrum with log frequency axis below.
    #[default]
    #[serde(rename = "time+freq")]
    TimeFreq,
    /// dB magnitude spectrum on top, phase spectrum below.
    #[serde(rename = "mag+pha")]
    MagPhase,
}

macro_rules! string_option {
    ($ty:ty, $parameter:literal, { $($variant:path => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// The string this option parses from.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($variant => $name,)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = PlotError;

            fn from_str(s: &str) -> PlotResult<Self> {
                match s {
                    $($name => Ok($variant),)+
                    other => Err(PlotError::invalid_config($parameter, other)),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_option!(AmplitudeScale, "scale", {
    AmplitudeScale::Linear => "linear",
    AmplitudeScale::Db => "db",
});

string_option!(Sides, "sides", {
    Sides::Onesided => "onesided",
    Sides::Twosided => "twosided",
});

string_option!(SpectrumMode, "mode", {
    SpectrumMode::Magnitude => "magnitude",
    SpectrumMode::Phase => "phase",
    SpectrumMode::Psd => "psd",
});

string_option!(TfLayout, "config", {
    TfLayout::TimeFreq => "time+freq",
    TfLayout::MagPhase => "mag+pha",
});
