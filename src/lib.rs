// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)] // Duplicate match arms
// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains
// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(missing_docs)] // Documentation is a must for release

//! # signal_plots
//!
//! Convenience functions for plotting a signal in the time domain, the
//! frequency domain, or both, on top of [`plotly`], [`ndarray`] and [`rustfft`].
//!
//! ## Overview
//!
//! The crate computes a few derived views of a signal and draws them with
//! axis labels, titles and grid lines:
//!
//! - amplitude against time, in linear or decibel scale ([`plot_time`])
//! - magnitude, phase or power spectral density against frequency ([`plot_freq`])
//! - both at once in two stacked panels ([`plot_tf`])
//!
//! Plots are drawn onto an explicit [`Axes`] handle owned by a [`Figure`]. A
//! figure renders to a self-contained HTML page or to Plotly JSON.
//!
//! ## Quick Start
//!
//! ```rust
//! use signal_plots::{TfLayout, plot_tf, sine_wave};
//!
//! # fn example() -> signal_plots::PlotResult<()> {
//! // 50 Hz tone, one second at 1 kHz
//! let tone = sine_wave::<f64>(50.0, 1000.0, 1000, 1.0);
//!
//! let figure = plot_tf(tone.view(), 1000.0, TfLayout::TimeFreq)?;
//! assert_eq!(figure.axes()[0].y_label(), Some("Amplitude (linear)"));
//! assert_eq!(figure.axes()[1].y_label(), Some("Magnitude / dB"));
//!
//! let html = figure.to_html();
//! assert!(html.contains("Magnitude Spectrum"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## String Options
//!
//! Every option also parses from its lower-case name, and unknown names fail
//! with [`PlotError::InvalidConfig`]:
//!
//! ```rust
//! use signal_plots::{AmplitudeScale, FreqPlotConfig, PlotError, SpectrumMode};
//!
//! let config = FreqPlotConfig::from_kwargs(&[("scale", "db"), ("mode", "psd")]).unwrap();
//! assert_eq!(config.scale, AmplitudeScale::Db);
//! assert_eq!(config.mode, SpectrumMode::Psd);
//!
//! let err = "power".parse::<SpectrumMode>().unwrap_err();
//! assert!(matches!(err, PlotError::InvalidConfig { parameter: "mode", .. }));
//! ```
//!
//! ## Spectral Values
//!
//! [`spectral_helper`] exposes the numbers behind the frequency plots. For a
//! signal of `N` samples at rate `fs` and one-sided FFT `X`:
//!
//! | mode | linear | dB |
//! |---|---|---|
//! | magnitude | `(2/N) abs(X)` | `20 log10((2/N) abs(X))` |
//! | phase | unwrapped `arg(X)` | same as linear |
//! | psd | `abs(X)^2 / (2 N fs)` | `20 log10(abs(X)^2 / (N fs))` |
//!
//! The dB PSD is taken before the one-sided halving that the linear PSD gets.
//!
//! ## Logging
//!
//! Plot calls emit [`tracing`] events at `debug` level and spectrum
//! computations at `trace` level. No subscriber is installed by the library.
//!
//! ## Features
//!
//! - `plotting` (default): axes, figures and the plot functions (adds `plotly`).
//!   Without it only the spectral and signal-math helpers are built.

mod error;

pub mod operations;
pub mod utils;

use std::fmt::Debug;

use num_complex::Complex;
use num_traits::{Float, FloatConst, NumCast};

pub use crate::error::{PlotError, PlotResult};
pub use crate::operations::{
    AmplitudeScale, Sides, SpectrumMode, TfLayout, rfft, spectral_helper,
};
#[cfg(feature = "plotting")]
pub use crate::operations::plotting::{
    Axes, AxisScale, ColorPalette, Figure, FreqPlotConfig, LineStyle, MAX_AXES, PlotTheme,
    Series, SeriesKind, TimePlotConfig, plot_freq, plot_tf, plot_time,
};
pub use crate::utils::{
    generation::{cosine_wave, sine_wave},
    signal_math::{
        amplitude_to_db, fftshift, rfft_frequencies, time_vector_onesided, time_vector_twosided,
        unwrap_phase,
    },
};

/// Marker trait for real floating-point sample types (f32, f64)
pub trait RealFloat: Float + FloatConst + NumCast + Debug + Send + Sync + 'static {}

impl RealFloat for f32 {}
impl RealFloat for f64 {}

/// A signal sample the plots accept: a real float or a complex value.
///
/// Time plots show the real part in linear scale and `20 log10(|x|)` in dB.
/// The one-sided FFT reads only the real part, so the imaginary part of a
/// complex signal does not reach the spectrum.
///
/// # Examples
/// ```
/// use num_complex::Complex;
/// use signal_plots::PlotSample;
///
/// let z = Complex::new(3.0f64, -4.0);
/// assert_eq!(z.real_part(), 3.0);
/// assert_eq!(z.magnitude(), 5.0);
/// assert_eq!((-2.0f32).magnitude(), 2.0);
/// ```
pub trait PlotSample: Copy + Debug + Send + Sync + 'static {
    /// Real component as `f64`.
    fn real_part(self) -> f64;

    /// Absolute value (modulus for complex samples) as `f64`.
    fn magnitude(self) -> f64;
}

macro_rules! impl_plot_sample {
    ($($float:ty),+) => {
        $(
            impl PlotSample for $float {
                #[inline]
                fn real_part(self) -> f64 {
                    to_precision::<f64, _>(self)
                }

                #[inline]
                fn magnitude(self) -> f64 {
                    to_precision::<f64, _>(self.abs())
                }
            }

            impl PlotSample for Complex<$float> {
                #[inline]
                fn real_part(self) -> f64 {
                    to_precision::<f64, _>(self.re)
                }

                #[inline]
                fn magnitude(self) -> f64 {
                    to_precision::<f64, _>(self.norm())
                }
            }
        )+
    };
}

impl_plot_sample!(f32, f64);

/// Casts a numeric value into the target floating-point type `F`.
///
/// Uses `num_traits::NumCast::from`. In generic code this lets one
/// implementation serve both `f32` and `f64` without explicit `as` casts.
///
/// # Examples
/// ```
/// use signal_plots::to_precision;
///
/// let value_f32: f32 = to_precision(42i32);
/// assert_eq!(value_f32, 42.0);
///
/// let value_f64: f64 = to_precision(0.5f32);
/// assert_eq!(value_f64, 0.5);
/// ```
///
/// # Panics
/// Panics if the value is not representable in `F`. This cannot happen for
/// primitive integers and floats converted to `f32`/`f64`.
#[inline(always)]
pub fn to_precision<F, T>(value: T) -> F
where
    F: RealFloat,
    T: NumCast,
{
    NumCast::from(value).expect("safe_cast: valid numeric conversion")
}
