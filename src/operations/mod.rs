//! Spectral computations and signal plots.
//!
//! ## Module Organization
//!
//! - [`types`] - Enumerated plot options (scale, sides, mode, layout)
//! - [`spectral`] - One-sided FFT and the spectral transform behind the frequency plots
//! - [`plotting`] - Axes, figures and the time/frequency plotting functions

pub mod spectral;
pub mod types;

#[cfg(feature = "plotting")]
pub mod plotting;

pub use spectral::{rfft, spectral_helper};
pub use types::{AmplitudeScale, Sides, SpectrumMode, TfLayout};
