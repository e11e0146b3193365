//! Test signal generation.
//!
//! Small generators for pure tones, used to exercise the plots with signals
//! whose spectrum is known in advance.

use ndarray::Array1;
use num_traits::FloatConst;

use crate::{RealFloat, to_precision};

/// Generates `num_samples` samples of `amplitude * sin(2π f t)`.
///
/// # Arguments
/// * `frequency` - Frequency of the sine wave in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `num_samples` - Number of samples to generate
/// * `amplitude` - Peak amplitude
///
/// # Examples
///
/// ```rust
/// use signal_plots::sine_wave;
///
/// let tone = sine_wave::<f64>(1.0, 4.0, 4, 2.0);
/// assert!(tone[0].abs() < 1e-12);
/// assert!((tone[1] - 2.0).abs() < 1e-12);
/// ```
pub fn sine_wave<F: RealFloat>(
    frequency: F,
    sample_rate: F,
    num_samples: usize,
    amplitude: F,
) -> Array1<F> {
    let two_pi_freq = to_precision::<F, _>(2.0) * <F as FloatConst>::PI() * frequency;
    Array1::from_iter((0..num_samples).map(|i| {
        let t = to_precision::<F, _>(i) / sample_rate;
        amplitude * (two_pi_freq * t).sin()
    }))
}

/// Generates `num_samples` samples of `amplitude * cos(2π f t)`.
///
/// Same arguments as [`sine_wave`].
pub fn cosine_wave<F: RealFloat>(
    frequency: F,
    sample_rate: F,
    num_samples: usize,
    amplitude: F,
) -> Array1<F> {
    let two_pi_freq = to_precision::<F, _>(2.0) * <F as FloatConst>::PI() * frequency;
    Array1::from_iter((0..num_samples).map(|i| {
        let t = to_precision::<F, _>(i) / sample_rate;
        amplitude * (two_pi_freq * t).cos()
    }))
}
