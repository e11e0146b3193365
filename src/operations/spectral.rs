//! One-sided spectral estimates for the frequency-domain plots.
//!
//! A single forward FFT is computed with rustfft and reduced to the
//! non-negative frequency bins. [`spectral_helper`] then derives the plotted
//! quantity from it.

use ndarray::{Array1, ArrayView1};
use rustfft::{FftPlanner, num_complex::Complex};

use super::types::{AmplitudeScale, SpectrumMode};
use crate::utils::signal_math::{amplitude_to_db, rfft_frequencies, unwrap_phase};
use crate::{PlotError, PlotResult, PlotSample};

/// Checks the implicit preconditions shared by every plot: at least one sample
/// and a positive, finite sampling rate.
pub(crate) fn validate_signal(len: usize, fs: f64) -> PlotResult<()> {
    if len == 0 {
        return Err(PlotError::EmptySignal);
    }
    if !(fs.is_finite() && fs > 0.0) {
        return Err(PlotError::InvalidSampleRate(fs));
    }
    Ok(())
}

/// Computes the one-sided FFT of a real signal.
///
/// Returns the `N / 2 + 1` bins from 0 Hz up to and including Nyquist (for
/// even `N`). Complex samples contribute only their real part.
///
/// # Errors
/// Returns [`PlotError::EmptySignal`] if the signal has no samples.
pub fn rfft<S: PlotSample>(signal: ArrayView1<'_, S>) -> PlotResult<Array1<Complex<f64>>> {
    if signal.is_empty() {
        return Err(PlotError::EmptySignal);
    }

    let mut buffer: Vec<Complex<f64>> = signal
        .iter()
        .map(|&x| Complex::new(x.real_part(), 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    buffer.truncate(signal.len() / 2 + 1);
    Ok(Array1::from_vec(buffer))
}

/// Spectrum of `signal` in the requested mode and scale, with its frequency bins.
///
/// The steps are applied in this order:
/// 1. `Psd`: `|X|² / (N fs)`; `Magnitude`: `(2/N) |X|`; `Phase`: unwrapped `arg(X)`
/// 2. `Db` scale (all modes except `Phase`): `20 log10(|r|)`
/// 3. otherwise, for `Psd` only: `r / 2`
///
/// The dB path for `Psd` skips the halving in step 3.
///
/// Returns `(result, freqs)`, both of length `N / 2 + 1`.
///
/// # Errors
/// [`PlotError::EmptySignal`] for an empty signal and
/// [`PlotError::InvalidSampleRate`] when `fs` is not positive and finite.
///
/// # Examples
///
/// ```rust
/// use signal_plots::{AmplitudeScale, SpectrumMode, sine_wave, spectral_helper};
///
/// // 4 Hz tone, amplitude 3, one second at 64 Hz
/// let tone = sine_wave::<f64>(4.0, 64.0, 64, 3.0);
/// let (mag, freqs) =
///     spectral_helper(tone.view(), 64.0, AmplitudeScale::Linear, SpectrumMode::Magnitude)?;
/// assert_eq!(freqs[4], 4.0);
/// assert!((mag[4] - 3.0).abs() < 1e-9);
/// # Ok::<(), signal_plots::PlotError>(())
/// ```
pub fn spectral_helper<S: PlotSample>(
    signal: ArrayView1<'_, S>,
    fs: f64,
    scale: AmplitudeScale,
    mode: SpectrumMode,
) -> PlotResult<(Array1<f64>, Array1<f64>)> {
    validate_signal(signal.len(), fs)?;

    let n = signal.len();
    let spectrum = rfft(signal)?;
    let freqs = rfft_frequencies(n, fs);

    let mut result = match mode {
        SpectrumMode::Psd => spectrum.mapv(|x| x.norm().powi(2) / (n as f64 * fs)),
        SpectrumMode::Magnitude => spectrum.mapv(|x| 2.0 / n as f64 * x.norm()),
        SpectrumMode::Phase => unwrap_phase(spectrum.mapv(|x| x.arg()).view()),
    };

    if scale == AmplitudeScale::Db && mode != SpectrumMode::Phase {
        result = amplitude_to_db(result.view());
    } else if mode == SpectrumMode::Psd {
        result.mapv_inplace(|x| x / 2.0);
    }

    tracing::trace!(
        n,
        fs,
        %scale,
        %mode,
        bins = result.len(),
        "computed one-sided spectrum"
    );

    Ok((result, freqs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::generation::{cosine_wave, sine_wave};
    use approx_eq::assert_approx_eq;
    use ndarray::array;
    use std::f64::consts::PI;

    #[test]
    fn test_rfft_length_and_dc() {
        let signal = array![1.0f64, 2.0, 3.0, 4.0];
        let spectrum = rfft(signal.view()).unwrap();
        assert_eq!(spectrum.len(), 3);
        assert_approx_eq!(spectrum[0].re, 10.0, 1e-12);
        assert!(spectrum[0].im.abs() < 1e-12);
        // X[2] = 1 - 2 + 3 - 4
        assert_approx_eq!(spectrum[2].re, -2.0, 1e-12);

        let odd = array![1.0f32, 0.0, 0.0, 0.0, 0.0];
        assert_eq!(rfft(odd.view()).unwrap().len(), 3);
    }

    #[test]
    fn test_magnitude_peak_matches_sine_amplitude() {
        let fs = 1000.0;
        let tone = sine_wave::<f64>(50.0, fs, 1000, 0.7);
        let (mag, freqs) = spectral_helper(
            tone.view(),
            fs,
            AmplitudeScale::Linear,
            SpectrumMode::Magnitude,
        )
        .unwrap();

        assert_eq!(mag.len(), 501);
        assert_eq!(freqs[50], 50.0);
        assert_approx_eq!(mag[50], 0.7, 1e-6);

        let (peak_bin, _) = mag
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |best, (i, &v)| if v > best.1 { (i, v) } else { best });
        assert_eq!(peak_bin, 50);
    }

    #[test]
    fn test_magnitude_db_of_unit_tone_is_zero() {
        let tone = cosine_wave::<f64>(8.0, 128.0, 128, 1.0);
        let (db, _) =
            spectral_helper(tone.view(), 128.0, AmplitudeScale::Db, SpectrumMode::Magnitude)
                .unwrap();
        assert!(db[8].abs() < 1e-9);
    }

    #[test]
    fn test_psd_halving_only_without_db() {
        let signal = array![1.0f64, -0.5, 0.25, 2.0, -1.0, 0.0, 0.5, 1.5];
        let n = signal.len() as f64;
        let fs = 10.0;

        let spectrum = rfft(signal.view()).unwrap();
        let raw: Vec<f64> = spectrum
            .iter()
            .map(|x| x.norm().powi(2) / (n * fs))
            .collect();

        let (linear, _) =
            spectral_helper(signal.view(), fs, AmplitudeScale::Linear, SpectrumMode::Psd).unwrap();
        let (db, _) =
            spectral_helper(signal.view(), fs, AmplitudeScale::Db, SpectrumMode::Psd).unwrap();

        for k in 0..raw.len() {
            assert!((linear[k] - raw[k] / 2.0).abs() < 1e-12);
            assert!((db[k] - 20.0 * raw[k].log10()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_phase_is_unwrapped_and_ignores_db() {
        // Delayed impulse: linear phase -2πk·d/N wraps many times
        let mut signal = Array1::<f64>::zeros(64);
        signal[13] = 1.0;

        let (linear, _) =
            spectral_helper(signal.view(), 1.0, AmplitudeScale::Linear, SpectrumMode::Phase)
                .unwrap();
        let (db, _) =
            spectral_helper(signal.view(), 1.0, AmplitudeScale::Db, SpectrumMode::Phase).unwrap();

        assert_eq!(linear, db);
        for pair in linear.windows(2) {
            assert!((pair[1] - pair[0]).abs() <= PI);
        }
        let slope = -2.0 * PI * 13.0 / 64.0;
        assert!((linear[10] - 10.0 * slope).abs() < 1e-9);
    }

    #[test]
    fn test_complex_signal_uses_real_part() {
        let real = array![1.0f64, -0.5, 0.25, 2.0, -1.0, 0.0];
        let complex = real.mapv(|x| Complex::new(x, 3.0 * x + 1.0));

        let (from_real, _) =
            spectral_helper(real.view(), 8.0, AmplitudeScale::Db, SpectrumMode::Magnitude)
                .unwrap();
        let (from_complex, _) =
            spectral_helper(complex.view(), 8.0, AmplitudeScale::Db, SpectrumMode::Magnitude)
                .unwrap();
        assert_eq!(from_real, from_complex);
    }

    #[test]
    fn test_invalid_inputs() {
        let empty = Array1::<f64>::zeros(0);
        assert!(matches!(
            spectral_helper(empty.view(), 1.0, AmplitudeScale::Linear, SpectrumMode::Magnitude),
            Err(PlotError::EmptySignal)
        ));

        let signal = array![1.0f64, 2.0];
        for fs in [0.0, -8000.0, f64::NAN] {
            assert!(matches!(
                spectral_helper(signal.view(), fs, AmplitudeScale::Linear, SpectrumMode::Psd),
                Err(PlotError::InvalidSampleRate(_))
            ));
        }
    }
}
