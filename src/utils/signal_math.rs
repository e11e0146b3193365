//! Elementary array transforms used by the plotting helpers.
//!
//! These mirror the small set of array-library primitives the plots rely on:
//! decibel conversion, time vectors, spectrum reordering, phase unwrapping and
//! the one-sided frequency bin vector. All of them return freshly allocated
//! `f64` arrays.
//!
//! # Examples
//!
//! ```rust
//! use signal_plots::utils::signal_math::{amplitude_to_db, time_vector_onesided};
//! use ndarray::array;
//!
//! let db = amplitude_to_db(array![1.0, 10.0, -100.0].view());
//! for (got, want) in db.iter().zip([0.0, 20.0, 40.0]) {
//!     assert!((got - want).abs() < 1e-9);
//! }
//!
//! let t = time_vector_onesided(4, 2.0);
//! assert_eq!(t.to_vec(), vec![0.0, 0.5, 1.0, 1.5]);
//! ```

use std::f64::consts::PI;

use ndarray::{Array1, ArrayView1};

/// Converts amplitudes to decibels: `20 * log10(|x|)` elementwise.
///
/// There is no floor. A zero amplitude maps to negative infinity, the way the
/// plotted data would show it.
pub fn amplitude_to_db(values: ArrayView1<'_, f64>) -> Array1<f64> {
    values.mapv(|x| 20.0 * x.abs().log10())
}

/// Time vector `{0, 1/fs, ..., (n-1)/fs}` for a signal of `n` samples.
pub fn time_vector_onesided(n: usize, fs: f64) -> Array1<f64> {
    Array1::from_iter((0..n).map(|i| i as f64 / fs))
}

/// Symmetric time vector for a signal of `n` samples.
///
/// `n` points evenly spaced from `floor(-n / 2)` to `n / 2` (integer division),
/// divided by `fs`. For odd `n` the range is not centred on zero: five samples
/// span `-3 .. 2`.
pub fn time_vector_twosided(n: usize, fs: f64) -> Array1<f64> {
    let n_signed = n as i64;
    let start = (-n_signed).div_euclid(2) as f64;
    let end = (n_signed / 2) as f64;
    Array1::linspace(start, end, n).mapv_into(|t| t / fs)
}

/// Moves the second half of a sequence in front of the first half.
///
/// Rolls the data by `n / 2` positions, so index `n / 2` of the output holds
/// the first input element.
pub fn fftshift<T: Clone>(values: ArrayView1<'_, T>) -> Array1<T> {
    let n = values.len();
    let shift = n / 2;
    Array1::from_iter((0..n).map(|j| values[(j + n - shift) % n].clone()))
}

/// Removes 2π jumps from a phase sequence in radians.
///
/// Whenever two adjacent values differ by at least π, a multiple of 2π is
/// added to every following value so the step falls back into `[-π, π]`.
/// A step of exactly +π is kept as +π.
pub fn unwrap_phase(phase: ArrayView1<'_, f64>) -> Array1<f64> {
    let mut unwrapped = phase.to_owned();
    let mut correction = 0.0;

    for i in 1..phase.len() {
        let step = phase[i] - phase[i - 1];
        let mut wrapped = (step + PI).rem_euclid(2.0 * PI) - PI;
        if wrapped == -PI && step > 0.0 {
            wrapped = PI;
        }
        if step.abs() >= PI {
            correction += wrapped - step;
        }
        unwrapped[i] = phase[i] + correction;
    }

    unwrapped
}

/// Frequency bins of a one-sided FFT of `n` samples taken at rate `fs`.
///
/// Returns `n / 2 + 1` bins spaced `fs / n` apart, starting at 0 Hz.
pub fn rfft_frequencies(n: usize, fs: f64) -> Array1<f64> {
    let spacing = 1.0 / (n as f64 * (1.0 / fs));
    Array1::from_iter((0..=n / 2).map(|k| k as f64 * spacing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;
    use ndarray::array;

    #[test]
    fn test_db_of_known_amplitudes() {
        let db = amplitude_to_db(array![1.0, 0.1, 100.0, -10.0].view());
        assert_eq!(db[0], 0.0);
        assert_approx_eq!(db[1], -20.0, 1e-9);
        assert_approx_eq!(db[2], 40.0, 1e-9);
        assert_approx_eq!(db[3], 20.0, 1e-9);
    }

    #[test]
    fn test_db_of_zero_is_negative_infinity() {
        let db = amplitude_to_db(array![0.0].view());
        assert!(db[0].is_infinite() && db[0] < 0.0);
    }

    #[test]
    fn test_onesided_time_vector() {
        let t = time_vector_onesided(5, 4.0);
        assert_eq!(t.to_vec(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(time_vector_onesided(0, 4.0).is_empty());
    }

    #[test]
    fn test_twosided_time_vector_even_length() {
        let t = time_vector_twosided(4, 1.0);
        assert_eq!(t.len(), 4);
        assert_approx_eq!(t[0], -2.0, 1e-12);
        assert_approx_eq!(t[3], 2.0, 1e-12);
        assert!((t[1] + 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_twosided_time_vector_odd_length_is_skewed() {
        let t = time_vector_twosided(5, 2.0);
        let expected = [-1.5, -0.875, -0.25, 0.375, 1.0];
        for (got, want) in t.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} != {want}");
        }
    }

    #[test]
    fn test_fftshift_even_and_odd() {
        assert_eq!(
            fftshift(array![0, 1, 2, 3].view()).to_vec(),
            vec![2, 3, 0, 1]
        );
        assert_eq!(
            fftshift(array![0, 1, 2, 3, 4].view()).to_vec(),
            vec![3, 4, 0, 1, 2]
        );
        assert!(fftshift(Array1::<f64>::zeros(0).view()).is_empty());
    }

    #[test]
    fn test_unwrap_removes_jumps() {
        let wrapped = array![3.0, -3.0, 3.0, -3.0];
        let unwrapped = unwrap_phase(wrapped.view());
        for pair in unwrapped.windows(2) {
            assert!((pair[1] - pair[0]).abs() <= PI);
        }
        assert_eq!(unwrapped[0], 3.0);
        assert!((unwrapped[1] - (2.0 * PI - 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_unwrap_leaves_small_steps_alone() {
        let phase = array![0.0, 0.5, 1.0, 0.2, -1.0];
        assert_eq!(unwrap_phase(phase.view()), phase);
    }

    #[test]
    fn test_rfft_frequencies() {
        let freqs = rfft_frequencies(8, 16.0);
        assert_eq!(freqs.to_vec(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert_eq!(rfft_frequencies(7, 7.0).len(), 4);
    }
}
