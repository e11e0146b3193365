//! Time-domain, frequency-domain and combined signal plots.
//!
//! Each function draws onto a caller-supplied [`Axes`] and returns the same
//! handle. To draw on "the current axes" use [`Figure::gca`]:
//!
//! ```rust
//! use signal_plots::{Figure, TimePlotConfig, plot_time, sine_wave};
//!
//! # fn example() -> signal_plots::PlotResult<()> {
//! let tone = sine_wave::<f64>(5.0, 100.0, 100, 1.0);
//! let mut figure = Figure::new();
//! plot_time(tone.view(), Some(100.0), figure.gca(), &TimePlotConfig::default())?;
//! assert_eq!(figure.axes()[0].x_label(), Some("t / s"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::axes::Axes;
use super::core::AxisScale;
use super::figure::Figure;
use crate::operations::spectral::{spectral_helper, validate_signal};
use crate::operations::types::{AmplitudeScale, Sides, SpectrumMode, TfLayout};
use crate::utils::signal_math::{
    amplitude_to_db, fftshift, time_vector_onesided, time_vector_twosided,
};
use crate::{PlotError, PlotResult, PlotSample};

const ONESIDED_LINE_WIDTH: f64 = 2.0;
const TWOSIDED_LINE_WIDTH: f64 = 1.0;
const SPECTRUM_LINE_WIDTH: f64 = 1.4;

/// Vertical gap between the two panels of [`plot_tf`].
pub const TF_HSPACE: f64 = 0.6;

/// Options for [`plot_time`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePlotConfig {
    /// Amplitude scale of the plotted samples
    pub scale: AmplitudeScale,
    /// Sample ordering along the time axis
    pub sides: Sides,
    /// Panel title; left unset when `None`
    pub title: Option<String>,
    /// Legend label of the drawn line
    pub label: Option<String>,
}

impl TimePlotConfig {
    /// Set the amplitude scale
    pub const fn with_scale(mut self, scale: AmplitudeScale) -> Self {
        self.scale = scale;
        self
    }

    /// Set the sample ordering
    pub const fn with_sides(mut self, sides: Sides) -> Self {
        self.sides = sides;
        self
    }

    /// Set the panel title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the legend label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builds a config from keyword-style string pairs.
    ///
    /// Recognised keys: `scale`, `sides`, `title`, `label`. Other keys are
    /// ignored.
    ///
    /// # Errors
    /// [`PlotError::InvalidConfig`] if `scale` or `sides` holds an unknown value.
    pub fn from_kwargs(kwargs: &[(&str, &str)]) -> PlotResult<Self> {
        let mut config = Self::default();
        for &(key, value) in kwargs {
            match key {
                "scale" => config.scale = value.parse()?,
                "sides" => config.sides = value.parse()?,
                "title" => config.title = Some(value.to_string()),
                "label" => config.label = Some(value.to_string()),
                other => tracing::warn!(key = other, "ignoring unknown time plot option"),
            }
        }
        Ok(config)
    }
}

/// Options for [`plot_freq`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FreqPlotConfig {
    /// Amplitude scale of magnitude and PSD values (phase is never scaled)
    pub scale: AmplitudeScale,
    /// Spectrum quantity
    pub mode: SpectrumMode,
    /// Draw stems instead of a continuous line
    pub stem: bool,
    /// Accepted for symmetry with [`TimePlotConfig`]; the spectrum is always one-sided
    pub sides: Option<Sides>,
    /// Panel title; a mode-specific default is used when `None`
    pub title: Option<String>,
}

impl FreqPlotConfig {
    /// Set the amplitude scale
    pub const fn with_scale(mut self, scale: AmplitudeScale) -> Self {
        self.scale = scale;
        self
    }

    /// Set the spectrum quantity
    pub const fn with_mode(mut self, mode: SpectrumMode) -> Self {
        self.mode = mode;
        self
    }

    /// Draw stems instead of a line
    pub const fn with_stem(mut self, stem: bool) -> Self {
        self.stem = stem;
        self
    }

    /// Set the accepted-but-ignored sides option
    pub const fn with_sides(mut self, sides: Sides) -> Self {
        self.sides = Some(sides);
        self
    }

    /// Set the panel title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builds a config from keyword-style string pairs.
    ///
    /// Recognised keys: `scale`, `mode`, `stem` (`true`/`false`), `sides`,
    /// `title`. Other keys are ignored.
    ///
    /// # Errors
    /// [`PlotError::InvalidConfig`] if `scale`, `mode`, `stem` or `sides` holds
    /// an unknown value.
    pub fn from_kwargs(kwargs: &[(&str, &str)]) -> PlotResult<Self> {
        let mut config = Self::default();
        for &(key, value) in kwargs {
            match key {
                "scale" => config.scale = value.parse()?,
                "mode" => config.mode = value.parse()?,
                "stem" => {
                    config.stem = value
                        .parse()
                        .map_err(|_| PlotError::invalid_config("stem", value))?;
                }
                "sides" => config.sides = Some(value.parse()?),
                "title" => config.title = Some(value.to_string()),
                other => tracing::warn!(key = other, "ignoring unknown frequency plot option"),
            }
        }
        Ok(config)
    }

    /// Default panel title for the configured mode.
    pub const fn default_title(&self) -> &'static str {
        match self.mode {
            SpectrumMode::Magnitude => "Magnitude Spectrum",
            SpectrumMode::Phase => "Phase Spectrum",
            SpectrumMode::Psd => "Power Density Spectrum",
        }
    }
}

/// Plots a signal against time.
///
/// Without a sampling rate the x axis counts samples (`fs = 1`, label
/// `"Samples"`); with one it is in seconds (`"t / s"`). In `Linear` scale the
/// real part of each sample is plotted; in `Db` scale its absolute value is
/// converted to `20 log10(|x|)`, so complex signals plot their modulus. `Twosided` swaps
/// the halves of the (possibly converted) signal and plots it against a
/// symmetric time vector.
///
/// Grid lines are turned on and offset notation off. Returns `ax`.
///
/// # Errors
/// [`PlotError::EmptySignal`] for an empty signal and
/// [`PlotError::InvalidSampleRate`] for a non-positive or non-finite `fs`.
pub fn plot_time<'a, S: PlotSample>(
    signal: ArrayView1<'_, S>,
    fs: Option<f64>,
    ax: &'a mut Axes,
    config: &TimePlotConfig,
) -> PlotResult<&'a mut Axes> {
    let fs_value = fs.unwrap_or(1.0);
    validate_signal(signal.len(), fs_value)?;
    tracing::debug!(
        n = signal.len(),
        fs = fs_value,
        scale = %config.scale,
        sides = %config.sides,
        "plotting time domain"
    );

    ax.set_xlabel(if fs.is_some() { "t / s" } else { "Samples" });

    let n = signal.len();
    let values = match config.scale {
        AmplitudeScale::Linear => {
            ax.set_ylabel("Amplitude (linear)");
            signal.mapv(S::real_part)
        }
        AmplitudeScale::Db => {
            ax.set_ylabel("Amplitude / dB");
            amplitude_to_db(signal.mapv(S::magnitude).view())
        }
    };

    let label = config.label.as_deref();
    match config.sides {
        Sides::Onesided => {
            let t = time_vector_onesided(n, fs_value);
            ax.plot(t.iter().copied(), values.iter().copied(), label, ONESIDED_LINE_WIDTH)?;
        }
        Sides::Twosided => {
            let t = time_vector_twosided(n, fs_value);
            let shifted = fftshift(values.view());
            ax.plot(t.iter().copied(), shifted.iter().copied(), label, TWOSIDED_LINE_WIDTH)?;
        }
    }

    if let Some(title) = &config.title {
        ax.set_title(title.as_str());
    }
    ax.grid(true).set_use_offset(false);
    Ok(ax)
}

/// Plots the one-sided spectrum of a signal.
///
/// The spectrum comes from [`spectral_helper`]. The y label follows the scale
/// (`"Magnitude (linear)"` / `"Magnitude / dB"`) except in `Phase` mode
/// (`"Phase / rad"`) and `Psd` mode (`"dB / Hz"`). Without an explicit title
/// the panel gets a mode-specific default. Returns `ax`.
///
/// # Errors
/// [`PlotError::EmptySignal`] for an empty signal and
/// [`PlotError::InvalidSampleRate`] for a non-positive or non-finite `fs`.
pub fn plot_freq<'a, S: PlotSample>(
    signal: ArrayView1<'_, S>,
    fs: f64,
    ax: &'a mut Axes,
    config: &FreqPlotConfig,
) -> PlotResult<&'a mut Axes> {
    tracing::debug!(
        n = signal.len(),
        fs,
        scale = %config.scale,
        mode = %config.mode,
        stem = config.stem,
        "plotting frequency domain"
    );
    let (result, freqs) = spectral_helper(signal, fs, config.scale, config.mode)?;

    match config.scale {
        AmplitudeScale::Linear => ax.set_ylabel("Magnitude (linear)"),
        AmplitudeScale::Db => ax.set_ylabel("Magnitude / dB"),
    };

    let title = config
        .title
        .clone()
        .unwrap_or_else(|| config.default_title().to_string());
    ax.set_title(title);
    match config.mode {
        SpectrumMode::Magnitude => {}
        SpectrumMode::Phase => {
            ax.set_ylabel("Phase / rad");
        }
        SpectrumMode::Psd => {
            ax.set_ylabel("dB / Hz");
        }
    }

    let (x, y) = (freqs.iter().copied(), result.iter().copied());
    if config.stem {
        ax.stem(x, y, None, SPECTRUM_LINE_WIDTH)?;
    } else {
        ax.plot(x, y, None, SPECTRUM_LINE_WIDTH)?;
    }

    ax.set_xlabel("f / Hz").grid(true).set_use_offset(false);
    Ok(ax)
}

/// Plots a signal in two stacked panels.
///
/// - [`TfLayout::TimeFreq`]: linear time plot on top; dB magnitude spectrum
///   below on a logarithmic frequency axis.
/// - [`TfLayout::MagPhase`]: dB magnitude spectrum on top; phase spectrum below.
///
/// # Errors
/// Same as [`plot_time`] and [`plot_freq`].
///
/// # Examples
///
/// ```rust
/// use signal_plots::{AxisScale, TfLayout, plot_tf, sine_wave};
///
/// let tone = sine_wave::<f64>(50.0, 1000.0, 1000, 1.0);
/// let figure = plot_tf(tone.view(), 1000.0, "time+freq".parse()?)?;
/// assert_eq!(figure.axes()[1].x_scale(), AxisScale::Log);
/// # Ok::<(), signal_plots::PlotError>(())
/// ```
pub fn plot_tf<S: PlotSample>(
    signal: ArrayView1<'_, S>,
    fs: f64,
    layout: TfLayout,
) -> PlotResult<Figure> {
    tracing::debug!(n = signal.len(), fs, layout = %layout, "plotting combined view");
    let mut figure = Figure::subplots(2)?.with_hspace(TF_HSPACE);

    match layout {
        TfLayout::TimeFreq => {
            plot_time(signal, Some(fs), &mut figure.axes_mut()[0], &TimePlotConfig::default())?;
            let ax2 = &mut figure.axes_mut()[1];
            plot_freq(
                signal,
                fs,
                ax2,
                &FreqPlotConfig::default().with_scale(AmplitudeScale::Db),
            )?;
            ax2.set_xscale(AxisScale::Log);
        }
        TfLayout::MagPhase => {
            plot_freq(
                signal,
                fs,
                &mut figure.axes_mut()[0],
                &FreqPlotConfig::default().with_scale(AmplitudeScale::Db),
            )?;
            plot_freq(
                signal,
                fs,
                &mut figure.axes_mut()[1],
                &FreqPlotConfig::default().with_mode(SpectrumMode::Phase),
            )?;
        }
    }

    Ok(figure)
}
