//! Error types and result utilities for signal plotting operations.

use thiserror::Error;

/// Convenience type alias for results that may contain a [`PlotError`]
pub type PlotResult<T> = Result<T, PlotError>;

/// Error types that can occur while computing or rendering a signal plot.
#[derive(Error, Debug)]
pub enum PlotError {
    /// A configuration value is outside its enumerated legal set.
    ///
    /// Raised for `scale`, `sides`, `mode` and the combined-plot layout whenever
    /// the supplied string does not name one of the known variants.
    #[error("Invalid {parameter}: '{value}'")]
    InvalidConfig {
        /// Name of the offending parameter (`scale`, `sides`, `mode`, `config`)
        parameter: &'static str,
        /// The rejected value as supplied by the caller
        value: String,
    },

    /// The signal has no samples, so no time vector or spectrum exists.
    #[error("Signal must contain at least one sample")]
    EmptySignal,

    /// The sampling rate is zero, negative or not finite.
    #[error("Invalid sampling rate: {0} (must be positive and finite)")]
    InvalidSampleRate(f64),

    /// X and Y coordinates handed to a drawing call differ in length.
    #[error("Dimension mismatch: x has {x} values, y has {y}")]
    LengthMismatch {
        /// Number of x values
        x: usize,
        /// Number of y values
        y: usize,
    },

    /// Writing rendered output failed.
    #[error("I/O error while writing plot: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Builds an [`PlotError::InvalidConfig`] for `parameter` holding `value`.
    pub fn invalid_config(parameter: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter,
            value: value.into(),
        }
    }
}
