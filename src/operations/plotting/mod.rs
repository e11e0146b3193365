//! Signal plotting on top of Plotly.
//!
//! The plotting functions decorate an explicit [`Axes`] handle instead of an
//! implicit "current axes". A [`Figure`] owns one or more stacked axes and
//! renders them into a single Plotly plot.
//!
//! # Quick Start
//!
//! ```rust
//! use signal_plots::{FreqPlotConfig, SpectrumMode, Figure, plot_freq, sine_wave};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tone = sine_wave::<f64>(440.0, 8000.0, 8000, 0.5);
//!
//! let mut figure = Figure::subplots(2)?.with_title("A4");
//! plot_freq(tone.view(), 8000.0, &mut figure.axes_mut()[0], &FreqPlotConfig::default())?;
//! plot_freq(
//!     tone.view(),
//!     8000.0,
//!     &mut figure.axes_mut()[1],
//!     &FreqPlotConfig::default().with_mode(SpectrumMode::Phase),
//! )?;
//!
//! let html = figure.to_html();
//! assert!(html.contains("Phase Spectrum"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod axes;
pub mod core;
pub mod figure;
pub mod signal_plots;

pub use self::axes::*;
pub use self::core::*;
pub use self::figure::*;
pub use self::signal_plots::*;
