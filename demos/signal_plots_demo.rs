//! Signal plotting demonstration
//!
//! Renders a two-tone signal in the time domain, the frequency domain and the
//! combined layouts, writing one HTML page per figure.

use signal_plots::{
    AmplitudeScale, Figure, FreqPlotConfig, Sides, SpectrumMode, TfLayout, TimePlotConfig,
    plot_freq, plot_tf, plot_time, sine_wave,
};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Signal Plots Demo");
    println!("=================");

    let fs = 1000.0;
    let n = 1000;
    let low = sine_wave::<f64>(50.0, fs, n, 1.0);
    let high = sine_wave::<f64>(120.0, fs, n, 0.5);
    let signal = &low + &high;

    let out_dir = std::env::temp_dir().join("signal_plots_demo");
    println!("Writing figures to {}", out_dir.display());
    let path = |name: &str| -> PathBuf { out_dir.join(name) };

    // Time domain, one panel per scale
    let mut figure = Figure::subplots(2)?.with_title("Time Domain");
    plot_time(
        signal.view(),
        Some(fs),
        &mut figure.axes_mut()[0],
        &TimePlotConfig::default().with_title("Linear"),
    )?;
    plot_time(
        signal.view(),
        None,
        &mut figure.axes_mut()[1],
        &TimePlotConfig::default()
            .with_scale(AmplitudeScale::Db)
            .with_sides(Sides::Twosided)
            .with_title("Two-sided, dB"),
    )?;
    figure.write_html(path("time.html"), true)?;
    println!("✓ time.html");

    // Spectra, one panel per mode
    let mut figure = Figure::subplots(3)?.with_hspace(0.5);
    let modes = [SpectrumMode::Magnitude, SpectrumMode::Phase, SpectrumMode::Psd];
    for (ax, mode) in figure.axes_mut().iter_mut().zip(modes) {
        let config = FreqPlotConfig::default()
            .with_mode(mode)
            .with_scale(AmplitudeScale::Db);
        plot_freq(signal.view(), fs, ax, &config)?;
    }
    figure.write_html(path("spectra.html"), true)?;
    println!("✓ spectra.html");

    // Stem plot of a short excerpt, configured from string options
    let config = FreqPlotConfig::from_kwargs(&[("scale", "linear"), ("stem", "true")])?;
    let mut figure = Figure::new();
    plot_freq(signal.slice(ndarray::s![..64]), fs, figure.gca(), &config)?;
    figure.write_html(path("stem.html"), true)?;
    println!("✓ stem.html");

    for (layout, name) in [
        (TfLayout::TimeFreq, "time_freq.html"),
        (TfLayout::MagPhase, "mag_phase.html"),
    ] {
        let figure = plot_tf(signal.view(), fs, layout)?;
        figure.write_html(path(name), true)?;
        println!("✓ {name}");
    }

    println!();
    println!("Open the HTML files in a browser to view the plots.");
    Ok(())
}
