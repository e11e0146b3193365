//! The drawing-context handle the plotting functions decorate.
//!
//! An [`Axes`] is one panel of a [`Figure`](super::Figure). It records what
//! has been drawn on it (series, labels, title, grid, x scale) as plain data;
//! nothing is rendered until the owning figure is converted to Plotly.

use super::core::AxisScale;
use crate::{PlotError, PlotResult};

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Continuous line through consecutive points.
    Line,
    /// A vertical stem from zero to each point, capped with a marker.
    Stem,
}

/// One drawn data series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// X coordinates
    pub x: Vec<f64>,
    /// Y coordinates, same length as `x`
    pub y: Vec<f64>,
    /// Line or stem
    pub kind: SeriesKind,
    /// Legend entry, if any
    pub label: Option<String>,
    /// Line width in pixels
    pub line_width: f64,
}

/// A single plot panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    grid: bool,
    x_scale: AxisScale,
    use_offset: bool,
    series: Vec<Series>,
}

impl Default for Axes {
    fn default() -> Self {
        Self::new()
    }
}

impl Axes {
    /// An empty panel: no labels, no grid, linear x axis.
    pub const fn new() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            grid: false,
            x_scale: AxisScale::Linear,
            use_offset: true,
            series: Vec::new(),
        }
    }

    /// Sets the panel title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the x-axis label.
    pub fn set_xlabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(label.into());
        self
    }

    /// Sets the y-axis label.
    pub fn set_ylabel(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(label.into());
        self
    }

    /// Turns grid lines on or off.
    pub const fn grid(&mut self, visible: bool) -> &mut Self {
        self.grid = visible;
        self
    }

    /// Sets the x-axis scale.
    pub const fn set_xscale(&mut self, scale: AxisScale) -> &mut Self {
        self.x_scale = scale;
        self
    }

    /// Controls offset/exponent notation on tick labels.
    pub const fn set_use_offset(&mut self, use_offset: bool) -> &mut Self {
        self.use_offset = use_offset;
        self
    }

    /// Draws a line through `(x, y)`.
    ///
    /// # Errors
    /// [`PlotError::LengthMismatch`] if `x` and `y` differ in length.
    pub fn plot(
        &mut self,
        x: impl IntoIterator<Item = f64>,
        y: impl IntoIterator<Item = f64>,
        label: Option<&str>,
        line_width: f64,
    ) -> PlotResult<&mut Self> {
        self.push_series(x, y, SeriesKind::Line, label, line_width)
    }

    /// Draws stems from zero up (or down) to each `(x, y)`.
    ///
    /// # Errors
    /// [`PlotError::LengthMismatch`] if `x` and `y` differ in length.
    pub fn stem(
        &mut self,
        x: impl IntoIterator<Item = f64>,
        y: impl IntoIterator<Item = f64>,
        label: Option<&str>,
        line_width: f64,
    ) -> PlotResult<&mut Self> {
        self.push_series(x, y, SeriesKind::Stem, label, line_width)
    }

    fn push_series(
        &mut self,
        x: impl IntoIterator<Item = f64>,
        y: impl IntoIterator<Item = f64>,
        kind: SeriesKind,
        label: Option<&str>,
        line_width: f64,
    ) -> PlotResult<&mut Self> {
        let x: Vec<f64> = x.into_iter().collect();
        let y: Vec<f64> = y.into_iter().collect();
        if x.len() != y.len() {
            return Err(PlotError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        self.series.push(Series {
            x,
            y,
            kind,
            label: label.map(str::to_string),
            line_width,
        });
        Ok(self)
    }

    /// Removes all series and decorations.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Panel title, if set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// X-axis label, if set.
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }

    /// Y-axis label, if set.
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }

    /// Whether grid lines are shown.
    pub const fn grid_enabled(&self) -> bool {
        self.grid
    }

    /// Current x-axis scale.
    pub const fn x_scale(&self) -> AxisScale {
        self.x_scale
    }

    /// Whether tick labels may use offset/exponent notation.
    pub const fn use_offset(&self) -> bool {
        self.use_offset
    }

    /// Series drawn so far, in drawing order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorations_are_recorded() {
        let mut ax = Axes::new();
        ax.set_title("Spectrum")
            .set_xlabel("f / Hz")
            .set_ylabel("Magnitude")
            .grid(true)
            .set_xscale(AxisScale::Log)
            .set_use_offset(false);

        assert_eq!(ax.title(), Some("Spectrum"));
        assert_eq!(ax.x_label(), Some("f / Hz"));
        assert_eq!(ax.y_label(), Some("Magnitude"));
        assert!(ax.grid_enabled());
        assert_eq!(ax.x_scale(), AxisScale::Log);
        assert!(!ax.use_offset());
    }

    #[test]
    fn test_plot_and_stem_append_series() {
        let mut ax = Axes::new();
        ax.plot(vec![0.0, 1.0], vec![2.0, 3.0], Some("a"), 2.0).unwrap();
        ax.stem([0.0, 1.0, 2.0], [1.0, -1.0, 0.5], None, 1.4).unwrap();

        let series = ax.series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].kind, SeriesKind::Line);
        assert_eq!(series[0].label.as_deref(), Some("a"));
        assert_eq!(series[1].kind, SeriesKind::Stem);
        assert_eq!(series[1].y, vec![1.0, -1.0, 0.5]);
    }

    #[test]
    fn test_mismatched_lengths_are_rejected() {
        let mut ax = Axes::new();
        let err = ax.plot(vec![0.0, 1.0, 2.0], vec![1.0], None, 1.0).unwrap_err();
        assert!(matches!(err, PlotError::LengthMismatch { x: 3, y: 1 }));
        assert!(ax.series().is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut ax = Axes::new();
        ax.set_title("t").grid(true);
        ax.plot([1.0], [1.0], None, 1.0).unwrap();
        ax.clear();
        assert_eq!(ax, Axes::new());
    }
}
