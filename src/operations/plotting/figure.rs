//! Figure composition and rendering.
//!
//! A [`Figure`] owns a vertical stack of [`Axes`] and converts them into a
//! single Plotly plot, one pair of numbered x/y axes per panel.

use std::path::Path;

use plotly::Plot;
use plotly::common::{Anchor, Mode};
use plotly::layout::{Annotation, Axis, Layout};
use plotly::{Scatter, Trace};

use super::axes::{Axes, Series, SeriesKind};
use super::core::{LineStyle, PlotTheme};
use crate::{PlotError, PlotResult};

/// Largest number of stacked panels a figure can hold.
pub const MAX_AXES: usize = 8;

/// An ordered vertical stack of plot panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    axes: Vec<Axes>,
    hspace: f64,
    title: Option<String>,
    size: (u32, u32),
    theme: PlotTheme,
}

impl Default for Figure {
    fn default() -> Self {
        Self::new()
    }
}

impl Figure {
    /// Create an empty figure
    pub fn new() -> Self {
        Self {
            axes: Vec::new(),
            hspace: 0.2,
            title: None,
            size: (1200, 900),
            theme: PlotTheme::default(),
        }
    }

    /// Create a figure with `rows` empty panels stacked top to bottom.
    ///
    /// # Errors
    /// [`PlotError::InvalidConfig`] if `rows` is zero or above [`MAX_AXES`].
    pub fn subplots(rows: usize) -> PlotResult<Self> {
        if rows == 0 || rows > MAX_AXES {
            return Err(PlotError::invalid_config("rows", rows.to_string()));
        }
        let mut figure = Self::new();
        figure.axes = vec![Axes::new(); rows];
        Ok(figure)
    }

    /// Set the vertical gap between panels as a fraction of the mean panel height.
    ///
    /// Negative and non-finite values are clamped to 0.
    pub fn with_hspace(mut self, hspace: f64) -> Self {
        self.set_hspace(hspace);
        self
    }

    /// Set the overall title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the output size in pixels
    pub const fn with_size(mut self, size: (u32, u32)) -> Self {
        self.size = size;
        self
    }

    /// Set the theme
    pub fn with_theme(mut self, theme: PlotTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Adjust the vertical gap between panels in place, clamped like [`Figure::with_hspace`].
    pub fn set_hspace(&mut self, hspace: f64) {
        self.hspace = if hspace.is_finite() { hspace.max(0.0) } else { 0.0 };
    }

    /// Vertical gap between panels.
    pub const fn hspace(&self) -> f64 {
        self.hspace
    }

    /// Append a new empty panel at the bottom and return it.
    ///
    /// # Errors
    /// [`PlotError::InvalidConfig`] if the figure already holds [`MAX_AXES`] panels.
    pub fn add_axes(&mut self) -> PlotResult<&mut Axes> {
        if self.axes.len() >= MAX_AXES {
            return Err(PlotError::invalid_config(
                "rows",
                (self.axes.len() + 1).to_string(),
            ));
        }
        self.axes.push(Axes::new());
        Ok(self.current_axes())
    }

    /// The current (most recently added) panel, creating one if the figure is empty.
    pub fn gca(&mut self) -> &mut Axes {
        if self.axes.is_empty() {
            self.axes.push(Axes::new());
        }
        self.current_axes()
    }

    fn current_axes(&mut self) -> &mut Axes {
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }

    /// All panels, top to bottom.
    pub fn axes(&self) -> &[Axes] {
        &self.axes
    }

    /// Mutable access to all panels, top to bottom.
    pub fn axes_mut(&mut self) -> &mut [Axes] {
        &mut self.axes
    }

    /// Vertical `[bottom, top]` paper domains of each panel, top panel first.
    ///
    /// Every panel has the same height `h`; consecutive panels are separated
    /// by `hspace * h`.
    pub fn panel_domains(&self) -> Vec<[f64; 2]> {
        let rows = self.axes.len();
        if rows == 0 {
            return Vec::new();
        }
        let height = 1.0 / (rows as f64 + (rows - 1) as f64 * self.hspace);
        let gap = self.hspace * height;
        (0..rows)
            .map(|i| {
                let top = 1.0 - i as f64 * (height + gap);
                [(top - height).max(0.0), top]
            })
            .collect()
    }

    /// Build the Plotly plot for this figure.
    pub fn to_plot(&self) -> Plot {
        let mut plot = Plot::new();
        let mut layout = self
            .theme
            .to_plotly_layout(self.title.as_deref())
            .width(self.size.0 as usize)
            .height(self.size.1 as usize);

        let mut annotations = Vec::new();

        for (idx, (axes, domain)) in self.axes.iter().zip(self.panel_domains()).enumerate() {
            let (x_ref, y_ref) = axis_refs(idx);

            for (series_idx, series) in axes.series().iter().enumerate() {
                let style = LineStyle {
                    color: self.theme.color_palette.get_color(series_idx),
                    width: series.line_width,
                };
                for trace in series_traces(series, &style, &x_ref, &y_ref) {
                    plot.add_trace(trace);
                }
            }

            let x_axis = self
                .theme
                .create_axis(axes.x_label(), axes.grid_enabled(), axes.x_scale(), axes.use_offset())
                .domain(&[0.0, 1.0])
                .anchor(&y_ref);
            let y_axis = self
                .theme
                .create_axis(axes.y_label(), axes.grid_enabled(), Default::default(), axes.use_offset())
                .domain(&domain)
                .anchor(&x_ref);
            layout = set_axes(layout, idx + 1, x_axis, y_axis);

            if let Some(title) = axes.title() {
                annotations.push(
                    Annotation::new()
                        .text(title)
                        .font(self.theme.axes_title_font())
                        .x_ref("paper")
                        .y_ref("paper")
                        .x(0.5)
                        .y(domain[1])
                        .x_anchor(Anchor::Center)
                        .y_anchor(Anchor::Bottom)
                        .show_arrow(false),
                );
            }
        }

        let has_legend = self
            .axes
            .iter()
            .flat_map(Axes::series)
            .any(|series| series.label.is_some());
        layout = layout.show_legend(has_legend);
        if !annotations.is_empty() {
            layout = layout.annotations(annotations);
        }

        plot.set_layout(layout);
        plot
    }

    /// Self-contained interactive HTML page.
    pub fn to_html(&self) -> String {
        self.to_plot().to_html()
    }

    /// Plotly JSON description of the figure.
    pub fn to_json(&self) -> String {
        self.to_plot().to_json()
    }

    /// Write the figure as an HTML page.
    ///
    /// # Errors
    /// [`PlotError::Io`] if the parent directory cannot be created or the file
    /// cannot be written.
    pub fn write_html<P: AsRef<Path>>(&self, path: P, create_parent: bool) -> PlotResult<()> {
        write_output(path.as_ref(), &self.to_html(), create_parent)
    }

    /// Write the figure's Plotly JSON.
    ///
    /// # Errors
    /// [`PlotError::Io`] if the parent directory cannot be created or the file
    /// cannot be written.
    pub fn write_json<P: AsRef<Path>>(&self, path: P, create_parent: bool) -> PlotResult<()> {
        write_output(path.as_ref(), &self.to_json(), create_parent)
    }
}

fn write_output(path: &Path, contents: &str, create_parent: bool) -> PlotResult<()> {
    if create_parent {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote figure");
    Ok(())
}

/// Plotly axis ids for the panel at `idx` (`x`/`y`, then `x2`/`y2`, ...).
fn axis_refs(idx: usize) -> (String, String) {
    if idx == 0 {
        ("x".to_string(), "y".to_string())
    } else {
        (format!("x{}", idx + 1), format!("y{}", idx + 1))
    }
}

fn set_axes(layout: Layout, number: usize, x_axis: Axis, y_axis: Axis) -> Layout {
    match number {
        1 => layout.x_axis(x_axis).y_axis(y_axis),
        2 => layout.x_axis2(x_axis).y_axis2(y_axis),
        3 => layout.x_axis3(x_axis).y_axis3(y_axis),
        4 => layout.x_axis4(x_axis).y_axis4(y_axis),
        5 => layout.x_axis5(x_axis).y_axis5(y_axis),
        6 => layout.x_axis6(x_axis).y_axis6(y_axis),
        7 => layout.x_axis7(x_axis).y_axis7(y_axis),
        // MAX_AXES bounds the panel count
        _ => layout.x_axis8(x_axis).y_axis8(y_axis),
    }
}

fn series_traces(series: &Series, style: &LineStyle, x_ref: &str, y_ref: &str) -> Vec<Box<dyn Trace>> {
    match series.kind {
        SeriesKind::Line => {
            let mut trace = Scatter::new(series.x.clone(), series.y.clone())
                .mode(Mode::Lines)
                .line(style.to_plotly_line())
                .x_axis(x_ref)
                .y_axis(y_ref);
            match series.label {
                Some(ref name) => trace = trace.name(name),
                None => trace = trace.show_legend(false),
            }
            vec![trace as Box<dyn Trace>]
        }
        SeriesKind::Stem => {
            // One gap-separated trace for all stems: NaN breaks the line
            let mut stem_x = Vec::with_capacity(series.x.len() * 3);
            let mut stem_y = Vec::with_capacity(series.y.len() * 3);
            for (&x, &y) in series.x.iter().zip(&series.y) {
                stem_x.extend([x, x, f64::NAN]);
                stem_y.extend([0.0, y, f64::NAN]);
            }
            let stems = Scatter::new(stem_x, stem_y)
                .mode(Mode::Lines)
                .line(style.to_plotly_line())
                .connect_gaps(false)
                .show_legend(false)
                .x_axis(x_ref)
                .y_axis(y_ref);

            let mut heads = Scatter::new(series.x.clone(), series.y.clone())
                .mode(Mode::Markers)
                .marker(style.to_plotly_marker())
                .x_axis(x_ref)
                .y_axis(y_ref);
            match series.label {
                Some(ref name) => heads = heads.name(name),
                None => heads = heads.show_legend(false),
            }
            vec![stems as Box<dyn Trace>, heads as Box<dyn Trace>]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::plotting::core::AxisScale;

    #[test]
    fn test_subplots_bounds() {
        assert_eq!(Figure::subplots(2).unwrap().axes().len(), 2);
        assert!(matches!(
            Figure::subplots(0),
            Err(PlotError::InvalidConfig { parameter: "rows", .. })
        ));
        assert!(Figure::subplots(MAX_AXES + 1).is_err());
    }

    #[test]
    fn test_gca_creates_then_reuses() {
        let mut figure = Figure::new();
        figure.gca().set_title("first");
        figure.gca().set_ylabel("y");
        assert_eq!(figure.axes().len(), 1);
        assert_eq!(figure.axes()[0].title(), Some("first"));

        figure.add_axes().unwrap().set_title("second");
        assert_eq!(figure.gca().title(), Some("second"));
    }

    #[test]
    fn test_add_axes_stops_at_max() {
        let mut figure = Figure::subplots(MAX_AXES).unwrap();
        assert!(figure.add_axes().is_err());
        assert_eq!(figure.axes().len(), MAX_AXES);
    }

    #[test]
    fn test_panel_domains_follow_hspace() {
        let figure = Figure::subplots(2).unwrap().with_hspace(0.6);
        let domains = figure.panel_domains();
        let height = 1.0 / 2.6;
        assert!((domains[0][1] - 1.0).abs() < 1e-12);
        assert!((domains[0][0] - (1.0 - height)).abs() < 1e-12);
        assert!((domains[1][1] - height).abs() < 1e-12);
        assert!(domains[1][0].abs() < 1e-12);
        // gap = 0.6 * height
        assert!((domains[0][0] - domains[1][1] - 0.6 * height).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_hspace_is_clamped() {
        let figure = Figure::subplots(3).unwrap().with_hspace(-5.0);
        assert_eq!(figure.hspace(), 0.0);
        for [bottom, top] in figure.panel_domains() {
            assert!(bottom >= 0.0 && top <= 1.0 && top > bottom);
        }

        let mut figure = Figure::subplots(2).unwrap();
        figure.set_hspace(f64::NAN);
        assert_eq!(figure.hspace(), 0.0);
        figure.set_hspace(f64::INFINITY);
        assert_eq!(figure.hspace(), 0.0);
    }

    #[test]
    fn test_single_panel_fills_paper() {
        let mut figure = Figure::new();
        figure.gca();
        assert_eq!(figure.panel_domains(), vec![[0.0, 1.0]]);
        assert!(Figure::new().panel_domains().is_empty());
    }

    #[test]
    fn test_json_contains_log_axis_and_titles() {
        let mut figure = Figure::subplots(2).unwrap();
        figure.axes_mut()[0]
            .set_title("Top panel")
            .plot(vec![0.0, 1.0], vec![1.0, 2.0], Some("trace"), 2.0)
            .unwrap();
        figure.axes_mut()[1]
            .set_xscale(AxisScale::Log)
            .set_ylabel("Magnitude / dB")
            .stem(vec![1.0, 10.0], vec![3.0, 4.0], None, 1.4)
            .unwrap();

        let json = figure.to_json();
        assert!(json.contains("\"log\""));
        assert!(json.contains("Top panel"));
        assert!(json.contains("Magnitude / dB"));
        assert!(json.contains("\"x2\""));
        assert!(json.contains("\"y2\""));
    }

    #[test]
    fn test_stem_series_renders_two_traces() {
        let series = Series {
            x: vec![0.0, 1.0],
            y: vec![2.0, -1.0],
            kind: SeriesKind::Stem,
            label: None,
            line_width: 1.4,
        };
        let traces = series_traces(&series, &LineStyle::default(), "x", "y");
        assert_eq!(traces.len(), 2);
    }

    #[test]
    fn test_write_html_creates_parent() {
        let dir = std::env::temp_dir().join(format!("signal_plots_test_{}", std::process::id()));
        let path = dir.join("nested").join("figure.html");

        let mut figure = Figure::new().with_title(String::from("Written"));
        figure.gca().plot(vec![0.0, 1.0], vec![0.0, 1.0], None, 1.0).unwrap();
        figure.write_html(&path, true).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Written"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
