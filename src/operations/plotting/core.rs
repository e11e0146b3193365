//! Styling primitives shared by every figure.
//!
//! Colours, line styles and the theme that turns an [`Axes`](super::Axes)
//! collection into Plotly layout objects.

use plotly::common::{ExponentFormat, Font, Line, Marker, MarkerSymbol, Title};
use plotly::layout::{Axis, AxisType, Layout};
use serde::{Deserialize, Serialize};

/// Scale of an x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    /// Evenly spaced ticks.
    #[default]
    Linear,
    /// Logarithmic axis (base 10).
    Log,
}

impl AxisScale {
    fn to_plotly(self) -> AxisType {
        match self {
            AxisScale::Linear => AxisType::Linear,
            AxisScale::Log => AxisType::Log,
        }
    }
}

/// Colour cycle used for consecutive series on one axes.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ColorPalette {
    /// The ten-colour "tab10" cycle.
    #[default]
    Default,
    /// A darker eight-colour cycle suited to print.
    Scientific,
    /// Caller-supplied colours; an empty list falls back to [`ColorPalette::Default`].
    Custom(Vec<String>),
}

impl ColorPalette {
    /// Colour for the `index`-th series, wrapping around the cycle.
    pub fn get_color(&self, index: usize) -> String {
        const TAB10: [&str; 10] = [
            "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2",
            "#7f7f7f", "#bcbd22", "#17becf",
        ];
        match self {
            ColorPalette::Scientific => {
                let colors = [
                    "#0c5da5", // blue
                    "#00b945", // green
                    "#ff9500", // orange
                    "#ff2c00", // red
                    "#845b97", // purple
                    "#474747", // dark gray
                    "#9e9e9e", // gray
                    "#1b9e77", // teal
                ];
                colors[index % colors.len()].to_string()
            }
            ColorPalette::Custom(colors) if !colors.is_empty() => {
                colors[index % colors.len()].clone()
            }
            _ => TAB10[index % TAB10.len()].to_string(),
        }
    }
}

/// Style configuration for line traces
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Hex colour or CSS colour name
    pub color: String,
    /// Line width in pixels
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: "#1f77b4".to_string(),
            width: 1.5,
        }
    }
}

impl LineStyle {
    /// Converts to a Plotly line description.
    pub fn to_plotly_line(&self) -> Line {
        Line::new().color(self.color.clone()).width(self.width)
    }

    /// Filled circle marker in the same colour, used for stem heads.
    pub fn to_plotly_marker(&self) -> Marker {
        let size = (self.width * 4.0).round().max(4.0) as usize;
        Marker::new()
            .color(self.color.clone())
            .size(size)
            .symbol(MarkerSymbol::Circle)
    }
}

/// Theme configuration for plots
#[derive(Debug, Clone, PartialEq)]
pub struct PlotTheme {
    /// Paper and plot-area background
    pub background_color: String,
    /// Grid line colour
    pub grid_color: String,
    /// Colour of titles, labels and ticks
    pub text_color: String,
    /// CSS font family
    pub font_family: String,
    /// Base font size
    pub font_size: f64,
    /// Font size of figure and axes titles
    pub title_font_size: f64,
    /// Font size of axis labels
    pub label_font_size: f64,
    /// Font size of tick labels
    pub tick_font_size: f64,
    /// Grid line width in pixels
    pub grid_line_width: f64,
    /// Colour cycle for series
    pub color_palette: ColorPalette,
}

impl PlotTheme {
    fn font(&self, size: f64) -> Font {
        Font::new()
            .family(&self.font_family)
            .size(size as usize)
            .color(self.text_color.clone())
    }

    /// Base layout carrying fonts, background and the optional figure title.
    pub fn to_plotly_layout(&self, title: Option<&str>) -> Layout {
        let mut layout = Layout::new()
            .font(self.font(self.font_size))
            .paper_background_color(self.background_color.clone())
            .plot_background_color(self.background_color.clone());

        if let Some(title_text) = title {
            layout = layout.title(Title::with_text(title_text).font(self.font(self.title_font_size)));
        }

        layout
    }

    /// Axis with the theme's fonts and grid colour.
    ///
    /// `use_offset == false` turns off exponent notation on tick labels so
    /// values are printed in full.
    pub fn create_axis(
        &self,
        label: Option<&str>,
        grid: bool,
        scale: AxisScale,
        use_offset: bool,
    ) -> Axis {
        let mut axis = Axis::new()
            .tick_font(self.font(self.tick_font_size))
            .grid_color(self.grid_color.clone())
            .grid_width(self.grid_line_width as usize)
            .show_grid(grid)
            .type_(scale.to_plotly());

        if let Some(label) = label {
            axis = axis.title(Title::with_text(label).font(self.font(self.label_font_size)));
        }
        if !use_offset {
            axis = axis.exponent_format(ExponentFormat::None);
        }
        axis
    }

    /// Font used for per-axes titles.
    pub fn axes_title_font(&self) -> Font {
        self.font(self.title_font_size)
    }
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            grid_color: "#b0b0b0".to_string(),
            text_color: "#000000".to_string(),
            font_family: "DejaVu Sans, Arial, sans-serif".to_string(),
            font_size: 12.0,
            title_font_size: 14.0,
            label_font_size: 12.0,
            tick_font_size: 11.0,
            grid_line_width: 1.0,
            color_palette: ColorPalette::Default,
        }
    }
}

/// Theme variants
impl PlotTheme {
    /// Dark background for on-screen viewing.
    pub fn dark() -> Self {
        Self {
            background_color: "#191919".to_string(),
            grid_color: "#3c3c3c".to_string(),
            text_color: "#f0f0f0".to_string(),
            color_palette: ColorPalette::Default,
            ..Self::default()
        }
    }

    /// Lighter grid and a print-oriented colour cycle.
    pub fn scientific() -> Self {
        Self {
            grid_color: "#ebebeb".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            font_size: 14.0,
            title_font_size: 18.0,
            label_font_size: 16.0,
            tick_font_size: 12.0,
            color_palette: ColorPalette::Scientific,
            ..Self::default()
        }
    }
}
