//! src/graph/config.rs
//!
//! Static per-chart configuration: titles and the fallback y-range.

use ratatui::style::Color;

#[derive(Clone, Debug)]
pub struct ChartConfig {
    /// Block title shown around the chart.
    pub title: String,

    /// Y-axis caption.
    pub y_title: String,

    /// Y-range used while the chart has no data.
    pub y_range: (f64, f64),
}

impl ChartConfig {
    pub fn new(title: &str, y_title: &str, y_range: (f64, f64)) -> Self {
        Self {
            title: title.to_string(),
            y_title: y_title.to_string(),
            y_range,
        }
    }
}

/// Static per-series configuration.
#[derive(Clone, Debug)]
pub struct SeriesConfig {
    pub name: String,
    pub color: Color,
    /// Fill the area between the line and zero.
    pub fill: bool,
}

impl SeriesConfig {
    pub fn line(name: &str, color: Color) -> Self {
        Self {
            name: name.to_string(),
            color,
            fill: false,
        }
    }

    pub fn filled(name: &str, color: Color) -> Self {
        Self {
            fill: true,
            ..Self::line(name, color)
        }
    }
}
