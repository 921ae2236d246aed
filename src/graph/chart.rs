//! src/graph/chart.rs
//!
//! Chart models fed from buffer snapshots: the flow chart (X and Y series)
//! and the filled height chart.

use ratatui::style::Color;

use super::buffer::Snapshot;
use super::config::{ChartConfig, SeriesConfig};
use super::spline::{LINE_TENSION, STEPS_PER_SEGMENT, interpolate};

/// One plotted series: raw window data plus its interpolated polyline.
#[derive(Debug)]
pub struct Series {
    pub config: SeriesConfig,
    /// (index, value) pairs, oldest first.
    pub points: Vec<(f64, f64)>,
    /// `points` densified with the chart's line tension.
    pub line: Vec<(f64, f64)>,
}

impl Series {
    fn new(config: SeriesConfig) -> Self {
        Self {
            config,
            points: Vec::new(),
            line: Vec::new(),
        }
    }

    fn set_values(&mut self, values: &[f64]) {
        self.points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect();
        self.line = interpolate(&self.points, LINE_TENSION, STEPS_PER_SEGMENT);
    }
}

#[derive(Debug)]
pub struct ChartModel {
    pub config: ChartConfig,
    /// Time labels, one per sample.
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartModel {
    /// Empty chart: no labels, no data.
    pub fn new(config: ChartConfig, series: Vec<SeriesConfig>) -> Self {
        Self {
            config,
            labels: Vec::new(),
            series: series.into_iter().map(Series::new).collect(),
        }
    }

    /// Replace labels and series data; `columns[i]` feeds `series[i]`.
    pub fn set_data(&mut self, labels: &[String], columns: &[&[f64]]) {
        self.labels = labels.to_vec();
        for (series, values) in self.series.iter_mut().zip(columns) {
            series.set_values(values);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// X extent of the window (sample indices).
    pub fn x_bounds(&self) -> (f64, f64) {
        let last = self.labels.len().saturating_sub(1) as f64;
        (0.0, last.max(1.0))
    }

    /// Y extent over every series with padding.
    ///
    /// Falls back to `config.y_range` when there is no finite data.
    pub fn y_bounds(&self) -> (f64, f64) {
        let mut mn = f64::INFINITY;
        let mut mx = f64::NEG_INFINITY;
        for &(_, y) in self.series.iter().flat_map(|s| s.points.iter()) {
            if !y.is_finite() {
                continue;
            }
            mn = mn.min(y);
            mx = mx.max(y);
        }
        if !mn.is_finite() || !mx.is_finite() {
            return self.config.y_range;
        }
        if (mx - mn).abs() < f64::EPSILON {
            // flat data: absolute padding so the line stays visible
            let pad = mn.abs().max(1.0) * 0.1;
            (mn - pad, mx + pad)
        } else {
            let pad = (mx - mn) * 0.1;
            (mn - pad, mx + pad)
        }
    }

    /// First, middle and last time labels for the x axis.
    pub fn axis_labels(&self) -> Vec<String> {
        match self.labels.len() {
            0 => Vec::new(),
            1 => vec![self.labels[0].clone()],
            2 => self.labels.clone(),
            n => vec![
                self.labels[0].clone(),
                self.labels[(n - 1) / 2].clone(),
                self.labels[n - 1].clone(),
            ],
        }
    }
}

/// Both dashboard charts.
#[derive(Debug)]
pub struct Charts {
    pub flow: ChartModel,
    pub height: ChartModel,
}

impl Charts {
    pub fn new() -> Self {
        let flow = ChartModel::new(
            ChartConfig::new("Optical Flow", "Flow", (-100.0, 100.0)),
            vec![
                SeriesConfig::line("Flow X", Color::Red),
                SeriesConfig::line("Flow Y", Color::Blue),
            ],
        );
        let height = ChartModel::new(
            ChartConfig::new("Height", "Height (mm)", (0.0, 1000.0)),
            vec![SeriesConfig::filled("Height (mm)", Color::Cyan)],
        );
        Self { flow, height }
    }

    /// Replace both charts' contents with the buffer window.
    pub fn update(&mut self, snapshot: &Snapshot) {
        self.flow.set_data(
            &snapshot.timestamps,
            &[snapshot.flow_x.as_slice(), snapshot.flow_y.as_slice()],
        );
        self.height
            .set_data(&snapshot.timestamps, &[snapshot.height.as_slice()]);
    }
}

impl Default for Charts {
    fn default() -> Self {
        Self::new()
    }
}
