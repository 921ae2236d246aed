//! src/panels/graph.rs
//!
//! Chart panel: renders one chart model with a stats row above it.
//!
//! Lines are drawn from each series' interpolated polyline; a filled series
//! also gets bar columns from zero up to the curve underneath its line.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::graph::ChartModel;

pub struct GraphPanel<'a> {
    pub chart: &'a ChartModel,
}

impl<'a> GraphPanel<'a> {
    pub fn new(chart: &'a ChartModel) -> Self {
        Self { chart }
    }

    /// "name: last" for every series, or a waiting note before the first tick.
    fn stats_text(&self) -> String {
        if self.chart.is_empty() {
            return "waiting for data".to_string();
        }
        self.chart
            .series
            .iter()
            .map(|s| {
                let last = s.points.last().map(|p| p.1).unwrap_or(0.0);
                format!("{}: {:.2}", s.config.name, last)
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

impl crate::ui::Panel for GraphPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let stats = Paragraph::new(self.stats_text())
            .block(Block::default().title("Latest").borders(Borders::ALL));
        f.render_widget(stats, chunks[0]);

        let mut datasets: Vec<Dataset> = Vec::new();
        for series in &self.chart.series {
            if series.config.fill {
                datasets.push(
                    Dataset::default()
                        .marker(symbols::Marker::Braille)
                        .graph_type(GraphType::Bar)
                        .style(
                            Style::default()
                                .fg(series.config.color)
                                .add_modifier(Modifier::DIM),
                        )
                        .data(&series.line),
                );
            }
            datasets.push(
                Dataset::default()
                    .name(series.config.name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(series.config.color))
                    .data(&series.line),
            );
        }

        let (xmin, xmax) = self.chart.x_bounds();
        let (ymin, ymax) = self.chart.y_bounds();

        let span = (ymax - ymin).max(1e-9);
        let y_labels: Vec<String> = (0..5)
            .map(|i| format!("{:.1}", ymin + span * (i as f64) / 4.0))
            .collect();

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(self.chart.config.title.clone())
                    .borders(Borders::ALL),
            )
            .x_axis(
                Axis::default()
                    .title("Time")
                    .bounds([xmin, xmax])
                    .labels(self.chart.axis_labels()),
            )
            .y_axis(
                Axis::default()
                    .title(self.chart.config.y_title.clone())
                    .bounds([ymin, ymax])
                    .labels(y_labels),
            );

        f.render_widget(chart, chunks[1]);
    }
}
