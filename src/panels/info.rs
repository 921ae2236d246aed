//! src/panels/info.rs
//!
//! Live read-out: latest flow, height, quality and update time, plus window fill.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::vector::format_number;
use crate::net::Reading;

/// Most recent successful reading and when it arrived.
#[derive(Clone, Debug)]
pub struct LiveValues {
    pub reading: Reading,
    pub updated_at: String,
}

pub struct InfoPanel<'a> {
    pub live: Option<&'a LiveValues>,
    pub buffered: usize,
    pub capacity: usize,
}

impl<'a> InfoPanel<'a> {
    pub fn new(live: Option<&'a LiveValues>, buffered: usize, capacity: usize) -> Self {
        Self {
            live,
            buffered,
            capacity,
        }
    }

    /// (label, value) rows; placeholders until the first reading.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        match self.live {
            Some(v) => vec![
                ("Flow X", format_number(v.reading.flow_x)),
                ("Flow Y", format_number(v.reading.flow_y)),
                ("Height (mm)", format!("{:.2}", v.reading.height)),
                ("Quality", v.reading.quality.to_string()),
                ("Updated", v.updated_at.clone()),
            ],
            None => vec![
                ("Flow X", "0".to_string()),
                ("Flow Y", "0".to_string()),
                ("Height (mm)", "0.00".to_string()),
                ("Quality", "-".to_string()),
                ("Updated", "-".to_string()),
            ],
        }
    }
}

impl crate::ui::Panel for InfoPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = self
            .rows()
            .into_iter()
            .map(|(k, v)| {
                Line::from(vec![
                    Span::styled(format!("{k:<12}"), label),
                    Span::styled(v, value),
                ])
            })
            .collect();
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", "Window"), label),
            Span::raw(format!("{}/{}", self.buffered, self.capacity)),
        ]));

        let block = Block::default().title("Live").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::reading::Quality;

    #[test]
    fn rows_format_height_to_two_places() {
        let live = LiveValues {
            reading: Reading {
                flow_x: 12.0,
                flow_y: -4.5,
                height: 812.0,
                quality: Quality::Text("ok".into()),
            },
            updated_at: "09:15:02".into(),
        };
        let panel = InfoPanel::new(Some(&live), 3, 50);
        let rows = panel.rows();
        assert_eq!(rows[0].1, "12");
        assert_eq!(rows[1].1, "-4.5");
        assert_eq!(rows[2].1, "812.00");
        assert_eq!(rows[3].1, "ok");
        assert_eq!(rows[4].1, "09:15:02");
    }

    #[test]
    fn placeholders_before_first_reading() {
        let panel = InfoPanel::new(None, 0, 50);
        assert_eq!(panel.rows()[2].1, "0.00");
    }
}
