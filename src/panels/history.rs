//! src/panels/history.rs
//!
//! Recent samples: the tail of the sample window, newest highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::SampleBuffer;

pub struct HistoryPanel<'a> {
    pub buffer: &'a SampleBuffer,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(buffer: &'a SampleBuffer) -> Self {
        Self { buffer }
    }
}

impl crate::ui::Panel for HistoryPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().title("History").borders(Borders::ALL);
        if self.buffer.is_empty() {
            let waiting = Line::styled("waiting for data...", Style::default().fg(Color::DarkGray));
            f.render_widget(Paragraph::new(waiting).block(block), area);
            return;
        }

        // borders take two rows
        let rows = area.height.saturating_sub(2) as usize;
        let start = self.buffer.len().saturating_sub(rows);
        let last_index = self.buffer.len().saturating_sub(1);

        let lines: Vec<Line> = self
            .buffer
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, s)| {
                let vs = if i == last_index {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Line::from(vec![
                    Span::styled(format!("{} ", s.timestamp), Style::default().fg(Color::Yellow)),
                    Span::styled(format!("x:{:>6.0} y:{:>6.0} h:{:>8.2}", s.flow_x, s.flow_y, s.height), vs),
                ])
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
