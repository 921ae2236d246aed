//! src/panels/title.rs
//!
//! Header bar: app name, data source and poll cadence.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct TitlePanel {
    pub title: String,
    pub source: String,
    pub interval_ms: u64,
}

impl TitlePanel {
    pub fn new(title: &str, source: String, interval_ms: u64) -> Self {
        Self {
            title: title.to_string(),
            source,
            interval_ms,
        }
    }
}

impl crate::ui::Panel for TitlePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(
                self.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  source: "),
            Span::styled(self.source.clone(), Style::default().fg(Color::Cyan)),
            Span::raw(format!("  every {} ms", self.interval_ms)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
