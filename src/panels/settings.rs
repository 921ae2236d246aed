//! src/panels/settings.rs
//!
//! Settings form: the two numeric inputs, focused one highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::settings::{Field, INTERVAL_RANGE_MS, POINTS_RANGE, SettingsForm};

pub struct SettingsPanel<'a> {
    pub form: &'a SettingsForm,
}

impl<'a> SettingsPanel<'a> {
    pub fn new(form: &'a SettingsForm) -> Self {
        Self { form }
    }

    fn input_line(&self, field: Field, label: String, value: &str) -> Line<'static> {
        let focused = self.form.focus == field;
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let cursor = if focused { "_" } else { " " };
        Line::from(vec![
            Span::styled(label, Style::default().fg(Color::Yellow)),
            Span::styled(format!(" {value}{cursor} "), style),
        ])
    }
}

impl crate::ui::Panel for SettingsPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            self.input_line(
                Field::Interval,
                format!(
                    "Interval ms ({}-{}): ",
                    INTERVAL_RANGE_MS.start(),
                    INTERVAL_RANGE_MS.end()
                ),
                &self.form.interval,
            ),
            self.input_line(
                Field::Points,
                format!(
                    "Chart points ({}-{}): ",
                    POINTS_RANGE.start(),
                    POINTS_RANGE.end()
                ),
                &self.form.points,
            ),
        ];
        let block = Block::default()
            .title("Settings (Enter to save)")
            .borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
