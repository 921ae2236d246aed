//! src/panels/status.rs
//!
//! Footer: key help, prefixed by the outcome of the last settings save.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const HELP: &str = "TAB=Switch input  0-9/BKSP=Edit  ENTER=Save  Q/ESC=Quit";

/// Footer message after a save attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct StatusPanel<'a> {
    pub status: Option<&'a Status>,
}

impl<'a> StatusPanel<'a> {
    pub fn new(status: Option<&'a Status>) -> Self {
        Self { status }
    }

    fn line(&self) -> Line<'static> {
        let help = Span::styled(HELP, Style::default().fg(Color::DarkGray));
        match self.status {
            Some(Status::Info(msg)) => Line::from(vec![
                Span::styled(format!("{msg}  |  "), Style::default().fg(Color::Green)),
                help,
            ]),
            Some(Status::Error(msg)) => Line::from(vec![
                Span::styled(format!("{msg}  |  "), Style::default().fg(Color::Red)),
                help,
            ]),
            None => Line::from(help),
        }
    }
}

impl crate::ui::Panel for StatusPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let title = if self.status.is_some() { "Status" } else { "Controls" };
        let p = Paragraph::new(self.line())
            .wrap(Wrap { trim: true })
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(p, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_precedes_help() {
        let status = Status::Error("enter a valid update interval (100-5000 ms)".into());
        let line = StatusPanel::new(Some(&status)).line();
        assert_eq!(line.spans.len(), 2);
        assert!(line.spans[0].content.starts_with("enter a valid update interval"));
        assert_eq!(line.spans[0].style.fg, Some(Color::Red));
        assert_eq!(line.spans[1].content, HELP);
    }

    #[test]
    fn help_alone_without_status() {
        let line = StatusPanel::new(None).line();
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content, HELP);
    }
}
