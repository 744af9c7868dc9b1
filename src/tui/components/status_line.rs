//! # StatusLine Component
//!
//! The bottom row. Shows the new-task prompt while one is open, otherwise
//! the last error message, otherwise nothing.
//!
//! While prompting, the terminal cursor is parked right after the label so
//! the line typed in cooked mode is echoed in place.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct StatusLine<'a> {
    pub message: Option<&'a str>,
    pub prompt: Option<&'a str>,
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(label) = self.prompt {
            frame.render_widget(Paragraph::new(label), area);
            let label_width = u16::try_from(label.chars().count()).unwrap_or(u16::MAX);
            let x = area.x.saturating_add(label_width).min(area.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, area.y));
        } else if let Some(message) = self.message {
            frame.render_widget(
                Paragraph::new(message).style(Style::default().fg(Color::Red)),
                area,
            );
        }
    }
}
