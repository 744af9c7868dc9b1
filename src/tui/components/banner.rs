//! # Banner Component
//!
//! Two fixed lines at the top of the screen: how to quit, and the key legend.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const TITLE: &str = "Nolearn. Press 'q' or ESC to quit.";
pub const LEGEND: &str = "Controls: e/↑=up, d/↓=down, f=cycle status forward, s=cycle status backward, n=new task, x=delete";

/// Stateless: always renders the same two lines.
pub struct Banner;

impl Banner {
    /// Rows the banner occupies.
    pub const HEIGHT: u16 = 2;
}

impl Component for Banner {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(LEGEND, Style::default().fg(Color::DarkGray)),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
}
