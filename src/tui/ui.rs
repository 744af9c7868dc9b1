use std::io;

use ratatui::layout::{Constraint, Layout};
use ratatui::{DefaultTerminal, Frame};

use crate::core::state::TaskStore;
use crate::tui::component::Component;
use crate::tui::components::{Banner, StatusLine, TaskList};

/// Everything one frame shows.
pub struct View<'a> {
    pub store: &'a TaskStore,
    pub status_message: Option<&'a str>,
    /// Label of an open new-task prompt.
    pub prompt: Option<&'a str>,
}

/// Where frames go. The controller only talks to the terminal through this.
pub trait Screen {
    /// Clear the screen and draw `view` from scratch.
    fn render(&mut self, view: &View) -> io::Result<()>;
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;
}

impl Screen for DefaultTerminal {
    fn render(&mut self, view: &View) -> io::Result<()> {
        // Cooked-mode echo from the prompt bypasses ratatui's buffer diff,
        // so every frame starts from a cleared screen.
        self.clear()?;
        self.draw(|frame| draw_ui(frame, view))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            self.show_cursor()
        } else {
            self.hide_cursor()
        }
    }
}

pub fn draw_ui(frame: &mut Frame, view: &View) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(Banner::HEIGHT), Min(0), Length(1)]);
    let [banner_area, list_area, status_area] = layout.areas(frame.area());

    Banner.render(frame, banner_area);
    TaskList::new(view.store).render(frame, list_area);
    StatusLine {
        message: view.status_message,
        prompt: view.prompt,
    }
    .render(frame, status_area);
}
