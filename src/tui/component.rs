use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the screen.
///
/// Components receive their data as props (struct fields) from the caller
/// and render into a `Frame` within a given `Rect`. They are rebuilt every
/// frame, so any state they need lives with the caller.
///
/// `render` takes `&mut self` so a component may compute layout-dependent
/// values (scroll offsets, cursor positions) during the render pass.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
