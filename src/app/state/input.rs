use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// Single-line query input. Wraps `TextArea` so `AppState` can stay
/// `Clone`/`PartialEq`/`Debug`, and flattens any pasted newlines away.
#[derive(Default)]
pub struct QueryArea<'a>(pub TextArea<'a>);

impl QueryArea<'_> {
    /// The query text as a single line.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join(" ")
    }

    /// Replaces the content, cursor at the end. Used by suggestion chips.
    pub fn set_text(&mut self, text: &str) {
        self.0 = TextArea::from([text.to_string()]);
        self.0.move_cursor(CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.0 = TextArea::default();
    }
}

impl Clone for QueryArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        Self(area)
    }
}

impl std::fmt::Debug for QueryArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryArea")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for QueryArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for QueryArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for QueryArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &QueryArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_text_replaces_previous_content() {
        let mut area = QueryArea::default();
        area.set_text("first");
        area.set_text("second query");
        assert_eq!(area.text(), "second query");
    }

    #[test]
    fn clear_leaves_an_empty_line() {
        let mut area = QueryArea::default();
        area.set_text("something");
        area.clear();
        assert_eq!(area.text(), "");
    }
}
