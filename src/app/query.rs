use crossterm::event::KeyEvent;
use ratatui::style::Style;
use std::fmt;
use tui_textarea::{CursorMove, TextArea};

/// Single-line query editor backed by `tui_textarea`.
pub struct QueryInput<'a>(TextArea<'a>);

impl Default for QueryInput<'_> {
    fn default() -> Self {
        let mut area = TextArea::default();
        area.set_cursor_line_style(Style::default());
        Self(area)
    }
}

impl<'a> QueryInput<'a> {
    pub fn text(&self) -> String {
        self.0.lines().concat()
    }

    /// Feeds a key to the editor, returning `true` if the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let before = self.text();
        self.0.input(key);
        if self.0.lines().len() > 1 {
            self.flatten();
        }
        self.text() != before
    }

    pub fn set_style(&mut self, style: Style) {
        self.0.set_style(style);
    }

    pub fn widget(&self) -> &TextArea<'a> {
        &self.0
    }

    // Newline-producing keys (ctrl-m, ctrl-j) must not split the query.
    fn flatten(&mut self) {
        let style = self.0.style();
        let mut area = TextArea::new(vec![self.text()]);
        area.set_cursor_line_style(Style::default());
        area.set_style(style);
        area.move_cursor(CursorMove::End);
        self.0 = area;
    }
}

impl fmt::Debug for QueryInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryInput")
            .field("text", &self.text())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}
