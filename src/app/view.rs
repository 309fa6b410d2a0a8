use crate::palette::PaletteView;
use ratatui::layout::Rect;

/// Terminal-side state of the palette overlay. Every result row is one line
/// high; the list area is recorded each frame by the renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerminalView {
    pub visible: bool,
    pub input_focused: bool,
    scroll_offset: usize,
    list_area: Rect,
}

impl TerminalView {
    pub fn set_list_area(&mut self, area: Rect) {
        self.list_area = area;
    }

    pub fn list_area(&self) -> Rect {
        self.list_area
    }

    /// Result row under the given terminal cell, if any.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        inside.then(|| self.scroll_offset + usize::from(row - area.y))
    }
}

impl PaletteView for TerminalView {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }

    fn blur_input(&mut self) {
        self.input_focused = false;
    }

    fn row_height(&self) -> usize {
        1
    }

    fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    fn viewport_height(&self) -> usize {
        usize::from(self.list_area.height)
    }
}
