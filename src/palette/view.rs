use super::state::Direction;

/// The rendering surface a palette drives.
///
/// Geometry is measured in the view's own units (terminal rows for the TUI).
#[cfg_attr(test, mockall::automock)]
pub trait PaletteView {
    fn show(&mut self);
    fn hide(&mut self);
    fn focus_input(&mut self);
    fn blur_input(&mut self);

    fn row_height(&self) -> usize;
    fn scroll_offset(&self) -> usize;
    fn set_scroll_offset(&mut self, offset: usize);
    fn viewport_height(&self) -> usize;
}

/// Scrolls by at most one row so that `selected` becomes visible after a
/// single step in `direction`.
pub fn scroll_into_view<V: PaletteView + ?Sized>(view: &mut V, selected: usize, direction: Direction) {
    let row_height = view.row_height();
    if row_height == 0 {
        return;
    }

    let top = view.scroll_offset();
    let bottom = top + view.viewport_height();
    let first_visible = top.div_ceil(row_height);
    // Exclusive: rows before this index fit entirely above `bottom`.
    let visible_end = bottom / row_height;

    match direction {
        Direction::Down if visible_end <= selected => {
            view.set_scroll_offset(top + row_height);
        }
        Direction::Up if first_visible > selected => {
            view.set_scroll_offset(top.saturating_sub(row_height));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn geometry(mock: &mut MockPaletteView, row: usize, top: usize, height: usize) {
        mock.expect_row_height().return_const(row);
        mock.expect_scroll_offset().return_const(top);
        mock.expect_viewport_height().return_const(height);
    }

    #[test]
    fn test_scrolls_down_past_bottom_edge() {
        let mut mock = MockPaletteView::new();
        // rows 0..5 visible
        geometry(&mut mock, 2, 0, 10);
        mock.expect_set_scroll_offset().with(eq(2)).times(1).return_const(());
        scroll_into_view(&mut mock, 5, Direction::Down);
    }

    #[test]
    fn test_no_scroll_when_visible() {
        let mut mock = MockPaletteView::new();
        geometry(&mut mock, 1, 3, 5);
        mock.expect_set_scroll_offset().never();
        scroll_into_view(&mut mock, 7, Direction::Down);
        scroll_into_view(&mut mock, 3, Direction::Up);
    }

    #[test]
    fn test_scrolls_up_past_top_edge() {
        let mut mock = MockPaletteView::new();
        geometry(&mut mock, 1, 4, 5);
        mock.expect_set_scroll_offset().with(eq(3)).times(1).return_const(());
        scroll_into_view(&mut mock, 3, Direction::Up);
    }

    #[test]
    fn test_partial_row_counts_as_hidden() {
        let mut mock = MockPaletteView::new();
        // top = 3 with 2-unit rows: row 1 is half hidden, first full row is 2
        geometry(&mut mock, 2, 3, 4);
        mock.expect_set_scroll_offset().with(eq(1)).times(1).return_const(());
        scroll_into_view(&mut mock, 1, Direction::Up);
    }

    #[test]
    fn test_zero_row_height_never_scrolls() {
        let mut mock = MockPaletteView::new();
        mock.expect_row_height().return_const(0usize);
        mock.expect_set_scroll_offset().never();
        scroll_into_view(&mut mock, 10, Direction::Down);
    }
}
