use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::helpers::{centered_rect, dim_area};
use crate::components::palette_modal::{ModalLayout, PaletteModal};
use crate::components::preview::Preview;
use crate::palette::PaletteView;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::ListState,
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = get_layout(area);
    let open = app_state.palette.is_open();
    let total = app_state.palette.candidates().len();

    // --- Header ---
    if layout.header.height > 0 {
        let header = Header {
            theme: &app_state.theme,
            source: &app_state.source,
            matches: app_state.palette.state().results.len(),
            total,
        };
        f.render_widget(header, layout.header);
    }

    // --- Body ---
    if layout.body.width > 0 && layout.body.height > 0 {
        let preview = Preview {
            theme: &app_state.theme,
            highlighted: app_state.highlighted.as_ref(),
            palette_open: open,
        };
        f.render_widget(preview, layout.body);
    }

    // --- Footer ---
    if layout.footer.height > 0 {
        let footer = Footer {
            theme: &app_state.theme,
            palette_open: open,
        };
        f.render_widget(footer, layout.footer);
    }

    // --- Palette ---
    if open {
        draw_palette(f, app_state, area);
    }
}

fn draw_palette(f: &mut Frame, app_state: &mut AppState, area: Rect) {
    let buf = f.buffer_mut();
    dim_area(buf, area);
    buf.set_style(area, app_state.theme.backdrop);

    let (width, height) = app_state.modal_percent;
    let modal_area = centered_rect(width, height, area);

    // The view needs the list geometry for scrolling and mouse hits.
    let list_area = ModalLayout::new(modal_area).list;
    let view = app_state.palette.view_mut();
    view.set_list_area(list_area);
    let mut list_state = ListState::default().with_offset(view.scroll_offset());

    let render = app_state.palette.snapshot();
    if !render.rows.is_empty() {
        list_state.select(Some(render.selected_index));
    }
    let modal = PaletteModal {
        theme: &app_state.theme,
        prompt: &app_state.prompt,
        query: &app_state.query,
        render: &render,
        total: app_state.palette.candidates().len(),
        terminal_area: area,
    };
    f.render_stateful_widget(modal, modal_area, &mut list_state);

    // Keep the selection visible after a resize shrinks the list.
    app_state
        .palette
        .view_mut()
        .set_scroll_offset(list_state.offset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::config::Config;
    use crate::app::reducer;
    use crate::domain::Candidate;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tokio::sync::mpsc;

    fn state(count: usize) -> AppState<'static> {
        let (tx, _rx) = mpsc::channel(1000);
        let candidates = (0..count)
            .map(|i| Candidate::new(format!("item {i:02}")))
            .collect();
        let mut state = AppState::new(&Config::default(), candidates, tx);
        reducer::update(&mut state, Action::OpenPalette);
        state
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draw_across_sizes() {
        let sizes = [(1, 1), (3, 2), (5, 3), (20, 5), (40, 10), (80, 24), (200, 60)];
        for (w, h) in sizes {
            let mut app_state = state(30);
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal.draw(|f| draw(f, &mut app_state)).unwrap();
        }
    }

    #[test]
    fn test_draw_records_list_area() {
        let mut app_state = state(5);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app_state)).unwrap();

        let list_area = app_state.palette.view().list_area();
        assert!(list_area.height > 0);
        assert_eq!(app_state.palette.view().row_at(list_area.x, list_area.y), Some(0));

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("item 00"));
        assert!(text.contains("item 04"));
        assert!(text.contains("5/5"));
    }

    #[test]
    fn test_scrolls_with_selection() {
        let mut app_state = state(40);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw(f, &mut app_state)).unwrap();
        let visible = usize::from(app_state.palette.view().list_area().height);

        for _ in 0..visible {
            reducer::update(&mut app_state, Action::SelectNext);
            terminal.draw(|f| draw(f, &mut app_state)).unwrap();
        }

        assert_eq!(app_state.palette.state().selected_index, visible);
        assert_eq!(app_state.palette.view().scroll_offset(), 1);
        let text = buffer_text(terminal.backend().buffer());
        assert!(!text.contains("item 00"));
        assert!(text.contains(&format!("item {visible:02}")));
    }

    #[test]
    fn test_hidden_palette_shows_hint() {
        let mut app_state = state(3);
        reducer::update(&mut app_state, Action::TogglePalette);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| draw(f, &mut app_state)).unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("to reopen the palette"));
        assert!(!text.contains("No matches"));
    }
}
