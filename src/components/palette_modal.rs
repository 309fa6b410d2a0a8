use crate::app::query::QueryInput;
use crate::domain::highlight::runs;
use crate::domain::Candidate;
use crate::palette::{Highlighted, RenderState};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::helpers::draw_drop_shadow;

/// Rects inside the modal frame: prompt line, separator, result list.
pub struct ModalLayout {
    pub input: Rect,
    pub separator: Rect,
    pub list: Rect,
}

impl ModalLayout {
    pub fn new(modal_area: Rect) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(modal_area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
            ])
            .split(inner);
        Self {
            input: chunks[0],
            separator: chunks[1],
            list: chunks[2],
        }
    }
}

pub struct PaletteModal<'a> {
    pub theme: &'a Theme,
    pub prompt: &'a str,
    pub query: &'a QueryInput<'a>,
    pub render: &'a RenderState<'a, Candidate>,
    pub total: usize,
    /// The whole frame, for clipping the shadow.
    pub terminal_area: Rect,
}

impl StatefulWidget for PaletteModal<'_> {
    type State = ListState;

    fn render(self, modal_area: Rect, buf: &mut Buffer, list_state: &mut ListState) {
        if modal_area.width < 3 || modal_area.height < 3 {
            return;
        }

        draw_drop_shadow(buf, modal_area, self.terminal_area);
        Clear.render(modal_area, buf);

        let counter = format!(" {}/{} ", self.render.rows.len(), self.total);
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" QUICKPICK ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(Span::styled(counter, self.theme.dimmed)).right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        block.render(modal_area, buf);

        let layout = ModalLayout::new(modal_area);

        // Prompt, then the editor in the remaining width
        let prompt_width = (self.prompt.chars().count() as u16).min(layout.input.width);
        buf.set_stringn(
            layout.input.x,
            layout.input.y,
            self.prompt,
            layout.input.width as usize,
            self.theme.prompt,
        );
        let editor_area = Rect {
            x: layout.input.x + prompt_width,
            width: layout.input.width - prompt_width,
            ..layout.input
        };
        if editor_area.width > 0 {
            Widget::render(self.query.widget(), editor_area, buf);
        }

        if layout.separator.height > 0 {
            let separator = "─".repeat(layout.separator.width as usize);
            buf.set_string(
                layout.separator.x,
                layout.separator.y,
                separator,
                self.theme.border,
            );
        }

        if layout.list.height == 0 {
            return;
        }

        if self.render.rows.is_empty() {
            let no_results = Line::from(Span::styled("  No matches", self.theme.dimmed));
            buf.set_line(layout.list.x, layout.list.y, &no_results, layout.list.width);
            return;
        }

        let items: Vec<ListItem> = self
            .render
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| row_item(row, i == self.render.selected_index, self.theme))
            .collect();

        StatefulWidget::render(List::new(items), layout.list, buf, list_state);
    }
}

fn row_item<'a>(row: &Highlighted<'a, Candidate>, selected: bool, theme: &Theme) -> ListItem<'a> {
    let (base, matched) = if selected {
        (theme.list_selected, theme.match_char_selected)
    } else {
        (theme.list_item, theme.match_char)
    };
    let pointer = if selected {
        glyphs::POINTER
    } else {
        glyphs::NO_POINTER
    };

    let candidate: &'a Candidate = row.candidate;
    let label = candidate.label.as_str();
    let mut spans = vec![Span::styled(pointer, base)];
    spans.extend(runs(label, &row.result.matched_indices).into_iter().map(|run| {
        Span::styled(&label[run.range], if run.matched { matched } else { base })
    }));
    if let Some(description) = &candidate.description {
        spans.push(Span::styled(format!("  {description}"), theme.description));
    }

    ListItem::new(Line::from(spans)).style(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::MatchResult;
    use ratatui::style::Modifier;

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
    fn test_renders_rows_and_highlights() {
        let theme = Theme::default();
        let query = QueryInput::default();
        let candidates = [
            Candidate {
                description: Some("single file".to_string()),
                ..Candidate::new("Open File")
            },
            Candidate::new("Open Folder"),
        ];
        let results = [
            MatchResult {
                candidate: 0,
                score: 16,
                matched_indices: vec![0, 5],
            },
            MatchResult {
                candidate: 1,
                score: 16,
                matched_indices: vec![0, 5],
            },
        ];
        let render = RenderState {
            rows: candidates
                .iter()
                .zip(&results)
                .map(|(candidate, result)| Highlighted { candidate, result })
                .collect(),
            selected_index: 1,
        };

        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        let mut list_state = ListState::default().with_selected(Some(1));
        PaletteModal {
            theme: &theme,
            prompt: "> ",
            query: &query,
            render: &render,
            total: 3,
            terminal_area: area,
        }
        .render(area, &mut buf, &mut list_state);

        let text = buffer_text(&buf);
        assert!(text.contains("QUICKPICK"));
        assert!(text.contains("> "));
        assert!(text.contains("Open File  single file"));
        assert!(text.contains("Open Folder"));
        assert!(text.contains("2/3"));

        // 'O' of the first row is a matched char, 'p' is not.
        let layout = ModalLayout::new(area);
        let x = layout.list.x + glyphs::NO_POINTER.chars().count() as u16;
        let y = layout.list.y;
        assert_eq!(buf[(x, y)].fg, theme.match_char.fg.unwrap());
        assert!(buf[(x, y)].modifier.contains(Modifier::BOLD));
        assert_eq!(buf[(x + 1, y)].fg, theme.list_item.fg.unwrap());
    }

    #[test]
    fn test_empty_results_message() {
        let theme = Theme::default();
        let query = QueryInput::default();
        let render: RenderState<'_, Candidate> = RenderState {
            rows: Vec::new(),
            selected_index: 0,
        };
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        PaletteModal {
            theme: &theme,
            prompt: "> ",
            query: &query,
            render: &render,
            total: 5,
            terminal_area: area,
        }
        .render(area, &mut buf, &mut ListState::default());
        assert!(buffer_text(&buf).contains("No matches"));
    }

    #[test]
    fn test_layout_inside_border() {
        let layout = ModalLayout::new(Rect::new(10, 4, 30, 12));
        assert_eq!(layout.input, Rect::new(11, 5, 28, 1));
        assert_eq!(layout.separator, Rect::new(11, 6, 28, 1));
        assert_eq!(layout.list, Rect::new(11, 7, 28, 8));
    }
}
