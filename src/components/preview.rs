use crate::domain::Candidate;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Body panel behind the palette: details of the highlighted candidate, or a
/// reopen hint while the palette is hidden.
pub struct Preview<'a> {
    pub theme: &'a Theme,
    pub highlighted: Option<&'a Candidate>,
    pub palette_open: bool,
}

impl Widget for Preview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("PREVIEW", theme.preview_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);

        let lines = match (self.highlighted, self.palette_open) {
            (_, false) => vec![
                Line::from(""),
                Line::from(vec![
                    Span::raw(" Press "),
                    Span::styled("/", theme.footer_segment_key),
                    Span::raw(" to reopen the palette "),
                ]),
            ],
            (None, true) => vec![Line::from(Span::styled(" Nothing highlighted", theme.dimmed))],
            (Some(candidate), true) => {
                let mut lines = vec![Line::from(Span::styled(
                    candidate.label.as_str(),
                    theme.list_selected,
                ))];
                if let Some(description) = &candidate.description {
                    lines.push(Line::from(Span::styled(description.as_str(), theme.description)));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled("output: ", theme.dimmed),
                    Span::styled(candidate.output(), theme.preview_value),
                ]));
                lines
            }
        };

        let alignment = if self.palette_open {
            Alignment::Left
        } else {
            Alignment::Center
        };
        Paragraph::new(lines)
            .alignment(alignment)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
