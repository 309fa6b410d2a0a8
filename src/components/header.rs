use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub theme: &'a Theme,
    pub source: &'a str,
    pub matches: usize,
    pub total: usize,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let source_bg = self.theme.header_source.bg.unwrap_or(Color::Reset);
        let stats_bg = self.theme.header_stats.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // Separator styles: fg = current segment bg, bg = next segment bg
        let sep_logo_source = Style::default().fg(logo_bg).bg(source_bg);
        let sep_source_stats = Style::default().fg(source_bg).bg(stats_bg);
        let sep_stats_base = Style::default().fg(stats_bg).bg(base_bg);

        let spans = vec![
            Span::styled(" QUICKPICK ", self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, sep_logo_source),
            Span::styled(format!(" {} ", self.source), self.theme.header_source),
            Span::styled(glyphs::SEP_RIGHT, sep_source_stats),
            Span::styled(
                format!(" {}/{} ", self.matches, self.total),
                self.theme.header_stats,
            ),
            Span::styled(glyphs::SEP_RIGHT, sep_stats_base),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
