use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

pub fn get_groups(palette_open: bool) -> Vec<FooterGroup> {
    if palette_open {
        vec![
            FooterGroup {
                name: "NAV",
                items: vec![
                    FooterItem {
                        key: "↑/↓",
                        desc: "move",
                    },
                    FooterItem {
                        key: "Enter",
                        desc: "pick",
                    },
                ],
            },
            FooterGroup {
                name: "PALETTE",
                items: vec![
                    FooterItem {
                        key: "Esc",
                        desc: "cancel",
                    },
                    FooterItem {
                        key: "C-t",
                        desc: "hide",
                    },
                ],
            },
        ]
    } else {
        vec![FooterGroup {
            name: "GLOBAL",
            items: vec![
                FooterItem {
                    key: "/",
                    desc: "reopen",
                },
                FooterItem {
                    key: "q",
                    desc: "quit",
                },
            ],
        }]
    }
}

pub struct Footer<'a> {
    pub theme: &'a Theme,
    pub palette_open: bool,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let available_width = area.width.saturating_sub(2) as usize;
        let mut spans = vec![Span::raw(" ")];
        let mut current_width = 1;

        'groups: for group in get_groups(self.palette_open) {
            // Add group name as a subtle label if there's plenty of space
            if area.width > 60 {
                let label = format!("{}: ", group.name);
                current_width += label.chars().count();
                spans.push(Span::styled(label, theme.dimmed));
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);

                let item_width = key_str.chars().count() + desc_str.chars().count();
                if current_width + item_width + 1 > available_width {
                    break 'groups;
                }

                spans.push(Span::styled(key_str, theme.footer_segment_key));
                spans.push(Span::styled(desc_str, theme.footer_segment_val));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw(" "));
            current_width += 1;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
