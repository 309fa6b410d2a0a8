use ratatui::style::{Modifier, Style};
use serde::Deserialize;

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,
    pub backdrop: Style,

    pub header_logo: Style,
    pub header_source: Style,
    pub header_stats: Style,
    pub header_active: Style,
    pub header: Style,

    pub prompt: Style,
    pub query: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub match_char: Style,
    pub match_char_selected: Style,
    pub description: Style,

    pub preview_title: Style,
    pub preview_value: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[serde(alias = "catppuccin")]
    #[value(name = "mocha", alias = "catppuccin")]
    Mocha,
    Nord,
    Gruvbox,
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Mocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),
            backdrop: Style::default().bg(dim_color(p.base, 0.7)),

            header_logo: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_source: Style::default()
                .bg(p.surface1)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            header_stats: Style::default().bg(p.surface0).fg(p.subtext0),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            prompt: Style::default().fg(p.mauve).add_modifier(Modifier::BOLD),
            query: Style::default().fg(p.text),

            list_item: Style::default().fg(p.text),
            list_selected: Style::default()
                .bg(p.surface0)
                .fg(p.text)
                .add_modifier(Modifier::BOLD),
            match_char: Style::default().fg(p.peach).add_modifier(Modifier::BOLD),
            match_char_selected: Style::default()
                .bg(p.surface0)
                .fg(p.yellow)
                .add_modifier(Modifier::BOLD),
            description: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),

            preview_title: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            preview_value: Style::default().fg(p.green),

            footer_segment_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.mantle).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::Mocha)
    }
}
