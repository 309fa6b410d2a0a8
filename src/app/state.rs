use super::action::Action;
use super::config::Config;
use super::keymap::KeyMap;
use super::query::QueryInput;
use super::view::TerminalView;
use crate::domain::Candidate;
use crate::palette::{Hooks, Palette};
use crate::theme::Theme;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

pub type CandidatePalette = Palette<Candidate, TerminalView>;

#[derive(Debug)]
pub struct AppState<'a> {
    pub should_quit: bool,

    // --- Palette ---
    pub candidates: Vec<Candidate>,
    pub palette: CandidatePalette,
    pub query: QueryInput<'a>,
    /// Last highlight reported by the palette's change hook.
    pub highlighted: Option<Candidate>,
    pub source: String,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
    pub prompt: String,
    pub modal_percent: (u16, u16),

    action_tx: mpsc::Sender<Action>,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config, candidates: Vec<Candidate>, action_tx: mpsc::Sender<Action>) -> Self {
        let theme = Theme::from_palette_type(config.theme);
        let mut query = QueryInput::default();
        query.set_style(theme.query);
        Self {
            should_quit: false,
            candidates,
            palette: Palette::new(TerminalView::default()),
            query,
            highlighted: None,
            source: String::from("stdin"),
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            theme,
            prompt: config.prompt.clone(),
            modal_percent: config.modal_percent(),
            action_tx,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Starts a fresh palette session over every candidate.
    pub fn open_palette(&mut self) {
        self.reset_query();
        let hooks = palette_hooks(self.action_tx.clone());
        self.palette.open(self.candidates.clone(), hooks);
    }

    pub fn reset_query(&mut self) {
        let mut query = QueryInput::default();
        query.set_style(self.theme.query);
        self.query = query;
    }

    pub fn input_has_focus(&self) -> bool {
        self.palette.is_open() && self.palette.view().input_focused
    }
}

/// Hooks that forward every palette notification into the runtime loop.
fn palette_hooks(tx: mpsc::Sender<Action>) -> Hooks<Candidate> {
    let (change_tx, select_tx, cancel_tx) = (tx.clone(), tx.clone(), tx);
    Hooks::<Candidate>::new()
        .on_change(move |item| {
            send(&change_tx, Action::Highlighted(item.map(|h| h.candidate.clone())));
        })
        .on_select(move |item| {
            send(&select_tx, Action::Selected(item.candidate.clone()));
        })
        .on_cancel(move |item| {
            send(&cancel_tx, Action::Cancelled(item.map(|h| h.candidate.clone())));
        })
}

fn send(tx: &mpsc::Sender<Action>, action: Action) {
    if let Err(err) = tx.try_send(action) {
        warn!(error = %err, "dropping palette notification");
    }
}
