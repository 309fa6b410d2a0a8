//! The palette controller: one session of candidates, query and selection,
//! driven by input events and rendered through a [`PaletteView`].

use crate::domain::{fuzzy_match, Labeled};
use std::fmt;
use tracing::{debug, info};

pub mod hooks;
pub mod state;
pub mod view;

pub use hooks::Hooks;
pub use state::{Direction, Highlighted, MatchResult, PaletteState, RenderState, Visibility};
pub use view::{scroll_into_view, PaletteView};

struct Session<T> {
    candidates: Vec<T>,
    hooks: Hooks<T>,
    state: PaletteState,
}

impl<T> Default for Session<T> {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            hooks: Hooks::default(),
            state: PaletteState::default(),
        }
    }
}

pub struct Palette<T, V> {
    view: V,
    visibility: Visibility,
    session: Session<T>,
}

impl<T: Labeled, V: PaletteView> Palette<T, V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            visibility: Visibility::Closed,
            session: Session::default(),
        }
    }

    /// Starts a new session, replacing whatever the previous one held.
    pub fn open(&mut self, candidates: Vec<T>, hooks: Hooks<T>) {
        info!(candidates = candidates.len(), "opening palette");
        self.session = Session {
            candidates,
            hooks,
            state: PaletteState::default(),
        };
        self.reveal();
    }

    /// Hides the view. The session, callbacks included, stays until the next
    /// [`Palette::open`].
    pub fn close(&mut self) {
        if self.visibility == Visibility::Open {
            self.visibility = Visibility::Closed;
            self.view.hide();
        }
    }

    /// Closes an open palette, or reopens the current session with an empty
    /// query.
    pub fn toggle(&mut self) {
        match self.visibility {
            Visibility::Open => self.close(),
            Visibility::Closed => self.reveal(),
        }
    }

    pub fn on_query_change(&mut self, query: &str) {
        if self.is_open() {
            self.refresh(query);
        }
    }

    pub fn move_selection(&mut self, direction: Direction) {
        if !self.is_open() {
            return;
        }
        let state = &mut self.session.state;
        let last = state.results.len().saturating_sub(1);
        state.selected_index = match direction {
            Direction::Up => state.selected_index.saturating_sub(1),
            Direction::Down => (state.selected_index + 1).min(last),
        };
        scroll_into_view(&mut self.view, state.selected_index, direction);
        self.notify_change();
    }

    /// Highlights the row at `index` directly, e.g. for a mouse click.
    pub fn select_index(&mut self, index: usize) {
        if !self.is_open() || self.session.state.results.is_empty() {
            return;
        }
        let state = &mut self.session.state;
        state.selected_index = index.min(state.results.len() - 1);
        self.notify_change();
    }

    /// Closes the palette and hands the highlighted item to `on_select`.
    /// Without a select hook, or with nothing highlighted, `on_cancel` is
    /// called with `None` instead.
    pub fn confirm(&mut self) {
        if !self.is_open() {
            return;
        }
        self.close();
        self.view.blur_input();

        let Session {
            candidates,
            hooks,
            state,
        } = &mut self.session;
        match (hooks.on_select.as_mut(), highlighted(candidates, state)) {
            (Some(on_select), Some(item)) => {
                info!(label = item.candidate.label(), "palette confirmed");
                on_select(item);
            }
            _ => {
                info!("palette confirmed without a selection");
                if let Some(on_cancel) = hooks.on_cancel.as_mut() {
                    on_cancel(None);
                }
            }
        }
    }

    /// Closes the palette; `on_cancel` still receives the highlighted item.
    pub fn cancel(&mut self) {
        if !self.is_open() {
            return;
        }
        self.close();
        self.view.blur_input();

        info!("palette cancelled");
        let Session {
            candidates,
            hooks,
            state,
        } = &mut self.session;
        if let Some(on_cancel) = hooks.on_cancel.as_mut() {
            on_cancel(highlighted(candidates, state));
        }
    }

    pub fn snapshot(&self) -> RenderState<'_, T> {
        let Session {
            candidates, state, ..
        } = &self.session;
        RenderState {
            rows: state
                .results
                .iter()
                .filter_map(|result| {
                    candidates
                        .get(result.candidate)
                        .map(|candidate| Highlighted { candidate, result })
                })
                .collect(),
            selected_index: state.selected_index,
        }
    }

    fn reveal(&mut self) {
        self.visibility = Visibility::Open;
        self.view.show();
        self.refresh("");
        self.view.focus_input();
    }

    fn refresh(&mut self, query: &str) {
        let Session {
            candidates, state, ..
        } = &mut self.session;

        state.query = query.to_owned();
        state.results = candidates
            .iter()
            .enumerate()
            .filter_map(|(i, candidate)| {
                fuzzy_match(query, candidate.label()).map(|m| MatchResult {
                    candidate: i,
                    score: m.score,
                    matched_indices: m.indices,
                })
            })
            .collect();
        state.selected_index = 0;
        debug!(
            query,
            matches = state.results.len(),
            total = candidates.len(),
            "palette results recomputed"
        );

        self.view.set_scroll_offset(0);
        self.notify_change();
    }

    fn notify_change(&mut self) {
        let Session {
            candidates,
            hooks,
            state,
        } = &mut self.session;

        let current = state.selected().map(|r| r.candidate);
        if current == state.last_notified {
            return;
        }
        state.last_notified = current;
        if let Some(on_change) = hooks.on_change.as_mut() {
            on_change(highlighted(candidates, state));
        }
    }
}

impl<T, V> Palette<T, V> {
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn state(&self) -> &PaletteState {
        &self.session.state
    }

    pub fn candidates(&self) -> &[T] {
        &self.session.candidates
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

fn highlighted<'a, T>(candidates: &'a [T], state: &'a PaletteState) -> Option<Highlighted<'a, T>> {
    let result = state.selected()?;
    let candidate = candidates.get(result.candidate)?;
    Some(Highlighted { candidate, result })
}

impl<T, V: fmt::Debug> fmt::Debug for Palette<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("view", &self.view)
            .field("visibility", &self.visibility)
            .field("candidates", &self.session.candidates.len())
            .field("hooks", &self.session.hooks)
            .field("state", &self.session.state)
            .finish()
    }
}
