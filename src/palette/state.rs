#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A candidate that survived the current query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Index into the session's candidate list. Two results refer to the same
    /// candidate iff these are equal.
    pub candidate: usize,
    pub score: i64,
    pub matched_indices: Vec<usize>,
}

/// A result joined with the candidate it refers to.
#[derive(Debug)]
pub struct Highlighted<'a, T> {
    pub candidate: &'a T,
    pub result: &'a MatchResult,
}

impl<T> Clone for Highlighted<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Highlighted<'_, T> {}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaletteState {
    pub query: String,
    pub results: Vec<MatchResult>,
    pub selected_index: usize,
    pub last_notified: Option<usize>,
}

impl PaletteState {
    pub fn selected(&self) -> Option<&MatchResult> {
        self.results.get(self.selected_index)
    }
}

/// Read-only snapshot handed to the view on every frame.
#[derive(Debug)]
pub struct RenderState<'a, T> {
    pub rows: Vec<Highlighted<'a, T>>,
    pub selected_index: usize,
}
