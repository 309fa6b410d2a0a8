use super::state::Highlighted;
use std::fmt;

pub type ChangeFn<T> = Box<dyn FnMut(Option<Highlighted<'_, T>>)>;
pub type SelectFn<T> = Box<dyn FnMut(Highlighted<'_, T>)>;
pub type CancelFn<T> = Box<dyn FnMut(Option<Highlighted<'_, T>>)>;

/// Host callbacks for one palette session. Every hook is optional; a missing
/// hook is simply skipped.
pub struct Hooks<T> {
    pub(super) on_change: Option<ChangeFn<T>>,
    pub(super) on_select: Option<SelectFn<T>>,
    pub(super) on_cancel: Option<CancelFn<T>>,
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self {
            on_change: None,
            on_select: None,
            on_cancel: None,
        }
    }
}

impl<T> Hooks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called whenever the highlighted candidate changes, with `None` when
    /// nothing matches.
    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(Option<Highlighted<'_, T>>) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_select(mut self, f: impl FnMut(Highlighted<'_, T>) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Receives the item highlighted at the time of cancelling, or `None`
    /// when a confirm could not be delivered to `on_select`.
    #[must_use]
    pub fn on_cancel(mut self, f: impl FnMut(Option<Highlighted<'_, T>>) + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }
}

impl<T> fmt::Debug for Hooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_change", &self.on_change.is_some())
            .field("on_select", &self.on_select.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}
