use crate::app::{action::Action, state::AppState};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

pub fn map_event_to_action(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return None;
            }
            let open = app_state.palette.is_open();
            if let Some(action) = app_state.keymap.get_action(key, open) {
                return Some(action);
            }
            if !app_state.input_has_focus() {
                return None;
            }
            match key.code {
                KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::SUPER) => None,
                KeyCode::Char(_)
                | KeyCode::Backspace
                | KeyCode::Delete
                | KeyCode::Left
                | KeyCode::Right
                | KeyCode::Home
                | KeyCode::End => Some(Action::QueryInput(key)),
                _ => None,
            }
        }
        Event::Mouse(mouse) => {
            if !app_state.palette.is_open() {
                return None;
            }
            match mouse.kind {
                MouseEventKind::ScrollDown => Some(Action::SelectNext),
                MouseEventKind::ScrollUp => Some(Action::SelectPrev),
                MouseEventKind::Down(MouseButton::Left) => {
                    let row = app_state.palette.view().row_at(mouse.column, mouse.row)?;
                    let state = app_state.palette.state();
                    if row >= state.results.len() {
                        None
                    } else if row == state.selected_index {
                        // A second click on the highlighted row picks it.
                        Some(Action::Confirm)
                    } else {
                        Some(Action::SelectIndex(row))
                    }
                }
                _ => None,
            }
        }
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}
