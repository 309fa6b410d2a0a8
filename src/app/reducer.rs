use super::{
    action::Action,
    command::{Command, Outcome},
    state::AppState,
};
use crate::palette::Direction;
use tracing::{debug, info};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- Visibility ---
        Action::OpenPalette => {
            state.open_palette();
        }
        Action::TogglePalette => {
            if !state.palette.is_open() {
                state.reset_query();
            }
            state.palette.toggle();
        }

        // --- Palette Input ---
        Action::QueryInput(key) => {
            if state.input_has_focus() && state.query.input(key) {
                let query = state.query.text();
                state.palette.on_query_change(&query);
            }
        }
        Action::SelectNext => {
            state.palette.move_selection(Direction::Down);
        }
        Action::SelectPrev => {
            state.palette.move_selection(Direction::Up);
        }
        Action::SelectIndex(index) => {
            state.palette.select_index(index);
        }
        Action::Confirm => {
            state.palette.confirm();
        }
        Action::Cancel => {
            state.palette.cancel();
        }

        // --- Palette Callbacks ---
        Action::Highlighted(candidate) => {
            debug!(label = candidate.as_ref().map(|c| c.label.as_str()), "highlight changed");
            state.highlighted = candidate;
        }
        Action::Selected(candidate) => {
            info!(label = %candidate.label, "candidate selected");
            return Some(Command::Finish(Outcome::Selected(candidate)));
        }
        Action::Cancelled(candidate) => {
            info!(
                highlighted = candidate.as_ref().map(|c| c.label.as_str()),
                "selection cancelled"
            );
            return Some(Command::Finish(Outcome::Cancelled));
        }

        // --- System ---
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
        }
        Action::Resize(width, height) => {
            debug!(width, height, "terminal resized");
        }
    }
    None
}
