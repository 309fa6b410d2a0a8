use crate::domain::Candidate;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Palette Visibility ---
    OpenPalette,   // Start a new palette session
    TogglePalette, // Hide or reopen the current session

    // --- Palette Input ---
    QueryInput(crossterm::event::KeyEvent), // Edit the query text
    SelectNext,                             // Down
    SelectPrev,                             // Up
    SelectIndex(usize),                     // Mouse click on a row
    Confirm,                                // Enter
    Cancel,                                 // Esc

    // --- Palette Callbacks ---
    // Sent by the palette hooks back into the loop
    Highlighted(Option<Candidate>),
    Selected(Candidate),
    Cancelled(Option<Candidate>),
}
