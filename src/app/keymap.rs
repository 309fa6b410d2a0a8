use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Bindings while the palette is open. Unbound keys edit the query.
    pub palette: HashMap<KeyEvent, Action>,
    /// Bindings while the palette is hidden.
    pub closed: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&HashMap::new())
    }
}

impl KeyMap {
    pub fn from_config(custom: &HashMap<String, String>) -> Self {
        let mut palette = HashMap::new();
        let mut closed = HashMap::new();

        // --- Palette Open ---
        palette.insert(key(KeyCode::Up), Action::SelectPrev);
        palette.insert(key(KeyCode::Down), Action::SelectNext);
        palette.insert(ctrl('p'), Action::SelectPrev);
        palette.insert(ctrl('n'), Action::SelectNext);
        palette.insert(key(KeyCode::Enter), Action::Confirm);
        palette.insert(key(KeyCode::Esc), Action::Cancel);
        palette.insert(ctrl('c'), Action::Cancel);
        palette.insert(ctrl('t'), Action::TogglePalette);

        // --- Palette Hidden ---
        closed.insert(plain('/'), Action::TogglePalette);
        closed.insert(key(KeyCode::Enter), Action::TogglePalette);
        closed.insert(ctrl('t'), Action::TogglePalette);
        closed.insert(plain('q'), Action::Quit);
        closed.insert(key(KeyCode::Esc), Action::Quit);
        closed.insert(ctrl('c'), Action::Quit);

        for (spec, name) in custom {
            match (parse_key(spec), parse_action(name)) {
                (Some(event), Some(action)) => {
                    palette.insert(event, action);
                }
                _ => warn!(key = %spec, action = %name, "ignoring unknown key binding"),
            }
        }

        Self { palette, closed }
    }

    pub fn get_action(&self, event: KeyEvent, palette_open: bool) -> Option<Action> {
        let map = if palette_open {
            &self.palette
        } else {
            &self.closed
        };
        map.get(&normalize(event)).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn plain(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Drops event kind/state, and SHIFT on characters (the case already says it).
fn normalize(event: KeyEvent) -> KeyEvent {
    let mut modifiers = event.modifiers;
    if matches!(event.code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(event.code, modifiers)
}

/// Parses specs such as `ctrl-j`, `alt-enter`, `shift-a` or `pagedown`.
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let mut parts: Vec<&str> = spec.split('-').collect();
    // "ctrl--" binds the minus key
    if spec.ends_with("--") {
        parts.truncate(parts.len() - 2);
        parts.push("-");
    }
    let name = parts.pop().filter(|n| !n.is_empty())?;

    let mut modifiers = KeyModifiers::empty();
    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "c" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" | "a" | "m" => modifiers.insert(KeyModifiers::ALT),
            "shift" | "s" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let mut chars = name.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => {
            if modifiers.contains(KeyModifiers::SHIFT) {
                modifiers.remove(KeyModifiers::SHIFT);
                KeyCode::Char(c.to_ascii_uppercase())
            } else if modifiers.is_empty() {
                KeyCode::Char(c)
            } else {
                // Terminals report ctrl/alt letters in lowercase.
                KeyCode::Char(c.to_ascii_lowercase())
            }
        }
        _ => match name.to_ascii_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "backspace" => KeyCode::Backspace,
            "space" => KeyCode::Char(' '),
            _ => return None,
        },
    };

    Some(KeyEvent::new(code, modifiers))
}

pub fn parse_action(name: &str) -> Option<Action> {
    match name.to_ascii_lowercase().as_str() {
        "up" | "prev" => Some(Action::SelectPrev),
        "down" | "next" => Some(Action::SelectNext),
        "confirm" | "select" => Some(Action::Confirm),
        "cancel" => Some(Action::Cancel),
        "toggle" => Some(Action::TogglePalette),
        _ => None,
    }
}
