use super::*;
use crate::app::config::Config;
use crate::domain::Candidate;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

fn candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            description: Some("Open a single file".to_string()),
            ..Candidate::new("Open File")
        },
        Candidate {
            value: Some("folder".to_string()),
            ..Candidate::new("Open Folder")
        },
        Candidate::new("Save As"),
    ]
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

/// Runs the loop over a fixed script of events on an 80x24 test terminal.
async fn run_script(events: Vec<Event>) -> Result<Outcome> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (action_tx, action_rx) = mpsc::channel(100);
    let app_state = AppState::new(&Config::default(), candidates(), action_tx);

    let (event_tx, event_rx) = mpsc::channel(100);
    for event in events {
        event_tx.send(Ok(event)).await.unwrap();
    }

    tokio::time::timeout(
        std::time::Duration::from_secs(5),
        run_loop_with_events(&mut terminal, app_state, event_rx, action_rx),
    )
    .await
    .expect("loop did not finish")
}

#[tokio::test]
async fn test_filter_move_and_confirm() {
    let outcome = run_script(vec![
        key(KeyCode::Char('o'), KeyModifiers::NONE),
        key(KeyCode::Char('f'), KeyModifiers::NONE),
        key(KeyCode::Down, KeyModifiers::NONE),
        key(KeyCode::Enter, KeyModifiers::NONE),
    ])
    .await
    .unwrap();

    let Outcome::Selected(candidate) = outcome else {
        panic!("expected a selection, got {outcome:?}");
    };
    assert_eq!(candidate.label, "Open Folder");
    assert_eq!(candidate.output(), "folder");
}

#[tokio::test]
async fn test_escape_cancels() {
    let outcome = run_script(vec![
        key(KeyCode::Down, KeyModifiers::NONE),
        key(KeyCode::Esc, KeyModifiers::NONE),
    ])
    .await
    .unwrap();
    assert_eq!(outcome, Outcome::Cancelled);
}

#[tokio::test]
async fn test_quit_after_hiding_palette() {
    let outcome = run_script(vec![
        key(KeyCode::Char('t'), KeyModifiers::CONTROL),
        key(KeyCode::Char('q'), KeyModifiers::NONE),
    ])
    .await
    .unwrap();
    assert_eq!(outcome, Outcome::Cancelled);
}

#[tokio::test]
async fn test_input_error_propagates() {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let (action_tx, action_rx) = mpsc::channel(100);
    let app_state = AppState::new(&Config::default(), candidates(), action_tx);
    let (event_tx, event_rx) = mpsc::channel(1);
    event_tx
        .send(Err(std::io::Error::new(std::io::ErrorKind::Other, "tty gone")))
        .await
        .unwrap();

    let result = run_loop_with_events(&mut terminal, app_state, event_rx, action_rx).await;
    assert!(result.unwrap_err().to_string().contains("tty gone"));
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (action_tx, action_rx) = mpsc::channel(100);
    let labels = (0..60).map(|i| Candidate::new(format!("command number {i}")));
    let app_state = AppState::new(&Config::default(), labels.collect(), action_tx);

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..5000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            // The loop returns as soon as a session finishes.
            if event_tx.send(Ok(event)).await.is_err() {
                return;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Esc cancels an open palette and quits a hidden one.
        let _ = event_tx
            .send(Ok(key(KeyCode::Esc, KeyModifiers::NONE)))
            .await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, event_rx, action_rx),
    )
    .await;

    match result {
        Ok(res) => {
            res.unwrap();
        }
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    // Enter, Esc and ctrl-c would end the run on the first few events.
    let code = match rng.gen_range(0..16) {
        0 => KeyCode::Left,
        1 => KeyCode::Right,
        2 => KeyCode::Up,
        3 => KeyCode::Down,
        4 => KeyCode::Home,
        5 => KeyCode::End,
        6 => KeyCode::PageUp,
        7 => KeyCode::PageDown,
        8 => KeyCode::Tab,
        9 => KeyCode::Delete,
        10 => KeyCode::Backspace,
        _ => loop {
            let c = rng.gen_range(b' '..=b'~') as char;
            if c != 'q' && c != 'c' {
                break KeyCode::Char(c);
            }
        },
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
