use crate::app::{
    action::Action,
    command::{Command, Outcome},
    input::map_event_to_action,
    reducer,
    state::AppState,
    ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, error};

const TICK_RATE: Duration = Duration::from_millis(250);
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Runs the picker until the palette finishes, reading input from the real
/// terminal. `action_rx` receives the notifications the palette hooks send.
pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    action_rx: mpsc::Receiver<Action>,
) -> Result<Outcome> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    // Polls so the thread exits once the loop drops its receiver.
    tokio::task::spawn_blocking(move || loop {
        if event_tx.is_closed() {
            break;
        }
        match event::poll(POLL_TIMEOUT).and_then(|ready| ready.then(event::read).transpose()) {
            Ok(None) => {}
            Ok(Some(evt)) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, event_rx, action_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
    mut action_rx: mpsc::Receiver<Action>,
) -> Result<Outcome> {
    let mut interval = interval(TICK_RATE);

    reducer::update(&mut app_state, Action::OpenPalette);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        // Hook notifications go first so a finished session is never followed
        // by more input.
        let action = tokio::select! {
            biased;

            Some(a) = action_rx.recv() => Some(a),

            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => {
                        error!(error = %e, "terminal input failed");
                        return Err(e.into());
                    }
                };
                map_event_to_action(event, &app_state)
            },
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if !matches!(action, Action::Tick) {
                debug!(?action, "dispatching");
            }

            if let Some(Command::Finish(outcome)) = reducer::update(&mut app_state, action) {
                return Ok(outcome);
            }

            if app_state.should_quit {
                return Ok(Outcome::Cancelled);
            }
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
