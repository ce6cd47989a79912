use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::domain::search::SearchGateway;
use crate::theme::Theme;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

// Short enough that the scroll animation samples smoothly.
const TICK_RATE: Duration = Duration::from_millis(50);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    gateway: Arc<dyn SearchGateway>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
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

    run_loop_with_events(terminal, app_state, gateway, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    gateway: Arc<dyn SearchGateway>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    let theme = Theme::default();

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state, &theme);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, gateway.clone(), action_tx.clone());
            }
        }
    }

    Ok(())
}

/// Runs one side effect off the main loop. Each search is an independent
/// task; its settlement comes back as an action tagged with the submission
/// sequence so the reducer can discard superseded responses.
pub(crate) fn handle_command(
    command: Command,
    gateway: Arc<dyn SearchGateway>,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::Search(seq, query) => {
            tokio::spawn(async move {
                let outcome = gateway.search(&query).await.map_err(|e| e.to_string());
                let _ = tx.send(Action::SearchSettled(seq, outcome)).await;
            });
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
