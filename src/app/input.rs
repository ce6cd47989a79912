use crate::app::{action::Action, state::AppState, state::Focus};
use crossterm::event::{Event, KeyCode, MouseEventKind};

/// Translates a terminal event into an `Action` for the reducer. Static
/// bindings live in the keymap; everything that depends on state (chip under
/// the cursor, printable characters while typing) is resolved here.
pub fn map_event_to_action(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
    }

    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) => {
            if let Some(action) = app_state.keymap.get_action(key, app_state.focus) {
                return Some(action);
            }
            match app_state.focus {
                Focus::Query => match key.code {
                    KeyCode::Enter => Some(Action::Submit),
                    KeyCode::Esc => Some(Action::Quit),
                    _ => Some(Action::QueryInput(key)),
                },
                Focus::Suggestions => match key.code {
                    // Enter/Space on a chip selects it, which is sugar over
                    // typing the label and submitting.
                    KeyCode::Enter | KeyCode::Char(' ') => app_state
                        .suggestions
                        .selected_label()
                        .map(|label| Action::SelectSuggestion(label.to_string())),
                    _ => None,
                },
                Focus::Results => None,
            }
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollResultsUp(1)),
            MouseEventKind::ScrollDown => Some(Action::ScrollResultsDown(1)),
            _ => None,
        },
        _ => None,
    }
}
