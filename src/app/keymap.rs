use super::action::Action;
use super::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Static key tables per focus region. Keys that need state to resolve
/// (Enter on a chip, printable characters in the query input) are handled in
/// `input::map_event_to_action` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub suggestions: HashMap<KeyEvent, Action>,
    pub results: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut suggestions = HashMap::new();
        let mut results = HashMap::new();

        // --- Global (any focus) ---
        global.insert(ctrl('c'), Action::Quit);
        global.insert(ctrl('t'), Action::ToggleTab);
        global.insert(ctrl('f'), Action::CycleContentType);
        global.insert(key(KeyCode::Tab), Action::CycleFocus);
        global.insert(key(KeyCode::BackTab), Action::ToggleTab);

        // --- Suggestions focus ---
        suggestions.insert(ch('h'), Action::PrevSuggestion);
        suggestions.insert(key(KeyCode::Left), Action::PrevSuggestion);
        suggestions.insert(ch('l'), Action::NextSuggestion);
        suggestions.insert(key(KeyCode::Right), Action::NextSuggestion);
        suggestions.insert(ch('j'), Action::SwitchSuggestionPanel);
        suggestions.insert(key(KeyCode::Down), Action::SwitchSuggestionPanel);
        suggestions.insert(ch('k'), Action::SwitchSuggestionPanel);
        suggestions.insert(key(KeyCode::Up), Action::SwitchSuggestionPanel);
        suggestions.insert(ch('1'), Action::ToggleQuestionPanel);
        suggestions.insert(ch('2'), Action::ToggleKeywordPanel);
        suggestions.insert(ch('q'), Action::Quit);
        suggestions.insert(key(KeyCode::Esc), Action::FocusQuery);

        // --- Results focus ---
        results.insert(ch('j'), Action::ScrollResultsDown(1));
        results.insert(key(KeyCode::Down), Action::ScrollResultsDown(1));
        results.insert(ch('k'), Action::ScrollResultsUp(1));
        results.insert(key(KeyCode::Up), Action::ScrollResultsUp(1));
        results.insert(key(KeyCode::PageDown), Action::ScrollResultsDown(10));
        results.insert(key(KeyCode::PageUp), Action::ScrollResultsUp(10));
        results.insert(ch('q'), Action::Quit);
        results.insert(key(KeyCode::Esc), Action::FocusQuery);

        Self {
            global,
            suggestions,
            results,
        }
    }
}

impl KeyMap {
    #[must_use]
    pub fn get_action(&self, event: KeyEvent, focus: Focus) -> Option<Action> {
        if let Some(action) = self.global.get(&event) {
            return Some(action.clone());
        }
        let table = match focus {
            Focus::Query => return None,
            Focus::Suggestions => &self.suggestions,
            Focus::Results => &self.results,
        };
        table.get(&event).cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
