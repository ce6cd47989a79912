use super::{
    action::Action,
    command::Command,
    scroll::ScrollAnimation,
    state::{AppState, ErrorState, Focus, SuggestionPanel},
    ui,
};
use crate::domain::models::SearchResult;
use std::time::Instant;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- System ---
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            advance_scroll(state, Instant::now());
        }
        Action::Resize(..) => {}
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Search intents ---
        Action::Submit => return submit(state),
        Action::SelectSuggestion(label) => {
            state.query.set_text(&label);
            return submit(state);
        }
        Action::CycleContentType => {
            state.content_type = state.content_type.next();
        }
        Action::ToggleTab => {
            state.tab = state.tab.other();
            state.reset_tab();
        }
        Action::ToggleQuestionPanel => {
            state.suggestions.toggle(SuggestionPanel::Questions);
        }
        Action::ToggleKeywordPanel => {
            state.suggestions.toggle(SuggestionPanel::Keywords);
        }

        // --- Focus & navigation ---
        Action::CycleFocus => {
            state.focus = state.focus.next();
        }
        Action::FocusQuery => {
            state.focus = Focus::Query;
        }
        Action::NextSuggestion => {
            state.suggestions.select_next();
        }
        Action::PrevSuggestion => {
            state.suggestions.select_prev();
        }
        Action::SwitchSuggestionPanel => {
            state.suggestions.switch_panel();
        }
        Action::ScrollResultsDown(amount) => {
            let max_scroll = state.search.results.len().saturating_sub(1) as u16;
            state.results_scroll = state.results_scroll.saturating_add(amount).min(max_scroll);
        }
        Action::ScrollResultsUp(amount) => {
            state.results_scroll = state.results_scroll.saturating_sub(amount);
        }

        // --- Input ---
        Action::QueryInput(key) => {
            state.query.input(key);
        }

        // --- Async Results ---
        Action::SearchSettled(seq, outcome) => settle(state, seq, outcome),
    }
    None
}

/// One logical attempt per invocation. Empty queries are a silent no-op;
/// otherwise the loading flags flip synchronously, both suggestion panels
/// collapse, and a single tagged request goes out.
fn submit(state: &mut AppState) -> Option<Command> {
    let query = state.current_query();
    if query.is_empty() {
        return None;
    }

    state.request_seq += 1;
    state.search.is_loading = true;
    state.search.has_searched = true;
    state.search.error = None;
    state.search.results.clear();
    state.results_scroll = 0;
    state.suggestions.collapse_all();

    Some(Command::Search(state.request_seq, query))
}

fn settle(state: &mut AppState, seq: u64, outcome: Result<Vec<SearchResult>, String>) {
    // A settlement for anything but the latest submission is stale; the
    // request that superseded it already owns the loading flag.
    if seq != state.request_seq {
        return;
    }

    state.search.is_loading = false;
    match outcome {
        Ok(results) => {
            state.search.results = results;
            state.search.error = None;
        }
        Err(message) => {
            state.search.results.clear();
            state.search.error = Some(ErrorState::new(message));
        }
    }
    begin_results_scroll(state, Instant::now());
}

/// Fires once per settlement, on the `(has_searched, is_loading)` transition
/// to `(true, false)`: ease the page offset until the results region sits at
/// the top of the viewport.
fn begin_results_scroll(state: &mut AppState, now: Instant) {
    let target = f64::from(ui::results_top(state));
    state.scroll_anim = Some(ScrollAnimation::new(
        f64::from(state.page_scroll),
        target,
        state.scroll_duration,
        now,
    ));
}

fn advance_scroll(state: &mut AppState, now: Instant) {
    if let Some(anim) = state.scroll_anim {
        state.page_scroll = anim.sample(now).round().max(0.0) as u16;
        if anim.is_finished(now) {
            state.page_scroll = anim.target().round().max(0.0) as u16;
            state.scroll_anim = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SearchState;
    use crate::domain::models::ContentType;
    use serde_json::json;
    use std::time::Duration;

    fn submitted_state(text: &str) -> (AppState<'static>, Option<Command>) {
        let mut state = AppState::default();
        state.query.set_text(text);
        let command = update(&mut state, Action::Submit);
        (state, command)
    }

    #[test]
    fn submit_dispatches_one_tagged_search() {
        let (state, command) = submitted_state("climate");
        assert_eq!(
            command,
            Some(Command::Search(
                1,
                crate::domain::models::Query::new("climate", ContentType::All)
            ))
        );
        assert!(state.search.is_loading);
        assert!(state.search.has_searched);
        assert!(state.search.error.is_none());
        assert!(state.search.results.is_empty());
        assert!(!state.suggestions.show_questions);
        assert!(!state.suggestions.show_keywords);
    }

    #[test]
    fn empty_or_whitespace_query_is_a_silent_no_op() {
        for text in ["", "   ", "\t  \t"] {
            let mut state = AppState::default();
            state.query.set_text(text);
            let before = state.clone();
            let command = update(&mut state, Action::Submit);
            assert_eq!(command, None);
            assert_eq!(state, before, "state changed for {text:?}");
        }
    }

    #[test]
    fn submit_carries_the_selected_content_type() {
        let mut state = AppState::default();
        state.query.set_text("housing");
        state.content_type = ContentType::Reports;
        match update(&mut state, Action::Submit) {
            Some(Command::Search(_, query)) => {
                assert_eq!(query.content_type, ContentType::Reports);
            }
            other => panic!("expected a search command, got {other:?}"),
        }
    }

    #[test]
    fn successful_settlement_stores_results_verbatim() {
        let (mut state, _) = submitted_state("climate");
        update(
            &mut state,
            Action::SearchSettled(1, Ok(vec![json!({"id": 1})])),
        );
        assert!(!state.search.is_loading);
        assert_eq!(state.search.results, vec![json!({"id": 1})]);
        assert!(state.search.error.is_none());
    }

    #[test]
    fn failed_settlement_stores_the_message_and_empties_results() {
        let (mut state, _) = submitted_state("climate");
        update(&mut state, Action::SearchSettled(1, Err("db down".into())));
        assert!(!state.search.is_loading);
        assert!(state.search.results.is_empty());
        assert_eq!(state.search.error.as_ref().unwrap().message, "db down");
    }

    #[test]
    fn loading_is_true_strictly_between_dispatch_and_settlement() {
        let (mut state, _) = submitted_state("climate");
        assert!(state.search.is_loading);
        // Settlement still pending across ticks.
        update(&mut state, Action::Tick);
        assert!(state.search.is_loading);
        update(&mut state, Action::SearchSettled(1, Ok(vec![])));
        assert!(!state.search.is_loading);
    }

    #[test]
    fn stale_settlement_is_discarded() {
        let (mut state, _) = submitted_state("first");
        state.query.set_text("second");
        let command = update(&mut state, Action::Submit);
        assert_eq!(state.request_seq, 2);
        assert!(matches!(command, Some(Command::Search(2, _))));

        // The first request settles late; its payload must not win.
        update(
            &mut state,
            Action::SearchSettled(1, Ok(vec![json!({"stale": true})])),
        );
        assert!(state.search.is_loading, "stale settlement ended loading");
        assert!(state.search.results.is_empty());

        update(
            &mut state,
            Action::SearchSettled(2, Ok(vec![json!({"fresh": true})])),
        );
        assert_eq!(state.search.results, vec![json!({"fresh": true})]);
    }

    #[test]
    fn settlement_after_tab_reset_is_discarded() {
        let (mut state, _) = submitted_state("climate");
        update(&mut state, Action::ToggleTab);
        update(
            &mut state,
            Action::SearchSettled(1, Ok(vec![json!({"id": 1})])),
        );
        assert_eq!(state.search, SearchState::default());
    }

    #[test]
    fn suggestion_selection_matches_typing_the_label() {
        let label = "climate policy";

        let mut typed = AppState::default();
        typed.query.set_text(label);
        let typed_cmd = update(&mut typed, Action::Submit);

        let mut clicked = AppState::default();
        let clicked_cmd = update(&mut clicked, Action::SelectSuggestion(label.to_string()));

        assert_eq!(typed_cmd, clicked_cmd);
        assert_eq!(typed, clicked);

        // And identical settlements produce identical state.
        let outcome = Ok(vec![json!({"id": 7})]);
        update(&mut typed, Action::SearchSettled(1, outcome.clone()));
        update(&mut clicked, Action::SearchSettled(1, outcome));
        assert_eq!(typed.search, clicked.search);
    }

    #[test]
    fn tab_switch_resets_to_pristine_state() {
        let (mut state, _) = submitted_state("climate");
        update(&mut state, Action::SearchSettled(1, Ok(vec![json!(1)])));
        update(&mut state, Action::ToggleTab);

        assert_eq!(state.tab, crate::app::state::SearchTab::KeywordSearch);
        assert_eq!(state.query.text(), "");
        assert_eq!(state.search, SearchState::default());
        assert!(state.suggestions.show_questions);
        assert!(state.suggestions.show_keywords);
    }

    #[test]
    fn settlement_starts_the_scroll_animation_once() {
        let (mut state, _) = submitted_state("climate");
        assert!(state.scroll_anim.is_none());
        update(&mut state, Action::SearchSettled(1, Ok(vec![json!(1)])));
        let anim = state.scroll_anim.expect("animation should start");
        assert_eq!(anim.target(), f64::from(ui::results_top(&state)));
    }

    #[test]
    fn error_settlement_also_scrolls_the_results_region_into_view() {
        let (mut state, _) = submitted_state("climate");
        update(&mut state, Action::SearchSettled(1, Err("down".into())));
        assert!(state.scroll_anim.is_some());
    }

    #[test]
    fn finished_animation_is_dropped_and_offset_pinned() {
        let mut state = AppState::default();
        state.scroll_duration = Duration::ZERO;
        state.query.set_text("climate");
        update(&mut state, Action::Submit);
        update(&mut state, Action::SearchSettled(1, Ok(vec![json!(1)])));
        update(&mut state, Action::Tick);
        assert_eq!(state.page_scroll, ui::results_top(&state));
        assert!(state.scroll_anim.is_none(), "no further frames scheduled");
    }

    #[test]
    fn results_scroll_saturates_at_the_edges() {
        let mut state = AppState::default();
        state.search.results = (0..5).map(|i| json!({ "id": i })).collect();
        update(&mut state, Action::ScrollResultsDown(10));
        assert_eq!(state.results_scroll, 4);
        update(&mut state, Action::ScrollResultsUp(10));
        assert_eq!(state.results_scroll, 0);
    }
}
