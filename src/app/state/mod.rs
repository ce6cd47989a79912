use super::config::Config;
use super::keymap::KeyMap;
use super::scroll::ScrollAnimation;
use crate::domain::models::{ContentType, Query, SearchResult};
use std::sync::Arc;
use std::time::Duration;

pub mod error;
pub mod input;
pub mod suggestions;

// Re-exports
pub use error::ErrorState;
pub use input::QueryArea;
pub use suggestions::{SuggestionPanel, SuggestionState};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The two search modes. Switching between them resets to the pristine state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SearchTab {
    #[default]
    AskQuestion,
    KeywordSearch,
}

impl SearchTab {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SearchTab::AskQuestion => "Ask a question",
            SearchTab::KeywordSearch => "Keyword search",
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            SearchTab::AskQuestion => SearchTab::KeywordSearch,
            SearchTab::KeywordSearch => SearchTab::AskQuestion,
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            SearchTab::AskQuestion => "Ask anything about our coverage...",
            SearchTab::KeywordSearch => "Search by keyword...",
        }
    }
}

/// Which region key events are routed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Query,
    Suggestions,
    Results,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Focus::Query => Focus::Suggestions,
            Focus::Suggestions => Focus::Results,
            Focus::Results => Focus::Query,
        }
    }
}

/// Outcome state of the current search cycle. After settlement exactly one
/// of `results`/`error` is meaningful; both are cleared at dispatch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub is_loading: bool,
    /// Monotonically true once any search fires; reset only by a tab switch.
    pub has_searched: bool,
    pub results: Vec<SearchResult>,
    pub error: Option<ErrorState>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    pub should_quit: bool,
    pub tab: SearchTab,
    pub focus: Focus,

    // --- Query ---
    pub query: QueryArea<'a>,
    pub content_type: ContentType,

    // --- Search cycle ---
    pub search: SearchState,
    /// Tag of the most recently dispatched request. Settlements carrying an
    /// older tag are discarded, so the displayed result always belongs to
    /// the latest submission.
    pub request_seq: u64,

    // --- Suggestions ---
    pub suggestions: SuggestionState,

    // --- Scroll ---
    pub page_scroll: u16,
    pub scroll_anim: Option<ScrollAnimation>,
    pub results_scroll: u16,

    // --- Animation / chrome ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub scroll_duration: Duration,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            scroll_duration: Duration::from_millis(config.scroll_duration_ms),
            ..Default::default()
        }
    }

    /// Snapshot of the query input plus the active filter.
    #[must_use]
    pub fn current_query(&self) -> Query {
        Query::new(self.query.text(), self.content_type)
    }

    /// Back to the pristine state: empty query, default filter, no results,
    /// no error, both suggestion panels visible. Invoked on tab switch.
    pub fn reset_tab(&mut self) {
        self.query.clear();
        self.content_type = ContentType::default();
        self.search = SearchState::default();
        self.suggestions = SuggestionState::default();
        self.page_scroll = 0;
        self.results_scroll = 0;
        self.scroll_anim = None;
        self.focus = Focus::Query;
        // Invalidate any in-flight request so a late settlement cannot
        // repopulate the freshly reset state.
        self.request_seq += 1;
    }

    #[must_use]
    pub fn spinner_glyph(&self) -> &'static str {
        SPINNER_FRAMES[(self.frame_count as usize) % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            tab: SearchTab::default(),
            focus: Focus::default(),
            query: QueryArea::default(),
            content_type: ContentType::default(),
            search: SearchState::default(),
            request_seq: 0,
            suggestions: SuggestionState::default(),
            page_scroll: 0,
            scroll_anim: None,
            results_scroll: 0,
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            scroll_duration: Duration::from_millis(600),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_tab_restores_pristine_state_but_invalidates_inflight() {
        let mut state = AppState::default();
        state.query.set_text("climate");
        state.content_type = ContentType::Reports;
        state.search.has_searched = true;
        state.search.results = vec![serde_json::json!({"id": 1})];
        state.suggestions.collapse_all();
        state.request_seq = 4;

        state.reset_tab();

        assert_eq!(state.query.text(), "");
        assert_eq!(state.content_type, ContentType::All);
        assert_eq!(state.search, SearchState::default());
        assert!(state.suggestions.show_questions);
        assert!(state.suggestions.show_keywords);
        assert_eq!(state.request_seq, 5);
    }

    #[test]
    fn focus_cycles_through_all_regions() {
        assert_eq!(Focus::Query.next(), Focus::Suggestions);
        assert_eq!(Focus::Suggestions.next(), Focus::Results);
        assert_eq!(Focus::Results.next(), Focus::Query);
    }
}
