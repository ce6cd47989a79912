use crate::domain::models::SearchResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Search intents ---
    Submit,                    // Validate and dispatch the current query
    SelectSuggestion(String),  // Fill the input with a chip label and submit
    CycleContentType,          // all -> news -> research -> reports -> articles
    ToggleTab,                 // Switch search mode; resets to pristine state
    ToggleQuestionPanel,
    ToggleKeywordPanel,

    // --- Focus & navigation ---
    CycleFocus,
    FocusQuery,
    NextSuggestion,
    PrevSuggestion,
    SwitchSuggestionPanel,
    ScrollResultsUp(u16),
    ScrollResultsDown(u16),

    // --- Input ---
    QueryInput(crossterm::event::KeyEvent),

    // --- Async Results (The "Callback") ---
    // Dispatched by the search worker back to the main loop. The tag pairs
    // the settlement with the submission that started it.
    SearchSettled(u64, Result<Vec<SearchResult>, String>),
}
