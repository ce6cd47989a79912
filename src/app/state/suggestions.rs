/// Pre-defined searches the user can run with one keypress. Both panels are
/// visible until the first search collapses them; afterwards each one can be
/// re-opened independently.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SuggestionPanel {
    Questions,
    Keywords,
}

const EXAMPLE_QUESTIONS: [&str; 6] = [
    "What is driving the shift to renewable energy?",
    "How do interest rates shape housing affordability?",
    "Why are global supply chains still fragile?",
    "What does AI regulation look like in practice?",
    "How is remote work changing city economies?",
    "Who funds independent policy research?",
];

const TOPIC_KEYWORDS: [&str; 8] = [
    "climate policy",
    "elections",
    "housing",
    "supply chains",
    "artificial intelligence",
    "public health",
    "energy markets",
    "labor",
];

/// Presentation rule: chips render sorted ascending by string length so they
/// pack into rows cleanly.
fn sorted_by_length(items: &[&'static str]) -> Vec<&'static str> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|s| s.len());
    sorted
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionState {
    pub show_questions: bool,
    pub show_keywords: bool,
    pub questions: Vec<&'static str>,
    pub keywords: Vec<&'static str>,
    /// Which panel the chip cursor is in.
    pub panel: SuggestionPanel,
    pub selected: usize,
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self {
            show_questions: true,
            show_keywords: true,
            questions: sorted_by_length(&EXAMPLE_QUESTIONS),
            keywords: sorted_by_length(&TOPIC_KEYWORDS),
            panel: SuggestionPanel::Questions,
            selected: 0,
        }
    }
}

impl SuggestionState {
    /// Auto-hide once a search has been performed.
    pub fn collapse_all(&mut self) {
        self.show_questions = false;
        self.show_keywords = false;
    }

    pub fn toggle(&mut self, panel: SuggestionPanel) {
        match panel {
            SuggestionPanel::Questions => self.show_questions = !self.show_questions,
            SuggestionPanel::Keywords => self.show_keywords = !self.show_keywords,
        }
    }

    #[must_use]
    pub fn is_visible(&self, panel: SuggestionPanel) -> bool {
        match panel {
            SuggestionPanel::Questions => self.show_questions,
            SuggestionPanel::Keywords => self.show_keywords,
        }
    }

    fn chips(&self, panel: SuggestionPanel) -> &[&'static str] {
        match panel {
            SuggestionPanel::Questions => &self.questions,
            SuggestionPanel::Keywords => &self.keywords,
        }
    }

    /// Label under the cursor, if its panel is currently expanded.
    #[must_use]
    pub fn selected_label(&self) -> Option<&'static str> {
        if !self.is_visible(self.panel) {
            return None;
        }
        self.chips(self.panel).get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.chips(self.panel).len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.chips(self.panel).len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Moves the cursor to the other panel if that panel is expanded.
    pub fn switch_panel(&mut self) {
        let other = match self.panel {
            SuggestionPanel::Questions => SuggestionPanel::Keywords,
            SuggestionPanel::Keywords => SuggestionPanel::Questions,
        };
        if self.is_visible(other) {
            self.panel = other;
            self.selected = self.selected.min(self.chips(other).len().saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_length_sorted(items: &[&str]) -> bool {
        items.windows(2).all(|w| w[0].len() <= w[1].len())
    }

    #[test]
    fn chips_are_sorted_ascending_by_length() {
        let state = SuggestionState::default();
        assert!(is_length_sorted(&state.questions));
        assert!(is_length_sorted(&state.keywords));
        assert_eq!(state.questions.len(), EXAMPLE_QUESTIONS.len());
        assert_eq!(state.keywords.len(), TOPIC_KEYWORDS.len());
    }

    #[test]
    fn panels_default_visible_and_toggle_independently() {
        let mut state = SuggestionState::default();
        assert!(state.show_questions);
        assert!(state.show_keywords);

        state.collapse_all();
        assert!(!state.show_questions);
        assert!(!state.show_keywords);

        state.toggle(SuggestionPanel::Keywords);
        assert!(!state.show_questions);
        assert!(state.show_keywords);
    }

    #[test]
    fn selection_wraps_within_the_active_panel() {
        let mut state = SuggestionState::default();
        state.select_prev();
        assert_eq!(state.selected, state.questions.len() - 1);
        state.select_next();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn collapsed_panel_yields_no_selected_label() {
        let mut state = SuggestionState::default();
        assert!(state.selected_label().is_some());
        state.collapse_all();
        assert!(state.selected_label().is_none());
    }

    #[test]
    fn switch_panel_skips_a_collapsed_panel() {
        let mut state = SuggestionState::default();
        state.toggle(SuggestionPanel::Keywords); // hide keywords
        state.switch_panel();
        assert_eq!(state.panel, SuggestionPanel::Questions);

        state.toggle(SuggestionPanel::Keywords);
        state.switch_panel();
        assert_eq!(state.panel, SuggestionPanel::Keywords);
    }
}
