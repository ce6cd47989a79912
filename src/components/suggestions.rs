use crate::app::state::{AppState, Focus, SuggestionPanel};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// One chip panel. Expanded it shows its chips flowed into rows; collapsed
/// it is a single hint line with the key that re-opens it.
pub struct SuggestionsPanel<'a> {
    pub panel: SuggestionPanel,
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl SuggestionsPanel<'_> {
    fn title(&self) -> &'static str {
        match self.panel {
            SuggestionPanel::Questions => "EXAMPLE QUESTIONS",
            SuggestionPanel::Keywords => "TOPIC KEYWORDS",
        }
    }

    fn toggle_key(&self) -> &'static str {
        match self.panel {
            SuggestionPanel::Questions => "1",
            SuggestionPanel::Keywords => "2",
        }
    }

    fn chips(&self) -> &[&'static str] {
        match self.panel {
            SuggestionPanel::Questions => &self.state.suggestions.questions,
            SuggestionPanel::Keywords => &self.state.suggestions.keywords,
        }
    }
}

impl Widget for SuggestionsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        if !state.suggestions.is_visible(self.panel) {
            // Collapsed: single hint row.
            Paragraph::new(Line::from(vec![
                Span::styled("▸ ", theme.panel_hint),
                Span::styled(self.title(), theme.panel_hint),
                Span::styled(
                    format!("  ({} to show)", self.toggle_key()),
                    theme.panel_hint,
                ),
            ]))
            .render(area, buf);
            return;
        }

        let focused =
            state.focus == Focus::Suggestions && state.suggestions.panel == self.panel;
        let border = if focused {
            theme.border_focus
        } else {
            theme.border
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(self.title(), theme.panel_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Flow chips left to right, wrapping into the inner rows. The lists
        // are length-sorted, which keeps the rows tightly packed.
        let mut lines: Vec<Line> = Vec::new();
        let mut current = Line::default();
        let mut used: usize = 0;
        for (idx, chip) in self.chips().iter().enumerate() {
            let label = format!(" {chip} ");
            let width = label.len() + 1;
            if used > 0 && used + width > inner.width as usize {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            let style = if focused && state.suggestions.selected == idx {
                theme.chip_selected
            } else {
                theme.chip
            };
            current.spans.push(Span::styled(label, style));
            current.spans.push(Span::raw(" "));
            used += width;
        }
        lines.push(current);

        lines.truncate(inner.height as usize);
        Paragraph::new(lines).render(inner, buf);
    }
}
