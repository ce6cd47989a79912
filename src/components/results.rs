use crate::app::state::{AppState, Focus};
use crate::domain::models::SearchResult;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// The settled outcome of the current search cycle: loading spinner, error
/// message, empty-result notice, or the result list itself. Result records
/// are opaque JSON; known fields are picked out best-effort and anything
/// unrecognized falls back to its compact JSON form.
pub struct ResultsView<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let border = if state.focus == Focus::Results {
            theme.border_focus
        } else {
            theme.border
        };
        let count = if state.search.has_searched && !state.search.is_loading {
            format!(" ({})", state.search.results.len())
        } else {
            String::new()
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("RESULTS", theme.panel_title),
                Span::styled(count, theme.panel_hint),
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

        let lines = if state.search.is_loading {
            vec![Line::from(vec![
                Span::styled(state.spinner_glyph(), theme.status_info),
                Span::styled(" Searching...", theme.status_info),
            ])]
        } else if let Some(error) = &state.search.error {
            vec![
                Line::from(Span::styled(
                    format!("✗ {}", error.message),
                    theme.status_error,
                )),
                Line::from(Span::styled(
                    format!("  at {}", error.timestamp.format("%H:%M:%S")),
                    theme.panel_hint,
                )),
                Line::default(),
                Line::from(Span::styled(
                    "Press Enter to try again.",
                    theme.panel_hint,
                )),
            ]
        } else if !state.search.has_searched {
            vec![Line::from(Span::styled(
                "Results will appear here.",
                theme.panel_hint,
            ))]
        } else if state.search.results.is_empty() {
            vec![Line::from(Span::styled(
                "No results found.",
                theme.panel_hint,
            ))]
        } else {
            result_lines(state, theme, inner)
        };

        Paragraph::new(lines).render(inner, buf);
    }
}

fn result_lines<'t>(state: &AppState, theme: &'t Theme, inner: Rect) -> Vec<Line<'t>> {
    let mut lines = Vec::new();
    let start = (state.results_scroll as usize).min(state.search.results.len());
    for (idx, result) in state.search.results.iter().enumerate().skip(start) {
        if lines.len() >= inner.height as usize {
            break;
        }
        lines.push(Line::from(Span::styled(
            format!("{}. {}", idx + 1, title_of(result, idx)),
            theme.result_title,
        )));
        if let Some(snippet) = text_field(result, &["description", "summary", "excerpt"]) {
            lines.push(Line::from(Span::styled(
                format!("   {snippet}"),
                theme.result_snippet,
            )));
        }
        if let Some(url) = text_field(result, &["url", "link"]) {
            lines.push(Line::from(Span::styled(
                format!("   {url}"),
                theme.result_url,
            )));
        }
        lines.push(Line::default());
    }
    lines
}

fn title_of(result: &SearchResult, idx: usize) -> String {
    text_field(result, &["title", "name", "headline"])
        .unwrap_or_else(|| match serde_json::to_string(result) {
            Ok(raw) => raw,
            Err(_) => format!("Result {}", idx + 1),
        })
}

fn text_field(result: &SearchResult, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| result.get(key))
        .and_then(|v| v.as_str())
        .map(ToString::to_string)
}
