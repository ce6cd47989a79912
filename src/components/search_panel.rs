use crate::app::state::{AppState, Focus, SearchTab};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Tab strip, query input, filter line and status line, inside one bordered
/// block. Fixed height (`ui::SEARCH_PANEL_HEIGHT`).
pub struct SearchPanel<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for SearchPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let border = if state.focus == Focus::Query {
            theme.border_focus
        } else {
            theme.border
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SEARCH", theme.panel_title),
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

        // Row 0: tabs
        let mut tabs = Vec::new();
        for tab in [SearchTab::AskQuestion, SearchTab::KeywordSearch] {
            let style = if tab == state.tab {
                theme.tab_active
            } else {
                theme.tab_inactive
            };
            tabs.push(Span::styled(format!(" {} ", tab.title()), style));
            tabs.push(Span::raw("  "));
        }
        tabs.push(Span::styled("(Ctrl+T switches)", theme.panel_hint));
        Paragraph::new(Line::from(tabs)).render(row(inner, 0), buf);

        // Row 2: query input (row 1 stays blank for breathing room)
        if inner.height > 2 {
            let input_area = row(inner, 2);
            if state.query.text().is_empty() && state.focus != Focus::Query {
                Paragraph::new(Span::styled(state.tab.placeholder(), theme.input_hint))
                    .render(input_area, buf);
            } else {
                (&state.query).render(input_area, buf);
            }
        }

        // Row 3: content-type filter
        if inner.height > 3 {
            Paragraph::new(Line::from(vec![
                Span::styled("Filter: ", theme.panel_hint),
                Span::styled(state.content_type.label(), theme.input),
                Span::styled("  (Ctrl+F cycles)", theme.panel_hint),
            ]))
            .render(row(inner, 3), buf);
        }

        // Row 4: status
        if inner.height > 4 {
            let status = if state.search.is_loading {
                Line::from(vec![
                    Span::styled(state.spinner_glyph(), theme.status_info),
                    Span::styled(" Searching...", theme.status_info),
                ])
            } else {
                Line::from(Span::styled(
                    "Press Enter to search",
                    theme.panel_hint,
                ))
            };
            Paragraph::new(status).render(row(inner, 4), buf);
        }
    }
}

fn row(inner: Rect, offset: u16) -> Rect {
    Rect::new(inner.x, inner.y + offset, inner.width, 1)
}
