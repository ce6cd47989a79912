use crate::app::state::{AppState, Focus};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if let Some(error) = &state.search.error {
            Span::styled(format!("  ERROR: {}  ", error.message), theme.status_error)
        } else if state.search.is_loading {
            Span::styled(
                format!("  {} SEARCHING  ", state.spinner_glyph()),
                theme.status_info,
            )
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        for &(key, desc) in hints(state.focus) {
            spans.push(Span::styled(format!(" {key} "), theme.footer_key));
            spans.push(Span::styled(format!(" {desc}  "), theme.footer_desc));
        }

        let mut current_width: usize = spans.iter().map(Span::width).sum();
        let available = area.width.saturating_sub(2) as usize;
        // Drop trailing hints until the line fits.
        while current_width > available && spans.len() > 2 {
            if let (Some(desc), Some(key)) = (spans.pop(), spans.pop()) {
                current_width = current_width.saturating_sub(desc.width() + key.width());
            } else {
                break;
            }
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}

fn hints(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::Query => &[
            ("Enter", "search"),
            ("Tab", "focus chips"),
            ("C-t", "switch mode"),
            ("C-f", "filter"),
            ("Esc", "quit"),
        ],
        Focus::Suggestions => &[
            ("h/l", "pick chip"),
            ("j/k", "other panel"),
            ("Enter", "use chip"),
            ("1/2", "toggle panels"),
            ("Tab", "focus results"),
        ],
        Focus::Results => &[
            ("j/k", "scroll"),
            ("PgUp/PgDn", "page"),
            ("Tab", "focus input"),
            ("q", "quit"),
        ],
    }
}
