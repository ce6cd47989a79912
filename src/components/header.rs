use crate::app::state::AppState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mode = format!(" {} ", self.state.tab.title());
        let filter = format!(" filter: {} ", self.state.content_type.label());

        let spans = vec![
            Span::styled(" SEEKER ", self.theme.header_logo),
            Span::styled(mode, self.theme.header),
            Span::styled(filter, self.theme.header_item),
            // Fill the rest of the line with the header background.
            Span::styled(" ".repeat(area.width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
