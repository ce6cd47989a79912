use crate::app::state::{AppState, SuggestionPanel};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::results::ResultsView;
use crate::components::search_panel::SearchPanel;
use crate::components::suggestions::SuggestionsPanel;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
    Frame,
};

/// Fixed heights of the page sections, in terminal rows. The scroll target
/// is derived from these, so they are constants rather than measurements.
pub const SEARCH_PANEL_HEIGHT: u16 = 7;
pub const CHIP_PANEL_EXPANDED_HEIGHT: u16 = 6;
pub const CHIP_PANEL_COLLAPSED_HEIGHT: u16 = 1;

#[must_use]
pub fn chip_panel_height(state: &AppState, panel: SuggestionPanel) -> u16 {
    if state.suggestions.is_visible(panel) {
        CHIP_PANEL_EXPANDED_HEIGHT
    } else {
        CHIP_PANEL_COLLAPSED_HEIGHT
    }
}

/// Page row where the results region begins; the scroll animation eases the
/// page offset toward this value to bring results into view.
#[must_use]
pub fn results_top(state: &AppState) -> u16 {
    SEARCH_PANEL_HEIGHT
        + chip_panel_height(state, SuggestionPanel::Questions)
        + chip_panel_height(state, SuggestionPanel::Keywords)
}

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

#[must_use]
pub fn get_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body (scrollable page)
            Constraint::Length(1), // Footer
        ])
        .split(area);
    AppLayout {
        header: rows[0],
        body: rows[1],
        footer: rows[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState, theme: &Theme) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());

    if layout.header.height > 0 {
        f.render_widget(
            Header {
                state: app_state,
                theme,
            },
            layout.header,
        );
    }

    if layout.body.height > 0 {
        render_page(f, app_state, theme, layout.body);
    }

    if layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }
}

/// The body is a virtual page taller than the viewport: search panel, the
/// two chip panels, then a viewport-sized results region. It renders into an
/// off-screen buffer and blits the `page_scroll` window, which is what makes
/// the row-by-row smooth scroll possible.
fn render_page(f: &mut Frame, app_state: &AppState, theme: &Theme, area: Rect) {
    let top = results_top(app_state);
    let page_height = top + area.height;
    let mut page = Buffer::empty(Rect::new(0, 0, area.width, page_height));

    SearchPanel {
        state: app_state,
        theme,
    }
    .render(Rect::new(0, 0, area.width, SEARCH_PANEL_HEIGHT), &mut page);

    let mut y = SEARCH_PANEL_HEIGHT;
    for panel in [SuggestionPanel::Questions, SuggestionPanel::Keywords] {
        let height = chip_panel_height(app_state, panel);
        SuggestionsPanel {
            panel,
            state: app_state,
            theme,
        }
        .render(Rect::new(0, y, area.width, height), &mut page);
        y += height;
    }

    ResultsView {
        state: app_state,
        theme,
    }
    .render(Rect::new(0, top, area.width, area.height), &mut page);

    let offset = app_state.page_scroll.min(top);
    for row in 0..area.height {
        for col in 0..area.width {
            if let Some(src) = page.cell((col, row + offset)) {
                if let Some(dst) = f.buffer_mut().cell_mut((area.x + col, area.y + row)) {
                    *dst = src.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_top_tracks_panel_visibility() {
        let mut state = AppState::default();
        // Both panels expanded (pristine state).
        assert_eq!(
            results_top(&state),
            SEARCH_PANEL_HEIGHT + 2 * CHIP_PANEL_EXPANDED_HEIGHT
        );

        state.suggestions.collapse_all();
        assert_eq!(
            results_top(&state),
            SEARCH_PANEL_HEIGHT + 2 * CHIP_PANEL_COLLAPSED_HEIGHT
        );

        state.suggestions.toggle(SuggestionPanel::Keywords);
        assert_eq!(
            results_top(&state),
            SEARCH_PANEL_HEIGHT + CHIP_PANEL_COLLAPSED_HEIGHT + CHIP_PANEL_EXPANDED_HEIGHT
        );
    }

    #[test]
    fn layout_reserves_header_and_footer_rows() {
        let layout = get_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.body.height, 22);
        assert_eq!(layout.footer.height, 1);
    }
}
