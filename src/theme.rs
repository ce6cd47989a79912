use ratatui::style::{Color, Modifier, Style};

/// Style table consumed by the components. One dark palette; nothing here is
/// user-configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub header_item: Style,

    pub tab_active: Style,
    pub tab_inactive: Style,

    pub input: Style,
    pub input_hint: Style,

    pub panel_title: Style,
    pub panel_hint: Style,
    pub chip: Style,
    pub chip_selected: Style,

    pub result_title: Style,
    pub result_snippet: Style,
    pub result_url: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,

    pub footer: Style,
    pub footer_key: Style,
    pub footer_desc: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let fg = Color::Rgb(205, 214, 244);
        let dim = Color::Rgb(127, 132, 156);
        let surface = Color::Rgb(49, 50, 68);
        let accent = Color::Rgb(137, 180, 250);
        let green = Color::Rgb(166, 227, 161);
        let red = Color::Rgb(243, 139, 168);
        let yellow = Color::Rgb(249, 226, 175);

        Self {
            border: Style::default().fg(surface),
            border_focus: Style::default().fg(accent),

            header: Style::default().fg(fg).bg(surface),
            header_logo: Style::default()
                .fg(Color::Rgb(30, 30, 46))
                .bg(accent)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().fg(dim).bg(surface),

            tab_active: Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            tab_inactive: Style::default().fg(dim),

            input: Style::default().fg(fg),
            input_hint: Style::default().fg(dim).add_modifier(Modifier::ITALIC),

            panel_title: Style::default().fg(yellow).add_modifier(Modifier::BOLD),
            panel_hint: Style::default().fg(dim),
            chip: Style::default().fg(fg).bg(surface),
            chip_selected: Style::default()
                .fg(Color::Rgb(30, 30, 46))
                .bg(accent)
                .add_modifier(Modifier::BOLD),

            result_title: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            result_snippet: Style::default().fg(dim),
            result_url: Style::default()
                .fg(accent)
                .add_modifier(Modifier::UNDERLINED),

            status_ready: Style::default().fg(green),
            status_info: Style::default().fg(yellow),
            status_error: Style::default().fg(red).add_modifier(Modifier::BOLD),

            footer: Style::default().fg(dim),
            footer_key: Style::default()
                .fg(Color::Rgb(30, 30, 46))
                .bg(dim)
                .add_modifier(Modifier::BOLD),
            footer_desc: Style::default().fg(dim),
        }
    }
}
