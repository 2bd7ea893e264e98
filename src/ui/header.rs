//! Application header, tab strip and key-hint footer

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::models::{Focus, Tab};
use crate::theme::{ACCENT_LIGHT, ACCENT_PRIMARY, BG_PRIMARY, BORDER_SUBTLE, TEXT_MUTED, TEXT_PRIMARY};

/// Rows taken by [`render_header`]
pub const HEADER_HEIGHT: u16 = 3;

/// Render the title line and the navigation strip
pub fn render_header(frame: &mut Frame, area: Rect, active: Tab) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(2), // Tabs + divider
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(" ⚗ ", Style::default().fg(ACCENT_LIGHT)),
        Span::styled(
            "GenericDev Hub",
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Generic Drug Development Platform", Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(
        Paragraph::new(title).style(Style::default().bg(BG_PRIMARY)),
        layout[0],
    );

    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.label()));

    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(TEXT_MUTED).bg(BG_PRIMARY))
        .highlight_style(
            Style::default()
                .fg(ACCENT_LIGHT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(BORDER_SUBTLE)))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(BORDER_SUBTLE)),
        );

    frame.render_widget(tabs, layout[1]);
}

/// Key hints for the current focus
pub fn footer_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::List => {
            " q: Quit | Tab/1-3: Switch | ↑↓: Select | Enter: Expand | ←→: Filter | f: Next filter | /: Search | a: Reset "
        }
        Focus::Search => " Esc/Enter: Done | Backspace: Delete | Ctrl+U: Clear ",
    }
}

/// Bottom bar with keybinding hints
pub fn render_footer(frame: &mut Frame, area: Rect, focus: Focus) {
    let keybindings = Paragraph::new(footer_hints(focus))
        .style(Style::default().fg(Color::White).bg(ACCENT_PRIMARY));

    frame.render_widget(keybindings, area);
}
