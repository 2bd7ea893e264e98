//! Search bar and filter chip rows

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::cell_width;
use crate::catalog::{Dimension, Selection};
use crate::theme::{
    ACCENT_LIGHT, ACCENT_PRIMARY, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_MUTED,
    TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Rows taken by [`render_search_bar`]
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Render the search input. When focused the terminal cursor is placed
/// after the typed text.
pub fn render_search_bar(frame: &mut Frame, area: Rect, value: &str, placeholder: &str, focused: bool) {
    let border_color = if focused { ACCENT_PRIMARY } else { BORDER_SUBTLE };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_SECONDARY));

    let content = if value.is_empty() {
        Line::from(vec![
            Span::styled(" 🔍 ", Style::default().fg(TEXT_MUTED)),
            Span::styled(placeholder.to_string(), Style::default().fg(TEXT_MUTED)),
        ])
    } else {
        Line::from(vec![
            Span::styled(" 🔍 ", Style::default().fg(TEXT_MUTED)),
            Span::styled(value.to_string(), Style::default().fg(TEXT_PRIMARY)),
        ])
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        // " 🔍 " occupies four cells
        let offset = 4 + cell_width(value) as u16;
        let x = inner.x + offset.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

/// Chip text as drawn, with one cell of padding each side
fn chip_text(label: &str) -> String {
    format!(" {} ", label)
}

/// Lines for one chip row: a heading line, then chips packed to `width`
pub fn chip_lines<R>(
    dimension: &Dimension<R>,
    selection: &Selection,
    focused: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let heading_style = if focused {
        Style::default().fg(ACCENT_LIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_SECONDARY)
    };
    let marker = if focused { "▶ " } else { "  " };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, heading_style),
        Span::styled(format!("{}:", dimension.label), heading_style),
    ])];

    let mut current: Vec<Span<'static>> = vec![Span::raw("  ")];
    let mut used = 2;

    for value in dimension.chips() {
        let text = chip_text(dimension.chip_label(value));
        let chip_width = cell_width(&text);
        let style = if selection.value() == value {
            Style::default()
                .fg(Color::White)
                .bg(ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY).bg(BG_TERTIARY)
        };

        if used > 2 && used + 1 + chip_width > width {
            lines.push(Line::from(std::mem::replace(&mut current, vec![Span::raw("  ")])));
            used = 2;
        }
        if used > 2 {
            current.push(Span::raw(" "));
            used += 1;
        }
        current.push(Span::styled(text, style));
        used += chip_width;
    }
    lines.push(Line::from(current));

    lines
}
