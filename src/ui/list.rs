//! Card list, loading indicator and empty state

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::theme::{
    ACCENT_LIGHT, ACCENT_PRIMARY, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, ROUNDED_BORDERS, TEXT_MUTED,
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Border rows plus border and padding columns around card content
pub const CARD_CHROME_HEIGHT: usize = 2;
pub const CARD_CHROME_WIDTH: u16 = 4;

/// Spinner shown while a catalog is fetching
pub fn render_loading(frame: &mut Frame, area: Rect, tick: u64) {
    let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(format!("{} ", spinner), Style::default().fg(ACCENT_LIGHT)),
        Span::styled("Loading...", Style::default().fg(TEXT_MUTED)),
    ]);

    let centered = center_vertically(area, 1);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), centered);
}

/// Bordered notice shown when no card passes the filters
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let height = area.height.min(5);
    let notice = Rect { height, ..area };
    let inner = block.inner(notice);
    frame.render_widget(block, notice);
    frame.render_widget(
        Paragraph::new(message.to_string())
            .style(Style::default().fg(TEXT_MUTED))
            .alignment(Alignment::Center),
        center_vertically(inner, 1),
    );
}

fn center_vertically(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

/// First card to draw so that `selected` is on screen.
///
/// `heights` are full card heights (content plus chrome) for every visible
/// card. The previous `scroll` is kept when the selection is still in view.
pub fn scroll_for_selection(heights: &[usize], selected: usize, scroll: usize, viewport: usize) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut scroll = scroll.min(selected);

    while scroll < selected && heights[scroll..=selected].iter().sum::<usize>() > viewport {
        scroll += 1;
    }

    scroll
}

/// Draw cards top to bottom starting at the first entry. The last card
/// is clipped when it does not fit.
pub fn render_cards(frame: &mut Frame, area: Rect, cards: Vec<(Vec<Line<'static>>, bool)>) {
    let bottom = area.y + area.height;
    let mut y = area.y;

    for (lines, selected) in cards {
        if y >= bottom {
            break;
        }
        let wanted = (lines.len() + CARD_CHROME_HEIGHT) as u16;
        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height: wanted.min(bottom - y),
        };

        let (border, background) = if selected {
            (ACCENT_PRIMARY, BG_TERTIARY)
        } else {
            (BORDER_SUBTLE, BG_SECONDARY)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(background))
            .padding(Padding::horizontal(1));

        frame.render_widget(Paragraph::new(lines).block(block), rect);
        y += rect.height;
    }
}
