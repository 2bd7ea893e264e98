//! UI helper functions

use ratatui::prelude::*;

/// Terminal cells taken by `text`
pub fn cell_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Split `word` so the head fits in `max_width` cells (never empty)
fn split_at_width(word: &str, max_width: usize) -> (&str, &str) {
    let mut used = 0;
    for (index, c) in word.char_indices() {
        let mut buf = [0u8; 4];
        let width = cell_width(c.encode_utf8(&mut buf));
        if index > 0 && used + width > max_width {
            return word.split_at(index);
        }
        used += width;
    }
    (word, "")
}

/// Word-wrap `text` to `max_width` terminal cells.
///
/// Explicit newlines start a new line. Words wider than the line are
/// split so nothing overflows a card border.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            let mut word_width = cell_width(word);

            // Hard-break words that cannot fit on any line
            while word_width > max_width {
                if current_width > 0 {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }
                let (head, rest) = split_at_width(word, max_width);
                lines.push(head.to_string());
                word = rest;
                word_width = cell_width(word);
            }
            if word.is_empty() {
                continue;
            }

            if current_width == 0 {
                current_line = word.to_string();
                current_width = word_width;
            } else if current_width + 1 + word_width <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
                current_width += 1 + word_width;
            } else {
                lines.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
                current_width = word_width;
            }
        }

        if current_width > 0 {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Wrap `text` into styled lines, each prefixed by `indent` spaces
pub fn wrapped_lines(text: &str, width: usize, indent: usize, style: Style) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    wrap_text(text, width.saturating_sub(indent))
        .into_iter()
        .map(|line| Line::from(Span::styled(format!("{}{}", pad, line), style)))
        .collect()
}

/// Wrap `text` with a leading marker (bullet or step number); continuation
/// lines are indented to align with the text after the marker
pub fn marked_lines(
    marker: &str,
    marker_style: Style,
    text: &str,
    text_style: Style,
    width: usize,
    indent: usize,
) -> Vec<Line<'static>> {
    let marker_width = cell_width(marker);
    let body_indent = indent + marker_width;
    let mut wrapped = wrap_text(text, width.saturating_sub(body_indent)).into_iter();

    let mut lines = Vec::new();
    let first = wrapped.next().unwrap_or_default();
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(marker.to_string(), marker_style),
        Span::styled(first, text_style),
    ]));

    let pad = " ".repeat(body_indent);
    for rest in wrapped {
        lines.push(Line::from(Span::styled(format!("{}{}", pad, rest), text_style)));
    }

    lines
}

/// Plain text of a line, spans concatenated
pub fn line_text(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        let result = wrap_text("", 10);
        assert_eq!(result, vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        let result = wrap_text("hello world", 0);
        assert_eq!(result, vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        let result = wrap_text("hello world foo bar", 10);
        assert_eq!(result, vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_wrap_text_keeps_newlines() {
        let result = wrap_text("first line\nsecond", 20);
        assert_eq!(result, vec!["first line", "second"]);
    }

    #[test]
    fn test_wrap_text_breaks_long_words() {
        let result = wrap_text("ab https://example.com/x", 8);
        assert_eq!(result, vec!["ab", "https://", "example.", "com/x"]);
    }

    #[test]
    fn test_wrap_text_counts_cells_not_bytes() {
        let result = wrap_text("µg µg µg", 5);
        assert_eq!(result, vec!["µg µg", "µg"]);
    }

    #[test]
    fn test_wrap_text_measures_cells() {
        // The emoji takes two cells, so the pair is one cell too wide
        let result = wrap_text("📅 abcdefghij", 12);
        assert_eq!(result, vec!["📅", "abcdefghij"]);
        assert_eq!(cell_width("📅 abcdefghij"), 13);
    }

    #[test]
    fn test_wrap_text_breaks_wide_words_by_cells() {
        let result = wrap_text("漢字漢字漢", 4);
        assert_eq!(result, vec!["漢字", "漢字", "漢"]);
    }

    #[test]
    fn test_marked_lines_align_continuation() {
        let lines = marked_lines("1. ", Style::default(), "alpha beta gamma", Style::default(), 12, 2);
        let text: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(text, vec!["  1. alpha", "     beta", "     gamma"]);
    }
}
