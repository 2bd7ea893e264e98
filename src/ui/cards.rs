//! Catalog card content.
//!
//! Cards are built as plain lines sized to the inner card width, so the
//! list renderer can measure card heights before drawing anything.

use ratatui::prelude::*;

use super::helpers::{marked_lines, wrapped_lines};
use crate::models::{DevelopmentProcess, Record, RegulatoryResource, TroubleshootingGuide};
use crate::theme::{
    self, BadgeStyle, ACCENT_LIGHT, AMBER_WARNING, GREEN_SUCCESS, RED_ERROR, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::utils::{format_effective_date, truncate_chars};

/// Something that can be drawn as an expandable card
pub trait CardContent: Record {
    /// Prompt shown while the card is collapsed
    const EXPAND_PROMPT: &'static str;

    /// Lines of the card body for the given inner width
    fn card_lines(&self, expanded: bool, width: usize) -> Vec<Line<'static>>;
}

const COLLAPSE_PROMPT: &str = "Show Less";

fn title_style() -> Style {
    Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)
}

fn body_style() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

fn heading_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn badge_span(label: &str, style: BadgeStyle, max_width: usize) -> Span<'static> {
    let text = truncate_chars(label, max_width.saturating_sub(2).max(1));
    Span::styled(format!(" {} ", text), style.style())
}

fn badge_line(badges: &[(&str, BadgeStyle)], width: usize) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (label, style)) in badges.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(badge_span(label, *style, width));
    }
    Line::from(spans)
}

fn toggle_line(expanded: bool, prompt: &'static str) -> Line<'static> {
    let (arrow, text) = if expanded {
        ("▾ ", COLLAPSE_PROMPT)
    } else {
        ("▸ ", prompt)
    };
    Line::from(vec![
        Span::styled(arrow, Style::default().fg(ACCENT_LIGHT)),
        Span::styled(text, Style::default().fg(ACCENT_LIGHT).add_modifier(Modifier::BOLD)),
    ])
}

fn summary_lines(
    badges: &[(&str, BadgeStyle)],
    title: &str,
    body: &str,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![badge_line(badges, width)];
    lines.extend(wrapped_lines(title, width, 0, title_style()));
    lines.extend(wrapped_lines(body, width, 0, body_style()));
    lines
}

/// Optional narrative block, only when the text is present and non-empty
fn narrative_block(
    lines: &mut Vec<Line<'static>>,
    heading: &'static str,
    color: Color,
    text: Option<&str>,
    width: usize,
) {
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return;
    };
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(heading, heading_style(color))));
    lines.extend(wrapped_lines(text, width, 2, Style::default().fg(color)));
}

impl CardContent for DevelopmentProcess {
    const EXPAND_PROMPT: &'static str = "View Details";

    fn card_lines(&self, expanded: bool, width: usize) -> Vec<Line<'static>> {
        let mut lines = summary_lines(
            &[(self.phase.as_str(), theme::phase_badge(&self.phase))],
            &self.title,
            &self.description,
            width,
        );

        lines.extend(wrapped_lines(
            &format!("⏱ Timeline: {}", self.timeline),
            width,
            0,
            Style::default().fg(TEXT_MUTED),
        ));
        lines.push(toggle_line(expanded, Self::EXPAND_PROMPT));

        if expanded {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Process Steps", heading_style(TEXT_PRIMARY))));
            for (index, step) in self.steps.iter().enumerate() {
                lines.extend(marked_lines(
                    &format!("{}. ", index + 1),
                    heading_style(ACCENT_LIGHT),
                    &step.step,
                    title_style(),
                    width,
                    1,
                ));
                if !step.details.trim().is_empty() {
                    let marker_width = format!("{}. ", index + 1).chars().count();
                    lines.extend(wrapped_lines(&step.details, width, 1 + marker_width, body_style()));
                }
            }

            narrative_block(
                &mut lines,
                "Key Considerations",
                AMBER_WARNING,
                self.key_considerations.as_deref(),
                width,
            );
        }

        lines
    }
}

impl CardContent for TroubleshootingGuide {
    const EXPAND_PROMPT: &'static str = "View Solutions";

    fn card_lines(&self, expanded: bool, width: usize) -> Vec<Line<'static>> {
        let mut lines = summary_lines(
            &[(self.category.as_str(), theme::category_badge(&self.category))],
            &self.title,
            &self.problem_description,
            width,
        );
        lines.push(toggle_line(expanded, Self::EXPAND_PROMPT));

        if expanded {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("⚠ Root Causes", heading_style(RED_ERROR))));
            for cause in &self.root_causes {
                lines.extend(marked_lines(
                    "• ",
                    Style::default().fg(RED_ERROR),
                    &cause.cause,
                    title_style(),
                    width,
                    1,
                ));
                if !cause.explanation.trim().is_empty() {
                    lines.extend(wrapped_lines(&cause.explanation, width, 3, body_style()));
                }
            }

            lines.push(Line::default());
            lines.push(Line::from(Span::styled("✦ Solutions", heading_style(GREEN_SUCCESS))));
            for solution in &self.solutions {
                lines.extend(marked_lines(
                    "• ",
                    Style::default().fg(GREEN_SUCCESS),
                    &solution.solution,
                    title_style(),
                    width,
                    1,
                ));
                for note in solution.notes() {
                    lines.extend(wrapped_lines(note, width, 3, body_style()));
                }
            }

            narrative_block(
                &mut lines,
                "Case Study",
                ACCENT_LIGHT,
                self.case_studies.as_deref(),
                width,
            );
        }

        lines
    }
}

impl CardContent for RegulatoryResource {
    const EXPAND_PROMPT: &'static str = "View Key Points";

    fn card_lines(&self, expanded: bool, width: usize) -> Vec<Line<'static>> {
        let mut lines = summary_lines(
            &[
                (self.region.as_str(), theme::region_badge(&self.region)),
                (
                    self.document_type.as_str(),
                    theme::document_type_badge(&self.document_type),
                ),
            ],
            &self.title,
            &self.summary,
            width,
        );

        if let Some(date) = self.effective_date.as_deref().and_then(format_effective_date) {
            lines.extend(wrapped_lines(
                &format!("📅 Effective: {}", date),
                width,
                0,
                Style::default().fg(TEXT_MUTED),
            ));
        }
        lines.push(toggle_line(expanded, Self::EXPAND_PROMPT));

        if expanded {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Key Points", heading_style(TEXT_PRIMARY))));
            for point in &self.key_points {
                lines.extend(marked_lines(
                    "• ",
                    heading_style(ACCENT_LIGHT),
                    point,
                    body_style(),
                    width,
                    1,
                ));
            }

            if let Some(url) = self.url.as_deref().filter(|u| !u.trim().is_empty()) {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "↗ View Official Document",
                    heading_style(ACCENT_LIGHT),
                )));
                lines.extend(wrapped_lines(
                    url,
                    width,
                    2,
                    Style::default().fg(ACCENT_LIGHT).add_modifier(Modifier::UNDERLINED),
                ));
            }
        }

        lines
    }
}
