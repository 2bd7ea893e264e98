//! Theme module for genericdev-hub
//!
//! Centralized colour palette, border set and the badge style tokens used
//! by catalog cards.

use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::border;

use crate::models::{DocumentType, Phase, Region, TroubleshootingCategory};

// ============================================================================
// Background Colors
// ============================================================================

/// Primary background color (#0a0e14)
pub const BG_PRIMARY: Color = Color::Rgb(10, 14, 20);

/// Card background (#12161c)
pub const BG_SECONDARY: Color = Color::Rgb(18, 22, 28);

/// Selected card and active input background (#1a1f26)
pub const BG_TERTIARY: Color = Color::Rgb(26, 31, 38);

/// Subtle border color (#1e2530)
pub const BORDER_SUBTLE: Color = Color::Rgb(30, 37, 48);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary blue accent (#2563eb)
pub const ACCENT_PRIMARY: Color = Color::Rgb(37, 99, 235);

/// Lighter blue for links and prompts (#60a5fa)
pub const ACCENT_LIGHT: Color = Color::Rgb(96, 165, 250);

/// Amber for key considerations (#fbbf24)
pub const AMBER_WARNING: Color = Color::Rgb(251, 191, 36);

/// Red for root causes (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

/// Green for solutions (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color (#94a3b8)
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);

/// Labels and hints (#64748b)
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

/// Rounded corners for cards and panels
pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

// ============================================================================
// Badges
// ============================================================================

/// Colour token of a label badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Purple,
    Blue,
    Green,
    Orange,
    Red,
    Indigo,
    Cyan,
    Pink,
    Teal,
    /// Fallback for labels outside the known sets
    Neutral,
}

impl BadgeStyle {
    /// (foreground, background) pair
    pub fn colors(self) -> (Color, Color) {
        match self {
            BadgeStyle::Purple => (Color::Rgb(233, 213, 255), Color::Rgb(88, 28, 135)),
            BadgeStyle::Blue => (Color::Rgb(219, 234, 254), Color::Rgb(30, 64, 175)),
            BadgeStyle::Green => (Color::Rgb(220, 252, 231), Color::Rgb(22, 101, 52)),
            BadgeStyle::Orange => (Color::Rgb(255, 237, 213), Color::Rgb(154, 52, 18)),
            BadgeStyle::Red => (Color::Rgb(254, 226, 226), Color::Rgb(153, 27, 27)),
            BadgeStyle::Indigo => (Color::Rgb(224, 231, 255), Color::Rgb(55, 48, 163)),
            BadgeStyle::Cyan => (Color::Rgb(207, 250, 254), Color::Rgb(21, 94, 117)),
            BadgeStyle::Pink => (Color::Rgb(252, 231, 243), Color::Rgb(157, 23, 77)),
            BadgeStyle::Teal => (Color::Rgb(204, 251, 241), Color::Rgb(17, 94, 89)),
            BadgeStyle::Neutral => (Color::Rgb(243, 244, 246), Color::Rgb(55, 65, 81)),
        }
    }

    pub fn style(self) -> Style {
        let (fg, bg) = self.colors();
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    }
}

impl From<Phase> for BadgeStyle {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::PreFormulation => BadgeStyle::Purple,
            Phase::FormulationDevelopment => BadgeStyle::Blue,
            Phase::ClinicalDevelopment => BadgeStyle::Green,
            Phase::ScaleUpTechTransfer => BadgeStyle::Orange,
        }
    }
}

impl From<TroubleshootingCategory> for BadgeStyle {
    fn from(category: TroubleshootingCategory) -> Self {
        match category {
            TroubleshootingCategory::Dissolution => BadgeStyle::Blue,
            TroubleshootingCategory::Processing => BadgeStyle::Green,
            TroubleshootingCategory::Stability => BadgeStyle::Red,
            TroubleshootingCategory::Bioequivalence => BadgeStyle::Purple,
        }
    }
}

impl From<Region> for BadgeStyle {
    fn from(region: Region) -> Self {
        match region {
            Region::Fda => BadgeStyle::Blue,
            Region::Ema => BadgeStyle::Green,
            Region::Ich => BadgeStyle::Purple,
            Region::Who => BadgeStyle::Orange,
        }
    }
}

impl From<DocumentType> for BadgeStyle {
    fn from(doc_type: DocumentType) -> Self {
        match doc_type {
            DocumentType::Guidance => BadgeStyle::Indigo,
            DocumentType::Guideline => BadgeStyle::Cyan,
            DocumentType::Policy => BadgeStyle::Pink,
            DocumentType::QAndA => BadgeStyle::Teal,
        }
    }
}

pub fn phase_badge(label: &str) -> BadgeStyle {
    Phase::from_label(label).map_or(BadgeStyle::Neutral, BadgeStyle::from)
}

pub fn category_badge(label: &str) -> BadgeStyle {
    TroubleshootingCategory::from_label(label).map_or(BadgeStyle::Neutral, BadgeStyle::from)
}

pub fn region_badge(label: &str) -> BadgeStyle {
    Region::from_label(label).map_or(BadgeStyle::Neutral, BadgeStyle::from)
}

pub fn document_type_badge(label: &str) -> BadgeStyle {
    DocumentType::from_label(label).map_or(BadgeStyle::Neutral, BadgeStyle::from)
}
