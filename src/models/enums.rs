//! Enum types for navigation state and the closed label sets.
//!
//! The label enums mirror the values the hub knows how to style. Rows are
//! not required to use them: anything that does not parse stays a plain
//! string and renders with the neutral badge.

/// Top-level tab, one per catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Processes,
    Troubleshooting,
    Regulatory,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Processes, Tab::Troubleshooting, Tab::Regulatory];

    /// Identifier used on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Processes => "processes",
            Tab::Troubleshooting => "troubleshooting",
            Tab::Regulatory => "regulatory",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Processes => "Development Processes",
            Tab::Troubleshooting => "Troubleshooting",
            Tab::Regulatory => "Regulatory Resources",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Processes => 0,
            Tab::Troubleshooting => 1,
            Tab::Regulatory => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

/// Which part of a catalog view receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,   // Navigate cards, chips and tabs
    Search, // Typed characters go to the search bar
}

/// Development phase of a process guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PreFormulation,
    FormulationDevelopment,
    ClinicalDevelopment,
    ScaleUpTechTransfer,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::PreFormulation,
        Phase::FormulationDevelopment,
        Phase::ClinicalDevelopment,
        Phase::ScaleUpTechTransfer,
    ];

    pub const LABELS: [&'static str; 4] = [
        "Pre-formulation",
        "Formulation Development",
        "Clinical Development",
        "Scale-up & Tech Transfer",
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Phase::PreFormulation => Self::LABELS[0],
            Phase::FormulationDevelopment => Self::LABELS[1],
            Phase::ClinicalDevelopment => Self::LABELS[2],
            Phase::ScaleUpTechTransfer => Self::LABELS[3],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// Problem area of a troubleshooting guide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TroubleshootingCategory {
    Dissolution,
    Processing,
    Stability,
    Bioequivalence,
}

impl TroubleshootingCategory {
    pub const ALL: [TroubleshootingCategory; 4] = [
        TroubleshootingCategory::Dissolution,
        TroubleshootingCategory::Processing,
        TroubleshootingCategory::Stability,
        TroubleshootingCategory::Bioequivalence,
    ];

    pub const LABELS: [&'static str; 4] = ["Dissolution", "Processing", "Stability", "Bioequivalence"];

    pub fn label(&self) -> &'static str {
        match self {
            TroubleshootingCategory::Dissolution => Self::LABELS[0],
            TroubleshootingCategory::Processing => Self::LABELS[1],
            TroubleshootingCategory::Stability => Self::LABELS[2],
            TroubleshootingCategory::Bioequivalence => Self::LABELS[3],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Issuing authority of a regulatory resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Fda,
    Ema,
    Ich,
    Who,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Fda, Region::Ema, Region::Ich, Region::Who];

    pub const LABELS: [&'static str; 4] = ["FDA", "EMA", "ICH", "WHO"];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Fda => Self::LABELS[0],
            Region::Ema => Self::LABELS[1],
            Region::Ich => Self::LABELS[2],
            Region::Who => Self::LABELS[3],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

/// Kind of regulatory document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Guidance,
    Guideline,
    Policy,
    QAndA,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Guidance,
        DocumentType::Guideline,
        DocumentType::Policy,
        DocumentType::QAndA,
    ];

    pub const LABELS: [&'static str; 4] = ["Guidance", "Guideline", "Policy", "Q&A"];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Guidance => Self::LABELS[0],
            DocumentType::Guideline => Self::LABELS[1],
            DocumentType::Policy => Self::LABELS[2],
            DocumentType::QAndA => Self::LABELS[3],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label)
    }
}
