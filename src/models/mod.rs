//! Data models for GenericDev Hub
//!
//! This module contains the core data structures:
//! - Row types for the three catalogs, decoded from the hosted store
//! - Enums for navigation state and the closed label sets

mod de;
pub mod enums;
pub mod process;
pub mod regulatory;
pub mod troubleshooting;

// Re-exports for convenient access
pub use enums::{DocumentType, Focus, Phase, Region, Tab, TroubleshootingCategory};
pub use process::{DevelopmentProcess, ProcessStep};
pub use regulatory::RegulatoryResource;
pub use troubleshooting::{RootCause, Solution, TroubleshootingGuide};

/// A catalog row with a stable identity
pub trait Record {
    fn id(&self) -> &str;
}
