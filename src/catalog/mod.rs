//! Per-catalog configuration.
//!
//! The three catalogs share one view implementation. What differs between
//! them (table and ordering, searchable fields, filter dimensions, copy
//! text) lives in a static `CatalogDef` per row type.

mod filter;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::FetchError;
use crate::models::{
    DevelopmentProcess, DocumentType, Phase, Region, RegulatoryResource, Tab, TroubleshootingCategory,
    TroubleshootingGuide,
};
use crate::store::{self, CatalogSource};

pub use filter::{filter_indices, filter_records, Selection};

/// Boxed fetch future handed to the runtime by a view
pub type FetchFuture<R> = Pin<Box<dyn Future<Output = Result<Vec<R>, FetchError>> + Send>>;

/// One row of filter chips
pub struct Dimension<R> {
    /// Heading shown before the chips, e.g. "Filter by Phase"
    pub label: &'static str,
    /// Text of the synthetic "all" chip, e.g. "All Phases"
    pub all_label: &'static str,
    /// Known values, in display order (the sentinel is not included)
    pub values: &'static [&'static str],
    /// Field of the row compared against the selection
    pub value_of: fn(&R) -> &str,
}

impl<R> Dimension<R> {
    /// Chip values in display order, sentinel first
    pub fn chips(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(Selection::ALL).chain(self.values.iter().copied())
    }

    pub fn chip_count(&self) -> usize {
        self.values.len() + 1
    }

    /// Chip value at `index` (0 is the sentinel)
    pub fn chip_at(&self, index: usize) -> Option<&'static str> {
        self.chips().nth(index)
    }

    /// Position of `selection` in the chip row, if it is one of the chips
    pub fn chip_index(&self, selection: &Selection) -> Option<usize> {
        self.chips().position(|chip| chip == selection.value())
    }

    pub fn chip_label(&self, value: &'static str) -> &'static str {
        if value == Selection::ALL {
            self.all_label
        } else {
            value
        }
    }
}

/// Everything a catalog view needs to know about one catalog
pub struct CatalogDef<R: 'static> {
    pub tab: Tab,
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub search_placeholder: &'static str,
    pub empty_message: &'static str,
    pub dimensions: &'static [Dimension<R>],
    /// Fields matched case-insensitively by the search bar (any one suffices)
    pub search_fields: fn(&R) -> Vec<&str>,
    pub fetch: fn(Arc<dyn CatalogSource>) -> FetchFuture<R>,
}

// ============================================================================
// Development processes
// ============================================================================

fn process_phase(process: &DevelopmentProcess) -> &str {
    &process.phase
}

fn process_search_fields(process: &DevelopmentProcess) -> Vec<&str> {
    vec![
        process.title.as_str(),
        process.description.as_str(),
        process.phase.as_str(),
    ]
}

fn fetch_processes(source: Arc<dyn CatalogSource>) -> FetchFuture<DevelopmentProcess> {
    Box::pin(async move { store::fetch_development_processes(source.as_ref()).await })
}

pub static PROCESSES: CatalogDef<DevelopmentProcess> = CatalogDef {
    tab: Tab::Processes,
    heading: "Development Processes",
    subtitle: "Comprehensive guides for each stage of generic drug development",
    search_placeholder: "Search processes by title, description, or phase...",
    empty_message: "No processes found matching your criteria.",
    dimensions: &[Dimension {
        label: "Filter by Phase",
        all_label: "All Phases",
        values: &Phase::LABELS,
        value_of: process_phase,
    }],
    search_fields: process_search_fields,
    fetch: fetch_processes,
};

// ============================================================================
// Troubleshooting guides
// ============================================================================

fn guide_category(guide: &TroubleshootingGuide) -> &str {
    &guide.category
}

fn guide_search_fields(guide: &TroubleshootingGuide) -> Vec<&str> {
    vec![
        guide.title.as_str(),
        guide.problem_description.as_str(),
        guide.category.as_str(),
    ]
}

fn fetch_guides(source: Arc<dyn CatalogSource>) -> FetchFuture<TroubleshootingGuide> {
    Box::pin(async move { store::fetch_troubleshooting_guides(source.as_ref()).await })
}

pub static TROUBLESHOOTING: CatalogDef<TroubleshootingGuide> = CatalogDef {
    tab: Tab::Troubleshooting,
    heading: "Formulation Troubleshooting",
    subtitle: "Expert solutions for common formulation challenges in generic drug development",
    search_placeholder: "Search by problem, solution, or category...",
    empty_message: "No troubleshooting guides found matching your criteria.",
    dimensions: &[Dimension {
        label: "Filter by Category",
        all_label: "All Categories",
        values: &TroubleshootingCategory::LABELS,
        value_of: guide_category,
    }],
    search_fields: guide_search_fields,
    fetch: fetch_guides,
};

// ============================================================================
// Regulatory resources
// ============================================================================

fn resource_region(resource: &RegulatoryResource) -> &str {
    &resource.region
}

fn resource_document_type(resource: &RegulatoryResource) -> &str {
    &resource.document_type
}

fn resource_search_fields(resource: &RegulatoryResource) -> Vec<&str> {
    vec![
        resource.title.as_str(),
        resource.summary.as_str(),
        resource.region.as_str(),
        resource.document_type.as_str(),
    ]
}

fn fetch_resources(source: Arc<dyn CatalogSource>) -> FetchFuture<RegulatoryResource> {
    Box::pin(async move { store::fetch_regulatory_resources(source.as_ref()).await })
}

pub static REGULATORY: CatalogDef<RegulatoryResource> = CatalogDef {
    tab: Tab::Regulatory,
    heading: "Regulatory Resources",
    subtitle: "Essential regulatory guidelines and requirements for generic drug development",
    search_placeholder: "Search by title, summary, region, or document type...",
    empty_message: "No regulatory resources found matching your criteria.",
    dimensions: &[
        Dimension {
            label: "Region",
            all_label: "All Regions",
            values: &Region::LABELS,
            value_of: resource_region,
        },
        Dimension {
            label: "Document Type",
            all_label: "All Types",
            values: &DocumentType::LABELS,
            value_of: resource_document_type,
        },
    ],
    search_fields: resource_search_fields,
    fetch: fetch_resources,
};
