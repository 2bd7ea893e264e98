//! Formulation troubleshooting guides (`troubleshooting_guides`)

use serde::Deserialize;

use super::Record;
use super::de::{null_as_default, row_id};

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RootCause {
    pub cause: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
}

/// A remedy with up to two independent notes
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Solution {
    pub solution: String,
    #[serde(default)]
    pub implementation: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl Solution {
    /// Notes that are present and non-empty, implementation first
    pub fn notes(&self) -> impl Iterator<Item = &str> {
        [self.implementation.as_deref(), self.details.as_deref()]
            .into_iter()
            .flatten()
            .filter(|note| !note.trim().is_empty())
    }
}

/// Troubleshooting guide row
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TroubleshootingGuide {
    #[serde(deserialize_with = "row_id")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub problem_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub root_causes: Vec<RootCause>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub solutions: Vec<Solution>,
    #[serde(default)]
    pub case_studies: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Record for TroubleshootingGuide {
    fn id(&self) -> &str {
        &self.id
    }
}
