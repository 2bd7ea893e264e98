//! Regulatory resources (`regulatory_resources`)

use serde::Deserialize;

use super::Record;
use super::de::{null_as_default, row_id};

/// Regulatory resource row
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RegulatoryResource {
    #[serde(deserialize_with = "row_id")]
    pub id: String,
    pub title: String,
    pub region: String,
    pub document_type: String,
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Raw date text; formatting happens at render time and tolerates garbage
    #[serde(default)]
    pub effective_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Record for RegulatoryResource {
    fn id(&self) -> &str {
        &self.id
    }
}
