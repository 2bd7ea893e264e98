//! Development process guides (`development_processes`)

use serde::Deserialize;

use super::Record;
use super::de::{null_as_default, row_id};

/// One ordered step of a process
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProcessStep {
    pub step: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: String,
}

/// Development process guide row
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DevelopmentProcess {
    #[serde(deserialize_with = "row_id")]
    pub id: String,
    pub title: String,
    pub phase: String,
    pub description: String,
    /// Display order matters; kept exactly as fetched
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<ProcessStep>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timeline: String,
    #[serde(default)]
    pub key_considerations: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Record for DevelopmentProcess {
    fn id(&self) -> &str {
        &self.id
    }
}
