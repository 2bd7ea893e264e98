//! Read-only access to the hosted catalog tables.
//!
//! `CatalogSource` is the seam: the Supabase client implements it over
//! HTTP, tests implement it in memory. Everything above this module works
//! with typed rows; JSON never leaks past `decode_rows`.

mod supabase;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;
use crate::models::{DevelopmentProcess, RegulatoryResource, TroubleshootingGuide};

pub use supabase::SupabaseClient;

/// Single ordering clause of a select
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }

    /// PostgREST `order=` value, e.g. `created_at.asc`
    pub fn to_param(&self) -> String {
        let direction = if self.ascending { "asc" } else { "desc" };
        format!("{}.{}", self.column, direction)
    }
}

/// A full-table select: every column, one ordering clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableQuery {
    pub table: &'static str,
    pub order: Order,
}

pub const DEVELOPMENT_PROCESSES: TableQuery = TableQuery {
    table: "development_processes",
    order: Order::asc("created_at"),
};

pub const TROUBLESHOOTING_GUIDES: TableQuery = TableQuery {
    table: "troubleshooting_guides",
    order: Order::asc("created_at"),
};

pub const REGULATORY_RESOURCES: TableQuery = TableQuery {
    table: "regulatory_resources",
    order: Order::desc("effective_date"),
};

/// Backend able to run a full-table select
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Run `query` and return the parsed JSON body
    async fn select_all(&self, query: TableQuery) -> Result<Value, FetchError>;
}

/// Validate a response body and decode it into typed rows.
///
/// `null` means "no rows". Anything other than an array of well-formed rows
/// is a `MalformedResponse`.
pub fn decode_rows<R: DeserializeOwned>(table: &str, body: Value) -> Result<Vec<R>, FetchError> {
    match body {
        Value::Null => Ok(Vec::new()),
        Value::Array(_) => serde_json::from_value(body).map_err(|e| FetchError::malformed(table, e)),
        other => Err(FetchError::malformed(
            table,
            format!("expected an array of rows, got {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

async fn fetch_table<R: DeserializeOwned>(
    source: &dyn CatalogSource,
    query: TableQuery,
) -> Result<Vec<R>, FetchError> {
    let body = source.select_all(query).await?;
    let rows = decode_rows(query.table, body)?;
    debug!(table = query.table, rows = rows.len(), "fetched catalog");
    Ok(rows)
}

/// All development processes, oldest first
pub async fn fetch_development_processes(
    source: &dyn CatalogSource,
) -> Result<Vec<DevelopmentProcess>, FetchError> {
    fetch_table(source, DEVELOPMENT_PROCESSES).await
}

/// All troubleshooting guides, oldest first
pub async fn fetch_troubleshooting_guides(
    source: &dyn CatalogSource,
) -> Result<Vec<TroubleshootingGuide>, FetchError> {
    fetch_table(source, TROUBLESHOOTING_GUIDES).await
}

/// All regulatory resources, most recent effective date first
pub async fn fetch_regulatory_resources(
    source: &dyn CatalogSource,
) -> Result<Vec<RegulatoryResource>, FetchError> {
    fetch_table(source, REGULATORY_RESOURCES).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records the queries it sees and replies with a canned body
    struct CannedSource {
        body: Value,
        seen: Mutex<Vec<TableQuery>>,
    }

    #[async_trait]
    impl CatalogSource for CannedSource {
        async fn select_all(&self, query: TableQuery) -> Result<Value, FetchError> {
            self.seen.lock().unwrap().push(query);
            Ok(self.body.clone())
        }
    }

    #[test]
    fn test_order_param() {
        assert_eq!(Order::asc("created_at").to_param(), "created_at.asc");
        assert_eq!(Order::desc("effective_date").to_param(), "effective_date.desc");
    }

    #[test]
    fn test_decode_null_is_empty() {
        let rows: Vec<RegulatoryResource> = decode_rows("regulatory_resources", Value::Null).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_decode_object_is_malformed() {
        let result: Result<Vec<RegulatoryResource>, _> =
            decode_rows("regulatory_resources", json!({"message": "nope"}));
        match result {
            Err(FetchError::MalformedResponse { table, reason }) => {
                assert_eq!(table, "regulatory_resources");
                assert!(reason.contains("an object"));
            }
            other => panic!("expected malformed response, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_bad_row_is_malformed() {
        let body = json!([{"id": "p-1", "title": "t", "phase": "x"}]);
        let result: Result<Vec<DevelopmentProcess>, _> = decode_rows("development_processes", body);
        assert!(matches!(result, Err(FetchError::MalformedResponse { .. })));
    }

    #[tokio::test]
    async fn test_named_fetches_use_fixed_queries() {
        let source = CannedSource {
            body: json!([]),
            seen: Mutex::new(Vec::new()),
        };

        assert!(fetch_development_processes(&source).await.unwrap().is_empty());
        assert!(fetch_troubleshooting_guides(&source).await.unwrap().is_empty());
        assert!(fetch_regulatory_resources(&source).await.unwrap().is_empty());

        let seen = source.seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![DEVELOPMENT_PROCESSES, TROUBLESHOOTING_GUIDES, REGULATORY_RESOURCES]
        );
        assert_eq!(seen[2].order, Order::desc("effective_date"));
    }

    #[tokio::test]
    async fn test_fetch_preserves_row_order() {
        let source = CannedSource {
            body: json!([
                {"id": "b", "title": "B", "phase": "Pre-formulation", "description": "d"},
                {"id": "a", "title": "A", "phase": "Pre-formulation", "description": "d"}
            ]),
            seen: Mutex::new(Vec::new()),
        };
        let rows = fetch_development_processes(&source).await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
