//! Supabase (PostgREST) implementation of `CatalogSource`.

use async_trait::async_trait;
use reqwest::{Client, Url, header};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{CatalogSource, TableQuery};
use crate::error::{ConfigError, FetchError};

/// Thin read-only client for a Supabase project's REST endpoint
pub struct SupabaseClient {
    client: Client,
    rest_url: Url,
}

impl SupabaseClient {
    /// Create a client for the project at `project_url` using the anonymous key.
    ///
    /// The key is sent both as `apikey` and as a bearer token on every request.
    pub fn new(project_url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let rest_url = rest_endpoint(project_url)?;

        let key_value = |value: String| {
            header::HeaderValue::from_str(&value).map_err(|_| ConfigError::InvalidAnonKey)
        };

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        let mut api_key = key_value(anon_key.to_string())?;
        api_key.set_sensitive(true);
        headers.insert("apikey", api_key);
        let mut bearer = key_value(format!("Bearer {}", anon_key))?;
        bearer.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, bearer);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client, rest_url })
    }

    fn table_url(&self, table: &str) -> Result<Url, FetchError> {
        self.rest_url
            .join(table)
            .map_err(|e| FetchError::Network(format!("cannot build URL for `{}`: {}", table, e)))
    }
}

/// Normalize a project URL into its `/rest/v1/` base
fn rest_endpoint(project_url: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: project_url.to_string(),
        reason,
    };

    let mut url = Url::parse(project_url.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }

    let path = format!("{}/rest/v1/", url.path().trim_end_matches('/'));
    url.set_path(&path);
    url.set_query(None);
    Ok(url)
}

/// PostgREST error body
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

/// Pull a human-readable message out of an error body
fn backend_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    if let Ok(err) = serde_json::from_slice::<PostgrestError>(body) {
        return err.message;
    }
    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        text
    }
}

#[async_trait]
impl CatalogSource for SupabaseClient {
    async fn select_all(&self, query: TableQuery) -> Result<Value, FetchError> {
        let url = self.table_url(query.table)?;
        let order = query.order.to_param();
        debug!(table = query.table, order = %order, "select all");

        let response = self
            .client
            .get(url)
            .query(&[("select", "*"), ("order", order.as_str())])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = backend_message(status, &body);
            warn!(table = query.table, status = status.as_u16(), %message, "select rejected");
            return Err(FetchError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&body).map_err(|e| FetchError::malformed(query.table, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_endpoint_appends_path() {
        let url = rest_endpoint("https://abc.supabase.co").unwrap();
        assert_eq!(url.as_str(), "https://abc.supabase.co/rest/v1/");

        let url = rest_endpoint("https://abc.supabase.co/").unwrap();
        assert_eq!(url.as_str(), "https://abc.supabase.co/rest/v1/");
    }

    #[test]
    fn test_rest_endpoint_keeps_prefix_path() {
        let url = rest_endpoint("http://localhost:54321/proxy/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:54321/proxy/rest/v1/");
    }

    #[test]
    fn test_rest_endpoint_rejects_garbage() {
        assert!(matches!(
            rest_endpoint("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            rest_endpoint("ftp://abc.supabase.co"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_table_url() {
        let client = SupabaseClient::new("https://abc.supabase.co", "anon").unwrap();
        assert_eq!(
            client.table_url("development_processes").unwrap().as_str(),
            "https://abc.supabase.co/rest/v1/development_processes"
        );
    }

    #[test]
    fn test_invalid_key_is_rejected() {
        let result = SupabaseClient::new("https://abc.supabase.co", "bad\nkey");
        assert!(matches!(result, Err(ConfigError::InvalidAnonKey)));
    }

    #[test]
    fn test_backend_message_prefers_postgrest_shape() {
        let body = br#"{"code":"42P01","message":"relation does not exist","details":null,"hint":null}"#;
        assert_eq!(
            backend_message(reqwest::StatusCode::NOT_FOUND, body),
            "relation does not exist"
        );
        assert_eq!(
            backend_message(reqwest::StatusCode::BAD_GATEWAY, b"upstream down"),
            "upstream down"
        );
        assert_eq!(
            backend_message(reqwest::StatusCode::SERVICE_UNAVAILABLE, b""),
            "Service Unavailable"
        );
    }
}
