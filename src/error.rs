//! Error types shared across the hub.

use thiserror::Error;

/// Failure of a single catalog fetch.
///
/// Views log these and fall back to an empty collection; they never reach
/// the screen.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("backend returned HTTP {status}: {message}")]
    Backend { status: u16, message: String },

    /// The body was not valid JSON or did not match the row shape
    #[error("malformed response from `{table}`: {reason}")]
    MalformedResponse { table: String, reason: String },
}

impl FetchError {
    pub fn malformed(table: &str, reason: impl std::fmt::Display) -> Self {
        FetchError::MalformedResponse {
            table: table.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Startup configuration problems, reported before the terminal is taken over
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing {name}: pass {flag} or set {env}")]
    Missing {
        name: &'static str,
        flag: &'static str,
        env: &'static str,
    },

    #[error("invalid Supabase URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("anon key contains characters that cannot be sent in an HTTP header")]
    InvalidAnonKey,

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("invalid log level `{0}` (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("no log directory available; pass --log-dir")]
    NoLogDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        let err = FetchError::Backend {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "backend returned HTTP 401: Invalid API key");

        let err = FetchError::malformed("regulatory_resources", "expected an array");
        assert_eq!(
            err.to_string(),
            "malformed response from `regulatory_resources`: expected an array"
        );
    }

    #[test]
    fn test_config_error_names_flag_and_env() {
        let err = ConfigError::Missing {
            name: "Supabase URL",
            flag: "--supabase-url",
            env: "SUPABASE_URL",
        };
        let message = err.to_string();
        assert!(message.contains("--supabase-url"));
        assert!(message.contains("SUPABASE_URL"));
    }
}
