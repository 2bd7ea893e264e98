//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;
use crate::logging::{default_log_dir, parse_log_level, LogConfig};
use crate::models::Tab;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GenericDev Hub - terminal browser for generic drug development reference material
#[derive(Parser, Debug, Clone)]
#[command(name = "genericdev-hub", version)]
#[command(about = "Browse development processes, troubleshooting guides and regulatory resources")]
pub struct Args {
    /// Supabase project URL, e.g. https://abc.supabase.co
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    /// Supabase anonymous (public) API key
    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub anon_key: Option<String>,

    /// Tab shown at startup
    #[arg(long, default_value = "processes", value_parser = parse_tab)]
    pub tab: Tab,

    /// Directory for the log file
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// trace, debug, info, warn or error
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_tab(raw: &str) -> Result<Tab, String> {
    Tab::from_id(raw).ok_or_else(|| {
        let ids: Vec<&str> = Tab::ALL.iter().map(|tab| tab.id()).collect();
        format!("expected one of {}", ids.join(", "))
    })
}

/// Validated configuration from CLI arguments
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub supabase_url: String,
    pub anon_key: String,
    pub initial_tab: Tab,
    pub log: LogConfig,
}

/// Treat unset and blank the same
fn required(
    value: Option<String>,
    name: &'static str,
    flag: &'static str,
    env: &'static str,
) -> Result<String, ConfigError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing { name, flag, env })
}

impl Args {
    pub fn into_config(self) -> Result<CliConfig, ConfigError> {
        let supabase_url = required(self.supabase_url, "Supabase URL", "--supabase-url", "SUPABASE_URL")?;
        let anon_key = required(self.anon_key, "anon key", "--anon-key", "SUPABASE_ANON_KEY")?;
        let level = parse_log_level(&self.log_level)?;
        let dir = match self.log_dir {
            Some(dir) => dir,
            None => default_log_dir().ok_or(ConfigError::NoLogDir)?,
        };

        Ok(CliConfig {
            supabase_url,
            anon_key,
            initial_tab: self.tab,
            log: LogConfig { dir, level },
        })
    }
}
