// Server configuration loaded from environment variables.
// Decision: Defaults match the original deployment (all interfaces, port 8000,
// workflows.json in the working directory)

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_WORKFLOWS_FILE: &str = "workflows.json";

/// API server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Path of the workflow catalog JSON file
    pub workflows_file: PathBuf,
    /// Prefix for API routes, normalized to "" or "/segment"
    pub api_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workflows_file: PathBuf::from(DEFAULT_WORKFLOWS_FILE),
            api_prefix: String::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `HOST`: Interface to bind (default: 0.0.0.0)
    /// - `PORT`: Port to bind (default: 8000)
    /// - `WORKFLOWS_FILE`: Catalog file path (default: workflows.json)
    /// - `API_PREFIX`: Prefix for API routes (default: none)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or(defaults.host);

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", raw))?,
            None => defaults.port,
        };

        let workflows_file = non_empty("WORKFLOWS_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.workflows_file);

        let api_prefix = normalize_prefix(&lookup("API_PREFIX").unwrap_or_default());

        Ok(Self {
            host,
            port,
            workflows_file,
            api_prefix,
        })
    }

    /// Address to bind, e.g. "0.0.0.0:8000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Normalize a route prefix: "api/" -> "/api", "/" -> ""
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
