use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind the HTTP server to, e.g. "0.0.0.0"
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Public base URL used when building short links, e.g. "https://sho.rt".
    /// Never has a trailing slash. When unset, the request's Host header is
    /// used instead.
    pub base_url: Option<String>,

    /// HTML page served for every path that is not a short link.
    pub index_path: PathBuf,

    /// Initial capacity hint for the shrink store.
    pub shrink_capacity: usize,
}

impl AppConfig {
    /// Load configuration from environment variables (populated by dotenvy before this is called).
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse::<u16>()
            .context("PORT must be a valid port number (1–65535)")?;

        let shrink_capacity = std::env::var("SHRINK_CAPACITY")
            .unwrap_or_else(|_| "1000000".into())
            .parse::<usize>()
            .context("SHRINK_CAPACITY must be a non-negative integer")?;

        let base_url = std::env::var("BASE_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty());

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            base_url,
            index_path: std::env::var("INDEX_PATH")
                .unwrap_or_else(|_| "index.html".into())
                .into(),
            shrink_capacity,
        })
    }

    /// Address the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            base_url: None,
            index_path: "index.html".into(),
            shrink_capacity: 1_000_000,
        }
    }
}
