//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Upstream Endpoints
//!
//! ```bash
//! export REDIRECT_API_URL="https://abc123.execute-api.us-east-1.amazonaws.com/prod"
//! # Optional, defaults to "$REDIRECT_API_URL/shorten"
//! export SHORTEN_API_URL="https://abc123.execute-api.us-east-1.amazonaws.com/prod/shorten"
//! ```
//!
//! Short code lookups call `GET $REDIRECT_API_URL/<code>`.
//!
//! ## Required Variables
//!
//! - `REDIRECT_API_URL` - Base URL of the external redirect API
//!
//! ## Optional Variables
//!
//! - `SHORTEN_API_URL` - External shortening endpoint
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Trust forwarded client IP headers for rate limiting (default: `false`)
//! - `PUBLIC_ORIGIN` - Origin used in rendered short links (default: from `Host`)
//! - `RESERVED_PREFIXES` - Extra comma-separated path prefixes the filter never looks up

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Base URL for redirect lookups (`GET {redirect_api_url}/{code}`).
    pub redirect_api_url: Url,
    /// Endpoint receiving `POST {"url": ...}`.
    pub shorten_api_url: Url,
    /// Origin for rendered short links, without trailing slash.
    pub public_origin: Option<String>,
    /// Site-specific prefixes added to the filter's skip table.
    pub reserved_prefixes: Vec<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `REDIRECT_API_URL` is missing or either upstream
    /// URL fails to parse.
    pub fn from_env() -> Result<Self> {
        let redirect_api_url = env::var("REDIRECT_API_URL")
            .context("REDIRECT_API_URL must be set")?
            .parse::<Url>()
            .context("REDIRECT_API_URL is not a valid URL")?;

        let shorten_api_url = Self::load_shorten_api_url(&redirect_api_url)?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let public_origin = env::var("PUBLIC_ORIGIN")
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let reserved_prefixes = env::var("RESERVED_PREFIXES")
            .map(|v| parse_prefix_list(&v))
            .unwrap_or_default();

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            redirect_api_url,
            shorten_api_url,
            public_origin,
            reserved_prefixes,
        })
    }

    /// Loads the shortening endpoint.
    ///
    /// Priority:
    /// 1. `SHORTEN_API_URL` environment variable
    /// 2. `{REDIRECT_API_URL}/shorten`
    fn load_shorten_api_url(redirect_api_url: &Url) -> Result<Url> {
        if let Ok(url) = env::var("SHORTEN_API_URL") {
            return url
                .parse()
                .context("SHORTEN_API_URL is not a valid URL");
        }

        format!(
            "{}/shorten",
            redirect_api_url.as_str().trim_end_matches('/')
        )
        .parse()
        .context("Cannot derive shortening endpoint from REDIRECT_API_URL")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - an upstream URL or `PUBLIC_ORIGIN` is not http(s)
    /// - a reserved prefix does not start with `/`
    pub fn validate(&self) -> Result<()> {
        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        for (name, url) in [
            ("REDIRECT_API_URL", &self.redirect_api_url),
            ("SHORTEN_API_URL", &self.shorten_api_url),
        ] {
            if !is_http(url) {
                anyhow::bail!("{} must be an http(s) URL, got '{}'", name, url);
            }
        }

        if let Some(ref origin) = self.public_origin {
            let parsed = origin
                .parse::<Url>()
                .with_context(|| format!("PUBLIC_ORIGIN is not a valid URL: '{}'", origin))?;
            if !is_http(&parsed) {
                anyhow::bail!("PUBLIC_ORIGIN must be an http(s) URL, got '{}'", origin);
            }
        }

        if let Some(prefix) = self.reserved_prefixes.iter().find(|p| !p.starts_with('/')) {
            anyhow::bail!(
                "RESERVED_PREFIXES entries must start with '/', got '{}'",
                prefix
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Redirect API: {}", self.redirect_api_url);
        tracing::info!("  Shorten API: {}", self.shorten_api_url);

        match self.public_origin {
            Some(ref origin) => tracing::info!("  Public origin: {}", origin),
            None => tracing::info!("  Public origin: from Host header"),
        }

        if !self.reserved_prefixes.is_empty() {
            tracing::info!("  Extra reserved prefixes: {:?}", self.reserved_prefixes);
        }

        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Splits a comma-separated prefix list (`RESERVED_PREFIXES`), dropping blanks.
pub fn parse_prefix_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
