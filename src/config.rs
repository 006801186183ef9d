//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `API_BASE_URL` - Base URL of the commerce API tenant (http/https)
//! - `API_CLIENT_ID` - Application client id for the commerce API
//! - `API_CLIENT_SECRET` - Application client secret for the commerce API
//! - `DEFAULT_RETURN_LOCATION_CODE` - Location code stamped on every created return
//!
//! ## Optional Variables
//!
//! - `RETURN_REASON` - Reason string on each return line (default: `TRADE IN`)
//! - `SITE_HEADER_OVERRIDE` - When `true`, return creation carries an
//!   `x-vol-site` header with the shipment's site id; when `false`, returns
//!   are submitted through the default channel (default: `true`)
//! - `HTTP_TIMEOUT_SECONDS` - Timeout for outbound commerce API calls (default: 30)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the commerce API tenant, e.g. `https://t00000.sandbox.example.com`.
    pub api_base_url: String,
    pub api_client_id: String,
    pub api_client_secret: String,

    /// Location code placed on every created return (`DEFAULT_RETURN_LOCATION_CODE`).
    pub default_return_location_code: String,
    /// Reason string on each return line item (`RETURN_REASON`, default: `TRADE IN`).
    pub return_reason: String,
    /// When true, return creation sends the shipment's site id as a per-request
    /// header override instead of using the default channel.
    pub site_header_override: bool,

    /// Timeout in seconds for outbound commerce API calls (`HTTP_TIMEOUT_SECONDS`).
    pub http_timeout_seconds: u64,

    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required commerce API configuration is missing.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL").context("API_BASE_URL must be set")?;
        let api_client_id = env::var("API_CLIENT_ID").context("API_CLIENT_ID must be set")?;
        let api_client_secret =
            env::var("API_CLIENT_SECRET").context("API_CLIENT_SECRET must be set")?;

        let default_return_location_code = env::var("DEFAULT_RETURN_LOCATION_CODE")
            .context("DEFAULT_RETURN_LOCATION_CODE must be set")?;

        let return_reason = env::var("RETURN_REASON").unwrap_or_else(|_| "TRADE IN".to_string());

        let site_header_override = env::var("SITE_HEADER_OVERRIDE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(true);

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_base_url,
            api_client_id,
            api_client_secret,
            default_return_location_code,
            return_reason,
            site_header_override,
            http_timeout_seconds,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base_url` is not a valid http(s) URL
    /// - credentials or the location code are empty
    /// - `http_timeout_seconds` is outside 1..=300
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.api_base_url)
            .with_context(|| format!("API_BASE_URL is not a valid URL: '{}'", self.api_base_url))?;

        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "API_BASE_URL must use http or https, got '{}'",
                self.api_base_url
            );
        }

        if self.api_client_id.is_empty() {
            anyhow::bail!("API_CLIENT_ID must not be empty");
        }

        if self.api_client_secret.is_empty() {
            anyhow::bail!("API_CLIENT_SECRET must not be empty");
        }

        if self.default_return_location_code.is_empty() {
            anyhow::bail!("DEFAULT_RETURN_LOCATION_CODE must not be empty");
        }

        if self.return_reason.is_empty() {
            anyhow::bail!("RETURN_REASON must not be empty");
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 300 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.http_timeout_seconds
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Commerce API: {}", self.api_base_url);
        tracing::info!("  Client id: {}", mask_secret(&self.api_client_id));
        tracing::info!(
            "  Return location code: {}",
            self.default_return_location_code
        );
        tracing::info!("  Return reason: {}", self.return_reason);
        tracing::info!(
            "  Submission channel: {}",
            if self.site_header_override {
                "per-shipment site header"
            } else {
                "default"
            }
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a credential for logging, keeping only a short prefix.
///
/// - `app-key-12345` → `app-***`
/// - short values are fully masked
fn mask_secret(value: &str) -> String {
    if value.len() > 6 {
        format!("{}***", &value[..4])
    } else {
        "***".to_string()
    }
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
