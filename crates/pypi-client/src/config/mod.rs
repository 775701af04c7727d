//! Client configuration parsing and validation

use camino::Utf8Path;
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{PypiError, PypiResult};

/// Public package index
pub const DEFAULT_BASE_URL: &str = "https://pypi.org/";

/// User agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = concat!("pypi-client/", env!("CARGO_PKG_VERSION"));

/// Settings for a `PypiClient`.
///
/// Can be embedded in a host application's TOML configuration; every field
/// falls back to its default when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the index API
    pub base_url: String,

    /// User-Agent header value; empty disables the header
    pub user_agent: String,

    /// Request timeout for the default transport, in seconds.
    /// Ignored when a transport is injected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Parse and validate configuration from TOML
    pub fn from_toml_str(content: &str) -> PypiResult<Self> {
        let config: ClientConfig = toml::from_str(content).map_err(|e| PypiError::InvalidConfig {
            message: format!("TOML parsing error: {}", e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub async fn load_from_file(path: &Utf8Path) -> PypiResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PypiError::InvalidConfig {
                message: format!("Failed to read {}: {}", path, e),
            })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            PypiError::InvalidConfig { message } => PypiError::InvalidConfig {
                message: format!("In file {}: {}", path, message),
            },
            other => other,
        })
    }

    /// Check that the base URL and user agent are usable
    pub fn validate(&self) -> PypiResult<()> {
        normalize_base_url(&self.base_url)?;
        parse_user_agent(&self.user_agent)?;

        if self.timeout_secs == Some(0) {
            return Err(PypiError::InvalidConfig {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

/// Parse a base URL, making sure it ends with a slash
pub fn normalize_base_url(raw: &str) -> PypiResult<Url> {
    let mut with_slash = raw.trim().to_string();
    if !with_slash.ends_with('/') {
        with_slash.push('/');
    }

    let url = Url::parse(&with_slash).map_err(|e| PypiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(PypiError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }

    Ok(url)
}

/// Convert a user agent into a header value; empty means no header
pub fn parse_user_agent(user_agent: &str) -> PypiResult<Option<HeaderValue>> {
    if user_agent.is_empty() {
        return Ok(None);
    }

    HeaderValue::from_str(user_agent)
        .map(Some)
        .map_err(|_| PypiError::InvalidUserAgent {
            user_agent: user_agent.to_string(),
        })
}
