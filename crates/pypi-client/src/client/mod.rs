//! HTTP client: configuration, request construction and execution

mod request;
mod response;

use std::time::Duration;

use pypi_core::utils::{decode_lossy, unescape_path, validate_segments};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{ClientBuilder, Method};
use serde::de::DeserializeOwned;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, trace};
use url::Url;

pub use request::ApiRequest;
pub use response::{check_response, Response, Sink, LAST_SERIAL_HEADER};

use crate::api::ProjectService;
use crate::config::{normalize_base_url, parse_user_agent, ClientConfig};
use crate::{PypiError, PypiResult};

/// Client for a PyPI-style JSON API
#[derive(Debug, Clone)]
pub struct PypiClient {
    /// Underlying HTTP transport
    http: reqwest::Client,
    /// Base URL, always ending with a slash
    base_url: Url,
    /// Configured user agent, empty when disabled
    user_agent: String,
    /// Pre-validated User-Agent header value
    user_agent_header: Option<HeaderValue>,
}

impl PypiClient {
    /// Create a client for the public index with a default transport
    pub fn new() -> PypiResult<Self> {
        Self::with_config(ClientConfig::default(), None)
    }

    /// Create a client for the public index on top of an existing transport
    pub fn with_transport(transport: reqwest::Client) -> PypiResult<Self> {
        Self::with_config(ClientConfig::default(), Some(transport))
    }

    /// Create a client from configuration.
    ///
    /// When `transport` is `None` a default one is built, honouring
    /// `timeout_secs`. An injected transport is used as given.
    pub fn with_config(config: ClientConfig, transport: Option<reqwest::Client>) -> PypiResult<Self> {
        config.validate()?;

        let base_url = normalize_base_url(&config.base_url)?;
        let user_agent_header = parse_user_agent(&config.user_agent)?;
        let http = match transport {
            Some(transport) => transport,
            None => default_transport(&config)?,
        };

        Ok(Self {
            http,
            base_url,
            user_agent: config.user_agent,
            user_agent_header,
        })
    }

    /// Get a copy of the base URL
    pub fn base_url(&self) -> Url {
        self.base_url.clone()
    }

    /// Point the client at another index. A trailing slash is added if missing.
    pub fn set_base_url(&mut self, url: &str) -> PypiResult<()> {
        self.base_url = normalize_base_url(url)?;
        Ok(())
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Change the User-Agent header; an empty string stops sending it
    pub fn set_user_agent(&mut self, user_agent: &str) -> PypiResult<()> {
        self.user_agent_header = parse_user_agent(user_agent)?;
        self.user_agent = user_agent.to_string();
        Ok(())
    }

    /// Access the project endpoints
    pub fn projects(&self) -> ProjectService<'_> {
        ProjectService::new(self)
    }

    /// Build a request for a path relative to the base URL.
    ///
    /// `path` must not start with a slash and must already be escaped
    /// (see `pypi_core::escape_segment`). Fails on a malformed
    /// percent-escape, or on a segment that decodes to `.` or `..`, which
    /// URL normalisation would otherwise drop from the path.
    pub fn new_request(&self, method: Method, path: &str) -> PypiResult<ApiRequest> {
        let invalid_path = |source| PypiError::InvalidPath {
            path: path.to_string(),
            source,
        };
        let decoded = unescape_path(path).map_err(invalid_path)?;
        validate_segments(path).map_err(invalid_path)?;

        let base_path = self.base_url.path();
        let raw_path = format!("{}{}", base_path, path);
        let display_path = format!("{}{}", decode_lossy(base_path), decoded);

        let mut url = self.base_url.clone();
        url.set_path(&raw_path);

        Ok(ApiRequest::new(method, url, raw_path, display_path, self.default_headers()))
    }

    /// Build a request for an absolute URL, such as a file download link
    pub fn new_absolute_request(&self, method: Method, url: &str) -> PypiResult<ApiRequest> {
        let url = Url::parse(url).map_err(|source| PypiError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let raw_path = url.path().to_string();
        let path = unescape_path(&raw_path).map_err(|source| PypiError::InvalidPath {
            path: raw_path.clone(),
            source,
        })?;

        Ok(ApiRequest::new(method, url, raw_path, path, self.default_headers()))
    }

    /// Send a request and deliver a successful body to `sink`.
    ///
    /// The response envelope is returned on success and carried inside
    /// every error raised after the response arrived. Transport failures
    /// carry no response.
    pub async fn execute<T>(&self, request: ApiRequest, sink: Sink<'_, T>) -> PypiResult<Response>
    where
        T: DeserializeOwned,
    {
        let method = request.method().clone();
        debug!(%method, path = request.path(), "Sending PyPI request");

        let http_response = self
            .http
            .execute(request.into_http())
            .await
            .map_err(|e| PypiError::transport(format!("{} request failed", method), e))?;

        let response = Response::from_http(method, &http_response);
        debug!(status = response.status().as_u16(), url = %response.url(), "Received PyPI response");

        let body = check_response(&response, http_response).await?;

        match sink {
            Sink::Discard => {
                if let Err(e) = body.bytes().await {
                    trace!(error = %e, "Discarded body could not be read");
                }
            },
            Sink::Raw(writer) => copy_body(&response, body, writer).await?,
            Sink::Json(target) => {
                let bytes = body.bytes().await.map_err(|source| PypiError::Body {
                    response: Box::new(response.clone()),
                    source,
                })?;
                trace!(bytes = bytes.len(), "Decoding JSON body");

                *target = serde_json::from_slice(&bytes).map_err(|source| PypiError::Decode {
                    response: Box::new(response.clone()),
                    source,
                })?;
            },
        }

        Ok(response)
    }

    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(user_agent) = &self.user_agent_header {
            headers.insert(USER_AGENT, user_agent.clone());
        }
        headers
    }
}

/// Build the transport used when none is injected
fn default_transport(config: &ClientConfig) -> PypiResult<reqwest::Client> {
    let mut builder = ClientBuilder::new()
        // Connection pooling configuration
        .pool_max_idle_per_host(16)
        .pool_idle_timeout(Duration::from_secs(90))
        .gzip(true);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| PypiError::transport("Failed to create HTTP client", e))
}

/// Stream a body into a raw sink
async fn copy_body(
    response: &Response,
    mut body: reqwest::Response,
    writer: &mut (dyn AsyncWrite + Unpin + Send),
) -> PypiResult<()> {
    let io_error = |source| PypiError::Io {
        response: Box::new(response.clone()),
        source,
    };

    let mut written = 0usize;
    while let Some(chunk) = body.chunk().await.map_err(|source| PypiError::Body {
        response: Box::new(response.clone()),
        source,
    })? {
        writer.write_all(&chunk).await.map_err(io_error)?;
        written += chunk.len();
    }
    writer.flush().await.map_err(io_error)?;

    trace!(bytes = written, "Copied raw body");
    Ok(())
}
