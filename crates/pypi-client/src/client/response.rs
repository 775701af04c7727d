//! Response envelope, body sinks and status classification

use pypi_core::utils::decode_lossy;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use tokio::io::AsyncWrite;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ErrorResponse, PypiError};
use crate::PypiResult;

/// Header carrying the index's change-sequence number
pub const LAST_SERIAL_HEADER: &str = "x-pypi-last-serial";

/// Status line and headers of a completed request.
///
/// Captured before the body is consumed; the body itself ends up in a
/// `Sink` or in an error.
#[derive(Debug, Clone)]
pub struct Response {
    method: Method,
    url: Url,
    status: StatusCode,
    headers: HeaderMap,
}

impl Response {
    pub(crate) fn from_http(method: Method, response: &reqwest::Response) -> Self {
        Self {
            method,
            url: response.url().clone(),
            status: response.status(),
            headers: response.headers().clone(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Final URL of the request, after any transport redirects
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a header value as text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Only 200 counts as success for this API
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Change-sequence number reported in the `X-PyPI-Last-Serial` header
    pub fn last_serial(&self) -> Option<u64> {
        self.header(LAST_SERIAL_HEADER)?.trim().parse().ok()
    }

    /// URL with the path decoded, for messages
    pub fn display_url(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        let path = decode_lossy(self.url.path());
        match self.url.port() {
            Some(port) => format!("{}://{}:{}{}", self.url.scheme(), host, port, path),
            None => format!("{}://{}{}", self.url.scheme(), host, path),
        }
    }
}

/// Where a successful response body goes
pub enum Sink<'a, T> {
    /// Read the body and drop it
    Discard,
    /// Copy the body verbatim
    Raw(&'a mut (dyn AsyncWrite + Unpin + Send)),
    /// Decode the body as JSON into the target
    Json(&'a mut T),
}

impl<'a> Sink<'a, ()> {
    pub fn discard() -> Self {
        Sink::Discard
    }

    pub fn raw(writer: &'a mut (dyn AsyncWrite + Unpin + Send)) -> Self {
        Sink::Raw(writer)
    }
}

impl<'a, T> Sink<'a, T> {
    pub fn json(target: &'a mut T) -> Self {
        Sink::Json(target)
    }
}

/// Check a response for an API error.
///
/// Status 200 hands the response back for body processing. Any other
/// status reads the whole body into an `ErrorResponse`; if that read fails
/// the error is still returned, just with an empty body.
pub async fn check_response(response: &Response, http: reqwest::Response) -> PypiResult<reqwest::Response> {
    if response.is_success() {
        return Ok(http);
    }

    debug!(status = response.status().as_u16(), url = %response.url(), "PyPI returned an error status");

    let body = match http.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            warn!(error = %e, url = %response.url(), "Failed to read error response body");
            Vec::new()
        },
    };

    Err(PypiError::Api(Box::new(ErrorResponse::new(response.clone(), body))))
}
