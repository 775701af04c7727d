//! Outbound request values

use reqwest::header::HeaderMap;
use reqwest::Method;
use url::Url;

/// A fully formed request, ready to hand to the transport.
///
/// Carries the path twice: `raw_path` keeps the escapes and is what goes on
/// the wire, `path` is decoded for display.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    raw_path: String,
    path: String,
    headers: HeaderMap,
}

impl ApiRequest {
    pub(crate) fn new(method: Method, url: Url, raw_path: String, path: String, headers: HeaderMap) -> Self {
        Self {
            method,
            url,
            raw_path,
            path,
            headers,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Effective URL, with the escaped path
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Escaped path as sent to the server
    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    /// Decoded path
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Convert into a transport request
    pub(crate) fn into_http(self) -> reqwest::Request {
        let mut request = reqwest::Request::new(self.method, self.url);
        *request.headers_mut() = self.headers;
        request
    }
}
