//! Error types for PyPI client operations.
//!
//! Errors that happen after a response arrived carry the response envelope,
//! so callers can still look at the status line and headers.

use std::fmt;

use pypi_core::CoreError;
use reqwest::StatusCode;
use thiserror::Error;

use crate::client::Response;

/// Message attached to every API error; PyPI sends no structured error body
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Unified error type for PyPI client operations
#[derive(Error, Debug)]
pub enum PypiError {
    // Construction errors
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid user agent '{user_agent}'")]
    InvalidUserAgent { user_agent: String },

    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid request path '{path}': {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: CoreError,
    },

    #[error("Invalid client configuration: {message}")]
    InvalidConfig { message: String },

    // Transport errors
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    // API errors
    #[error(transparent)]
    Api(Box<ErrorResponse>),

    // Body errors
    #[error("Failed to read response body from {}: {source}", .response.display_url())]
    Body {
        response: Box<Response>,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode response from {}: {source}", .response.display_url())]
    Decode {
        response: Box<Response>,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write response body from {}: {source}", .response.display_url())]
    Io {
        response: Box<Response>,
        #[source]
        source: std::io::Error,
    },

    #[error("Downloaded file from {} failed verification: {source}", .response.display_url())]
    Integrity {
        response: Box<Response>,
        #[source]
        source: CoreError,
    },
}

impl PypiError {
    /// Create a transport error from a reqwest error
    pub fn transport(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            message: message.into(),
            source,
        }
    }

    /// Get the response this error was raised for, if one was received
    pub fn response(&self) -> Option<&Response> {
        match self {
            PypiError::Api(error) => Some(&error.response),
            PypiError::Body { response, .. }
            | PypiError::Decode { response, .. }
            | PypiError::Io { response, .. }
            | PypiError::Integrity { response, .. } => Some(&**response),
            _ => None,
        }
    }

    /// Get the HTTP status of the response, if one was received
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(Response::status)
    }

    /// Check if the index reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, PypiError::Api(error) if error.response.status() == StatusCode::NOT_FOUND)
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            PypiError::Api(_) if self.is_not_found() => {
                Some("Check the project name and version spelling")
            },
            PypiError::InvalidBaseUrl { .. } => {
                Some("Use an absolute URL such as https://pypi.org/")
            },
            PypiError::Transport { .. } => Some("Check your internet connection and try again"),
            PypiError::Integrity { .. } => Some("Download the file again"),
            _ => None,
        }
    }
}

/// A non-200 response from the index
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    /// Envelope of the failed response
    pub response: Response,
    /// Raw response body; empty if it could not be read
    pub body: Vec<u8>,
    pub message: String,
}

impl ErrorResponse {
    pub(crate) fn new(response: Response, body: Vec<u8>) -> Self {
        Self {
            response,
            body,
            message: UNKNOWN_ERROR.to_string(),
        }
    }

    /// Get the body as text, replacing invalid UTF-8
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} {}",
            self.response.method(),
            self.response.display_url(),
            self.response.status().as_u16(),
            self.message
        )
    }
}

impl std::error::Error for ErrorResponse {}
