//! PyPI JSON API client
//!
//! This crate builds requests against a PyPI-style package index, classifies
//! the responses and decodes project documents into `pypi_core` types.
//!
//! ```rust,no_run
//! use pypi_client::PypiClient;
//!
//! # async fn example() -> pypi_client::PypiResult<()> {
//! let client = PypiClient::new()?;
//! let (project, response) = client.projects().get_project("requests").await?;
//! println!("{} {} (HTTP {})", project.info.name, project.info.version, response.status());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;

// Re-export main types
pub use api::ProjectService;
pub use client::{check_response, ApiRequest, PypiClient, Response, Sink};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{ErrorResponse, PypiError};

pub use pypi_core::{Project, ProjectInfo, ReleaseFile};

/// Result type for client operations
pub type PypiResult<T> = Result<T, PypiError>;
