//! # pypi-core
//!
//! Core types and utilities shared by the PyPI client crates.
//!
//! This crate provides:
//! - `Project` and the rest of the PyPI JSON API schema
//! - `CoreError` for failures that need no HTTP transport
//! - Path segment escaping and artifact digest helpers
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Schema types decoded from `pypi/{name}/json` documents
//! - `error`: Error types and result aliases
//! - `utils`: Path escaping and hashing helpers

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{CoreError, CoreResult};
pub use types::{Digests, Downloads, MetadataValue, PackageType, Project, ProjectInfo, ReleaseFile};
pub use utils::{escape_segment, unescape_path};
