//! PyPI JSON API schema types.
//!
//! This module provides the records decoded from `pypi/{name}/json` and
//! `pypi/{name}/{version}/json`:
//! - `Project` and `ProjectInfo` for package metadata
//! - `ReleaseFile` and `Digests` for per-file release artifacts
//! - `MetadataValue` for fields whose upstream shape varies between packages

pub mod project;
pub mod release;
pub mod value;

// Re-export all public types
pub use project::{Downloads, Project, ProjectInfo};
pub use release::{Digests, PackageType, ReleaseFile};
pub use value::MetadataValue;
