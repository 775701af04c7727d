//! Project metadata types.
//!
//! Both the latest-project and the per-release endpoints return this shape;
//! for a release, `info` and `urls` describe the requested version.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{MetadataValue, PackageType, ReleaseFile};

/// Snapshot of a PyPI project as returned by the JSON API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Core metadata of the latest (or requested) release
    pub info: ProjectInfo,
    /// Upstream change-sequence number at fetch time
    pub last_serial: u64,
    /// Files per version string
    pub releases: HashMap<String, Vec<ReleaseFile>>,
    /// Files of the latest (or requested) release
    pub urls: Vec<ReleaseFile>,
}

/// The `info` object of a project document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub name: String,
    pub version: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub description_content_type: MetadataValue,
    pub author: MetadataValue,
    pub author_email: MetadataValue,
    pub maintainer: MetadataValue,
    pub maintainer_email: MetadataValue,
    pub license: Option<String>,
    pub keywords: MetadataValue,
    pub classifiers: MetadataValue,
    pub platform: MetadataValue,
    pub home_page: Option<String>,
    pub download_url: Option<String>,
    pub bugtrack_url: Option<String>,
    pub docs_url: MetadataValue,
    pub package_url: Option<String>,
    pub project_url: Option<String>,
    pub release_url: Option<String>,
    /// Labelled links such as "Homepage" or "Source"
    pub project_urls: Option<HashMap<String, String>>,
    /// `Requires-Dist` entries
    pub requires_dist: MetadataValue,
    pub requires_python: MetadataValue,
    /// Download counters; PyPI no longer tracks these and reports -1
    pub downloads: Downloads,
    pub yanked: bool,
    pub yanked_reason: Option<String>,
}

/// Legacy download counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Downloads {
    pub last_day: i64,
    pub last_week: i64,
    pub last_month: i64,
}

impl Default for Downloads {
    fn default() -> Self {
        Self {
            last_day: -1,
            last_week: -1,
            last_month: -1,
        }
    }
}

impl Project {
    /// Version strings that have a `releases` entry, in no particular order
    pub fn release_versions(&self) -> Vec<&str> {
        self.releases.keys().map(String::as_str).collect()
    }

    /// Files uploaded for a given version
    pub fn release_files(&self, version: &str) -> Option<&[ReleaseFile]> {
        self.releases.get(version).map(Vec::as_slice)
    }

    /// Source distribution of the latest (or requested) release
    pub fn source_distribution(&self) -> Option<&ReleaseFile> {
        self.urls.iter().find(|file| file.packagetype == PackageType::Sdist)
    }

    /// Wheels of the latest (or requested) release
    pub fn wheels(&self) -> impl Iterator<Item = &ReleaseFile> {
        self.urls.iter().filter(|file| file.is_wheel())
    }
}

impl ProjectInfo {
    /// Get the author name, falling back to the maintainer
    pub fn author_name(&self) -> Option<&str> {
        self.author
            .non_empty_str()
            .or_else(|| self.maintainer.non_empty_str())
    }

    /// Get the classifier strings
    pub fn classifier_list(&self) -> Vec<&str> {
        self.classifiers.as_list()
    }
}
