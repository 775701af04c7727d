//! Release artifact types

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::utils::hash::verify_sha256;

/// One uploaded file belonging to a release
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseFile {
    /// File name, e.g. `requests-2.31.0-py3-none-any.whl`
    pub filename: String,
    /// Download URL on the file host
    pub url: String,
    /// Size in bytes
    pub size: u64,
    /// Content digests
    pub digests: Digests,
    /// Legacy MD5 digest field
    pub md5_digest: Option<String>,
    /// Upload time as reported by PyPI, without timezone
    pub upload_time: Option<NaiveDateTime>,
    /// Upload time in UTC
    pub upload_time_iso_8601: Option<DateTime<Utc>>,
    /// Distribution kind
    pub packagetype: PackageType,
    /// Python version tag, e.g. `py3` or `source`
    pub python_version: String,
    /// `Requires-Python` constraint for this file
    pub requires_python: Option<String>,
    /// Whether a detached GPG signature was uploaded
    pub has_sig: bool,
    pub comment_text: Option<String>,
    pub yanked: bool,
    pub yanked_reason: Option<String>,
}

/// Digests published for a release file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Digests {
    pub md5: Option<String>,
    pub sha256: Option<String>,
    pub blake2b_256: Option<String>,
}

/// Distribution kind of a release file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    Sdist,
    BdistWheel,
    BdistEgg,
    BdistWininst,
    BdistMsi,
    BdistRpm,
    BdistDmg,
    BdistDumb,
    #[default]
    #[serde(other)]
    Other,
}

impl ReleaseFile {
    /// Check if this file is a wheel
    pub fn is_wheel(&self) -> bool {
        self.packagetype == PackageType::BdistWheel
    }

    /// Check if this file is a source distribution
    pub fn is_sdist(&self) -> bool {
        self.packagetype == PackageType::Sdist
    }

    /// Verify downloaded bytes against the published sha256 digest
    pub fn verify(&self, data: &[u8]) -> CoreResult<()> {
        let expected = self
            .digests
            .sha256
            .as_deref()
            .ok_or_else(|| CoreError::MissingDigest {
                file: self.filename.clone(),
            })?;
        verify_sha256(&self.filename, data, expected)
    }
}
