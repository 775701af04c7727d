//! Project endpoints of the PyPI JSON API

use pypi_core::{escape_segment, Project, ReleaseFile};
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Method;
use tracing::debug;

use crate::client::{PypiClient, Response, Sink};
use crate::{PypiError, PypiResult};

/// Read-only access to `pypi/{name}/json` and `pypi/{name}/{version}/json`
#[derive(Debug, Clone, Copy)]
pub struct ProjectService<'a> {
    client: &'a PypiClient,
}

impl<'a> ProjectService<'a> {
    pub(crate) fn new(client: &'a PypiClient) -> Self {
        Self { client }
    }

    /// Fetch the latest metadata of a project
    pub async fn get_project(&self, name: &str) -> PypiResult<(Project, Response)> {
        let path = project_path(name);
        debug!(project = name, "Fetching project metadata");
        self.fetch(&path).await
    }

    /// Fetch the metadata of one release of a project
    pub async fn get_release(&self, name: &str, version: &str) -> PypiResult<(Project, Response)> {
        let path = release_path(name, version);
        debug!(project = name, version, "Fetching release metadata");
        self.fetch(&path).await
    }

    /// Download a release file and check it against its sha256 digest
    pub async fn download_file(&self, file: &ReleaseFile) -> PypiResult<(Vec<u8>, Response)> {
        let mut request = self.client.new_absolute_request(Method::GET, &file.url)?;
        request.headers_mut().insert(ACCEPT, HeaderValue::from_static("*/*"));
        debug!(file = %file.filename, url = %file.url, "Downloading release file");

        let mut data: Vec<u8> = Vec::new();
        let response = self.client.execute(request, Sink::raw(&mut data)).await?;

        file.verify(&data).map_err(|source| PypiError::Integrity {
            response: Box::new(response.clone()),
            source,
        })?;

        Ok((data, response))
    }

    async fn fetch(&self, path: &str) -> PypiResult<(Project, Response)> {
        let request = self.client.new_request(Method::GET, path)?;

        let mut project = Project::default();
        let response = self.client.execute(request, Sink::json(&mut project)).await?;

        Ok((project, response))
    }
}

/// Relative path of the latest-project endpoint
pub fn project_path(name: &str) -> String {
    format!("pypi/{}/json", escape_segment(name))
}

/// Relative path of the release endpoint
pub fn release_path(name: &str, version: &str) -> String {
    format!("pypi/{}/{}/json", escape_segment(name), escape_segment(version))
}

#[cfg(test)]
mod tests;
