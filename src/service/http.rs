//! reqwest-backed client for the repository content service.

use super::{ContentService, FilesResponse, SaveFileRequest};
use crate::error::ApiError;
use crate::session::Session;
use crate::types::FileRecord;
use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// HTTP content service. One client is shared by every request.
#[derive(Debug, Clone)]
pub struct HttpContentService {
    client: reqwest::Client,
}

impl HttpContentService {
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// `{api_url}/repo/{repository}/files`, with the id percent-encoded as
    /// a single path segment.
    fn files_url(session: &Session, repository: &str) -> Result<Url, ApiError> {
        if repository.trim().is_empty()
            || repository.contains('/')
            || repository == "."
            || repository == ".."
        {
            return Err(ApiError::InvalidInput(format!(
                "invalid repository id '{}'",
                repository
            )));
        }
        let mut url = Url::parse(&session.endpoint("/repo"))
            .map_err(|e| ApiError::ConfigError(format!("Invalid API URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::ConfigError("API URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend([repository, "files"]);
        Ok(url)
    }
}

/// Map a non-success status to the matching error.
fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(ApiError::Unauthorized(format!("HTTP {}", status)))
        }
        _ => Err(ApiError::Fetch(format!("HTTP {}", status))),
    }
}

#[async_trait]
impl ContentService for HttpContentService {
    async fn fetch_files(
        &self,
        session: &Session,
        repository: &str,
    ) -> Result<Vec<FileRecord>, ApiError> {
        let url = Self::files_url(session, repository)?;
        debug!(%url, "Fetching repository files");

        let response = self
            .client
            .get(url)
            .bearer_auth(session.token())
            .send()
            .await
            .map_err(|e| {
                warn!(repository, error = %e, "File listing request failed");
                ApiError::Fetch(format!("Request failed: {}", e))
            })?;

        let body: FilesResponse = check_status(response)?.json().await?;
        debug!(repository, records = body.files.len(), "Fetched repository files");
        Ok(body.files)
    }

    async fn save_file(
        &self,
        session: &Session,
        repository: &str,
        request: &SaveFileRequest,
    ) -> Result<(), ApiError> {
        let url = Self::files_url(session, repository)?;
        debug!(%url, path = %request.path, "Saving file");

        let response = self
            .client
            .post(url)
            .bearer_auth(session.token())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(repository, error = %e, "Save request failed");
                ApiError::Fetch(format!("Request failed: {}", e))
            })?;

        check_status(response)?;
        Ok(())
    }
}
