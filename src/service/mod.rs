//! Repository content service boundary.
//!
//! The file browser consumes two routes: listing a repository's files and
//! writing one file back. Network and status failures become [`ApiError`]s
//! here and never reach tree building.

pub mod http;

use crate::error::ApiError;
use crate::session::Session;
use crate::tree::path::normalize;
use crate::types::FileRecord;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

pub use http::HttpContentService;

/// Body of `GET /repo/{id}/files`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub files: Vec<FileRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<FileRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<FileRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /repo/{id}/files`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFileRequest {
    pub file_name: String,
    pub content: String,
    pub path: String,
}

impl SaveFileRequest {
    /// Build a save request; an empty `path` falls back to the file name.
    pub fn new(
        file_name: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "file name is required".to_string(),
            ));
        }
        let path = path.into();
        let path = if path.trim().is_empty() {
            file_name.clone()
        } else {
            path
        };
        Ok(Self {
            file_name,
            content: content.into(),
            path,
        })
    }

    /// Save request for a tree path; the name is its last segment.
    pub fn for_path(path: &str, content: impl Into<String>) -> Result<Self, ApiError> {
        let path = normalize(path)?;
        let name = path.rsplit('/').next().unwrap_or_default().to_string();
        Self::new(name, path, content)
    }
}

/// Remote store of repository files.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Fetch every file record of `repository`.
    async fn fetch_files(
        &self,
        session: &Session,
        repository: &str,
    ) -> Result<Vec<FileRecord>, ApiError>;

    /// Create or overwrite one file in `repository`.
    async fn save_file(
        &self,
        session: &Session,
        repository: &str,
        request: &SaveFileRequest,
    ) -> Result<(), ApiError>;
}
