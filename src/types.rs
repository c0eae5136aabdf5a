//! Core types shared across the file browser.

use serde::{Deserialize, Serialize};

/// RepositoryId: opaque identifier assigned by the content service
pub type RepositoryId = String;

/// RequestSeq: monotonically increasing fetch sequence number
pub type RequestSeq = u64;

/// A file as delivered by the repository content service.
///
/// `path` is slash-delimited and `name` is its last segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content: String,
}

impl FileRecord {
    /// Create a record whose name is derived from the last non-empty path segment.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let path = path.into();
        let content = content.into();
        let name = path
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or_default()
            .to_string();
        Self {
            name,
            size: content.len() as u64,
            path,
            content,
        }
    }
}
