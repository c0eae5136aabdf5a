//! Slash-delimited repository paths.
//!
//! Empty segments (leading, trailing or doubled slashes) are dropped. A path
//! that keeps no segment after that, or that contains `.` or `..`, is malformed.

use crate::error::TreeError;

/// Split a record path into its non-empty segments.
pub fn split_segments(path: &str) -> Result<Vec<&str>, TreeError> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        return Err(TreeError::MalformedPath {
            path: path.to_string(),
            reason: "no non-empty segments".to_string(),
        });
    }

    if let Some(bad) = segments.iter().find(|s| **s == "." || **s == "..") {
        return Err(TreeError::MalformedPath {
            path: path.to_string(),
            reason: format!("relative segment '{}'", bad),
        });
    }

    Ok(segments)
}

/// Normalize a path to its canonical slash-joined form.
pub fn normalize(path: &str) -> Result<String, TreeError> {
    Ok(split_segments(path)?.join("/"))
}

/// Join a child name onto a parent path; the root is the empty string.
pub fn join(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}
