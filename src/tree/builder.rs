//! Materialize a directory hierarchy from flat, path-tagged file records.

use super::node::{DirectoryNode, FileNode, TreeNode};
use super::path::split_segments;
use crate::error::TreeError;
use crate::types::FileRecord;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Default cap on the number of segments in a single record path
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Builds one fresh tree per call; holds no state between builds.
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder {
    max_depth: usize,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Build the implicit root directory for `records`.
    ///
    /// Every non-leaf segment becomes a directory and every leaf a file. A
    /// name claimed by both a directory and a file under one parent, or a
    /// repeated file path, fails with [`TreeError::Conflict`]; nothing is
    /// overwritten.
    pub fn build<'a, I>(&self, records: I) -> Result<DirectoryNode, TreeError>
    where
        I: IntoIterator<Item = &'a FileRecord>,
    {
        let mut root = DirectoryNode::root();
        let mut inserted = 0usize;

        for record in records {
            self.insert(&mut root, record)?;
            inserted += 1;
        }

        debug!(records = inserted, top_level = root.len(), "Built file tree");
        Ok(root)
    }

    fn insert(&self, root: &mut DirectoryNode, record: &FileRecord) -> Result<(), TreeError> {
        let segments = split_segments(&record.path)?;
        if segments.len() > self.max_depth {
            return Err(TreeError::DepthExceeded {
                path: record.path.clone(),
                max_depth: self.max_depth,
            });
        }

        let (leaf, parents) = match segments.split_last() {
            Some(split) => split,
            None => {
                return Err(TreeError::MalformedPath {
                    path: record.path.clone(),
                    reason: "no non-empty segments".to_string(),
                })
            }
        };

        let mut current = root;
        for (depth, segment) in parents.iter().enumerate() {
            let child = current
                .children
                .entry((*segment).to_string())
                .or_insert_with(|| TreeNode::Directory(DirectoryNode::new(*segment)));
            current = match child {
                TreeNode::Directory(dir) => dir,
                TreeNode::File(_) => {
                    return Err(TreeError::Conflict {
                        path: segments[..=depth].join("/"),
                        reason: format!(
                            "'{}' is a file but '{}' needs it as a directory",
                            segment, record.path
                        ),
                    });
                }
            };
        }

        match current.children.entry((*leaf).to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(TreeNode::File(FileNode {
                    record: record.clone(),
                }));
                Ok(())
            }
            Entry::Occupied(existing) => {
                let reason = match existing.get() {
                    TreeNode::Directory(_) => {
                        format!("file '{}' collides with an existing directory", leaf)
                    }
                    TreeNode::File(_) => format!("duplicate file path '{}'", record.path),
                };
                Err(TreeError::Conflict {
                    path: segments.join("/"),
                    reason,
                })
            }
        }
    }
}

/// Build a tree with the default depth cap.
pub fn build_tree(records: &[FileRecord]) -> Result<DirectoryNode, TreeError> {
    TreeBuilder::new().build(records)
}
