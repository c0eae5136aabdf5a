//! File tree node types

use crate::types::FileRecord;
use std::collections::HashMap;

/// File node representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub record: FileRecord,
}

/// Directory node representation
///
/// Children are keyed by path segment. The map carries no order; display
/// order is recomputed by the traversal on every render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryNode {
    pub name: String,
    pub children: HashMap<String, TreeNode>,
}

/// Tree node type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File(FileNode),
    Directory(DirectoryNode),
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: HashMap::new(),
        }
    }

    /// The implicit, unnamed root of a repository tree
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Count every file below this directory.
    pub fn file_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&DirectoryNode> = vec![self];
        while let Some(dir) = pending.pop() {
            for node in dir.children.values() {
                match node {
                    TreeNode::File(_) => count += 1,
                    TreeNode::Directory(sub) => pending.push(sub),
                }
            }
        }
        count
    }
}

impl TreeNode {
    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, TreeNode::File(_))
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            TreeNode::Directory(dir) => Some(dir),
            TreeNode::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileRecord> {
        match self {
            TreeNode::File(file) => Some(&file.record),
            TreeNode::Directory(_) => None,
        }
    }
}
