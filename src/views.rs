//! Tree Views
//!
//! Projects a file tree and its expansion state into an ordered list of
//! visible rows. The projection is pure; rendering it again after a toggle
//! yields the new layout.

use crate::expansion::ExpansionState;
use crate::format::{file_icon, folder_icon, format_size};
use crate::tree::{DirectoryNode, OrderedTraversal, TreeNode};
use crate::types::FileRecord;
use serde::Serialize;

/// One visible row of the file tree
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewRow<'a> {
    Directory {
        path: String,
        name: &'a str,
        depth: usize,
        expanded: bool,
        icon: &'static str,
    },
    File {
        path: String,
        name: &'a str,
        depth: usize,
        size: String,
        size_bytes: u64,
        icon: &'static str,
        #[serde(skip)]
        record: &'a FileRecord,
    },
}

impl<'a> ViewRow<'a> {
    pub fn path(&self) -> &str {
        match self {
            ViewRow::Directory { path, .. } | ViewRow::File { path, .. } => path,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            ViewRow::Directory { name, .. } | ViewRow::File { name, .. } => *name,
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            ViewRow::Directory { depth, .. } | ViewRow::File { depth, .. } => *depth,
        }
    }
}

/// Ordered, nested view model of a loaded tree
#[derive(Debug, Clone, Serialize)]
pub struct TreeView<'a> {
    pub file_count: usize,
    pub rows: Vec<ViewRow<'a>>,
}

impl<'a> TreeView<'a> {
    /// Project `root`, showing the contents of expanded directories only.
    pub fn project(root: &'a DirectoryNode, expansion: &'a ExpansionState) -> Self {
        let walk = OrderedTraversal::with_filter(root, move |path| expansion.is_expanded(path));
        Self::collect(root, walk, |path| expansion.is_expanded(path))
    }

    /// Project `root` with every directory open.
    pub fn project_all(root: &'a DirectoryNode) -> Self {
        Self::collect(root, OrderedTraversal::new(root), |_| true)
    }

    fn collect<F>(root: &'a DirectoryNode, mut walk: OrderedTraversal<'a>, expanded: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        let mut rows = Vec::new();
        while let Some(entry) = walk.next() {
            let path = walk.current_path().to_string();
            let row = match entry.node {
                TreeNode::Directory(_) => {
                    let is_open = expanded(&path);
                    ViewRow::Directory {
                        path,
                        name: entry.name,
                        depth: entry.depth,
                        expanded: is_open,
                        icon: folder_icon(is_open),
                    }
                }
                TreeNode::File(file) => ViewRow::File {
                    path,
                    name: entry.name,
                    depth: entry.depth,
                    size: format_size(file.record.size),
                    size_bytes: file.record.size,
                    icon: file_icon(entry.name),
                    record: &file.record,
                },
            };
            rows.push(row);
        }

        Self {
            file_count: root.file_count(),
            rows,
        }
    }

    /// Header text, e.g. `"3 files"`.
    pub fn header(&self) -> String {
        format!("{} files", self.file_count)
    }

    /// Record behind a visible file row.
    pub fn record_at(&self, path: &str) -> Option<&'a FileRecord> {
        self.rows.iter().find_map(|row| match row {
            ViewRow::File {
                path: row_path,
                record,
                ..
            } if row_path == path => Some(*record),
            _ => None,
        })
    }
}
