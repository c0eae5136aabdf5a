//! Deterministic display ordering and iterative tree walks.
//!
//! Directories come before files; each partition is ordered by
//! [`compare_names`]. Walks keep an explicit stack, so nesting depth never
//! turns into call-stack depth.

use super::collation::compare_names;
use super::node::{DirectoryNode, TreeNode};
use super::path::{join, split_segments};
use crate::types::FileRecord;
use std::cmp::Ordering;

/// Children of `dir` in display order.
pub fn render_order(dir: &DirectoryNode) -> Vec<(&str, &TreeNode)> {
    let mut entries: Vec<(&str, &TreeNode)> = dir
        .children
        .iter()
        .map(|(name, node)| (name.as_str(), node))
        .collect();
    entries.sort_by(|(a_name, a_node), (b_name, b_node)| {
        match (a_node.is_directory(), b_node.is_directory()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => compare_names(a_name, b_name),
        }
    });
    entries
}

/// One node reached by a walk.
#[derive(Debug, Clone, Copy)]
pub struct WalkEntry<'a> {
    pub name: &'a str,
    pub node: &'a TreeNode,
    /// Depth below the walk root; direct children are at 0.
    pub depth: usize,
}

#[derive(Debug)]
struct Pending<'a> {
    parent: usize,
    entry: WalkEntry<'a>,
}

/// Lazy pre-order walk in display order.
///
/// Directories are always yielded; their children only when `descend`
/// returns true for the directory's full path. Restart by constructing a
/// new walk over the same root; walking never mutates the tree.
pub struct OrderedTraversal<'a> {
    stack: Vec<Pending<'a>>,
    /// Full paths of yielded directories, indexed by `Pending::parent`.
    /// Slot 0 is the walk root.
    paths: Vec<String>,
    last_path: String,
    descend: Box<dyn Fn(&str) -> bool + 'a>,
}

impl<'a> OrderedTraversal<'a> {
    /// Walk every node below `root`.
    pub fn new(root: &'a DirectoryNode) -> Self {
        Self::with_filter(root, |_| true)
    }

    /// Walk below `root`, descending only into directories accepted by `descend`.
    pub fn with_filter<F>(root: &'a DirectoryNode, descend: F) -> Self
    where
        F: Fn(&str) -> bool + 'a,
    {
        let mut walk = Self {
            stack: Vec::new(),
            paths: vec![String::new()],
            last_path: String::new(),
            descend: Box::new(descend),
        };
        walk.push_children(root, 0, 0);
        walk
    }

    /// Full slash path of the entry most recently returned by `next`.
    pub fn current_path(&self) -> &str {
        &self.last_path
    }

    fn push_children(&mut self, dir: &'a DirectoryNode, parent: usize, depth: usize) {
        for (name, node) in render_order(dir).into_iter().rev() {
            self.stack.push(Pending {
                parent,
                entry: WalkEntry { name, node, depth },
            });
        }
    }
}

impl<'a> Iterator for OrderedTraversal<'a> {
    type Item = WalkEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let Pending { parent, entry } = self.stack.pop()?;
        let path = join(&self.paths[parent], entry.name);

        if let TreeNode::Directory(dir) = entry.node {
            if (self.descend)(&path) {
                self.paths.push(path.clone());
                let slot = self.paths.len() - 1;
                self.push_children(dir, slot, entry.depth + 1);
            }
        }

        self.last_path = path;
        Some(entry)
    }
}

/// Full paths of every file in display order.
pub fn file_paths(root: &DirectoryNode) -> Vec<String> {
    let mut walk = OrderedTraversal::new(root);
    let mut out = Vec::new();
    while let Some(entry) = walk.next() {
        if entry.node.is_file() {
            out.push(walk.current_path().to_string());
        }
    }
    out
}

/// Full paths of every directory in display order.
pub fn directory_paths(root: &DirectoryNode) -> Vec<String> {
    let mut walk = OrderedTraversal::new(root);
    let mut out = Vec::new();
    while let Some(entry) = walk.next() {
        if entry.node.is_directory() {
            out.push(walk.current_path().to_string());
        }
    }
    out
}

fn find_node<'a>(root: &'a DirectoryNode, path: &str) -> Option<&'a TreeNode> {
    let segments = split_segments(path).ok()?;
    let (leaf, parents) = segments.split_last()?;
    let mut current = root;
    for segment in parents {
        current = current.child(segment)?.as_directory()?;
    }
    current.child(leaf)
}

/// Look up a directory by full path; the empty path names the root.
pub fn find_directory<'a>(root: &'a DirectoryNode, path: &str) -> Option<&'a DirectoryNode> {
    if path.trim_matches('/').is_empty() {
        return Some(root);
    }
    find_node(root, path)?.as_directory()
}

/// Look up a file record by full path.
pub fn find_file<'a>(root: &'a DirectoryNode, path: &str) -> Option<&'a FileRecord> {
    find_node(root, path)?.as_file()
}
