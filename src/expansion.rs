//! Expansion State
//!
//! Tracks which directory paths are expanded in one repository's file tree.
//! Entries survive tree rebuilds; a path missing from the new tree is inert
//! until it reappears.

use std::collections::HashSet;

/// Set of expanded directory paths, keyed by full slash path from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    pub(crate) expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        ExpansionState {
            expanded: HashSet::new(),
        }
    }

    /// Flip membership of `path`. Returns whether it is expanded afterwards.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.to_string());
            true
        }
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    pub fn expand(&mut self, path: &str) {
        self.expanded.insert(path.to_string());
    }

    pub fn collapse(&mut self, path: &str) {
        self.expanded.remove(path);
    }

    /// Forget everything, e.g. before reusing the store for another repository.
    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expanded paths in no particular order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExpansionState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ExpansionState {
            expanded: iter.into_iter().map(Into::into).collect(),
        }
    }
}
