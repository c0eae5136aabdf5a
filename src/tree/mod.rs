//! File tree materialization and ordering.

pub mod builder;
pub mod collation;
pub mod node;
pub mod path;
pub mod traversal;

pub use builder::{build_tree, TreeBuilder, DEFAULT_MAX_DEPTH};
pub use node::{DirectoryNode, FileNode, TreeNode};
pub use traversal::{render_order, OrderedTraversal, WalkEntry};
