use commitly::error::TreeError;
use commitly::expansion::ExpansionState;
use commitly::tree::traversal::{directory_paths, file_paths, find_directory};
use commitly::tree::{build_tree, render_order, TreeBuilder, TreeNode};
use commitly::views::TreeView;

use crate::integration::support::records;

fn kinds<'a>(entries: &[(&'a str, &TreeNode)]) -> Vec<(&'a str, bool)> {
    entries
        .iter()
        .map(|(name, node)| (*name, node.is_directory()))
        .collect()
}

#[test]
fn test_directories_before_files_then_by_name() {
    let root = build_tree(&records(&["a/b.txt", "a/c.txt", "d.txt"])).unwrap();

    assert_eq!(kinds(&render_order(&root)), vec![("a", true), ("d.txt", false)]);

    let a = find_directory(&root, "a").unwrap();
    assert_eq!(
        kinds(&render_order(a)),
        vec![("b.txt", false), ("c.txt", false)]
    );
}

#[test]
fn test_build_is_independent_of_input_order() {
    let forward = records(&["src/main.rs", "src/lib/mod.rs", "Cargo.toml", "docs/a.md"]);
    let mut reversed = forward.clone();
    reversed.reverse();

    let a = build_tree(&forward).unwrap();
    let b = build_tree(&reversed).unwrap();
    assert_eq!(file_paths(&a), file_paths(&b));
    assert_eq!(directory_paths(&a), directory_paths(&b));
}

#[test]
fn test_full_walk_lists_every_file_once() {
    let input = records(&["z.txt", "a/b/c.txt", "a/b/d.txt", "a/e.txt", "B.txt"]);
    let root = build_tree(&input).unwrap();
    assert_eq!(
        file_paths(&root),
        vec!["a/b/c.txt", "a/b/d.txt", "a/e.txt", "B.txt", "z.txt"]
    );
    assert_eq!(root.file_count(), 5);
}

#[test]
fn test_file_directory_collision_is_rejected() {
    let result = build_tree(&records(&["x", "x/y.txt"]));
    assert!(matches!(result, Err(TreeError::Conflict { .. })));

    let result = build_tree(&records(&["x/y.txt", "x"]));
    assert!(matches!(result, Err(TreeError::Conflict { .. })));
}

#[test]
fn test_leading_and_trailing_slashes_are_dropped() {
    let root = build_tree(&records(&["/docs//guide.md/"])).unwrap();
    assert_eq!(file_paths(&root), vec!["docs/guide.md"]);
}

#[test]
fn test_depth_cap_applies() {
    let builder = TreeBuilder::with_max_depth(3);
    assert!(builder.build(&records(&["a/b/c"])).is_ok());
    assert!(matches!(
        builder.build(&records(&["a/b/c/d"])),
        Err(TreeError::DepthExceeded { max_depth: 3, .. })
    ));
}

#[test]
fn test_expansion_survives_rebuild() {
    let mut expansion = ExpansionState::new();
    expansion.toggle("a");

    let first = build_tree(&records(&["a/b.txt", "d.txt"])).unwrap();
    let rows: Vec<String> = TreeView::project(&first, &expansion)
        .rows
        .iter()
        .map(|r| r.path().to_string())
        .collect();
    assert_eq!(rows, vec!["a", "a/b.txt", "d.txt"]);

    // "a" is gone; its expansion entry stays but has no effect.
    let second = build_tree(&records(&["d.txt", "e.txt"])).unwrap();
    let rows: Vec<String> = TreeView::project(&second, &expansion)
        .rows
        .iter()
        .map(|r| r.path().to_string())
        .collect();
    assert_eq!(rows, vec!["d.txt", "e.txt"]);
    assert!(expansion.is_expanded("a"));

    let third = build_tree(&records(&["a/x.txt"])).unwrap();
    let view = TreeView::project(&third, &expansion);
    assert_eq!(view.rows.len(), 2);
}
