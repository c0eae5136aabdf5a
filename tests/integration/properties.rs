use commitly::expansion::ExpansionState;
use commitly::tree::build_tree;
use commitly::tree::traversal::file_paths;
use commitly::types::FileRecord;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Paths of 1..4 lowercase segments. Files get a `.txt` suffix and
/// directories never do, so no path can be both.
fn path_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[a-z]{1,3}", 0..3),
        "[a-z]{1,3}",
    )
        .prop_map(|(dirs, file)| {
            let mut segments = dirs;
            segments.push(format!("{}.txt", file));
            segments.join("/")
        })
}

proptest! {
    #[test]
    fn prop_build_then_walk_round_trips(paths in prop::collection::btree_set(path_strategy(), 0..40)) {
        let records: Vec<FileRecord> = paths.iter().map(|p| FileRecord::new(p.as_str(), "")).collect();
        let root = build_tree(&records).unwrap();

        let walked = file_paths(&root);
        prop_assert_eq!(walked.len(), paths.len());
        let walked: BTreeSet<String> = walked.into_iter().collect();
        prop_assert_eq!(walked, paths);
    }

    #[test]
    fn prop_walk_is_restartable(paths in prop::collection::btree_set(path_strategy(), 1..20)) {
        let records: Vec<FileRecord> = paths.iter().map(|p| FileRecord::new(p.as_str(), "")).collect();
        let root = build_tree(&records).unwrap();
        prop_assert_eq!(file_paths(&root), file_paths(&root));
    }

    #[test]
    fn prop_toggle_pair_is_identity(
        initial in prop::collection::hash_set("[a-z/]{1,8}", 0..10),
        path in "[a-z/]{1,8}",
    ) {
        let mut state: ExpansionState = initial.iter().cloned().collect();
        let before = state.is_expanded(&path);
        state.toggle(&path);
        prop_assert_ne!(state.is_expanded(&path), before);
        state.toggle(&path);
        prop_assert_eq!(state.is_expanded(&path), before);
        prop_assert_eq!(state.len(), initial.len());
    }
}
