use crate::common::FakeCatalog;
use crate::{path_ids, traverse};
use collabpath_core::Algorithm;
use std::sync::Arc;

#[tokio::test]
async fn test_dfs_follows_first_collaborator_down() {
    let catalog = Arc::new(FakeCatalog::new());
    let edges: &[(&str, &[&str])] = &[("a", &["b", "c"]), ("b", &["a", "c"]), ("c", &["b", "a"])];

    let run = traverse(Algorithm::Dfs, catalog.clone(), edges, "a", "c").await;

    // A valid path, longer than the direct edge BFS would take
    let outcome = run.outcome.unwrap();
    assert_eq!(path_ids(&outcome), vec!["a", "b", "c"]);
    assert_eq!(outcome.nodes_expanded(), 2);
    assert_eq!(catalog.remote_calls(), 0);
}

#[tokio::test]
async fn test_dfs_path_follows_real_edges() {
    let catalog = Arc::new(FakeCatalog::new().with_collaborations(&[
        ("a", "b"),
        ("b", "c"),
        ("c", "d"),
        ("a", "e"),
        ("e", "d"),
    ]));

    let run = traverse(Algorithm::Dfs, catalog, &[], "a", "d").await;

    let outcome = run.outcome.unwrap();
    assert_eq!(path_ids(&outcome), vec!["a", "b", "c", "d"]);
    assert_eq!(outcome.degrees(), Some(3));
    assert!(run.progress.iter().any(|(_, message)| message == "Starting DFS search..."));
}
