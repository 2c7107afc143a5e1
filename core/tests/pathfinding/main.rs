#[path = "../common/mod.rs"]
mod common;

mod dfs;

use collabpath_core::{
    Algorithm, GraphExpander, NodeId, PathFinder, ProgressTracker, SearchError, SearchPhase,
    TraversalOutcome,
};
use common::{FakeCatalog, fast_client, node, seed_cache, temp_cache};
use std::sync::Arc;

/// What one traversal produced, plus everything it reported along the way.
pub struct Run {
    pub outcome: Result<TraversalOutcome, SearchError>,
    pub phase: SearchPhase,
    pub progress: Vec<(u8, String)>,
}

/// Runs a traversal over a cache seeded with `edges`, using `catalog` for
/// anything the cache does not hold.
pub async fn traverse(
    algorithm: Algorithm,
    catalog: Arc<FakeCatalog>,
    edges: &[(&str, &[&str])],
    start: &str,
    target: &str,
) -> Run {
    let (_dir, cache) = temp_cache();
    seed_cache(&cache, edges).await;
    let mut expander = GraphExpander::load(fast_client(catalog), cache).await;

    let mut progress = Vec::new();
    let mut sink = |percent: u8, message: &str| progress.push((percent, message.to_string()));
    let mut tracker = ProgressTracker::new(&mut sink);

    let mut finder = PathFinder::new(&mut expander);
    let outcome = finder
        .find(algorithm, &node(start), &node(target), &mut tracker)
        .await;
    let phase = finder.phase();
    drop(tracker);

    Run {
        outcome,
        phase,
        progress,
    }
}

pub fn path_ids(outcome: &TraversalOutcome) -> Vec<&str> {
    outcome
        .path()
        .unwrap_or_default()
        .iter()
        .map(NodeId::catalog_id)
        .collect()
}

#[tokio::test]
async fn test_progress_is_monotonic_and_ends_at_100() {
    // A chain long enough to cross several reporting intervals
    let ids: Vec<String> = (0..30).map(|i| format!("n{i:02}")).collect();
    let pairs: Vec<(&str, &str)> = ids
        .windows(2)
        .map(|pair| (pair[0].as_str(), pair[1].as_str()))
        .collect();
    let catalog = Arc::new(FakeCatalog::new().with_collaborations(&pairs));

    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let run = traverse(algorithm, catalog.clone(), &[], "n00", "n29").await;

        let outcome = run.outcome.unwrap();
        assert_eq!(outcome.degrees(), Some(29));

        let percents: Vec<u8> = run.progress.iter().map(|(percent, _)| *percent).collect();
        assert!(percents.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(percents.iter().filter(|&&percent| percent == 100).count(), 1);
        assert_eq!(run.progress.last().unwrap(), &(100, "Connection found!".to_string()));
        assert!(run.progress.iter().any(|(_, message)| message == "Searched 20 artists..."));
    }
}

#[tokio::test]
async fn test_remote_failure_fails_the_search() {
    let catalog = Arc::new(FakeCatalog::new().with_collaborations(&[("a", "b"), ("b", "c")]));
    catalog.fail_releases_for("b");

    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let run = traverse(algorithm, catalog.clone(), &[], "a", "c").await;

        assert!(matches!(
            run.outcome,
            Err(SearchError::RemoteUnavailable { .. })
        ));
        assert_eq!(run.phase, SearchPhase::Failed);
        let (percent, message) = run.progress.last().unwrap();
        assert_eq!(*percent, 100);
        assert!(message.starts_with("Search failed:"));
    }
}

#[tokio::test]
async fn test_failed_node_is_not_persisted() {
    let catalog = Arc::new(FakeCatalog::new().with_collaborations(&[("a", "b"), ("b", "c")]));
    catalog.fail_releases_for("b");
    let (_dir, cache) = temp_cache();
    let mut expander = GraphExpander::load(fast_client(catalog), cache.clone()).await;

    let mut sink = collabpath_core::NoProgress;
    let mut tracker = ProgressTracker::new(&mut sink);
    let result = PathFinder::new(&mut expander)
        .find(Algorithm::Bfs, &node("a"), &node("c"), &mut tracker)
        .await;

    assert!(result.is_err());
    let stored = cache.load_all().await;
    assert!(stored.contains_key(&node("a")));
    assert!(!stored.contains_key(&node("b")));
}

#[tokio::test]
async fn test_self_search_is_zero_degrees_without_expansion() {
    let catalog = Arc::new(FakeCatalog::new().with_collaborations(&[("a", "b")]));

    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let run = traverse(algorithm, catalog.clone(), &[], "a", "a").await;

        let outcome = run.outcome.unwrap();
        assert_eq!(path_ids(&outcome), vec!["a"]);
        assert_eq!(outcome.degrees(), Some(0));
        assert_eq!(outcome.nodes_expanded(), 0);
        assert_eq!(run.phase, SearchPhase::Found);
    }
    assert_eq!(catalog.remote_calls(), 0);
}

#[tokio::test]
async fn test_disconnected_target_exhausts() {
    let catalog = Arc::new(FakeCatalog::new());
    let edges: &[(&str, &[&str])] = &[("a", &["b"]), ("b", &["a"]), ("z", &[])];

    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let run = traverse(algorithm, catalog.clone(), edges, "a", "z").await;

        let outcome = run.outcome.unwrap();
        assert_eq!(outcome, TraversalOutcome::Exhausted { nodes_expanded: 2 });
        assert_eq!(outcome.degrees(), None);
        assert_eq!(run.phase, SearchPhase::Exhausted);
        assert_eq!(
            run.progress.last().unwrap(),
            &(100, "No connection found".to_string())
        );
    }
    assert_eq!(catalog.remote_calls(), 0);
}
