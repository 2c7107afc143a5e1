#[path = "../common/mod.rs"]
mod common;

use collabpath_core::{AdjacencyCache, GraphExpander, SearchError};
use common::{FakeCatalog, fast_client, node, nodes, seed_cache, temp_cache};
use std::sync::Arc;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_cache_hit_makes_no_remote_calls() {
    let catalog = Arc::new(FakeCatalog::new().with_collaborations(&[("a", "b")]));
    let (_dir, cache) = temp_cache();
    seed_cache(&cache, &[("a", &["x", "y"])]).await;

    let mut expander = GraphExpander::load(fast_client(catalog.clone()), cache).await;
    let neighbors = expander.neighbors_of(&node("a")).await.unwrap();

    // The cached set is authoritative even though the catalog disagrees
    assert_eq!(neighbors, nodes(&["x", "y"]));
    assert_eq!(catalog.remote_calls(), 0);
    assert_eq!(expander.remote_expansions(), 0);
}

#[tokio::test]
async fn test_miss_collects_distinct_co_credited_artists() {
    let catalog = Arc::new(
        FakeCatalog::new()
            .with_artist("a", "Alpha")
            .with_track("a", &["b"])
            .with_track("a", &["b", "c"])
            .with_track("a", &[])
            .with_track("a", &["a", "d"]),
    );
    let (_dir, cache) = temp_cache();

    let mut expander = GraphExpander::load(fast_client(catalog.clone()), cache.clone()).await;
    let neighbors = expander.neighbors_of(&node("a")).await.unwrap();

    assert_eq!(neighbors, nodes(&["b", "c", "d"]));
    assert_eq!(expander.remote_expansions(), 1);
    // One release listing plus two track pages; "d" only appears on the second
    assert_eq!(catalog.release_calls.load(Ordering::SeqCst), 1);
    assert_eq!(catalog.track_calls.load(Ordering::SeqCst), 2);

    let stored = cache.load_all().await;
    assert_eq!(stored[&node("a")], nodes(&["b", "c", "d"]));
}

#[tokio::test]
async fn test_expansion_is_memoized_across_calls_and_expanders() {
    let catalog = Arc::new(FakeCatalog::new().with_collaborations(&[("a", "b"), ("a", "c")]));
    let (_dir, cache) = temp_cache();
    let client = fast_client(catalog.clone());

    let mut first = GraphExpander::load(client.clone(), cache.clone()).await;
    let expected = first.neighbors_of(&node("a")).await.unwrap();
    let calls_after_first = catalog.expansion_calls();

    assert_eq!(first.neighbors_of(&node("a")).await.unwrap(), expected);
    assert_eq!(catalog.expansion_calls(), calls_after_first);

    let mut second = GraphExpander::load(client, cache).await;
    assert!(second.is_cached(&node("a")));
    assert_eq!(second.neighbors_of(&node("a")).await.unwrap(), expected);
    assert_eq!(catalog.expansion_calls(), calls_after_first);
}

#[tokio::test]
async fn test_artist_without_collaborations_is_cached_as_leaf() {
    let catalog = Arc::new(FakeCatalog::new().with_artist("solo", "Solo").with_track("solo", &[]));
    let (_dir, cache) = temp_cache();

    let mut expander = GraphExpander::load(fast_client(catalog.clone()), cache.clone()).await;
    assert!(expander.neighbors_of(&node("solo")).await.unwrap().is_empty());
    let calls = catalog.expansion_calls();

    let mut later = GraphExpander::load(fast_client(catalog.clone()), cache.clone()).await;
    assert!(later.neighbors_of(&node("solo")).await.unwrap().is_empty());
    assert_eq!(catalog.expansion_calls(), calls);
    assert!(cache.load_all().await.contains_key(&node("solo")));
}

#[tokio::test]
async fn test_failed_expansion_persists_nothing() {
    let catalog = Arc::new(FakeCatalog::new().with_collaborations(&[("a", "b")]));
    catalog.fail_releases_for("a");
    let (_dir, cache) = temp_cache();

    let mut expander = GraphExpander::load(fast_client(catalog.clone()), cache.clone()).await;
    let result = expander.neighbors_of(&node("a")).await;

    assert!(matches!(result, Err(SearchError::RemoteUnavailable { attempts: 2, .. })));
    assert!(!expander.is_cached(&node("a")));
    assert!(cache.load_all().await.is_empty());
}

#[tokio::test]
async fn test_persist_failure_is_a_warning_not_an_error() {
    let catalog = Arc::new(FakeCatalog::new().with_collaborations(&[("a", "b")]));
    let dir = tempfile::TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"").unwrap();
    let cache = Arc::new(AdjacencyCache::new(blocker.join("adjacency_list.csv")));

    let mut expander = GraphExpander::load(fast_client(catalog), cache).await;
    let neighbors = expander.neighbors_of(&node("a")).await.unwrap();

    assert_eq!(neighbors, nodes(&["b"]));
    assert!(expander.is_cached(&node("a")));
    assert_eq!(expander.take_warnings().len(), 1);
    assert!(expander.take_warnings().is_empty());
}

#[tokio::test]
async fn test_entry_written_by_another_search_wins() {
    let catalog = Arc::new(FakeCatalog::new().with_collaborations(&[("a", "b")]));
    let (_dir, cache) = temp_cache();

    let mut expander = GraphExpander::load(fast_client(catalog), cache.clone()).await;
    // Another search stores "a" after this expander loaded its snapshot
    seed_cache(&cache, &[("a", &["z"])]).await;

    let neighbors = expander.neighbors_of(&node("a")).await.unwrap();

    assert_eq!(neighbors, nodes(&["z"]));
    assert_eq!(cache.load_all().await[&node("a")], nodes(&["z"]));
}
