use crate::catalog::{ArtistSummary, Catalog, Page, Release, Track};
use crate::config::ClientConfig;
use crate::error::{CatalogError, Result, SearchError};
use rand::Rng;
use std::{fmt, future::Future, sync::Arc, time::Duration};
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep, sleep_until};
use tracing::{debug, error, warn};

/// The catalog calls the client issues, used for logging and error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ResolveByName,
    FetchAlbums,
    FetchTracks,
    FetchNodeDetail,
    SearchSuggestions,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ResolveByName => "resolve-by-name",
            Operation::FetchAlbums => "fetch-albums",
            Operation::FetchTracks => "fetch-tracks",
            Operation::FetchNodeDetail => "fetch-node-detail",
            Operation::SearchSuggestions => "search-suggestions",
        };
        f.write_str(name)
    }
}

/// Delay to wait after a failed attempt.
pub trait RetryPolicy: Send + Sync + fmt::Debug {
    /// `failed_attempt` is 1 for the first failure.
    fn delay(&self, failed_attempt: u32) -> Duration;
}

#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl RetryPolicy for FixedDelay {
    fn delay(&self, _failed_attempt: u32) -> Duration {
        self.0
    }
}

/// Doubles the base delay after every failure, capped at `max`.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialBackoff {
    pub base: Duration,
    pub max: Duration,
}

impl ExponentialBackoff {
    pub fn new(base: Duration) -> Self {
        Self {
            base,
            max: base.saturating_mul(32),
        }
    }
}

impl RetryPolicy for ExponentialBackoff {
    fn delay(&self, failed_attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(failed_attempt.saturating_sub(1));
        self.base.saturating_mul(factor).min(self.max)
    }
}

/// Picks a random delay between half and all of the wrapped policy's delay.
#[derive(Debug, Clone, Copy)]
pub struct Jittered<P>(pub P);

impl<P: RetryPolicy> RetryPolicy for Jittered<P> {
    fn delay(&self, failed_attempt: u32) -> Duration {
        let ceiling = self.0.delay(failed_attempt);
        if ceiling.is_zero() {
            return Duration::ZERO;
        }
        ceiling.mul_f64(rand::rng().random_range(0.5..=1.0))
    }
}

/// Catalog access under a fixed request rate with bounded retries.
///
/// Pacing is local to one instance; share it through an `Arc` so concurrent
/// searches draw from the same quota.
pub struct RateLimitedClient {
    catalog: Arc<dyn Catalog>,
    min_interval: Duration,
    max_attempts: u32,
    retry_policy: Box<dyn RetryPolicy>,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimitedClient {
    pub fn new(catalog: Arc<dyn Catalog>, config: &ClientConfig) -> Self {
        Self {
            catalog,
            min_interval: config.rate_limit_delay,
            max_attempts: config.max_retries.max(1),
            retry_policy: config.retry_policy(),
            last_call: Mutex::new(None),
        }
    }

    pub fn with_retry_policy(mut self, policy: impl RetryPolicy + 'static) -> Self {
        self.retry_policy = Box::new(policy);
        self
    }

    /// Runs `request` under the pacing interval, retrying failures until the
    /// attempt budget is spent.
    pub async fn call<T, F, Fut>(&self, operation: Operation, mut request: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, CatalogError>>,
    {
        let mut attempt = 0;

        loop {
            attempt += 1;
            self.wait_for_slot().await;
            debug!(%operation, attempt, "Sending catalog request");

            match request().await {
                Ok(response) => return Ok(response),
                Err(e) if attempt < self.max_attempts => {
                    let delay = self.retry_policy.delay(attempt);
                    warn!(%operation, attempt, error = %e, "Catalog request failed, retrying in {:?}", delay);
                    sleep(delay).await;
                }
                Err(e) => {
                    error!(%operation, attempts = attempt, error = %e, "Maximum retries reached, request failed");
                    return Err(SearchError::RemoteUnavailable {
                        operation,
                        attempts: attempt,
                        message: e.to_string(),
                    });
                }
            }
        }
    }

    async fn wait_for_slot(&self) {
        // Held across the sleep so concurrent callers queue behind each other
        let mut last_call = self.last_call.lock().await;
        if let Some(previous) = *last_call {
            let next_slot = previous + self.min_interval;
            if next_slot > Instant::now() {
                sleep_until(next_slot).await;
            }
        }
        *last_call = Some(Instant::now());
    }

    pub async fn resolve_artist(&self, name: &str, candidates: usize) -> Result<Vec<ArtistSummary>> {
        let catalog = &self.catalog;
        self.call(Operation::ResolveByName, move || {
            catalog.search_artists(name, candidates)
        })
        .await
    }

    pub async fn search_artists(&self, query: &str, limit: usize) -> Result<Vec<ArtistSummary>> {
        let catalog = &self.catalog;
        self.call(Operation::SearchSuggestions, move || {
            catalog.search_artists(query, limit)
        })
        .await
    }

    /// Walks a paged listing. Every page is its own paced call with its own
    /// attempt budget, so a failure on a late page never refetches earlier ones.
    async fn collect_pages<T, F, Fut>(
        &self,
        operation: Operation,
        mut fetch_page: F,
    ) -> Result<Vec<T>>
    where
        F: FnMut(Option<String>) -> Fut,
        Fut: Future<Output = Result<Page<T>, CatalogError>>,
    {
        let mut items = Vec::new();
        let mut cursor = None;

        loop {
            let page = self.call(operation, || fetch_page(cursor.clone())).await?;
            items.extend(page.items);
            debug!(%operation, fetched = items.len(), more = page.next.is_some(), "Fetched page");

            match page.next {
                Some(next) => cursor = Some(next),
                None => return Ok(items),
            }
        }
    }

    pub async fn list_releases(&self, artist_id: &str) -> Result<Vec<Release>> {
        let catalog = &self.catalog;
        self.collect_pages(Operation::FetchAlbums, move |cursor| {
            catalog.list_releases(artist_id, cursor)
        })
        .await
    }

    pub async fn list_tracks(&self, release_id: &str) -> Result<Vec<Track>> {
        let catalog = &self.catalog;
        self.collect_pages(Operation::FetchTracks, move |cursor| {
            catalog.list_tracks(release_id, cursor)
        })
        .await
    }

    pub async fn artist(&self, artist_id: &str) -> Result<Option<ArtistSummary>> {
        let catalog = &self.catalog;
        self.call(Operation::FetchNodeDetail, move || catalog.artist(artist_id))
            .await
    }
}
