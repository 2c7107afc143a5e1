pub mod spotify;
pub mod types;

use crate::error::CatalogError;
use async_trait::async_trait;

pub use spotify::SpotifyCatalog;
pub use types::{ArtistSummary, CreditedArtist, Page, Release, Track};

/// The external music catalog the collaboration graph is discovered from.
///
/// Implementations make exactly one HTTP request per method call. Listings are
/// paged: `cursor` is `None` for the first page and otherwise the `next` value
/// of the previous page. Pacing, retries and walking the pages belong to
/// [`RateLimitedClient`](crate::client::RateLimitedClient).
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Artists matching a free-text name, best match first.
    async fn search_artists(&self, query: &str, limit: usize)
    -> Result<Vec<ArtistSummary>, CatalogError>;

    /// One page of the albums and singles credited to the artist.
    async fn list_releases(
        &self,
        artist_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Release>, CatalogError>;

    async fn list_tracks(
        &self,
        release_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Track>, CatalogError>;

    /// `Ok(None)` when the catalog does not know the artist.
    async fn artist(&self, artist_id: &str) -> Result<Option<ArtistSummary>, CatalogError>;
}
