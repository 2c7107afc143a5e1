use super::types::{ArtistSummary, CreditedArtist, Page, Release, Track};
use super::Catalog;
use crate::config::SpotifyConfig;
use crate::error::{CatalogError, SearchError};
use crate::node::NodeId;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

const PAGE_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
struct Paging<T> {
    items: Vec<T>,
    next: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    artists: Paging<ArtistDto>,
}

#[derive(Debug, Default, Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Followers {
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ArtistDto {
    id: String,
    name: String,
    #[serde(default)]
    external_urls: ExternalUrls,
    popularity: Option<u32>,
    #[serde(default)]
    genres: Vec<String>,
    followers: Option<Followers>,
}

#[derive(Debug, Deserialize)]
struct AlbumDto {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct SimpleArtistDto {
    // Local files carry credits without ids
    id: Option<String>,
    name: String,
    #[serde(default)]
    external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
struct TrackDto {
    name: String,
    #[serde(default)]
    artists: Vec<SimpleArtistDto>,
}

/// Spotify Web API catalog. Authentication is out of scope: the client is
/// handed a bearer token that was issued elsewhere.
#[derive(Clone)]
pub struct SpotifyCatalog {
    client: Client,
    base_url: String,
    access_token: String,
    market: String,
}

impl SpotifyCatalog {
    pub fn new(config: &SpotifyConfig, request_timeout: Duration) -> Result<Self, SearchError> {
        let access_token = config.access_token.clone().ok_or_else(|| SearchError::Config {
            message: "SPOTIFY_ACCESS_TOKEN must be set to query the catalog".to_string(),
        })?;

        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| SearchError::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            access_token,
            market: config.market.clone(),
        })
    }

    pub fn with_base_url(access_token: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
            market: "US".to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        self.get_optional_json(url)
            .await?
            .ok_or_else(|| CatalogError::Status {
                status: StatusCode::NOT_FOUND.as_u16(),
                url: url.to_string(),
            })
    }

    async fn get_optional_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Option<T>, CatalogError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let response_text = response.text().await?;
        Ok(Some(serde_json::from_str(&response_text)?))
    }

    /// Fetches the page at `cursor`, or at `first_page_url` when there is none.
    async fn get_page<T: DeserializeOwned>(
        &self,
        first_page_url: impl FnOnce() -> String,
        cursor: Option<String>,
    ) -> Result<Paging<T>, CatalogError> {
        let url = cursor.unwrap_or_else(first_page_url);
        self.get_json(&url).await
    }
}

#[async_trait]
impl Catalog for SpotifyCatalog {
    async fn search_artists(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ArtistSummary>, CatalogError> {
        let url = format!(
            "{}/search?q={}&type=artist&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        let response: SearchResponse = self.get_json(&url).await?;
        Ok(response
            .artists
            .items
            .into_iter()
            .map(convert_artist)
            .collect())
    }

    async fn list_releases(
        &self,
        artist_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Release>, CatalogError> {
        let first_page_url = || {
            format!(
                "{}/artists/{}/albums?include_groups=album,single&market={}&limit={}",
                self.base_url, artist_id, self.market, PAGE_LIMIT
            )
        };

        let page: Paging<AlbumDto> = self.get_page(first_page_url, cursor).await?;
        Ok(Page {
            items: page
                .items
                .into_iter()
                .map(|album| Release {
                    id: album.id,
                    name: album.name,
                })
                .collect(),
            next: page.next,
        })
    }

    async fn list_tracks(
        &self,
        release_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<Track>, CatalogError> {
        let first_page_url = || {
            format!(
                "{}/albums/{}/tracks?limit={}",
                self.base_url, release_id, PAGE_LIMIT
            )
        };

        let page: Paging<TrackDto> = self.get_page(first_page_url, cursor).await?;
        Ok(Page {
            items: page.items.into_iter().map(convert_track).collect(),
            next: page.next,
        })
    }

    async fn artist(&self, artist_id: &str) -> Result<Option<ArtistSummary>, CatalogError> {
        let url = format!("{}/artists/{}", self.base_url, artist_id);
        let artist: Option<ArtistDto> = self.get_optional_json(&url).await?;
        Ok(artist.map(convert_artist))
    }
}

fn artist_node(id: &str, urls: ExternalUrls) -> NodeId {
    urls.spotify
        .map(NodeId::new)
        .unwrap_or_else(|| NodeId::from_catalog_id(id))
}

fn convert_artist(artist: ArtistDto) -> ArtistSummary {
    ArtistSummary {
        node: artist_node(&artist.id, artist.external_urls),
        id: artist.id,
        name: artist.name,
        popularity: artist.popularity.unwrap_or(0),
        genres: artist.genres,
        followers: artist.followers.and_then(|f| f.total).unwrap_or(0),
    }
}

fn convert_track(track: TrackDto) -> Track {
    let artists = track
        .artists
        .into_iter()
        .filter_map(|artist| {
            let id = artist.id?;
            Some(CreditedArtist {
                node: artist_node(&id, artist.external_urls),
                id,
                name: artist.name,
            })
        })
        .collect();

    Track {
        name: track.name,
        artists,
    }
}
