use collabpath_core::{
    AdjacencyCache, Config, RateLimitedClient, SearchError, SearchOrchestrator, SpotifyCatalog,
};
use std::sync::Arc;

/// Everything a command needs, built once from the resolved configuration.
pub struct CollabPathApp {
    pub cache: Arc<AdjacencyCache>,
    config: Config,
}

impl CollabPathApp {
    pub fn new(config: Config) -> Self {
        let cache = Arc::new(AdjacencyCache::new(config.cache_path.clone()));
        Self { cache, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the Spotify-backed orchestrator. Fails without an access token.
    pub fn orchestrator(&self) -> Result<SearchOrchestrator, SearchError> {
        let catalog = SpotifyCatalog::new(&self.config.spotify, self.config.client.request_timeout)?;
        let client = Arc::new(RateLimitedClient::new(Arc::new(catalog), &self.config.client));
        Ok(SearchOrchestrator::new(client, self.cache.clone()))
    }
}
