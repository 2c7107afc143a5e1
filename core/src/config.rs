//! Runtime configuration, read from the environment (and `.env`).

use crate::client::{ExponentialBackoff, FixedDelay, Jittered, RetryPolicy};
use crate::error::{Result, SearchError};
use std::{path::PathBuf, str::FromStr, time::Duration};

pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1";
pub const DEFAULT_MARKET: &str = "US";
pub const DEFAULT_CACHE_FILE: &str = "adjacency_list.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackoffKind {
    #[default]
    Fixed,
    Exponential,
    Jittered,
}

impl FromStr for BackoffKind {
    type Err = SearchError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(BackoffKind::Fixed),
            "exponential" => Ok(BackoffKind::Exponential),
            "jittered" => Ok(BackoffKind::Jittered),
            other => Err(SearchError::Config {
                message: format!("unknown retry backoff '{other}'"),
            }),
        }
    }
}

/// Pacing and retry settings for [`RateLimitedClient`](crate::client::RateLimitedClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Minimum spacing between two catalog calls
    pub rate_limit_delay: Duration,
    /// Total attempts per call, including the first
    pub max_retries: u32,
    /// Base delay between attempts
    pub retry_delay: Duration,
    pub backoff: BackoffKind,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn retry_policy(&self) -> Box<dyn RetryPolicy> {
        match self.backoff {
            BackoffKind::Fixed => Box::new(FixedDelay(self.retry_delay)),
            BackoffKind::Exponential => Box::new(ExponentialBackoff::new(self.retry_delay)),
            BackoffKind::Jittered => Box::new(Jittered(FixedDelay(self.retry_delay))),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rate_limit_delay: Duration::from_millis(333),
            max_retries: 3,
            retry_delay: Duration::from_secs(10),
            backoff: BackoffKind::Fixed,
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    /// Bearer token issued out of band
    pub access_token: Option<String>,
    pub api_base: String,
    pub market: String,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            api_base: DEFAULT_API_BASE.to_string(),
            market: DEFAULT_MARKET.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub cache_path: PathBuf,
    pub client: ClientConfig,
    pub spotify: SpotifyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_path: default_cache_path(),
            client: ClientConfig::default(),
            spotify: SpotifyConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // A missing .env file is the normal case
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let cache_path = lookup("CSV_FILE")
            .map(PathBuf::from)
            .unwrap_or(defaults.cache_path);

        let client = ClientConfig {
            rate_limit_delay: parse_seconds(&lookup, "RATE_LIMIT_DELAY")?
                .unwrap_or(defaults.client.rate_limit_delay),
            max_retries: parse_value(&lookup, "MAX_RETRIES")?
                .unwrap_or(defaults.client.max_retries),
            retry_delay: parse_seconds(&lookup, "RETRY_DELAY")?
                .unwrap_or(defaults.client.retry_delay),
            backoff: parse_value(&lookup, "RETRY_BACKOFF")?.unwrap_or(defaults.client.backoff),
            request_timeout: parse_seconds(&lookup, "REQUEST_TIMEOUT")?
                .unwrap_or(defaults.client.request_timeout),
        };

        let spotify = SpotifyConfig {
            access_token: lookup("SPOTIFY_ACCESS_TOKEN").filter(|token| !token.trim().is_empty()),
            api_base: lookup("SPOTIFY_API_BASE").unwrap_or(defaults.spotify.api_base),
            market: lookup("SPOTIFY_MARKET").unwrap_or(defaults.spotify.market),
        };

        Ok(Self {
            cache_path,
            client,
            spotify,
        })
    }
}

pub fn default_cache_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".collabpath").join(DEFAULT_CACHE_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_FILE))
}

fn parse_value<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>> {
    lookup(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|_| SearchError::Config {
                message: format!("invalid value for {key}: '{raw}'"),
            })
        })
        .transpose()
}

fn parse_seconds(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<Duration>> {
    let seconds: Option<f64> = parse_value(lookup, key)?;
    seconds
        .map(|value| {
            Duration::try_from_secs_f64(value).map_err(|_| SearchError::Config {
                message: format!("invalid duration for {key}: {value}"),
            })
        })
        .transpose()
}
