//! Search client for a running relay service.
//!
//! Lets the bot process answer commands without holding Spotify credentials:
//! it calls `GET /tracks/artist/{artist}` and `GET /tracks/genre/{genre}` on the
//! relay and decodes the JSON array of track lines.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use crate::{
    config,
    error::RelayError,
    search::{SearchResult, TrackSearch},
    warning,
};

/// `TrackSearch` backed by the relay's `/tracks` routes.
///
/// A 404 means the relay found nothing and becomes an empty result; a 5xx means
/// the relay's own search failed and is returned as `RelayError::Upstream`.
pub struct RelayClient {
    http: Client,
    base_url: Url,
}

impl RelayClient {
    /// Creates a relay client.
    ///
    /// # Arguments
    ///
    /// * `http` - Client used for every request
    /// * `base_url` - Root of the relay, e.g. `http://127.0.0.1:7089/`
    ///
    /// # Returns
    ///
    /// `RelayError::InvalidUrl` when `base_url` does not parse or cannot hold a path.
    pub fn new(http: Client, base_url: &str) -> Result<Self, RelayError> {
        let base_url =
            Url::parse(base_url).map_err(|e| RelayError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(RelayError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    /// Builds a client for `base_url` with the configured request timeout.
    pub fn from_base_url(base_url: &str) -> Result<Self, RelayError> {
        Self::new(config::http_client(config::http_timeout())?, base_url)
    }

    /// `{base}/tracks/{kind}/{value}` with `value` percent-encoded as one segment.
    pub fn tracks_url(&self, kind: &str, value: &str) -> Result<Url, RelayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RelayError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["tracks", kind, value]);
        Ok(url)
    }

    async fn fetch(&self, kind: &str, value: &str) -> Result<SearchResult, RelayError> {
        let url = self.tracks_url(kind, value)?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(SearchResult::empty());
        }
        if status.is_server_error() {
            return Err(RelayError::Upstream { status });
        }
        if !status.is_success() {
            warning!("Relay answered {} for {} {}", status, kind, value);
            return Ok(SearchResult::empty());
        }

        let body = response.text().await?;
        match serde_json::from_str::<Vec<String>>(&body) {
            Ok(tracks) => Ok(SearchResult::from_tracks(tracks)),
            Err(e) => {
                warning!("Unexpected relay response for {} {}: {}", kind, value, e);
                Ok(SearchResult::empty())
            }
        }
    }
}

#[async_trait]
impl TrackSearch for RelayClient {
    async fn search_by_artist(&self, artist: &str) -> Result<SearchResult, RelayError> {
        self.fetch("artist", artist).await
    }

    async fn search_by_genre(&self, genre: &str) -> Result<SearchResult, RelayError> {
        self.fetch("genre", genre).await
    }
}
