use async_trait::async_trait;
use reqwest::Client;

use crate::{
    config,
    error::RelayError,
    management::TokenCache,
    search::{MAX_RESULTS, SearchResult, TrackSearch},
    types::SearchResponse,
    warning,
};

/// Spotify application credentials for the client-credentials flow.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads `SPOTIFY_API_AUTH_CLIENT_ID` and `SPOTIFY_API_AUTH_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, RelayError> {
        Ok(Self::new(
            config::spotify_client_id()?,
            config::spotify_client_secret()?,
        ))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Spotify Web API search client.
///
/// Holds the single token cache of the process. Genre lookups use Spotify's
/// `genre:` field filter on a track search, the same request shape as the
/// artist lookup.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    credentials: Credentials,
    tokens: TokenCache,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: impl Into<String>, credentials: Credentials, tokens: TokenCache) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            credentials,
            tokens,
        }
    }

    /// Builds a client from the environment, with a bounded request timeout.
    pub fn from_env() -> Result<Self, RelayError> {
        let http = config::http_client(config::http_timeout())?;
        let tokens = TokenCache::new(http.clone(), config::spotify_apitoken_url());
        Ok(Self::new(
            http,
            config::spotify_apiurl(),
            Credentials::from_env()?,
            tokens,
        ))
    }

    pub fn tokens(&self) -> &TokenCache {
        &self.tokens
    }

    /// Runs a track search for `query` and flattens the hits.
    ///
    /// Error statuses and bodies without `tracks.items` give an empty result;
    /// only authentication and transport failures are returned as errors.
    async fn search_tracks(&self, query: &str) -> Result<SearchResult, RelayError> {
        let token = self
            .tokens
            .get_valid_token(&self.credentials.client_id, &self.credentials.client_secret)
            .await?;

        let api_url = format!("{uri}/search", uri = self.api_url);
        let limit = MAX_RESULTS.to_string();
        let response = self
            .http
            .get(&api_url)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .bearer_auth(&token.value)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warning!("Spotify search for {} answered {}", query, status);
            return Ok(SearchResult::empty());
        }

        let body = response.text().await?;
        Ok(parse_search_body(&body))
    }
}

/// Extracts `"<track> - <artist>"` lines from a search response body.
///
/// Anything that does not decode as a search response counts as no hits.
pub fn parse_search_body(body: &str) -> SearchResult {
    let parsed: SearchResponse = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            warning!("Unexpected Spotify search response: {}", e);
            return SearchResult::empty();
        }
    };

    let Some(page) = parsed.tracks else {
        return SearchResult::empty();
    };

    page.items
        .iter()
        .flatten()
        .filter_map(|track| track.display_line())
        .take(MAX_RESULTS)
        .collect::<Vec<_>>()
        .into()
}

pub fn artist_query(artist: &str) -> String {
    format!("artist:\"{}\"", artist)
}

pub fn genre_query(genre: &str) -> String {
    format!("genre:\"{}\"", genre)
}

#[async_trait]
impl TrackSearch for SpotifyClient {
    async fn search_by_artist(&self, artist: &str) -> Result<SearchResult, RelayError> {
        self.search_tracks(&artist_query(artist)).await
    }

    async fn search_by_genre(&self, genre: &str) -> Result<SearchResult, RelayError> {
        self.search_tracks(&genre_query(genre)).await
    }
}
