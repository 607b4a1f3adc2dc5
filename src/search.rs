//! The search seam between the chat side and whatever answers the query.
//!
//! [`TrackSearch`] is implemented by [`crate::spotify::SpotifyClient`] (talks to
//! Spotify directly) and [`crate::relay::RelayClient`] (talks to a relay service).
//! The command router and the relay HTTP handlers only see the trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// Upper bound on the number of tracks any search returns.
pub const MAX_RESULTS: usize = 5;

/// Ordered list of at most [`MAX_RESULTS`] `"<track> - <artist>"` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SearchResult {
    tracks: Vec<String>,
}

impl SearchResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Keeps the first [`MAX_RESULTS`] entries, in order.
    pub fn from_tracks(mut tracks: Vec<String>) -> Self {
        tracks.truncate(MAX_RESULTS);
        Self { tracks }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.tracks
    }
}

impl From<Vec<String>> for SearchResult {
    fn from(tracks: Vec<String>) -> Self {
        Self::from_tracks(tracks)
    }
}

impl From<SearchResult> for Vec<String> {
    fn from(result: SearchResult) -> Self {
        result.tracks
    }
}

/// Looks up top tracks by artist or genre.
///
/// An empty `Ok` result covers both "nothing matched" and "upstream answered
/// with an error status or an unexpected body". `Err` is reserved for failures
/// the user should hear about as a failed search: rejected credentials and
/// transport errors.
#[async_trait]
pub trait TrackSearch: Send + Sync {
    async fn search_by_artist(&self, artist: &str) -> Result<SearchResult, RelayError>;

    async fn search_by_genre(&self, genre: &str) -> Result<SearchResult, RelayError>;
}
