//! # Spotify Integration Module
//!
//! Client for the two Spotify endpoints trackrelay needs:
//!
//! - `POST /api/token` - client-credentials exchange, wrapped by
//!   [`crate::management::TokenCache`]
//! - `GET /v1/search` - track search by `artist:` or `genre:` field filter
//!
//! ## Error Handling
//!
//! Search is deliberately forgiving. A non-2xx status or a body without the
//! expected `tracks.items[].name` / `tracks.items[].artists[0].name` fields
//! yields an empty [`crate::search::SearchResult`]. Only a rejected credential
//! exchange and transport failures (including the configured timeout) surface
//! as [`crate::RelayError`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trackrelay::{search::TrackSearch, spotify::SpotifyClient};
//!
//! let client = SpotifyClient::from_env()?;
//! let tracks = client.search_by_artist("Coldplay").await?;
//! for line in tracks.iter() {
//!     println!("{}", line);
//! }
//! ```

mod search;

pub use search::Credentials;
pub use search::SpotifyClient;
pub use search::artist_query;
pub use search::genre_query;
pub use search::parse_search_body;
