//! # API Module
//!
//! HTTP handlers of the relay service. The relay lets a bot process search
//! Spotify without holding the Spotify client credentials itself.
//!
//! ## Endpoints
//!
//! ### Search
//!
//! - [`tracks_by_artist`] - `GET /tracks/artist/{artist}`
//! - [`tracks_by_genre`] - `GET /tracks/genre/{genre}`
//!
//! Both answer `200` with a JSON array of `"<track> - <artist>"` strings (at
//! most five), `404` with a plain-text body when nothing matched, and `502`
//! when the upstream search could not be performed.
//!
//! ### Track store
//!
//! - [`create_track`], [`update_track`], [`delete_track`] - `POST /tracks`,
//!   `PUT /tracks/{id}`, `DELETE /tracks/{id}`. The payload is validated as a
//!   track, nothing is stored, and the answer is `501 Not Implemented`.
//!
//! ### Monitoring
//!
//! - [`index`], [`ping`], [`health`] - liveness and version information.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use trackrelay::{server, spotify::SpotifyClient};
//!
//! let app = server::router(Arc::new(SpotifyClient::from_env()?));
//! ```

mod health;
mod tracks;

pub use health::health;
pub use health::index;
pub use health::ping;
pub use tracks::create_track;
pub use tracks::delete_track;
pub use tracks::tracks_by_artist;
pub use tracks::tracks_by_genre;
pub use tracks::update_track;
