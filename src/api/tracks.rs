use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    error::RelayError, info, search::SearchResult, server::SharedSearch, types::TrackDto,
    warning,
};

/// Handles `GET /tracks/artist/{artist}`.
///
/// # Arguments
///
/// * `artist` - Percent-decoded artist name from the path
/// * `search` - Search backend shared by all handlers
///
/// # Returns
///
/// `200` with a JSON array of up to five `"<track> - <artist>"` lines, `404` when
/// nothing matched, `502` when the search itself failed.
pub async fn tracks_by_artist(
    Path(artist): Path<String>,
    Extension(search): Extension<SharedSearch>,
) -> Response {
    let result = search.search_by_artist(&artist).await;
    respond("artist", &artist, result)
}

/// Handles `GET /tracks/genre/{genre}`; same responses as [`tracks_by_artist`].
pub async fn tracks_by_genre(
    Path(genre): Path<String>,
    Extension(search): Extension<SharedSearch>,
) -> Response {
    let result = search.search_by_genre(&genre).await;
    respond("genre", &genre, result)
}

fn respond(kind: &str, name: &str, result: Result<SearchResult, RelayError>) -> Response {
    match result {
        Ok(tracks) if tracks.is_empty() => (StatusCode::NOT_FOUND, "No tracks found").into_response(),
        Ok(tracks) => Json(tracks).into_response(),
        Err(e) => {
            warning!("Search by {} \"{}\" failed: {}", kind, name, e);
            (StatusCode::BAD_GATEWAY, "Search failed").into_response()
        }
    }
}

// The relay keeps no track store; the write routes only exist so clients
// written against the full track API get an explicit answer.

/// Handles `POST /tracks`. The body must still be a valid `TrackDto`.
pub async fn create_track(Json(track): Json<TrackDto>) -> (StatusCode, &'static str) {
    info!("Rejected create for track {}", track.id);
    (StatusCode::NOT_IMPLEMENTED, "Storing tracks is not supported")
}

/// Handles `PUT /tracks/{id}`.
pub async fn update_track(
    Path(id): Path<String>,
    Json(_track): Json<TrackDto>,
) -> (StatusCode, &'static str) {
    info!("Rejected update for track {}", id);
    (StatusCode::NOT_IMPLEMENTED, "Storing tracks is not supported")
}

/// Handles `DELETE /tracks/{id}`.
pub async fn delete_track(Path(id): Path<String>) -> (StatusCode, &'static str) {
    info!("Rejected delete for track {}", id);
    (StatusCode::NOT_IMPLEMENTED, "Storing tracks is not supported")
}
