use axum::{
    Extension, Router,
    routing::{get, post, put},
};
use std::{future::Future, net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, info, search::TrackSearch};

/// Search backend shared by all request handlers.
pub type SharedSearch = Arc<dyn TrackSearch>;

pub fn router(search: SharedSearch) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/ping", get(api::ping))
        .route("/health", get(api::health))
        .route("/tracks", post(api::create_track))
        .route(
            "/tracks/{id}",
            put(api::update_track).delete(api::delete_track),
        )
        .route("/tracks/artist/{artist}", get(api::tracks_by_artist))
        .route("/tracks/genre/{genre}", get(api::tracks_by_genre))
        .layer(Extension(search))
}

/// Serves the relay on `addr` until `shutdown` resolves.
pub async fn start_api_server<F>(search: SharedSearch, addr: &str, shutdown: F) -> Res<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Relay listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(search))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
