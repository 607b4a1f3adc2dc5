#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::Router;
use reqwest::StatusCode;
use tokio::net::TcpListener;
use trackrelay::{
    RelayError,
    search::{SearchResult, TrackSearch},
};

// Serves `app` on an ephemeral local port and returns its base URL
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

// Search backend with canned answers that records every call
pub struct StubSearch {
    tracks: Vec<String>,
    fail: bool,
    calls: AtomicUsize,
    queries: Mutex<Vec<(String, String)>>,
}

impl StubSearch {
    pub fn returning(tracks: &[&str]) -> Self {
        Self {
            tracks: tracks.iter().map(|t| t.to_string()).collect(),
            fail: false,
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::returning(&[])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<(String, String)> {
        self.queries.lock().unwrap().clone()
    }

    fn answer(&self, kind: &str, value: &str) -> Result<SearchResult, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries
            .lock()
            .unwrap()
            .push((kind.to_string(), value.to_string()));
        if self.fail {
            return Err(RelayError::Authentication {
                status: StatusCode::UNAUTHORIZED,
            });
        }
        Ok(SearchResult::from_tracks(self.tracks.clone()))
    }
}

#[async_trait]
impl TrackSearch for StubSearch {
    async fn search_by_artist(&self, artist: &str) -> Result<SearchResult, RelayError> {
        self.answer("artist", artist)
    }

    async fn search_by_genre(&self, genre: &str) -> Result<SearchResult, RelayError> {
        self.answer("genre", genre)
    }
}
