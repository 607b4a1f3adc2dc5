//! Configuration management for trackrelay.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Both the bot and the relay read their Spotify and
//! Telegram credentials, endpoint URLs and timeouts from here.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf, time::Duration};

use reqwest::Client;

use crate::error::RelayError;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:7089";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;

/// Loads environment variables from `.env` files.
///
/// Reads `trackrelay/.env` under the platform-specific local data directory,
/// then a `.env` in the working directory. Variables already present in the
/// process environment are never overwritten. Missing files are fine: the
/// whole configuration can come from the real environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/trackrelay/.env`
/// - macOS: `~/Library/Application Support/trackrelay/.env`
/// - Windows: `%LOCALAPPDATA%/trackrelay/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("trackrelay/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }
    dotenv::dotenv().ok();
    Ok(())
}

fn required(key: &'static str) -> Result<String, RelayError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(RelayError::MissingConfig(key)),
    }
}

fn or_default(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn seconds(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Address the relay service binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Spotify application client ID (`SPOTIFY_API_AUTH_CLIENT_ID`).
pub fn spotify_client_id() -> Result<String, RelayError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Spotify application client secret (`SPOTIFY_API_AUTH_CLIENT_SECRET`).
///
/// Never log this value.
pub fn spotify_client_secret() -> Result<String, RelayError> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Spotify Web API base URL (`SPOTIFY_API_URL`), e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    or_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// Spotify token endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL)
}

/// Telegram bot token issued by BotFather (`TELEGRAM_BOT_TOKEN`).
pub fn telegram_bot_token() -> Result<String, RelayError> {
    required("TELEGRAM_BOT_TOKEN")
}

/// Telegram Bot API base URL (`TELEGRAM_API_URL`).
pub fn telegram_api_url() -> String {
    or_default("TELEGRAM_API_URL", DEFAULT_TELEGRAM_API_URL)
}

/// Base URL of a running relay service (`RELAY_BASE_URL`), if the bot should use one.
pub fn relay_base_url() -> Option<String> {
    env::var("RELAY_BASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Upper bound for every outbound HTTP request (`HTTP_TIMEOUT_SECS`).
pub fn http_timeout() -> Duration {
    Duration::from_secs(seconds("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS))
}

/// Long-poll timeout passed to `getUpdates` (`TELEGRAM_POLL_TIMEOUT_SECS`).
pub fn telegram_poll_timeout() -> u64 {
    seconds("TELEGRAM_POLL_TIMEOUT_SECS", DEFAULT_POLL_TIMEOUT_SECS)
}

/// Builds an HTTP client whose requests give up after `timeout`.
pub fn http_client(timeout: Duration) -> Result<Client, RelayError> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?)
}
