use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{Duration, Utc};
use reqwest::{Client, header::AUTHORIZATION};
use tokio::sync::Mutex;

use crate::{
    error::RelayError,
    info,
    types::{AccessToken, TokenResponse},
};

/// Seconds shaved off `expires_in` so a token is never sent right as it lapses.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// Process-wide cache for the client-credentials access token.
///
/// The slot is locked for the whole refresh, so callers racing on an expired
/// token wait for the first exchange and reuse its result.
pub struct TokenCache {
    http: Client,
    token_url: String,
    token: Mutex<Option<AccessToken>>,
}

impl TokenCache {
    pub fn new(http: Client, token_url: impl Into<String>) -> Self {
        TokenCache {
            http,
            token_url: token_url.into(),
            token: Mutex::new(None),
        }
    }

    /// Starts with `token` already cached.
    pub fn with_token(http: Client, token_url: impl Into<String>, token: AccessToken) -> Self {
        TokenCache {
            http,
            token_url: token_url.into(),
            token: Mutex::new(Some(token)),
        }
    }

    /// Returns the cached token while it is still valid, otherwise exchanges the
    /// client credentials for a new one and caches that.
    pub async fn get_valid_token(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<AccessToken, RelayError> {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            if token.is_valid_at(Utc::now()) {
                return Ok(token.clone());
            }
        }

        let fresh = self.exchange(client_id, client_secret).await?;
        *slot = Some(fresh.clone());
        Ok(fresh)
    }

    pub async fn current_token(&self) -> Option<AccessToken> {
        self.token.lock().await.clone()
    }

    async fn exchange(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<AccessToken, RelayError> {
        let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));

        let res = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, format!("Basic {}", credentials))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(RelayError::Authentication { status });
        }

        let body = res.text().await?;
        let json: TokenResponse =
            serde_json::from_str(&body).map_err(|_| RelayError::MalformedToken("a JSON body"))?;

        let value = json
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(RelayError::MalformedToken("access_token"))?;
        let expires_in = json
            .expires_in
            .ok_or(RelayError::MalformedToken("expires_in"))?;

        let expires_at = expires_in
            .checked_sub(EXPIRY_MARGIN_SECS)
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or(RelayError::MalformedToken("expires_in"))?;
        info!("Obtained Spotify access token, valid until {}", expires_at);

        Ok(AccessToken { value, expires_at })
    }
}
