//! # Telegram Module
//!
//! Minimal Telegram Bot API client covering what the bot needs:
//!
//! - `getMe` - verifies the bot token at startup
//! - `getUpdates` - long polling for inbound messages
//! - `sendMessage` - replies, optionally with a reply keyboard
//!
//! Every method is a JSON POST to `{api_url}/bot<token>/<method>` and answers
//! with the `{ ok, result, description }` envelope.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
    config,
    error::RelayError,
    types::{
        BotResponse, BotUser, GetUpdatesRequest, Message, ReplyKeyboardMarkup,
        SendMessageRequest, Update,
    },
};

pub struct TelegramClient {
    http: Client,
    api_url: String,
    token: String,
}

impl TelegramClient {
    /// `http` must allow requests to outlive the long-poll timeout.
    pub fn new(http: Client, api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Builds a client from the environment. The request timeout covers the
    /// long-poll wait plus the regular outbound bound.
    pub fn from_env() -> Result<Self, RelayError> {
        let timeout =
            config::http_timeout() + Duration::from_secs(config::telegram_poll_timeout());
        Ok(Self::new(
            config::http_client(timeout)?,
            config::telegram_api_url(),
            config::telegram_bot_token()?,
        ))
    }

    pub async fn get_me(&self) -> Result<BotUser, RelayError> {
        self.call("getMe", &serde_json::json!({})).await
    }

    /// Waits up to `timeout` seconds for updates with id `>= offset`.
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: u64,
    ) -> Result<Vec<Update>, RelayError> {
        let request = GetUpdatesRequest {
            offset,
            timeout,
            allowed_updates: vec!["message".to_string()],
        };
        self.call("getUpdates", &request).await
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_markup: Option<&ReplyKeyboardMarkup>,
    ) -> Result<Message, RelayError> {
        let request = SendMessageRequest {
            chat_id,
            text,
            reply_markup,
        };
        self.call("sendMessage", &request).await
    }

    async fn call<B, T>(&self, method: &str, body: &B) -> Result<T, RelayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!(
            "{api}/bot{token}/{method}",
            api = self.api_url,
            token = self.token,
            method = method
        );

        // The url embeds the bot token, keep it out of error messages.
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.without_url()))?;

        // Telegram reports failures in the envelope, often with a 4xx status,
        // so the body is decoded regardless of the status code.
        let status = response.status();
        let envelope: BotResponse<T> = response
            .json()
            .await
            .map_err(|e| RelayError::Telegram(format!("{} ({}): {}", method, status, e.without_url())))?;

        match envelope {
            BotResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            BotResponse { description, .. } => Err(RelayError::Telegram(format!(
                "{} ({}): {}",
                method,
                status,
                description.unwrap_or_else(|| "no description".to_string())
            ))),
        }
    }
}
