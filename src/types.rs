use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bearer token issued by the client-credentials exchange.
///
/// `expires_at` already has the safety margin subtracted, so the token is
/// usable exactly while `now < expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackPage {
    #[serde(default)]
    pub items: Vec<Option<Track>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
}

impl Track {
    /// Renders `"<track name> - <primary artist>"`, or `None` for a nameless item.
    pub fn display_line(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        let artist = self
            .artists
            .first()
            .and_then(|a| a.name.as_deref())
            .unwrap_or_default();
        Some(format!("{} - {}", name, artist))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    #[serde(default)]
    pub name: Option<String>,
}

/// Payload of the relay's track write routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDto {
    pub id: String,
    pub name: String,
    pub artist: String,
}

/// Envelope every Bot API method answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct BotResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotUser {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub first_name: String,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub timeout: u64,
    pub allowed_updates: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<&'a ReplyKeyboardMarkup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub resize_keyboard: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
}

impl ReplyKeyboardMarkup {
    /// A single resizable row of buttons that send their label as text.
    pub fn single_row(labels: &[&str]) -> Self {
        Self {
            keyboard: vec![
                labels
                    .iter()
                    .map(|l| KeyboardButton {
                        text: l.to_string(),
                    })
                    .collect(),
            ],
            resize_keyboard: true,
        }
    }
}
