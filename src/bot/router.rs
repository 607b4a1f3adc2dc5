use std::sync::Arc;

use crate::{
    bot::command::{self, Intent, SearchKind},
    search::TrackSearch,
    types::ReplyKeyboardMarkup,
    warning,
};

/// The single chat message sent back for one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<ReplyKeyboardMarkup>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }
}

/// Turns message texts into replies, calling the search backend when needed.
///
/// Holds no per-chat state; every message is handled on its own.
pub struct CommandRouter {
    search: Arc<dyn TrackSearch>,
}

impl CommandRouter {
    pub fn new(search: Arc<dyn TrackSearch>) -> Self {
        Self { search }
    }

    pub async fn handle(&self, text: &str) -> Reply {
        self.dispatch(Intent::parse(text)).await
    }

    pub async fn dispatch(&self, intent: Intent) -> Reply {
        match intent {
            Intent::Start => Reply {
                text: command::WELCOME.to_string(),
                keyboard: Some(ReplyKeyboardMarkup::single_row(&[
                    SearchKind::Artist.command(),
                    SearchKind::Genre.command(),
                ])),
            },
            Intent::MissingArgument(kind) => Reply::text(command::usage_hint(kind)),
            Intent::ArtistQuery(artist) => self.search(SearchKind::Artist, &artist).await,
            Intent::GenreQuery(genre) => self.search(SearchKind::Genre, &genre).await,
            Intent::Unrecognized(_) => Reply::text(command::NOT_UNDERSTOOD),
        }
    }

    async fn search(&self, kind: SearchKind, name: &str) -> Reply {
        let result = match kind {
            SearchKind::Artist => self.search.search_by_artist(name).await,
            SearchKind::Genre => self.search.search_by_genre(name).await,
        };

        let tracks = match result {
            Ok(tracks) => tracks,
            Err(e) => {
                warning!("Search by {} \"{}\" failed: {}", kind, name, e);
                return Reply::text(command::SEARCH_FAILED);
            }
        };

        if tracks.is_empty() {
            return Reply::text(command::not_found(kind, name));
        }

        let lines = tracks
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {}", i + 1, line))
            .collect::<Vec<_>>()
            .join("\n");

        Reply::text(format!(
            "{}\n{}",
            command::header(kind, name, tracks.len()),
            lines
        ))
    }
}
