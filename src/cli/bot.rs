use std::sync::Arc;

use crate::{
    Res,
    bot::{self, CommandRouter},
    cli::shutdown_signal,
    config, info,
    relay::RelayClient,
    server::SharedSearch,
    spotify::SpotifyClient,
    telegram::TelegramClient,
};

pub async fn bot(relay_url: Option<String>) -> Res<()> {
    let search: SharedSearch = match relay_url.or_else(config::relay_base_url) {
        Some(url) => {
            info!("Searching through the relay at {}", url);
            Arc::new(RelayClient::from_base_url(&url)?)
        }
        None => {
            info!("Searching Spotify directly");
            Arc::new(SpotifyClient::from_env()?)
        }
    };

    let telegram = TelegramClient::from_env()?;
    let router = CommandRouter::new(search);

    info!("Bot is starting...");
    bot::run_until(
        &telegram,
        &router,
        config::telegram_poll_timeout(),
        shutdown_signal(),
    )
    .await
}
