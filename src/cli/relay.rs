use std::sync::Arc;

use crate::{
    Res, cli::shutdown_signal, config, server::start_api_server, spotify::SpotifyClient, success,
};

pub async fn relay(addr: Option<String>) -> Res<()> {
    let spotify = SpotifyClient::from_env()?;
    let addr = addr.unwrap_or_else(config::server_addr);

    start_api_server(Arc::new(spotify), &addr, shutdown_signal()).await?;
    success!("Relay stopped");
    Ok(())
}
