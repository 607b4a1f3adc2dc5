//! # CLI Module
//!
//! Entry points behind the `trackrelay` subcommands.
//!
//! - [`bot`] - runs the Telegram bot. Searches go to Spotify directly, or to a
//!   relay service when `--relay-url` or `RELAY_BASE_URL` is given.
//! - [`relay`] - runs the HTTP relay service in front of Spotify.
//!
//! ## Usage Patterns
//!
//! ### Single process
//! ```bash
//! trackrelay bot                                   # needs Spotify + Telegram credentials
//! ```
//!
//! ### Bot behind a relay
//! ```bash
//! trackrelay relay --addr 127.0.0.1:7089           # needs Spotify credentials
//! trackrelay bot --relay-url http://127.0.0.1:7089 # needs only the Telegram token
//! ```
//!
//! Both run until Ctrl-C.

mod bot;
mod relay;

pub use bot::bot;
pub use relay::relay;

use crate::warning;

/// Resolves on Ctrl-C. If the signal handler cannot be installed the
/// process keeps running until killed.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warning!("Cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
