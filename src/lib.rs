//! Spotify track relay for Telegram
//!
//! This library answers `/artist <name>` and `/genre <name>` chat commands with the
//! top five matching Spotify tracks. The bot can search Spotify directly or go
//! through a small HTTP relay service that holds the Spotify credentials.
//!
//! # Modules
//!
//! - `api` - HTTP handlers of the relay service
//! - `bot` - Command parsing, reply formatting and the Telegram receive loop
//! - `cli` - Entry points for the `bot` and `relay` subcommands
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by all clients
//! - `management` - Access token caching
//! - `relay` - Search client that talks to a running relay service
//! - `search` - The `TrackSearch` seam and the capped `SearchResult` list
//! - `server` - Router construction and serving of the relay service
//! - `spotify` - Spotify Web API search client
//! - `telegram` - Minimal Telegram Bot API client
//! - `types` - Wire data structures
//!
//! # Example
//!
//! ```
//! use trackrelay::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> trackrelay::Res<()> {
//!     config::load_env().await?;
//!     cli::relay(None).await
//! }
//! ```

pub mod api;
pub mod bot;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod relay;
pub mod search;
pub mod server;
pub mod spotify;
pub mod telegram;
pub mod types;

pub use error::RelayError;

/// A convenient Result type alias for top-level operations that may fail.
///
/// Uses a boxed dynamic error so entry points can mix configuration,
/// network and I/O failures while staying `Send + Sync` for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Relay listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for startup failures where the process cannot do anything useful,
/// such as missing credentials. Request handling paths use `warning!` and
/// keep running.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems: a failed upstream search, a dropped
/// Telegram poll, a reply that could not be delivered.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
