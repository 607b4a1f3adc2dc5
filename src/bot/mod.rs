//! # Bot Module
//!
//! Chat side of trackrelay.
//!
//! - [`Intent::parse`] classifies a message text (`/start`, `/artist <name>`,
//!   `/genre <name>`, a command missing its argument, or anything else)
//! - [`CommandRouter`] turns an intent into exactly one [`Reply`], calling a
//!   [`crate::search::TrackSearch`] backend for the two search commands
//! - [`run_until`] is the Telegram receive loop: updates are handled serially,
//!   one reply per text message
//!
//! The router does not know whether searches go to Spotify directly or through
//! a relay service; `cli::bot` picks the backend.

pub mod command;
mod router;
mod runner;

pub use command::Intent;
pub use command::SearchKind;
pub use router::CommandRouter;
pub use router::Reply;
pub use runner::run_until;
