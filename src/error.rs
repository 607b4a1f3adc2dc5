use reqwest::StatusCode;
use thiserror::Error;

/// Failures that abort a single operation.
///
/// An empty search and a catalog response with unexpected shape are not
/// errors; search clients return an empty `SearchResult` for both.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The client-credentials exchange was rejected.
    #[error("authentication failed with status {status}")]
    Authentication { status: StatusCode },

    /// The token endpoint answered 2xx but without a usable token.
    #[error("token response is missing {0}")]
    MalformedToken(&'static str),

    /// Connection, TLS, timeout or body read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The Bot API answered with `ok: false`.
    #[error("telegram rejected the request: {0}")]
    Telegram(String),

    /// The relay answered with a server error, usually its own search failing.
    #[error("relay answered with status {status}")]
    Upstream { status: StatusCode },

    #[error("{0} must be set")]
    MissingConfig(&'static str),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}
