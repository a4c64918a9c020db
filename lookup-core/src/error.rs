use reqwest::StatusCode;
use thiserror::Error;

/// The one way a lookup can fail.
///
/// The variants only record *why* for logging; every one of them renders the
/// same not-found state.
#[derive(Debug, Error)]
pub enum LookupFailed {
    #[error("request to weather provider failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("weather provider answered with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("weather provider returned malformed JSON: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("weather provider returned an unreadable local time '{0}'")]
    Timestamp(String),
}

impl From<reqwest::Error> for LookupFailed {
    /// Drops the request URL, which carries the API key.
    fn from(err: reqwest::Error) -> Self {
        LookupFailed::Transport(err.without_url())
    }
}
