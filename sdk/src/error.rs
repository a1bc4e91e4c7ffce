use {reqwest::StatusCode, thiserror::Error};

/// Errors returned by [`crate::CoinMarketCapClient`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoinMarketCapError {
    /// The request never produced a complete response: connection, DNS,
    /// deadline or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The upstream answered with anything other than `200 OK`. `body` holds
    /// the raw response text.
    #[error("HTTP {status}: {body}")]
    Transport { status: StatusCode, body: String },
    /// The body was not valid JSON for the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    /// A single coin query came back with an empty ticker list.
    #[error("No ticker data returned for coin '{0}'")]
    NotFound(String),
    /// Caller input rejected before any request was made.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CoinMarketCapError {
    /// Whether this error was caused by the request deadline elapsing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }

    /// HTTP status of a [`CoinMarketCapError::Transport`] error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}
