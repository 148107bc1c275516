#[derive(Debug, thiserror::Error)]
pub enum PokedexError {
    #[error("Upstream error: {status} {reason} ({url})")]
    Upstream {
        status: u16,
        reason: String,
        url: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PokedexError {
    /// Build a [`Malformed`](Self::Malformed) error from a message, for shape
    /// problems found after decoding (e.g. a resource URL with no id).
    pub fn malformed(msg: impl std::fmt::Display) -> Self {
        Self::Malformed(serde::de::Error::custom(msg))
    }

    /// HTTP status of an upstream failure, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PokedexError>;
