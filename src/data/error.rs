use thiserror::Error;

/// Failure to obtain a creature from the upstream API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid creature identifier '{0}'")]
    InvalidIdentifier(String),
    #[error("creature '{identifier}' not found")]
    NotFound { identifier: String, body: String },
    #[error("upstream returned status {status} for '{identifier}'")]
    Upstream {
        identifier: String,
        status: u16,
        body: String,
    },
    #[error("request for '{identifier}' failed: {source}")]
    Transport {
        identifier: String,
        source: reqwest::Error,
    },
    #[error("malformed record for '{identifier}': {reason}")]
    Malformed { identifier: String, reason: String },
}

impl FetchError {
    pub fn identifier(&self) -> &str {
        match self {
            Self::InvalidIdentifier(identifier) => identifier,
            Self::NotFound { identifier, .. }
            | Self::Upstream { identifier, .. }
            | Self::Transport { identifier, .. }
            | Self::Malformed { identifier, .. } => identifier,
        }
    }
}
