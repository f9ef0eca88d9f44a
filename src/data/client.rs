//! Creature sources: the `CreatureSource` seam and its PokeAPI implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::combat::Combatant;
use crate::config::AppConfig;
use crate::data::error::FetchError;
use crate::data::pokemon::{combatant_from_value, normalize_identifier};

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

#[async_trait]
pub trait CreatureSource: Send + Sync {
    /// Raw upstream document for a creature name or id.
    async fn fetch_record(&self, identifier: &str) -> Result<serde_json::Value, FetchError>;

    async fn fetch_combatant(&self, identifier: &str) -> Result<Combatant, FetchError> {
        let identifier = normalize_identifier(identifier)?;
        let record = self.fetch_record(&identifier).await?;
        combatant_from_value(&identifier, &record)
    }
}

/// HTTP client for `{base}/pokemon/{identifier}`.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokebattle/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.api_base_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn record_url(&self, identifier: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, identifier)
    }
}

#[async_trait]
impl CreatureSource for PokeApiClient {
    async fn fetch_record(&self, identifier: &str) -> Result<serde_json::Value, FetchError> {
        let identifier = normalize_identifier(identifier)?;
        let url = self.record_url(&identifier);
        tracing::debug!(%url, "fetching creature record");

        let transport = |source| FetchError::Transport {
            identifier: identifier.clone(),
            source,
        };
        let response = self.http_client.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { identifier, body });
        }
        if !status.is_success() {
            return Err(FetchError::Upstream {
                identifier,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|err| FetchError::Malformed {
            identifier,
            reason: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_url_strips_trailing_slash() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(
            client.record_url("pikachu"),
            "https://pokeapi.co/api/v2/pokemon/pikachu"
        );
    }

    #[tokio::test]
    async fn invalid_identifier_fails_before_any_request() {
        let client = PokeApiClient::new("http://127.0.0.1:1", Duration::from_millis(50)).unwrap();
        let err = client.fetch_record("../berry").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidIdentifier(_)));
    }
}
