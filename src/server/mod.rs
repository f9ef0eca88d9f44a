use std::io;
use std::sync::Arc;

use thiserror::Error;

use crate::combat::BattleConfig;
use crate::config::AppConfig;
use crate::data::{CreatureSource, PokeApiClient};

pub mod api;
pub mod routes;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: io::Error },
    #[error("server stopped: {0}")]
    Serve(#[source] io::Error),
}

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn CreatureSource>,
    pub battle: BattleConfig,
    pub order_seed: Option<u64>,
}

impl AppState {
    pub fn new(source: Arc<dyn CreatureSource>, battle: BattleConfig, order_seed: Option<u64>) -> Self {
        Self {
            source,
            battle,
            order_seed,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ServerError> {
        let client = PokeApiClient::from_config(config)?;
        Ok(Self::new(Arc::new(client), config.battle, config.order_seed))
    }
}

pub async fn run_server(config: &AppConfig) -> Result<(), ServerError> {
    let state = AppState::from_config(config)?;
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr.clone(),
            source,
        })?;

    tracing::info!(
        upstream = %config.api_base_url,
        max_rounds = config.battle.max_rounds,
        "pokebattle server listening on http://{}",
        config.bind_addr
    );

    axum::serve(listener, routes::router(state))
        .await
        .map_err(ServerError::Serve)
}
