use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::data::FetchError;
use crate::server::api::{self, BattleQuery};
use crate::server::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/battle/:first/:second", get(battle))
        .route("/:creature", get(creature))
        .route("/:creature/attack", get(attack))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Response {
    (StatusCode::OK, Json(api::health_payload())).into_response()
}

/// Upstream record, passed through untouched.
async fn creature(State(state): State<AppState>, Path(creature): Path<String>) -> Response {
    match state.source.fetch_record(&creature).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => fetch_error_response(&err),
    }
}

async fn attack(State(state): State<AppState>, Path(creature): Path<String>) -> Response {
    match api::attack_payload(state.source.as_ref(), &creature).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(err) => fetch_error_response(&err),
    }
}

async fn battle(
    State(state): State<AppState>,
    Path((first, second)): Path<(String, String)>,
    query: Result<Query<BattleQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, &format!("Invalid query: {rejection}"))
        }
    };
    let seed = query.seed.or(state.order_seed);

    match api::battle_payload(state.source.as_ref(), &first, &second, seed, &state.battle).await {
        Ok(payload) => {
            tracing::info!(
                first = %first,
                second = %second,
                winner = payload.winner.as_deref().unwrap_or("-"),
                rounds = payload.rounds,
                "battle resolved"
            );
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => fetch_error_response(&err),
    }
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Route not found")
}

fn fetch_error_response(err: &FetchError) -> Response {
    let status = match err {
        FetchError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
        FetchError::NotFound { .. } => StatusCode::NOT_FOUND,
        FetchError::Upstream { .. }
        | FetchError::Transport { .. }
        | FetchError::Malformed { .. } => StatusCode::BAD_GATEWAY,
    };
    if status == StatusCode::BAD_GATEWAY {
        tracing::warn!(identifier = err.identifier(), error = %err, "upstream fetch failed");
    }
    error_response(status, &err.to_string())
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "status": "error",
            "message": message,
        })),
    )
        .into_response()
}
