//! HTTP transport
//!
//! Routes:
//! - `POST /api/recommendations` - resolve a JSON answer list
//! - `GET /api/questions` - the ordered question catalog
//! - `GET /api/tree` - the decision tree, for diagram views
//! - `GET /health` - liveness

use crate::engine::DecisionEngine;
use crate::questions;
use crate::service;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DecisionEngine>,
}

impl AppState {
    pub fn new(engine: DecisionEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/recommendations", post(recommendations))
        .route("/api/questions", get(list_questions))
        .route("/api/tree", get(decision_tree))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "stack advisor listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn recommendations(State(state): State<AppState>, body: Bytes) -> Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("recommendations", %request_id);
    let _guard = span.enter();

    tracing::debug!(bytes = body.len(), "received answers");

    match service::recommend_json(&state.engine, &body) {
        Ok(result) => {
            tracing::info!(decision_path = %result.decision_path, "recommendation generated");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "recommendation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(e.into_degraded())).into_response()
        }
    }
}

async fn list_questions() -> impl IntoResponse {
    Json(questions::get_questions())
}

async fn decision_tree(State(state): State<AppState>) -> Response {
    Json(state.engine.root()).into_response()
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}
