//! `phishguard serve` – HTTP API exposing the prediction pipeline.
//!
//! Routes: `POST /predict` with `{"url": "..."}` and `GET /healthz`. CORS is
//! permissive so browser extensions can call the API directly. The model
//! artifact is loaded and validated before the listener binds; a bad
//! artifact means the process never becomes ready.

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use phishguard_core::config::PhishguardConfig;
use phishguard_core::predict::Predictor;
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::build_predictor;

pub async fn run_serve(
    cfg: PhishguardConfig,
    bind: Option<String>,
    model: Option<PathBuf>,
) -> Result<()> {
    let addr = bind.unwrap_or_else(|| cfg.listen_addr.clone());
    let predictor = build_predictor(&cfg, model)?;
    let app = router(predictor);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    tracing::info!("phishguard API listening on {addr}");
    axum::serve(listener, app).await.context("server error")
}

pub(crate) fn router(predictor: Arc<Predictor>) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/healthz", get(healthz))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(predictor)
}

#[derive(Debug, Deserialize)]
struct UrlInput {
    url: String,
}

async fn predict(
    State(predictor): State<Arc<Predictor>>,
    Json(input): Json<UrlInput>,
) -> Response {
    match predictor.predict(&input.url).await {
        Ok(verdict) => Json(verdict).into_response(),
        Err(e) => {
            tracing::error!("predict failed for {}: {e:#}", input.url);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn healthz() -> &'static str {
    "ok"
}
