//! HTTP routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use quiz_landing::{LandingModel, SessionState, render_landing_page};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::config::ServerConfig;
use crate::session::CookieSession;

/// Shared, read-only server state.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    fn session_for(&self, headers: &HeaderMap) -> SessionState {
        let state = CookieSession::from_headers(headers, &self.config.session).state();
        debug!(session = state.as_str(), "request session");
        state
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/api/landing", get(landing_model))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Rendered page. Output depends on the session cookie, hence `Vary`.
async fn landing_page(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let session = state.session_for(&headers);
    let html = render_landing_page(session, &state.config.logo);
    ([(header::VARY, "cookie")], Html(html))
}

async fn landing_model(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let session = state.session_for(&headers);
    ([(header::VARY, "cookie")], Json(LandingModel::build(session)))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
