//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the server-rendered pages, the JSON auth API, and
//! static assets under a single Axum router. Pages answer browsers with
//! redirects; the API answers programmatic clients with status codes.

pub mod auth;
pub mod pages;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes shared by browser and programmatic clients.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Server-rendered pages plus the session form endpoints.
fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/login", get(pages::login_page).post(auth::login_form))
        .route("/dashboard", get(pages::dashboard_page))
        .route("/logout", post(auth::logout))
        .with_state(state)
}

/// Resolve the static asset directory.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
}

/// Full application router: pages, API, and static assets.
pub fn app(state: AppState) -> Router {
    page_routes(state.clone())
        .merge(api_routes(state))
        .nest_service("/static", ServeDir::new(static_dir()))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
