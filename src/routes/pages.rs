//! Server-rendered page routes.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::routes::auth::current_user;
use crate::state::AppState;
use crate::views::pages::{render_dashboard_page, render_login_page};

/// `GET /` — send the visitor wherever their session state points.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Redirect {
    if current_user(&state, &jar).await.is_some() {
        Redirect::temporary("/dashboard")
    } else {
        Redirect::temporary("/login")
    }
}

#[derive(Deserialize)]
pub struct LoginQuery {
    error: Option<String>,
}

/// `GET /login` — login form; `?error=1` shows the uniform failure notice.
pub async fn login_page(Query(query): Query<LoginQuery>) -> Html<String> {
    Html(render_login_page(query.error.is_some()))
}

/// `GET /dashboard` — authenticated landing page; unauthenticated visitors
/// are redirected to the login form instead of receiving 401.
pub async fn dashboard_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    match current_user(&state, &jar).await {
        Some(user) => Html(render_dashboard_page(user)).into_response(),
        None => Redirect::temporary("/login").into_response(),
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
