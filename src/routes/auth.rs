//! Auth routes — browser sign-in, JSON sign-in, session management.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::services::credentials::{self, RawCredentials};
use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user })
    }
}

/// Resolve the session cookie to a user without rejecting the request.
/// Page handlers use this to redirect instead of answering 401.
pub(crate) async fn current_user(state: &AppState, jar: &CookieJar) -> Option<session::SessionUser> {
    let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if token.is_empty() {
        return None;
    }

    match session::validate_session(&state.pool, token).await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = %e, "session validation failed");
            None
        }
    }
}

// =============================================================================
// SIGN-IN
// =============================================================================

/// Outcome of a sign-in attempt, shared by the form and JSON handlers.
enum SignIn {
    /// Credentials accepted; the jar carries the new session cookie.
    Granted(CookieJar, session::SessionUser),
    /// Credentials rejected. Deliberately carries no detail.
    Rejected,
    /// The store or session insert failed; not a credential problem.
    Unavailable,
}

async fn sign_in(state: &AppState, raw: &RawCredentials) -> SignIn {
    let user = match credentials::authorize(state.users.as_ref(), state.secrets.as_ref(), raw).await {
        Ok(Some(user)) => user,
        Ok(None) => return SignIn::Rejected,
        Err(e) => {
            tracing::error!(error = %e, "user lookup failed during sign-in");
            return SignIn::Unavailable;
        }
    };

    let token = match session::create_session(&state.pool, user.id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return SignIn::Unavailable;
        }
    };

    let cookie = Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure());

    let session_user = session::SessionUser {
        id: user.id,
        email: user.email,
        name: user.name,
        member_since: user.member_since,
    };
    SignIn::Granted(CookieJar::new().add(cookie), session_user)
}

/// `POST /login` — browser form sign-in; redirects on every outcome the user
/// caused, answers 500 only when the store is down.
pub async fn login_form(State(state): State<AppState>, Form(raw): Form<RawCredentials>) -> Response {
    match sign_in(&state, &raw).await {
        SignIn::Granted(jar, _) => (jar, Redirect::to("/dashboard")).into_response(),
        SignIn::Rejected => Redirect::to("/login?error=1").into_response(),
        SignIn::Unavailable => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Sign-in is temporarily unavailable").into_response()
        }
    }
}

/// `POST /api/auth/login` — JSON sign-in; sets the session cookie and returns
/// the signed-in user.
pub async fn login(State(state): State<AppState>, Json(raw): Json<RawCredentials>) -> Response {
    match sign_in(&state, &raw).await {
        SignIn::Granted(jar, user) => (jar, Json(user)).into_response(),
        SignIn::Rejected => (StatusCode::UNAUTHORIZED, "Invalid email or password.").into_response(),
        SignIn::Unavailable => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Sign-in is temporarily unavailable").into_response()
        }
    }
}

// =============================================================================
// SESSION HANDLERS
// =============================================================================

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /logout` — delete the session, clear the cookie, return to login.
///
/// Deliberately tolerant: a stale or missing cookie still clears and
/// redirects, so double-submitting the sign-out form never errors.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(cookie) = jar.get(COOKIE_NAME) {
        let _ = session::delete_session(&state.pool, cookie.value()).await;
    }

    let cookie = Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO);

    (CookieJar::new().add(cookie), Redirect::to("/login")).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
