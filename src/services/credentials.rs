//! Credential authorization — the accept/reject decision for a sign-in
//! attempt.
//!
//! DESIGN
//! ======
//! The pipeline is four hard gates: shape validation, lookup, existence,
//! secret comparison. Every credential-related failure collapses into the
//! same `Ok(None)` before it leaves this module, so a caller (and therefore
//! an attacker driving the caller) cannot tell a malformed email from an
//! unknown account from a wrong password. Store failures are the one
//! exception: they propagate as [`LookupError`] so "database down" stays
//! distinguishable from "bad login" in operator logs.

use serde::Deserialize;

use super::password::SecretVerifier;
use super::users::{LookupError, UserLookup, UserRecord};

pub(crate) const MIN_PASSWORD_CHARS: usize = 6;

/// Raw sign-in input exactly as submitted, before any validation.
///
/// Missing keys deserialize to empty strings and fall through shape
/// validation like any other malformed input, keeping the rejection path
/// uniform instead of surfacing a framework-level 4xx.
#[derive(Deserialize)]
pub struct RawCredentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Trim, lowercase, and shape-check an email address.
///
/// Accepts exactly one `@` with a non-empty local part and a domain holding
/// an interior dot; rejects embedded whitespace. Returns the normalized
/// address used as the lookup key.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.contains(char::is_whitespace) {
        return None;
    }
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return None;
    }
    Some(normalized)
}

/// Minimum-length predicate. Counted in characters, never trimmed — password
/// whitespace is significant.
#[must_use]
pub fn valid_password_shape(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_CHARS
}

/// Shape-validated credentials. Construction is the validation gate; no
/// lookup may run before one of these exists.
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Validate raw input against the two shape predicates. `None` carries
    /// no detail about which predicate failed.
    #[must_use]
    pub fn parse(raw: &RawCredentials) -> Option<Self> {
        let email = normalize_email(&raw.email)?;
        if !valid_password_shape(&raw.password) {
            return None;
        }
        Some(Self {
            email,
            password: raw.password.clone(),
        })
    }

    /// Normalized email, suitable as the store lookup key.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Decide a sign-in attempt.
///
/// Returns `Ok(Some(user))` with the full stored record when the email maps
/// to a user and the password matches its hash; `Ok(None)` for every
/// credential-related failure (malformed shape, unknown user, mismatch);
/// `Err` only when the lookup collaborator reports a store failure. Shape
/// failures never reach the store, so invalid input produces no query and
/// no timing signal tied to stored data.
///
/// # Errors
///
/// Propagates [`LookupError`] from the user store untouched. Infrastructure
/// failure is never folded into the uniform rejection.
pub async fn authorize(
    users: &dyn UserLookup,
    secrets: &dyn SecretVerifier,
    raw: &RawCredentials,
) -> Result<Option<UserRecord>, LookupError> {
    let Some(credentials) = Credentials::parse(raw) else {
        return Ok(reject());
    };

    let Some(user) = users.find_by_email(credentials.email()).await? else {
        return Ok(reject());
    };

    if !secrets.verify(&credentials.password, &user.password_hash).await {
        return Ok(reject());
    }

    Ok(Some(user))
}

/// The uniform negative outcome, plus the one generic diagnostic every
/// rejection path emits. Deliberately silent about the cause.
fn reject() -> Option<UserRecord> {
    tracing::debug!("invalid credentials");
    None
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
