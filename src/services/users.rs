//! User records and the lookup collaborator used by credential checks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authorizer never talks to Postgres directly; it goes through the
//! [`UserLookup`] trait so the store can be stubbed in tests. The production
//! implementation is a single parameterized query by email — the column
//! carries a unique index, so at most one row comes back.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::credentials;
use super::password::{self, PasswordError};

/// A stored user, as read from the `users` table.
///
/// Everything besides `email` and `password_hash` is opaque to the
/// authorizer and passes through unchanged on success. The hash never
/// serializes — responses built from this type cannot leak it.
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub member_since: Option<String>,
}

/// Store failure: unreachable database or a failed query.
///
/// Distinct from "no such user", which is an absent result, not an error.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("user lookup failed: {0}")]
    Db(#[from] sqlx::Error),
}

/// Read-only user access keyed by exact email match.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Fetch the user with this email, or `None` if no row exists.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the store is unreachable or the query
    /// fails — never for an absent user.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, LookupError>;
}

/// Postgres-backed [`UserLookup`] over the shared pool.
pub struct PgUserLookup {
    pool: PgPool,
}

impl PgUserLookup {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserLookup for PgUserLookup {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, LookupError> {
        let row = sqlx::query(
            r"SELECT id, email, name, password_hash,
                     to_char(created_at, 'YYYY-MM-DD') AS member_since
              FROM users
              WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| UserRecord {
            id: r.get("id"),
            email: r.get("email"),
            name: r.get("name"),
            password_hash: r.get("password_hash"),
            member_since: r.get("member_since"),
        }))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("invalid bootstrap email")]
    InvalidEmail,
    #[error(transparent)]
    Hash(#[from] PasswordError),
    #[error("bootstrap upsert failed: {0}")]
    Db(#[from] sqlx::Error),
}

/// Insert or refresh a user with a freshly hashed password; returns the id.
///
/// The email goes through [`credentials::normalize_email`] before the upsert,
/// so the stored key is the same form sign-in later looks up. A shape-invalid
/// email is an error, not a row.
///
/// Startup-time helper so a fresh deployment has an account to sign in with.
/// Account management beyond this lives outside the app.
///
/// # Errors
///
/// Returns an error if the email has no valid shape, or if hashing or the
/// upsert fails.
pub async fn ensure_user(
    pool: &PgPool,
    email: &str,
    name: &str,
    password: &str,
) -> Result<Uuid, BootstrapError> {
    let email = credentials::normalize_email(email).ok_or(BootstrapError::InvalidEmail)?;
    let phc = password::hash_password(password)?;
    let row = sqlx::query(
        r"INSERT INTO users (email, name, password_hash)
          VALUES ($1, $2, $3)
          ON CONFLICT (email) DO UPDATE
              SET name = EXCLUDED.name, password_hash = EXCLUDED.password_hash
          RETURNING id",
    )
    .bind(&email)
    .bind(name)
    .bind(phc)
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
