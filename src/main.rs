mod db;
mod routes;
mod services;
mod state;
mod views;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    seed_bootstrap_user(&pool).await;

    let state = state::AppState::new(pool);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "finboard listening");
    axum::serve(listener, app).await.expect("server failed");
}

/// Upsert the operator-configured first user so a fresh deployment has a
/// working login. Skipped when the env vars are absent; fatal when they are
/// set but seeding fails.
async fn seed_bootstrap_user(pool: &sqlx::PgPool) {
    let (Ok(email), Ok(password)) =
        (std::env::var("BOOTSTRAP_USER_EMAIL"), std::env::var("BOOTSTRAP_USER_PASSWORD"))
    else {
        return;
    };
    let name = std::env::var("BOOTSTRAP_USER_NAME").unwrap_or_else(|_| "Admin".into());

    let id = services::users::ensure_user(pool, &email, &name, &password)
        .await
        .expect("bootstrap user seeding failed");
    tracing::info!(%email, %id, "bootstrap user ready");
}
