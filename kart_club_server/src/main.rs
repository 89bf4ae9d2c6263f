//! Kart club HTTP server.
//!
//! Run from repo root: `cargo run -p kart-club-server`
//! Settings come from the environment (or a `.env` file): DATABASE_URL, BIND_ADDR,
//! DATABASE_MAX_CONNECTIONS, SEED_DEMO_DATA, BODY_LIMIT_BYTES.

use kart_club::logging::init_tracing;
use kart_club::{app, create_tables, ensure_database_exists, seed_database, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    init_tracing();
    tracing::info!(bind_addr = %settings.bind_addr, "starting kart club api");

    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;

    create_tables(&pool).await?;
    tracing::info!("tables ready");
    if settings.seed_demo_data {
        let outcome = seed_database(&pool).await?;
        tracing::info!(?outcome, "demo data check done");
    }

    let router = app(AppState::new(pool), settings.body_limit_bytes);
    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
