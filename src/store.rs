//! Database bootstrap: create the database if missing and create the club tables if absent.

use crate::error::{AppError, ConfigError};
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Club tables in creation order (referenced tables first).
pub const TABLES: &[(&str, &str)] = &[
    (
        "tracks",
        r#"
        CREATE TABLE IF NOT EXISTS tracks (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            state BOOLEAN NOT NULL,
            open BOOLEAN NOT NULL,
            length DOUBLE PRECISION NOT NULL
        )
        "#,
    ),
    (
        "karts",
        r#"
        CREATE TABLE IF NOT EXISTS karts (
            id SERIAL PRIMARY KEY,
            model TEXT NOT NULL,
            state BOOLEAN NOT NULL,
            tires TEXT NOT NULL,
            tires_change_date DATE NOT NULL,
            rain BOOLEAN NOT NULL
        )
        "#,
    ),
    (
        "racers",
        r#"
        CREATE TABLE IF NOT EXISTS racers (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            club_card BOOLEAN NOT NULL,
            date_of_birth DATE NOT NULL,
            date_of_registration DATE NOT NULL,
            best_time TIME NOT NULL
        )
        "#,
    ),
    (
        "workers",
        r#"
        CREATE TABLE IF NOT EXISTS workers (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            date_of_birth DATE NOT NULL,
            status TEXT NOT NULL,
            salary DOUBLE PRECISION NOT NULL
        )
        "#,
    ),
    (
        "races",
        r#"
        CREATE TABLE IF NOT EXISTS races (
            id SERIAL PRIMARY KEY,
            track_id INTEGER NOT NULL REFERENCES tracks (id),
            race_date DATE
        )
        "#,
    ),
    (
        "workers_races",
        r#"
        CREATE TABLE IF NOT EXISTS workers_races (
            id SERIAL PRIMARY KEY,
            worker_id INTEGER NOT NULL REFERENCES workers (id),
            race_id INTEGER NOT NULL REFERENCES races (id)
        )
        "#,
    ),
    (
        "race_racer_karts",
        r#"
        CREATE TABLE IF NOT EXISTS race_racer_karts (
            id SERIAL PRIMARY KEY,
            race_id INTEGER NOT NULL REFERENCES races (id),
            racer_id INTEGER NOT NULL REFERENCES racers (id),
            kart_id INTEGER NOT NULL REFERENCES karts (id),
            duration TIME NOT NULL
        )
        "#,
    ),
];

/// Create every club table that does not exist yet. Existing tables are left untouched.
pub async fn create_tables(pool: &PgPool) -> Result<(), AppError> {
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "create table if not exists");
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database named in `database_url` exists; create it if not. Connects to the
/// `postgres` admin database on the same server to run CREATE DATABASE. Call before creating
/// the main pool. When the admin database is unreachable the check is skipped with a warning,
/// and the main pool connect reports whether the target database is usable.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = admin_options(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let mut conn = match admin.connect().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::warn!(
                error = %e,
                database = %db_name,
                "admin database unreachable, skipping database check"
            );
            return Ok(());
        }
    };
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Connect options for the `postgres` admin database on the server of `database_url`,
/// plus the target database name from that URL.
fn admin_options(database_url: &str) -> Result<(PgConnectOptions, String), ConfigError> {
    let options = PgConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
    let db_name = options.get_database().unwrap_or_default().to_string();
    Ok((options.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
