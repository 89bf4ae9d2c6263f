//! Race participation records (`race_racer_karts`): who drove which kart in which race.

use crate::error::AppError;
use crate::model::{Id, RaceResult, RaceResultBase};
use sqlx::PgConnection;

const SELECT_RESULTS: &str =
    "SELECT id, race_id, racer_id, kart_id, duration FROM race_racer_karts";

/// Insert a participation record. Only the store's foreign keys guard `racer_id` and `kart_id`.
pub async fn create_race_racer_kart(
    conn: &mut PgConnection,
    result: &RaceResultBase,
) -> Result<RaceResult, AppError> {
    let sql = r#"
        INSERT INTO race_racer_karts (race_id, racer_id, kart_id, duration)
        VALUES ($1, $2, $3, $4)
        RETURNING id, race_id, racer_id, kart_id, duration
    "#;
    tracing::debug!(sql = %sql, "query");
    let row = sqlx::query_as::<_, RaceResult>(sql)
        .bind(result.race_id)
        .bind(result.racer_id)
        .bind(result.kart_id)
        .bind(result.duration)
        .fetch_one(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn read_all_race_results(conn: &mut PgConnection) -> Result<Vec<RaceResult>, AppError> {
    let sql = format!("{} ORDER BY id", SELECT_RESULTS);
    tracing::debug!(sql = %sql, "query");
    let rows = sqlx::query_as::<_, RaceResult>(&sql).fetch_all(&mut *conn).await?;
    Ok(rows)
}

pub async fn get_race_results(
    conn: &mut PgConnection,
    race_id: Id,
) -> Result<Vec<RaceResult>, AppError> {
    filter_by(conn, "race_id", race_id).await
}

pub async fn get_racer_history(
    conn: &mut PgConnection,
    racer_id: Id,
) -> Result<Vec<RaceResult>, AppError> {
    filter_by(conn, "racer_id", racer_id).await
}

pub async fn get_kart_results(
    conn: &mut PgConnection,
    kart_id: Id,
) -> Result<Vec<RaceResult>, AppError> {
    filter_by(conn, "kart_id", kart_id).await
}

/// `column` is always one of the fixed foreign-key names above, never caller input.
async fn filter_by(
    conn: &mut PgConnection,
    column: &'static str,
    value: Id,
) -> Result<Vec<RaceResult>, AppError> {
    let sql = format!("{} WHERE {} = $1 ORDER BY id", SELECT_RESULTS, column);
    tracing::debug!(sql = %sql, value, "query");
    let rows = sqlx::query_as::<_, RaceResult>(&sql)
        .bind(value)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}
