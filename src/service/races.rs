use crate::error::AppError;
use crate::model::{Id, Race, RaceBase};
use sqlx::PgConnection;

const SELECT_RACES: &str = "SELECT id, track_id, race_date FROM races";

pub async fn read_all_races(conn: &mut PgConnection) -> Result<Vec<Race>, AppError> {
    let sql = format!("{} ORDER BY id", SELECT_RACES);
    tracing::debug!(sql = %sql, "query");
    let rows = sqlx::query_as::<_, Race>(&sql).fetch_all(&mut *conn).await?;
    Ok(rows)
}

pub async fn read_race_by_id(conn: &mut PgConnection, id: Id) -> Result<Option<Race>, AppError> {
    let sql = format!("{} WHERE id = $1", SELECT_RACES);
    tracing::debug!(sql = %sql, id, "query");
    let row = sqlx::query_as::<_, Race>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

/// Insert a race. The caller is responsible for checking that `track_id` exists.
pub async fn create_race(conn: &mut PgConnection, race: &RaceBase) -> Result<Race, AppError> {
    let sql = r#"
        INSERT INTO races (track_id, race_date)
        VALUES ($1, $2)
        RETURNING id, track_id, race_date
    "#;
    tracing::debug!(sql = %sql, "query");
    let row = sqlx::query_as::<_, Race>(sql)
        .bind(race.track_id)
        .bind(race.race_date)
        .fetch_one(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn get_races_by_track(
    conn: &mut PgConnection,
    track_id: Id,
) -> Result<Vec<Race>, AppError> {
    let sql = format!("{} WHERE track_id = $1 ORDER BY id", SELECT_RACES);
    tracing::debug!(sql = %sql, track_id, "query");
    let rows = sqlx::query_as::<_, Race>(&sql)
        .bind(track_id)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}
