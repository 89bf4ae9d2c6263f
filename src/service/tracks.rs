use crate::error::AppError;
use crate::model::{Id, Track, TrackBase};
use sqlx::PgConnection;

const SELECT_TRACKS: &str = "SELECT id, name, state, open, length FROM tracks";

pub async fn read_all_tracks(conn: &mut PgConnection) -> Result<Vec<Track>, AppError> {
    let sql = format!("{} ORDER BY id", SELECT_TRACKS);
    tracing::debug!(sql = %sql, "query");
    let rows = sqlx::query_as::<_, Track>(&sql).fetch_all(&mut *conn).await?;
    Ok(rows)
}

pub async fn read_track_by_id(conn: &mut PgConnection, id: Id) -> Result<Option<Track>, AppError> {
    let sql = format!("{} WHERE id = $1", SELECT_TRACKS);
    tracing::debug!(sql = %sql, id, "query");
    let row = sqlx::query_as::<_, Track>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn create_track(conn: &mut PgConnection, track: &TrackBase) -> Result<Track, AppError> {
    let sql = r#"
        INSERT INTO tracks (name, state, open, length)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, state, open, length
    "#;
    tracing::debug!(sql = %sql, "query");
    let row = sqlx::query_as::<_, Track>(sql)
        .bind(&track.name)
        .bind(track.state)
        .bind(track.open)
        .bind(track.length)
        .fetch_one(&mut *conn)
        .await?;
    Ok(row)
}

/// Number of stored tracks. Seeding treats zero as a fresh database.
pub async fn count_tracks(conn: &mut PgConnection) -> Result<i64, AppError> {
    let sql = "SELECT COUNT(*) FROM tracks";
    tracing::debug!(sql = %sql, "query");
    let count: i64 = sqlx::query_scalar(sql).fetch_one(&mut *conn).await?;
    Ok(count)
}
