//! Kart persistence. Karts are the only entity with update and delete paths.

use crate::error::AppError;
use crate::model::{Id, Kart, KartBase, KartUpdate};
use sqlx::PgConnection;

const SELECT_KARTS: &str =
    "SELECT id, model, state, tires, tires_change_date, rain FROM karts";

pub async fn read_all_karts(conn: &mut PgConnection) -> Result<Vec<Kart>, AppError> {
    let sql = format!("{} ORDER BY id", SELECT_KARTS);
    tracing::debug!(sql = %sql, "query");
    let rows = sqlx::query_as::<_, Kart>(&sql).fetch_all(&mut *conn).await?;
    Ok(rows)
}

pub async fn read_kart_by_id(conn: &mut PgConnection, id: Id) -> Result<Option<Kart>, AppError> {
    let sql = format!("{} WHERE id = $1", SELECT_KARTS);
    tracing::debug!(sql = %sql, id, "query");
    let row = sqlx::query_as::<_, Kart>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn create_kart(conn: &mut PgConnection, kart: &KartBase) -> Result<Kart, AppError> {
    let sql = r#"
        INSERT INTO karts (model, state, tires, tires_change_date, rain)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, model, state, tires, tires_change_date, rain
    "#;
    tracing::debug!(sql = %sql, "query");
    let row = sqlx::query_as::<_, Kart>(sql)
        .bind(&kart.model)
        .bind(kart.state)
        .bind(&kart.tires)
        .bind(kart.tires_change_date)
        .bind(kart.rain)
        .fetch_one(&mut *conn)
        .await?;
    Ok(row)
}

/// Apply the provided fields to kart `id`. Returns `None` when no such kart exists.
pub async fn update_kart(
    conn: &mut PgConnection,
    id: Id,
    update: KartUpdate,
) -> Result<Option<Kart>, AppError> {
    let Some(mut kart) = read_kart_by_id(conn, id).await? else {
        return Ok(None);
    };
    kart.apply(update);
    let sql = r#"
        UPDATE karts
        SET model = $2, state = $3, tires = $4, tires_change_date = $5, rain = $6
        WHERE id = $1
        RETURNING id, model, state, tires, tires_change_date, rain
    "#;
    tracing::debug!(sql = %sql, id, "query");
    let row = sqlx::query_as::<_, Kart>(sql)
        .bind(kart.id)
        .bind(&kart.base.model)
        .bind(kart.base.state)
        .bind(&kart.base.tires)
        .bind(kart.base.tires_change_date)
        .bind(kart.base.rain)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

/// Delete kart `id`. Returns `false` when no such kart exists.
pub async fn delete_kart(conn: &mut PgConnection, id: Id) -> Result<bool, AppError> {
    if read_kart_by_id(conn, id).await?.is_none() {
        return Ok(false);
    }
    let sql = "DELETE FROM karts WHERE id = $1";
    tracing::debug!(sql = %sql, id, "query");
    let result = sqlx::query(sql).bind(id).execute(&mut *conn).await?;
    Ok(result.rows_affected() > 0)
}
