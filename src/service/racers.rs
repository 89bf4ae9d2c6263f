use crate::error::AppError;
use crate::model::{Id, Racer, RacerBase};
use sqlx::PgConnection;

const SELECT_RACERS: &str =
    "SELECT id, name, club_card, date_of_birth, date_of_registration, best_time FROM racers";

pub async fn read_all_racers(conn: &mut PgConnection) -> Result<Vec<Racer>, AppError> {
    let sql = format!("{} ORDER BY id", SELECT_RACERS);
    tracing::debug!(sql = %sql, "query");
    let rows = sqlx::query_as::<_, Racer>(&sql).fetch_all(&mut *conn).await?;
    Ok(rows)
}

pub async fn read_racer_by_id(conn: &mut PgConnection, id: Id) -> Result<Option<Racer>, AppError> {
    let sql = format!("{} WHERE id = $1", SELECT_RACERS);
    tracing::debug!(sql = %sql, id, "query");
    let row = sqlx::query_as::<_, Racer>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn create_racer(conn: &mut PgConnection, racer: &RacerBase) -> Result<Racer, AppError> {
    let sql = r#"
        INSERT INTO racers (name, club_card, date_of_birth, date_of_registration, best_time)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, club_card, date_of_birth, date_of_registration, best_time
    "#;
    tracing::debug!(sql = %sql, "query");
    let row = sqlx::query_as::<_, Racer>(sql)
        .bind(&racer.name)
        .bind(racer.club_card)
        .bind(racer.date_of_birth)
        .bind(racer.date_of_registration)
        .bind(racer.best_time)
        .fetch_one(&mut *conn)
        .await?;
    Ok(row)
}
