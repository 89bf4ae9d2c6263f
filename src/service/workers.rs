use crate::error::AppError;
use crate::model::{Id, Worker, WorkerBase};
use sqlx::PgConnection;

const SELECT_WORKERS: &str = "SELECT id, name, date_of_birth, status, salary FROM workers";

pub async fn read_all_workers(conn: &mut PgConnection) -> Result<Vec<Worker>, AppError> {
    let sql = format!("{} ORDER BY id", SELECT_WORKERS);
    tracing::debug!(sql = %sql, "query");
    let rows = sqlx::query_as::<_, Worker>(&sql).fetch_all(&mut *conn).await?;
    Ok(rows)
}

pub async fn read_worker_by_id(
    conn: &mut PgConnection,
    id: Id,
) -> Result<Option<Worker>, AppError> {
    let sql = format!("{} WHERE id = $1", SELECT_WORKERS);
    tracing::debug!(sql = %sql, id, "query");
    let row = sqlx::query_as::<_, Worker>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn create_worker(
    conn: &mut PgConnection,
    worker: &WorkerBase,
) -> Result<Worker, AppError> {
    let sql = r#"
        INSERT INTO workers (name, date_of_birth, status, salary)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, date_of_birth, status, salary
    "#;
    tracing::debug!(sql = %sql, "query");
    let row = sqlx::query_as::<_, Worker>(sql)
        .bind(&worker.name)
        .bind(worker.date_of_birth)
        .bind(&worker.status)
        .bind(worker.salary)
        .fetch_one(&mut *conn)
        .await?;
    Ok(row)
}
