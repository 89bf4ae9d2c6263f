//! Worker-to-race assignments (`workers_races`).

use crate::error::AppError;
use crate::model::{Id, WorkerAssignment, WorkerAssignmentBase};
use sqlx::PgConnection;

const SELECT_ASSIGNMENTS: &str = "SELECT id, worker_id, race_id FROM workers_races";

pub async fn create_worker_assignment(
    conn: &mut PgConnection,
    assignment: &WorkerAssignmentBase,
) -> Result<WorkerAssignment, AppError> {
    let sql = r#"
        INSERT INTO workers_races (worker_id, race_id)
        VALUES ($1, $2)
        RETURNING id, worker_id, race_id
    "#;
    tracing::debug!(sql = %sql, "query");
    let row = sqlx::query_as::<_, WorkerAssignment>(sql)
        .bind(assignment.worker_id)
        .bind(assignment.race_id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn get_worker_assignments(
    conn: &mut PgConnection,
    worker_id: Id,
) -> Result<Vec<WorkerAssignment>, AppError> {
    let sql = format!("{} WHERE worker_id = $1 ORDER BY id", SELECT_ASSIGNMENTS);
    tracing::debug!(sql = %sql, worker_id, "query");
    let rows = sqlx::query_as::<_, WorkerAssignment>(&sql)
        .bind(worker_id)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

pub async fn get_race_assignments(
    conn: &mut PgConnection,
    race_id: Id,
) -> Result<Vec<WorkerAssignment>, AppError> {
    let sql = format!("{} WHERE race_id = $1 ORDER BY id", SELECT_ASSIGNMENTS);
    tracing::debug!(sql = %sql, race_id, "query");
    let rows = sqlx::query_as::<_, WorkerAssignment>(&sql)
        .bind(race_id)
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}
