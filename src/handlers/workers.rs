use crate::error::AppError;
use crate::extractors::DbSession;
use crate::model::{Id, Worker, WorkerAssignment, WorkerAssignmentBase, WorkerBase};
use crate::service;
use axum::{extract::Path, Json};

#[utoipa::path(get, path = "/workers", tag = "workers",
    responses((status = 200, description = "All workers", body = Vec<Worker>)))]
pub async fn list_workers(mut session: DbSession) -> Result<Json<Vec<Worker>>, AppError> {
    Ok(Json(service::read_all_workers(&mut session).await?))
}

#[utoipa::path(get, path = "/workers/{id}", tag = "workers",
    params(("id" = i32, Path, description = "Worker id")),
    responses(
        (status = 200, description = "The worker", body = Worker),
        (status = 404, description = "No worker with this id"),
    ))]
pub async fn get_worker(
    mut session: DbSession,
    Path(id): Path<Id>,
) -> Result<Json<Worker>, AppError> {
    let worker = service::read_worker_by_id(&mut session, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("worker {} not found", id)))?;
    Ok(Json(worker))
}

#[utoipa::path(post, path = "/workers", tag = "workers", request_body = WorkerBase,
    responses((status = 200, description = "Created worker", body = Worker)))]
pub async fn create_worker(
    mut session: DbSession,
    Json(body): Json<WorkerBase>,
) -> Result<Json<Worker>, AppError> {
    Ok(Json(service::create_worker(&mut session, &body).await?))
}

/// Assign a worker to a race. Neither id is pre-checked.
#[utoipa::path(post, path = "/worker-assignments", tag = "workers",
    request_body = WorkerAssignmentBase,
    responses((status = 200, description = "Created assignment", body = WorkerAssignment)))]
pub async fn create_worker_assignment(
    mut session: DbSession,
    Json(body): Json<WorkerAssignmentBase>,
) -> Result<Json<WorkerAssignment>, AppError> {
    Ok(Json(service::create_worker_assignment(&mut session, &body).await?))
}

#[utoipa::path(get, path = "/workers/{id}/races", tag = "workers",
    params(("id" = i32, Path, description = "Worker id")),
    responses(
        (status = 200, description = "Assignments of this worker", body = Vec<WorkerAssignment>)
    ))]
pub async fn worker_races(
    mut session: DbSession,
    Path(id): Path<Id>,
) -> Result<Json<Vec<WorkerAssignment>>, AppError> {
    Ok(Json(service::get_worker_assignments(&mut session, id).await?))
}

#[utoipa::path(get, path = "/races/{id}/workers", tag = "workers",
    params(("id" = i32, Path, description = "Race id")),
    responses(
        (status = 200, description = "Workers assigned to this race", body = Vec<WorkerAssignment>)
    ))]
pub async fn race_workers(
    mut session: DbSession,
    Path(id): Path<Id>,
) -> Result<Json<Vec<WorkerAssignment>>, AppError> {
    Ok(Json(service::get_race_assignments(&mut session, id).await?))
}
