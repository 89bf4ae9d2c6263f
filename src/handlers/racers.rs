use crate::error::AppError;
use crate::extractors::DbSession;
use crate::model::{Id, RaceResult, Racer, RacerBase};
use crate::service;
use axum::{extract::Path, Json};

#[utoipa::path(get, path = "/racers", tag = "racers",
    responses((status = 200, description = "All racers", body = Vec<Racer>)))]
pub async fn list_racers(mut session: DbSession) -> Result<Json<Vec<Racer>>, AppError> {
    Ok(Json(service::read_all_racers(&mut session).await?))
}

#[utoipa::path(get, path = "/racers/{id}", tag = "racers",
    params(("id" = i32, Path, description = "Racer id")),
    responses(
        (status = 200, description = "The racer", body = Racer),
        (status = 404, description = "No racer with this id"),
    ))]
pub async fn get_racer(
    mut session: DbSession,
    Path(id): Path<Id>,
) -> Result<Json<Racer>, AppError> {
    let racer = service::read_racer_by_id(&mut session, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("racer {} not found", id)))?;
    Ok(Json(racer))
}

#[utoipa::path(post, path = "/racers", tag = "racers", request_body = RacerBase,
    responses((status = 200, description = "Created racer", body = Racer)))]
pub async fn create_racer(
    mut session: DbSession,
    Json(body): Json<RacerBase>,
) -> Result<Json<Racer>, AppError> {
    Ok(Json(service::create_racer(&mut session, &body).await?))
}

#[utoipa::path(get, path = "/racers/{id}/history", tag = "race results",
    params(("id" = i32, Path, description = "Racer id")),
    responses(
        (status = 200, description = "Every race result of this racer", body = Vec<RaceResult>)
    ))]
pub async fn racer_history(
    mut session: DbSession,
    Path(id): Path<Id>,
) -> Result<Json<Vec<RaceResult>>, AppError> {
    Ok(Json(service::get_racer_history(&mut session, id).await?))
}
