use crate::error::AppError;
use crate::extractors::DbSession;
use crate::model::{Id, Race, RaceBase};
use crate::service;
use axum::{extract::Path, Json};

#[utoipa::path(get, path = "/races", tag = "races",
    responses((status = 200, description = "All races", body = Vec<Race>)))]
pub async fn list_races(mut session: DbSession) -> Result<Json<Vec<Race>>, AppError> {
    Ok(Json(service::read_all_races(&mut session).await?))
}

#[utoipa::path(get, path = "/races/{id}", tag = "races",
    params(("id" = i32, Path, description = "Race id")),
    responses(
        (status = 200, description = "The race", body = Race),
        (status = 404, description = "No race with this id"),
    ))]
pub async fn get_race(mut session: DbSession, Path(id): Path<Id>) -> Result<Json<Race>, AppError> {
    let race = service::read_race_by_id(&mut session, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("race {} not found", id)))?;
    Ok(Json(race))
}

/// Create a race after checking that its track exists.
#[utoipa::path(post, path = "/races", tag = "races", request_body = RaceBase,
    responses(
        (status = 200, description = "Created race", body = Race),
        (status = 400, description = "track_id does not reference an existing track"),
    ))]
pub async fn create_race(
    mut session: DbSession,
    Json(body): Json<RaceBase>,
) -> Result<Json<Race>, AppError> {
    if service::read_track_by_id(&mut session, body.track_id).await?.is_none() {
        return Err(AppError::InvalidReference(format!(
            "track {} does not exist",
            body.track_id
        )));
    }
    Ok(Json(service::create_race(&mut session, &body).await?))
}
