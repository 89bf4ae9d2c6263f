//! Race result handlers. Only `race_id` is checked before insert; racer and kart
//! references are left to the store's foreign keys.

use crate::error::AppError;
use crate::extractors::DbSession;
use crate::model::{Id, RaceResult, RaceResultBase};
use crate::service;
use axum::{extract::Path, Json};

#[utoipa::path(get, path = "/race-results", tag = "race results",
    responses((status = 200, description = "All race results", body = Vec<RaceResult>)))]
pub async fn list_race_results(mut session: DbSession) -> Result<Json<Vec<RaceResult>>, AppError> {
    Ok(Json(service::read_all_race_results(&mut session).await?))
}

#[utoipa::path(post, path = "/race-results", tag = "race results", request_body = RaceResultBase,
    responses(
        (status = 200, description = "Recorded result", body = RaceResult),
        (status = 400, description = "race_id does not reference an existing race"),
    ))]
pub async fn create_race_result(
    mut session: DbSession,
    Json(body): Json<RaceResultBase>,
) -> Result<Json<RaceResult>, AppError> {
    if service::read_race_by_id(&mut session, body.race_id).await?.is_none() {
        return Err(AppError::InvalidReference(format!(
            "race {} does not exist",
            body.race_id
        )));
    }
    Ok(Json(service::create_race_racer_kart(&mut session, &body).await?))
}

#[utoipa::path(get, path = "/races/{id}/results", tag = "race results",
    params(("id" = i32, Path, description = "Race id")),
    responses((status = 200, description = "Results of this race", body = Vec<RaceResult>)))]
pub async fn results_of_race(
    mut session: DbSession,
    Path(id): Path<Id>,
) -> Result<Json<Vec<RaceResult>>, AppError> {
    Ok(Json(service::get_race_results(&mut session, id).await?))
}
