use crate::error::AppError;
use crate::extractors::DbSession;
use crate::model::{Id, Race, Track, TrackBase};
use crate::service;
use axum::{extract::Path, Json};

#[utoipa::path(get, path = "/tracks", tag = "tracks",
    responses((status = 200, description = "All tracks", body = Vec<Track>)))]
pub async fn list_tracks(mut session: DbSession) -> Result<Json<Vec<Track>>, AppError> {
    Ok(Json(service::read_all_tracks(&mut session).await?))
}

#[utoipa::path(get, path = "/tracks/{id}", tag = "tracks",
    params(("id" = i32, Path, description = "Track id")),
    responses(
        (status = 200, description = "The track", body = Track),
        (status = 404, description = "No track with this id"),
    ))]
pub async fn get_track(
    mut session: DbSession,
    Path(id): Path<Id>,
) -> Result<Json<Track>, AppError> {
    let track = service::read_track_by_id(&mut session, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("track {} not found", id)))?;
    Ok(Json(track))
}

#[utoipa::path(post, path = "/tracks", tag = "tracks", request_body = TrackBase,
    responses((status = 200, description = "Created track", body = Track)))]
pub async fn create_track(
    mut session: DbSession,
    Json(body): Json<TrackBase>,
) -> Result<Json<Track>, AppError> {
    Ok(Json(service::create_track(&mut session, &body).await?))
}

/// Races held on a track. An unknown track yields an empty list.
#[utoipa::path(get, path = "/tracks/{id}/races", tag = "races",
    params(("id" = i32, Path, description = "Track id")),
    responses((status = 200, description = "Races on this track", body = Vec<Race>)))]
pub async fn track_races(
    mut session: DbSession,
    Path(id): Path<Id>,
) -> Result<Json<Vec<Race>>, AppError> {
    Ok(Json(service::get_races_by_track(&mut session, id).await?))
}
