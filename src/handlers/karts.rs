//! Kart handlers: the full create/read/update/delete set.

use crate::error::AppError;
use crate::extractors::DbSession;
use crate::model::{Id, Kart, KartBase, KartUpdate, RaceResult};
use crate::response::MessageBody;
use crate::service;
use axum::{extract::Path, Json};

fn kart_not_found(id: Id) -> AppError {
    AppError::NotFound(format!("kart {} not found", id))
}

#[utoipa::path(get, path = "/karts", tag = "karts",
    responses((status = 200, description = "All karts", body = Vec<Kart>)))]
pub async fn list_karts(mut session: DbSession) -> Result<Json<Vec<Kart>>, AppError> {
    Ok(Json(service::read_all_karts(&mut session).await?))
}

#[utoipa::path(get, path = "/karts/{id}", tag = "karts",
    params(("id" = i32, Path, description = "Kart id")),
    responses(
        (status = 200, description = "The kart", body = Kart),
        (status = 404, description = "No kart with this id"),
    ))]
pub async fn get_kart(mut session: DbSession, Path(id): Path<Id>) -> Result<Json<Kart>, AppError> {
    let kart = service::read_kart_by_id(&mut session, id)
        .await?
        .ok_or_else(|| kart_not_found(id))?;
    Ok(Json(kart))
}

#[utoipa::path(post, path = "/karts", tag = "karts", request_body = KartBase,
    responses((status = 200, description = "Created kart", body = Kart)))]
pub async fn create_kart(
    mut session: DbSession,
    Json(body): Json<KartBase>,
) -> Result<Json<Kart>, AppError> {
    Ok(Json(service::create_kart(&mut session, &body).await?))
}

#[utoipa::path(put, path = "/karts/{id}", tag = "karts", request_body = KartUpdate,
    params(("id" = i32, Path, description = "Kart id")),
    responses(
        (status = 200, description = "Updated kart", body = Kart),
        (status = 404, description = "No kart with this id"),
    ))]
pub async fn update_kart(
    mut session: DbSession,
    Path(id): Path<Id>,
    Json(body): Json<KartUpdate>,
) -> Result<Json<Kart>, AppError> {
    let kart = service::update_kart(&mut session, id, body)
        .await?
        .ok_or_else(|| kart_not_found(id))?;
    Ok(Json(kart))
}

#[utoipa::path(delete, path = "/karts/{id}", tag = "karts",
    params(("id" = i32, Path, description = "Kart id")),
    responses(
        (status = 200, description = "Kart removed", body = MessageBody),
        (status = 404, description = "No kart with this id"),
    ))]
pub async fn delete_kart(
    mut session: DbSession,
    Path(id): Path<Id>,
) -> Result<Json<MessageBody>, AppError> {
    if service::delete_kart(&mut session, id).await? {
        tracing::info!(kart_id = id, "kart deleted");
        return Ok(Json(MessageBody::new(format!("kart {} deleted", id))));
    }
    Err(kart_not_found(id))
}

#[utoipa::path(get, path = "/karts/{id}/results", tag = "race results",
    params(("id" = i32, Path, description = "Kart id")),
    responses(
        (status = 200, description = "Race results driven on this kart", body = Vec<RaceResult>)
    ))]
pub async fn kart_results(
    mut session: DbSession,
    Path(id): Path<Id>,
) -> Result<Json<Vec<RaceResult>>, AppError> {
    Ok(Json(service::get_kart_results(&mut session, id).await?))
}
