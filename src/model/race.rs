use super::Id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceBase {
    /// References `tracks.id`; checked before insert.
    pub track_id: Id,
    #[serde(default)]
    pub race_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Race {
    pub id: Id,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: RaceBase,
}
