use super::Id;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One racer's participation in a race on a given kart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceResultBase {
    pub race_id: Id,
    pub racer_id: Id,
    pub kart_id: Id,
    #[schema(value_type = String, example = "01:28:15")]
    pub duration: NaiveTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceResult {
    pub id: Id,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: RaceResultBase,
}
