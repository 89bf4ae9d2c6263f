use super::Id;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RacerBase {
    pub name: String,
    pub club_card: bool,
    pub date_of_birth: NaiveDate,
    pub date_of_registration: NaiveDate,
    #[schema(value_type = String, example = "01:25:30")]
    pub best_time: NaiveTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Racer {
    pub id: Id,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: RacerBase,
}
