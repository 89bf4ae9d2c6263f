use super::Id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkerBase {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub status: String,
    pub salary: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Worker {
    pub id: Id,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: WorkerBase,
}
