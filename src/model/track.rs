use super::Id;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TrackBase {
    pub name: String,
    pub state: bool,
    pub open: bool,
    /// Lap length in kilometres.
    pub length: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Track {
    pub id: Id,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: TrackBase,
}
