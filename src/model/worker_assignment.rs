use super::Id;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkerAssignmentBase {
    pub worker_id: Id,
    pub race_id: Id,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkerAssignment {
    pub id: Id,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: WorkerAssignmentBase,
}
