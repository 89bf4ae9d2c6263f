use super::Id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct KartBase {
    pub model: String,
    pub state: bool,
    pub tires: String,
    pub tires_change_date: NaiveDate,
    /// Fitted for wet conditions.
    pub rain: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Kart {
    pub id: Id,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub base: KartBase,
}

/// Body of `PUT /karts/{id}`. Absent or null fields keep their stored value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct KartUpdate {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub state: Option<bool>,
    #[serde(default)]
    pub tires: Option<String>,
    #[serde(default)]
    pub tires_change_date: Option<NaiveDate>,
    #[serde(default)]
    pub rain: Option<bool>,
}

impl Kart {
    /// Overwrite each field for which the update carries a value.
    pub fn apply(&mut self, update: KartUpdate) {
        let base = &mut self.base;
        if let Some(state) = update.state {
            base.state = state;
        }
        if let Some(model) = update.model {
            base.model = model;
        }
        if let Some(tires) = update.tires {
            base.tires = tires;
        }
        if let Some(date) = update.tires_change_date {
            base.tires_change_date = date;
        }
        if let Some(rain) = update.rain {
            base.rain = rain;
        }
    }
}
