use crate::enums::{Gender, Season};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A participating nation. `name` is the unique, case-sensitive identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Country {
    pub name: String,
    #[serde(default)]
    pub gdp: Option<Decimal>,
    #[serde(default)]
    pub population: Option<i64>,
}

/// A single gold medal, as won by one athlete (or team) in one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldMedal {
    pub id: i64,
    pub year: i32,
    pub season: Season,
    pub city: String,
    /// The athlete's name.
    pub name: String,
    /// Matches `Country::name`.
    pub country: String,
    pub gender: Gender,
    pub event: String,
}
