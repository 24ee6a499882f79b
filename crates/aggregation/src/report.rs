use core_types::Country;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A country together with its gold medal count at the time of the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySummary {
    #[serde(flatten)]
    pub country: Country,
    pub medal_count: usize,
}

/// Per-country statistics.
///
/// Season-derived fields are `None` when the country has no wins in that
/// season, which callers read as "never won there". The two gender counts are
/// always present and may be zero. If the country is unknown only
/// `country_name` is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetails {
    pub country_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gdp: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_medal_count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_summer_wins: Option<usize>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub percentage_summer_wins: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_first_summer_win: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_winter_wins: Option<usize>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub percentage_winter_wins: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_first_winter_win: Option<i32>,

    pub number_won_by_female_athletes: usize,
    pub number_won_by_male_athletes: usize,
}

impl CountryDetails {
    /// The result for a country the store does not know about.
    pub fn name_only(country_name: impl Into<String>) -> Self {
        Self {
            country_name: country_name.into(),
            gdp: None,
            population: None,
            total_medal_count: None,
            number_summer_wins: None,
            percentage_summer_wins: None,
            year_first_summer_win: None,
            number_winter_wins: None,
            percentage_winter_wins: None,
            year_first_winter_win: None,
            number_won_by_female_athletes: 0,
            number_won_by_male_athletes: 0,
        }
    }
}

/// Wins of one country in one season, relative to every event of that season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct SeasonStats {
    pub number_wins: Option<usize>,
    pub percentage_wins: Option<Decimal>,
    pub year_first_win: Option<i32>,
}
