use async_trait::async_trait;
use core_types::{Country, Gender, GoldMedal, Season};

/// The read-only data source the engine pulls `Country` and `GoldMedal` rows from.
///
/// All lookups are exact matches. Implementations return rows in a stable
/// order (the order the engine treats as "store order" when it does not sort),
/// and each call must observe a consistent snapshot. Errors are passed back to
/// the engine's caller untouched.
#[async_trait]
pub trait RecordStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn find_all_countries(&self) -> Result<Vec<Country>, Self::Error>;

    async fn find_country_by_name(&self, name: &str) -> Result<Option<Country>, Self::Error>;

    async fn find_medals_by_country(&self, country: &str) -> Result<Vec<GoldMedal>, Self::Error>;

    async fn find_medals_by_country_and_season(
        &self,
        country: &str,
        season: Season,
    ) -> Result<Vec<GoldMedal>, Self::Error>;

    async fn find_medals_by_country_and_gender(
        &self,
        country: &str,
        gender: Gender,
    ) -> Result<Vec<GoldMedal>, Self::Error>;

    /// Every medal of the season, across all countries.
    async fn find_medals_by_season(&self, season: Season) -> Result<Vec<GoldMedal>, Self::Error>;

    async fn find_medals_by_year(&self, year: i32) -> Result<Vec<GoldMedal>, Self::Error>;
}
