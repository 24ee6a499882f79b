use crate::DbError;
use aggregation::RecordStore;
use async_trait::async_trait;
use core_types::{Country, Gender, GoldMedal, Season};
use sqlx::postgres::PgPool;
use sqlx::FromRow;

const COUNTRY_COLUMNS: &str = "name, gdp, population";
const MEDAL_COLUMNS: &str = "id, year, season, city, name, country, gender, event";

/// The `DbRepository` provides the PostgreSQL-backed `RecordStore`.
/// Rows are returned in primary-key order, which is the store order the
/// engine relies on for tie-breaking.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

/// A row from the `gold_medals` table, before season and gender are parsed.
#[derive(Debug, Clone, FromRow)]
pub struct DbGoldMedal {
    pub id: i64,
    pub year: i32,
    pub season: String,
    pub city: String,
    pub name: String,
    pub country: String,
    pub gender: String,
    pub event: String,
}

impl TryFrom<DbGoldMedal> for GoldMedal {
    type Error = DbError;

    fn try_from(row: DbGoldMedal) -> Result<Self, Self::Error> {
        let invalid = |source: core_types::CoreError| DbError::InvalidRow { id: row.id, source };
        let season: Season = row.season.parse().map_err(invalid)?;
        let gender: Gender = row.gender.parse().map_err(invalid)?;

        Ok(GoldMedal {
            id: row.id,
            year: row.year,
            season,
            city: row.city,
            name: row.name,
            country: row.country,
            gender,
            event: row.event,
        })
    }
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs a `gold_medals` query and converts every row.
    async fn fetch_medals<'q>(
        &self,
        query: sqlx::query::QueryAs<'q, sqlx::Postgres, DbGoldMedal, sqlx::postgres::PgArguments>,
    ) -> Result<Vec<GoldMedal>, DbError> {
        query
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(GoldMedal::try_from)
            .collect()
    }
}

#[async_trait]
impl RecordStore for DbRepository {
    type Error = DbError;

    async fn find_all_countries(&self) -> Result<Vec<Country>, DbError> {
        let sql = format!("SELECT {COUNTRY_COLUMNS} FROM countries ORDER BY id");
        let countries = sqlx::query_as::<_, Country>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(countries)
    }

    async fn find_country_by_name(&self, name: &str) -> Result<Option<Country>, DbError> {
        let sql = format!("SELECT {COUNTRY_COLUMNS} FROM countries WHERE name = $1");
        let country = sqlx::query_as::<_, Country>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(country)
    }

    async fn find_medals_by_country(&self, country: &str) -> Result<Vec<GoldMedal>, DbError> {
        let sql = format!("SELECT {MEDAL_COLUMNS} FROM gold_medals WHERE country = $1 ORDER BY id");
        self.fetch_medals(sqlx::query_as(&sql).bind(country)).await
    }

    async fn find_medals_by_country_and_season(
        &self,
        country: &str,
        season: Season,
    ) -> Result<Vec<GoldMedal>, DbError> {
        let sql = format!(
            "SELECT {MEDAL_COLUMNS} FROM gold_medals WHERE country = $1 AND LOWER(season) = $2 ORDER BY id"
        );
        self.fetch_medals(sqlx::query_as(&sql).bind(country).bind(season.as_str()))
            .await
    }

    async fn find_medals_by_country_and_gender(
        &self,
        country: &str,
        gender: Gender,
    ) -> Result<Vec<GoldMedal>, DbError> {
        let sql = format!(
            "SELECT {MEDAL_COLUMNS} FROM gold_medals WHERE country = $1 AND LOWER(gender) = $2 ORDER BY id"
        );
        self.fetch_medals(sqlx::query_as(&sql).bind(country).bind(gender.as_str()))
            .await
    }

    async fn find_medals_by_season(&self, season: Season) -> Result<Vec<GoldMedal>, DbError> {
        let sql = format!("SELECT {MEDAL_COLUMNS} FROM gold_medals WHERE LOWER(season) = $1 ORDER BY id");
        self.fetch_medals(sqlx::query_as(&sql).bind(season.as_str())).await
    }

    async fn find_medals_by_year(&self, year: i32) -> Result<Vec<GoldMedal>, DbError> {
        let sql = format!("SELECT {MEDAL_COLUMNS} FROM gold_medals WHERE year = $1 ORDER BY id");
        self.fetch_medals(sqlx::query_as(&sql).bind(year)).await
    }
}
