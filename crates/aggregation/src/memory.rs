use crate::error::AggregationError;
use crate::store::RecordStore;
use async_trait::async_trait;
use core_types::{Country, Gender, GoldMedal, Season};
use serde::Deserialize;
use std::convert::Infallible;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A `RecordStore` backed by two vectors. Queries filter in insertion order,
/// which is therefore the store order seen by the engine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoryStore {
    #[serde(default)]
    countries: Vec<Country>,
    #[serde(default)]
    medals: Vec<GoldMedal>,
}

impl MemoryStore {
    pub fn new(countries: Vec<Country>, medals: Vec<GoldMedal>) -> Self {
        Self { countries, medals }
    }

    /// Loads a fixture of the form `{ "countries": [...], "medals": [...] }`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AggregationError> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let store: MemoryStore = serde_json::from_reader(reader)?;
        tracing::info!(
            path = %path.as_ref().display(),
            countries = store.countries.len(),
            medals = store.medals.len(),
            "Loaded fixture store."
        );
        Ok(store)
    }

    fn medals_where<F>(&self, predicate: F) -> Vec<GoldMedal>
    where
        F: Fn(&GoldMedal) -> bool,
    {
        self.medals.iter().filter(|m| predicate(m)).cloned().collect()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    type Error = Infallible;

    async fn find_all_countries(&self) -> Result<Vec<Country>, Self::Error> {
        Ok(self.countries.clone())
    }

    async fn find_country_by_name(&self, name: &str) -> Result<Option<Country>, Self::Error> {
        Ok(self.countries.iter().find(|c| c.name == name).cloned())
    }

    async fn find_medals_by_country(&self, country: &str) -> Result<Vec<GoldMedal>, Self::Error> {
        Ok(self.medals_where(|m| m.country == country))
    }

    async fn find_medals_by_country_and_season(
        &self,
        country: &str,
        season: Season,
    ) -> Result<Vec<GoldMedal>, Self::Error> {
        Ok(self.medals_where(|m| m.country == country && m.season == season))
    }

    async fn find_medals_by_country_and_gender(
        &self,
        country: &str,
        gender: Gender,
    ) -> Result<Vec<GoldMedal>, Self::Error> {
        Ok(self.medals_where(|m| m.country == country && m.gender == gender))
    }

    async fn find_medals_by_season(&self, season: Season) -> Result<Vec<GoldMedal>, Self::Error> {
        Ok(self.medals_where(|m| m.season == season))
    }

    async fn find_medals_by_year(&self, year: i32) -> Result<Vec<GoldMedal>, Self::Error> {
        Ok(self.medals_where(|m| m.year == year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn medal(id: i64, country: &str, year: i32, season: Season, gender: Gender) -> GoldMedal {
        GoldMedal {
            id,
            year,
            season,
            city: "Somewhere".to_string(),
            name: format!("Athlete {id}"),
            country: country.to_string(),
            gender,
            event: "100m".to_string(),
        }
    }

    #[tokio::test]
    async fn lookups_are_exact_and_keep_insertion_order() {
        let store = MemoryStore::new(
            vec![Country { name: "Kenya".to_string(), gdp: None, population: None }],
            vec![
                medal(1, "Kenya", 2012, Season::Summer, Gender::Female),
                medal(2, "Norway", 2014, Season::Winter, Gender::Male),
                medal(3, "Kenya", 2008, Season::Summer, Gender::Male),
            ],
        );

        assert!(store.find_country_by_name("kenya").await.unwrap().is_none());
        assert!(store.find_country_by_name("Kenya").await.unwrap().is_some());

        let ids: Vec<i64> = store
            .find_medals_by_country("Kenya")
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);

        let female = store
            .find_medals_by_country_and_gender("Kenya", Gender::Female)
            .await
            .unwrap();
        assert_eq!(female.len(), 1);
        assert_eq!(store.find_medals_by_season(Season::Winter).await.unwrap().len(), 1);
        assert_eq!(store.find_medals_by_year(2008).await.unwrap()[0].id, 3);
    }

    #[test]
    fn loads_fixture_files_and_reports_bad_json() {
        let mut good = NamedTempFile::new().unwrap();
        write!(
            good,
            r#"{{ "countries": [{{ "name": "Kenya", "gdp": 90, "population": 50000000 }}],
                 "medals": [{{ "id": 1, "year": 2004, "season": "summer", "city": "Athens",
                              "name": "Ezekiel Kemboi", "country": "Kenya", "gender": "male",
                              "event": "3000m Steeplechase" }}] }}"#
        )
        .unwrap();
        let store = MemoryStore::from_json_file(good.path()).unwrap();
        assert_eq!(store.countries.len(), 1);
        assert_eq!(store.medals.len(), 1);

        let mut bad = NamedTempFile::new().unwrap();
        write!(bad, "not json").unwrap();
        assert!(matches!(
            MemoryStore::from_json_file(bad.path()),
            Err(AggregationError::FixtureFormat(_))
        ));

        let dir = tempdir().unwrap();
        assert!(matches!(
            MemoryStore::from_json_file(dir.path().join("missing.json")),
            Err(AggregationError::FixtureIo(_))
        ));
    }
}
