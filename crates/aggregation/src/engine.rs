use crate::report::{CountryDetails, CountrySummary, SeasonStats};
use crate::sort::{sort_countries, sort_medals, sort_summaries_by_medals, CountrySortKey, MedalSortKey};
use crate::store::RecordStore;
use core_types::{Gender, GoldMedal, Season};
use rust_decimal::Decimal;

/// A stateless query engine over a `RecordStore`.
///
/// Every method re-reads the store, so results always reflect its current
/// contents. Store errors are returned unchanged; nothing else is an error.
#[derive(Debug, Clone)]
pub struct AggregationEngine<S> {
    store: S,
}

impl<S: RecordStore> AggregationEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists every country with its medal count.
    ///
    /// # Arguments
    ///
    /// * `sort_by` - `name`, `gdp`, `population` or `medals`, in any case. Any
    ///   other value orders by medal count.
    /// * `ascending` - Sort direction. Ties keep store order either way.
    pub async fn list_country_summaries(
        &self,
        sort_by: &str,
        ascending: bool,
    ) -> Result<Vec<CountrySummary>, S::Error> {
        let key = CountrySortKey::parse(sort_by);

        let mut countries = self.store.find_all_countries().await?;
        sort_countries(&mut countries, key, ascending);

        let mut summaries = Vec::with_capacity(countries.len());
        for country in countries {
            let medal_count = self.store.find_medals_by_country(&country.name).await?.len();
            summaries.push(CountrySummary { country, medal_count });
        }

        if key == CountrySortKey::Medals {
            sort_summaries_by_medals(&mut summaries, ascending);
        }

        tracing::debug!(?key, ascending, count = summaries.len(), "Built country summaries.");
        Ok(summaries)
    }

    /// Derives the statistics for one country.
    ///
    /// `country_name` must already be in its stored capitalisation; lookups
    /// are exact. An unknown country yields `CountryDetails::name_only`.
    pub async fn get_country_details(&self, country_name: &str) -> Result<CountryDetails, S::Error> {
        let Some(country) = self.store.find_country_by_name(country_name).await? else {
            tracing::debug!(country = country_name, "Country not found, returning name only.");
            return Ok(CountryDetails::name_only(country_name));
        };

        let total_medal_count = self.store.find_medals_by_country(country_name).await?.len();
        let summer = self.season_stats(country_name, Season::Summer).await?;
        let winter = self.season_stats(country_name, Season::Winter).await?;

        let number_won_by_female_athletes = self
            .store
            .find_medals_by_country_and_gender(country_name, Gender::Female)
            .await?
            .len();
        let number_won_by_male_athletes = self
            .store
            .find_medals_by_country_and_gender(country_name, Gender::Male)
            .await?
            .len();

        Ok(CountryDetails {
            country_name: country_name.to_string(),
            gdp: country.gdp,
            population: country.population,
            total_medal_count: Some(total_medal_count),
            number_summer_wins: summer.number_wins,
            percentage_summer_wins: summer.percentage_wins,
            year_first_summer_win: summer.year_first_win,
            number_winter_wins: winter.number_wins,
            percentage_winter_wins: winter.percentage_wins,
            year_first_winter_win: winter.year_first_win,
            number_won_by_female_athletes,
            number_won_by_male_athletes,
        })
    }

    /// Lists one country's medals ordered by `year`, `season`, `city`, `name`
    /// or `event`. Any other key produces an empty list, even when the
    /// country has medals.
    pub async fn list_country_medals(
        &self,
        country_name: &str,
        sort_by: &str,
        ascending: bool,
    ) -> Result<Vec<GoldMedal>, S::Error> {
        let mut medals = self.store.find_medals_by_country(country_name).await?;

        let key = match sort_by.parse::<MedalSortKey>() {
            Ok(key) => key,
            Err(e) => {
                // TODO: decide with product whether this should become a 400 instead of an empty list.
                tracing::warn!(error = %e, country = country_name, "Returning an empty medal list.");
                return Ok(Vec::new());
            }
        };

        sort_medals(&mut medals, key, ascending);
        Ok(medals)
    }

    /// All medals awarded in `year`, in store order.
    pub async fn list_medals_in_year(&self, year: i32) -> Result<Vec<GoldMedal>, S::Error> {
        self.store.find_medals_by_year(year).await
    }

    async fn season_stats(&self, country_name: &str, season: Season) -> Result<SeasonStats, S::Error> {
        let wins = self
            .store
            .find_medals_by_country_and_season(country_name, season)
            .await?;
        let total_events = self.store.find_medals_by_season(season).await?.len();
        Ok(summarize_season(&wins, total_events))
    }
}

/// Folds a country's wins in one season into its season statistics.
///
/// Counts of zero become `None`. The percentage needs both a win count and a
/// non-zero number of events in the season.
fn summarize_season(wins: &[GoldMedal], total_events: usize) -> SeasonStats {
    let number_wins = (!wins.is_empty()).then_some(wins.len());

    let percentage_wins = match number_wins {
        Some(n) if total_events != 0 => Some(Decimal::from(n) / Decimal::from(total_events)),
        _ => None,
    };

    SeasonStats {
        number_wins,
        percentage_wins,
        year_first_win: wins.iter().map(|m| m.year).min(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use async_trait::async_trait;
    use core_types::Country;
    use rust_decimal_macros::dec;

    fn medal(id: i64, country: &str, year: i32, season: Season, gender: Gender) -> GoldMedal {
        GoldMedal {
            id,
            year,
            season,
            city: format!("City {id}"),
            name: format!("Athlete {id}"),
            country: country.to_string(),
            gender,
            event: format!("Event {id}"),
        }
    }

    fn country(name: &str) -> Country {
        Country { name: name.to_string(), gdp: None, population: None }
    }

    /// Kenya with three summer golds among 100 summer events overall.
    fn kenya_store() -> MemoryStore {
        let mut medals = vec![
            medal(1, "Kenya", 2012, Season::Summer, Gender::Female),
            medal(2, "Kenya", 2004, Season::Summer, Gender::Male),
            medal(3, "Kenya", 2008, Season::Summer, Gender::Female),
        ];
        medals.extend((4..101).map(|id| medal(id, "Elsewhere", 2000, Season::Summer, Gender::Male)));
        medals.push(medal(101, "Norway", 2014, Season::Winter, Gender::Male));

        MemoryStore::new(
            vec![Country {
                name: "Kenya".to_string(),
                gdp: Some(dec!(90)),
                population: Some(50_000_000),
            }],
            medals,
        )
    }

    #[tokio::test]
    async fn country_details_match_the_worked_example() {
        let engine = AggregationEngine::new(kenya_store());
        let details = engine.get_country_details("Kenya").await.unwrap();

        assert_eq!(details.country_name, "Kenya");
        assert_eq!(details.gdp, Some(dec!(90)));
        assert_eq!(details.population, Some(50_000_000));
        assert_eq!(details.total_medal_count, Some(3));
        assert_eq!(details.number_summer_wins, Some(3));
        assert_eq!(details.percentage_summer_wins, Some(dec!(0.03)));
        assert_eq!(details.year_first_summer_win, Some(2004));
        assert_eq!(details.number_winter_wins, None);
        assert_eq!(details.percentage_winter_wins, None);
        assert_eq!(details.year_first_winter_win, None);
        assert_eq!(details.number_won_by_female_athletes, 2);
        assert_eq!(details.number_won_by_male_athletes, 1);
    }

    #[tokio::test]
    async fn unknown_country_gets_name_only() {
        let engine = AggregationEngine::new(kenya_store());
        let details = engine.get_country_details("Atlantis").await.unwrap();
        assert_eq!(details, CountryDetails::name_only("Atlantis"));
    }

    #[tokio::test]
    async fn known_country_without_medals_keeps_zero_gender_counts() {
        let engine = AggregationEngine::new(MemoryStore::new(vec![country("Tuvalu")], vec![]));
        let details = engine.get_country_details("Tuvalu").await.unwrap();

        assert_eq!(details.total_medal_count, Some(0));
        assert_eq!(details.number_summer_wins, None);
        assert_eq!(details.percentage_summer_wins, None);
        assert_eq!(details.number_won_by_female_athletes, 0);
        assert_eq!(details.number_won_by_male_athletes, 0);
    }

    #[test]
    fn season_summary_guards_empty_wins_and_zero_events() {
        assert_eq!(summarize_season(&[], 0), SeasonStats::default());
        assert_eq!(summarize_season(&[], 50), SeasonStats::default());

        let wins = [
            medal(1, "Kenya", 2012, Season::Summer, Gender::Male),
            medal(2, "Kenya", 1996, Season::Summer, Gender::Male),
        ];
        let stats = summarize_season(&wins, 8);
        assert_eq!(stats.number_wins, Some(2));
        assert_eq!(stats.percentage_wins, Some(dec!(0.25)));
        assert_eq!(stats.year_first_win, Some(1996));

        let no_events = summarize_season(&wins, 0);
        assert_eq!(no_events.number_wins, Some(2));
        assert_eq!(no_events.percentage_wins, None);
    }

    #[tokio::test]
    async fn medal_sort_keeps_store_order_for_ties() {
        let store = MemoryStore::new(
            vec![country("C"), country("A"), country("B")],
            vec![
                medal(1, "A", 2000, Season::Summer, Gender::Male),
                medal(2, "A", 2000, Season::Summer, Gender::Male),
                medal(3, "B", 2000, Season::Summer, Gender::Male),
                medal(4, "B", 2000, Season::Summer, Gender::Male),
                medal(5, "C", 2000, Season::Summer, Gender::Male),
            ],
        );
        let engine = AggregationEngine::new(store);

        let descending = engine.list_country_summaries("medals", false).await.unwrap();
        let order: Vec<_> = descending.iter().map(|s| s.country.name.as_str()).collect();
        assert_eq!(order, vec!["A", "B", "C"]);

        let ascending = engine.list_country_summaries("MEDALS", true).await.unwrap();
        let order: Vec<_> = ascending.iter().map(|s| s.country.name.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn unknown_country_sort_key_orders_by_medals() {
        let store = MemoryStore::new(
            vec![country("Few"), country("Many")],
            vec![
                medal(1, "Many", 2000, Season::Summer, Gender::Male),
                medal(2, "Many", 2004, Season::Summer, Gender::Male),
                medal(3, "Few", 2000, Season::Winter, Gender::Female),
            ],
        );
        let engine = AggregationEngine::new(store);

        let summaries = engine.list_country_summaries("anthem", false).await.unwrap();
        let counts: Vec<_> = summaries.iter().map(|s| (s.country.name.as_str(), s.medal_count)).collect();
        assert_eq!(counts, vec![("Many", 2), ("Few", 1)]);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let engine = AggregationEngine::new(MemoryStore::default());
        assert!(engine.list_country_summaries("name", true).await.unwrap().is_empty());
        assert!(engine.list_country_medals("Kenya", "year", true).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn country_medals_sort_by_field_and_reject_unknown_keys() {
        let engine = AggregationEngine::new(kenya_store());

        let by_year = engine.list_country_medals("Kenya", "Year", true).await.unwrap();
        let years: Vec<_> = by_year.iter().map(|m| m.year).collect();
        assert_eq!(years, vec![2004, 2008, 2012]);

        let by_city_desc = engine.list_country_medals("Kenya", "city", false).await.unwrap();
        let cities: Vec<_> = by_city_desc.iter().map(|m| m.city.as_str()).collect();
        assert_eq!(cities, vec!["City 3", "City 2", "City 1"]);

        assert!(engine.list_country_medals("Kenya", "medals", true).await.unwrap().is_empty());
    }

    /// Finland medals with repeated years, seasons, athletes and events.
    fn finland_store() -> MemoryStore {
        let entry = |id: i64, year: i32, season: Season, name: &str, event: &str| GoldMedal {
            id,
            year,
            season,
            city: "Host".to_string(),
            name: name.to_string(),
            country: "Finland".to_string(),
            gender: Gender::Male,
            event: event.to_string(),
        };
        MemoryStore::new(
            vec![country("Finland")],
            vec![
                entry(1, 1952, Season::Winter, "Veikko", "Ski Jump"),
                entry(2, 1912, Season::Summer, "Hannes", "10000m"),
                entry(3, 1952, Season::Summer, "Hannes", "Ski Jump"),
                entry(4, 1912, Season::Winter, "Anna", "10000m"),
                entry(5, 1952, Season::Winter, "Veikko", "Javelin"),
            ],
        )
    }

    async fn medal_ids<S: RecordStore>(engine: &AggregationEngine<S>, sort_by: &str, ascending: bool) -> Vec<i64> {
        engine
            .list_country_medals("Finland", sort_by, ascending)
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect()
    }

    #[tokio::test]
    async fn every_medal_key_sorts_stably_in_both_directions() {
        let engine = AggregationEngine::new(finland_store());

        assert_eq!(medal_ids(&engine, "year", true).await, vec![2, 4, 1, 3, 5]);
        assert_eq!(medal_ids(&engine, "year", false).await, vec![1, 3, 5, 2, 4]);

        assert_eq!(medal_ids(&engine, "season", true).await, vec![2, 3, 1, 4, 5]);
        assert_eq!(medal_ids(&engine, "SEASON", false).await, vec![1, 4, 5, 2, 3]);

        assert_eq!(medal_ids(&engine, "name", true).await, vec![4, 2, 3, 1, 5]);
        assert_eq!(medal_ids(&engine, "name", false).await, vec![1, 5, 2, 3, 4]);

        assert_eq!(medal_ids(&engine, "event", true).await, vec![2, 4, 5, 1, 3]);
        assert_eq!(medal_ids(&engine, "Event", false).await, vec![1, 3, 5, 2, 4]);
    }

    #[tokio::test]
    async fn medals_in_year_follow_store_order() {
        let engine = AggregationEngine::new(kenya_store());
        let ids: Vec<_> = engine
            .list_medals_in_year(2008)
            .await
            .unwrap()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![3]);
    }

    #[derive(Debug, thiserror::Error)]
    #[error("store offline")]
    struct Offline;

    struct OfflineStore;

    #[async_trait]
    impl RecordStore for OfflineStore {
        type Error = Offline;

        async fn find_all_countries(&self) -> Result<Vec<Country>, Offline> {
            Err(Offline)
        }
        async fn find_country_by_name(&self, _name: &str) -> Result<Option<Country>, Offline> {
            Err(Offline)
        }
        async fn find_medals_by_country(&self, _country: &str) -> Result<Vec<GoldMedal>, Offline> {
            Err(Offline)
        }
        async fn find_medals_by_country_and_season(
            &self,
            _country: &str,
            _season: Season,
        ) -> Result<Vec<GoldMedal>, Offline> {
            Err(Offline)
        }
        async fn find_medals_by_country_and_gender(
            &self,
            _country: &str,
            _gender: Gender,
        ) -> Result<Vec<GoldMedal>, Offline> {
            Err(Offline)
        }
        async fn find_medals_by_season(&self, _season: Season) -> Result<Vec<GoldMedal>, Offline> {
            Err(Offline)
        }
        async fn find_medals_by_year(&self, _year: i32) -> Result<Vec<GoldMedal>, Offline> {
            Err(Offline)
        }
    }

    #[tokio::test]
    async fn store_failures_reach_the_caller() {
        let engine = AggregationEngine::new(OfflineStore);
        assert!(engine.list_country_summaries("name", true).await.is_err());
        assert!(engine.get_country_details("Kenya").await.is_err());
        // The store is read before the sort key is checked.
        assert!(engine.list_country_medals("Kenya", "bogus", true).await.is_err());
    }
}
