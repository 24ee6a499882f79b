use crate::error::AggregationError;
use crate::report::CountrySummary;
use core_types::{Country, GoldMedal};
use std::cmp::Ordering;
use std::str::FromStr;

/// The fields a country listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountrySortKey {
    Name,
    Gdp,
    Population,
    Medals,
}

impl CountrySortKey {
    /// Parses a sort key, ignoring case. Anything unrecognised means `Medals`.
    pub fn parse(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "name" => CountrySortKey::Name,
            "gdp" => CountrySortKey::Gdp,
            "population" => CountrySortKey::Population,
            "medals" => CountrySortKey::Medals,
            other => {
                tracing::warn!(sort_by = other, "Unknown country sort key, ordering by medal count.");
                CountrySortKey::Medals
            }
        }
    }
}

/// The fields a single country's medal list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedalSortKey {
    Year,
    Season,
    City,
    Name,
    Event,
}

impl FromStr for MedalSortKey {
    type Err = AggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "year" => Ok(MedalSortKey::Year),
            "season" => Ok(MedalSortKey::Season),
            "city" => Ok(MedalSortKey::City),
            "name" => Ok(MedalSortKey::Name),
            "event" => Ok(MedalSortKey::Event),
            _ => Err(AggregationError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Applies the requested direction to an ascending comparison.
///
/// Reversing the comparator (rather than the sorted output) keeps equal
/// elements in their original relative order in both directions.
fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending { ordering } else { ordering.reverse() }
}

/// Stable sort of countries by name, gdp or population. `Medals` leaves the
/// order untouched; medal ordering happens after counting.
pub fn sort_countries(countries: &mut [Country], key: CountrySortKey, ascending: bool) {
    match key {
        CountrySortKey::Name => {
            countries.sort_by(|a, b| directed(a.name.cmp(&b.name), ascending));
        }
        // `None` orders before any present value.
        CountrySortKey::Gdp => {
            countries.sort_by(|a, b| directed(a.gdp.cmp(&b.gdp), ascending));
        }
        CountrySortKey::Population => {
            countries.sort_by(|a, b| directed(a.population.cmp(&b.population), ascending));
        }
        CountrySortKey::Medals => {}
    }
}

/// Stable sort of summaries by medal count. Ties keep their incoming order.
pub fn sort_summaries_by_medals(summaries: &mut [CountrySummary], ascending: bool) {
    summaries.sort_by(|a, b| directed(a.medal_count.cmp(&b.medal_count), ascending));
}

/// Stable sort of one country's medals by the given field.
pub fn sort_medals(medals: &mut [GoldMedal], key: MedalSortKey, ascending: bool) {
    match key {
        MedalSortKey::Year => medals.sort_by(|a, b| directed(a.year.cmp(&b.year), ascending)),
        MedalSortKey::Season => medals.sort_by(|a, b| {
            directed(a.season.as_str().cmp(b.season.as_str()), ascending)
        }),
        MedalSortKey::City => medals.sort_by(|a, b| directed(a.city.cmp(&b.city), ascending)),
        MedalSortKey::Name => medals.sort_by(|a, b| directed(a.name.cmp(&b.name), ascending)),
        MedalSortKey::Event => medals.sort_by(|a, b| directed(a.event.cmp(&b.event), ascending)),
    }
}
