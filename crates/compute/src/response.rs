//! Response shapes returned to the request-handling layer.

use serde::Serialize;

use goldmedal_core::{Country, GoldMedal};

/// A country paired with its total gold-medal count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountrySummary {
    #[serde(flatten)]
    pub country: Country,
    pub medals: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<CountrySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryMedalsListResponse {
    pub medals: Vec<GoldMedal>,
}

/// Statistics for a country present in the dataset.
///
/// Season fields are `None` together exactly when the country has no win
/// in that season; the share is also `None` when the season has no events.
/// Gender counts are always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetails {
    pub name: String,
    pub gdp: Option<f64>,
    pub population: Option<i64>,
    pub number_medals: u64,
    pub number_summer_wins: Option<u64>,
    pub percentage_total_summer_wins: Option<f64>,
    pub year_first_summer_win: Option<i32>,
    pub number_winter_wins: Option<u64>,
    pub percentage_total_winter_wins: Option<f64>,
    pub year_first_winter_win: Option<i32>,
    pub number_events_won_by_female_athletes: u64,
    pub number_events_won_by_male_athletes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CountryDetailsResponse {
    /// Only the queried name; nothing else was looked up.
    NotFound { name: String },
    Found(CountryDetails),
}

impl CountryDetailsResponse {
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound { name } => name,
            Self::Found(details) => &details.name,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
