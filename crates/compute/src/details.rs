use tracing::debug;

use goldmedal_core::{Gender, GoldMedal, Season};
use goldmedal_storage::StorageError;

use crate::engine::MedalEngine;
use crate::response::{CountryDetails, CountryDetailsResponse};

/// Derived statistics for one season.
///
/// All three fields are `None` when the country never won in the season.
/// `share_of_events` is also `None` when the season has no recorded events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SeasonStats {
    pub wins: Option<u64>,
    pub share_of_events: Option<f64>,
    pub first_win_year: Option<i32>,
}

impl SeasonStats {
    /// `wins` must be ordered by year ascending.
    pub fn from_wins(wins: &[GoldMedal], total_events: u64) -> Self {
        let Some(first) = wins.first() else {
            return Self::default();
        };
        let count = wins.len() as u64;
        Self {
            wins: Some(count),
            share_of_events: (total_events != 0).then(|| count as f64 / total_events as f64),
            first_win_year: Some(first.year),
        }
    }
}

impl MedalEngine {
    /// Statistics for one country, or `NotFound` if it is not in the dataset.
    pub async fn country_details(&self, name: &str) -> Result<CountryDetailsResponse, StorageError> {
        let Some(country) = self.countries.find_by_name(name).await? else {
            debug!(country = name, "country not found");
            return Ok(CountryDetailsResponse::NotFound { name: name.to_string() });
        };

        let number_medals = self.medals.count_by_country(name).await?;
        let summer = self.season_stats(name, Season::Summer).await?;
        let winter = self.season_stats(name, Season::Winter).await?;
        let female = self.medals.count_by_country_and_gender(name, Gender::Women).await?;
        let male = self.medals.count_by_country_and_gender(name, Gender::Men).await?;

        debug!(country = name, number_medals, "country details");
        Ok(CountryDetailsResponse::Found(CountryDetails {
            name: name.to_string(),
            gdp: country.gdp,
            population: country.population,
            number_medals,
            number_summer_wins: summer.wins,
            percentage_total_summer_wins: summer.share_of_events,
            year_first_summer_win: summer.first_win_year,
            number_winter_wins: winter.wins,
            percentage_total_winter_wins: winter.share_of_events,
            year_first_winter_win: winter.first_win_year,
            number_events_won_by_female_athletes: female,
            number_events_won_by_male_athletes: male,
        }))
    }

    async fn season_stats(&self, name: &str, season: Season) -> Result<SeasonStats, StorageError> {
        let wins = self.medals.list_by_country_and_season(name, season).await?;
        let total_events = self.medals.count_by_season(season).await?;
        Ok(SeasonStats::from_wins(&wins, total_events))
    }
}
