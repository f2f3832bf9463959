use tracing::debug;

use goldmedal_storage::{CountryField, Direction, StorageError};

use crate::engine::MedalEngine;
use crate::response::CountrySummary;
use crate::sort::CountrySortKey;

impl MedalEngine {
    /// Every country with its gold-medal count.
    ///
    /// `name`, `gdp` and `population` are ordered by the repository. `medals`
    /// and unrecognized keys both start from the name-ascending listing; only
    /// `medals` is then re-sorted by count, so an unrecognized key always
    /// yields plain name order whatever `ascending` says.
    pub async fn country_summaries(
        &self,
        sort_by: &str,
        ascending: bool,
    ) -> Result<Vec<CountrySummary>, StorageError> {
        let key = CountrySortKey::parse(sort_by);
        let (field, direction) = match key.and_then(|k| k.field()) {
            Some(field) => (field, Direction::from_ascending(ascending)),
            None => (CountryField::Name, Direction::Asc),
        };

        let countries = self.countries.list_countries(field, direction).await?;

        let mut summaries = Vec::with_capacity(countries.len());
        for country in countries {
            let medals = self.medals.count_by_country(&country.name).await?;
            summaries.push(CountrySummary { country, medals });
        }

        if key == Some(CountrySortKey::Medals) {
            sort_by_medal_count(&mut summaries, ascending);
        }

        debug!(sort_by, ascending, count = summaries.len(), "country summaries");
        Ok(summaries)
    }
}

/// Stable: equal counts keep their incoming order in both directions.
fn sort_by_medal_count(summaries: &mut [CountrySummary], ascending: bool) {
    if ascending {
        summaries.sort_by(|a, b| a.medals.cmp(&b.medals));
    } else {
        summaries.sort_by(|a, b| b.medals.cmp(&a.medals));
    }
}
