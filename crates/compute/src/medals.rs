use tracing::debug;

use goldmedal_core::GoldMedal;
use goldmedal_storage::{Direction, StorageError};

use crate::engine::MedalEngine;
use crate::sort::MedalSortKey;

impl MedalEngine {
    /// A country's medals ordered by the repository. An unrecognized key
    /// yields an empty list without touching the repository.
    pub async fn country_medals(
        &self,
        country: &str,
        sort_by: &str,
        ascending: bool,
    ) -> Result<Vec<GoldMedal>, StorageError> {
        let Some(key) = MedalSortKey::parse(sort_by) else {
            debug!(country, sort_by, "unrecognized medal sort key");
            return Ok(Vec::new());
        };

        let medals = self
            .medals
            .list_by_country(country, key.field(), Direction::from_ascending(ascending))
            .await?;

        debug!(country, sort_by, ascending, count = medals.len(), "country medals");
        Ok(medals)
    }
}
