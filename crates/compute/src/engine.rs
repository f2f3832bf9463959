use std::sync::Arc;

use goldmedal_storage::{CountryRepository, GoldMedalRepository};

/// Query engine over the Country and GoldMedal repositories.
///
/// Cheap to clone; clones share the same repositories.
#[derive(Clone)]
pub struct MedalEngine {
    pub(crate) countries: Arc<dyn CountryRepository>,
    pub(crate) medals: Arc<dyn GoldMedalRepository>,
}

impl MedalEngine {
    pub fn new(countries: Arc<dyn CountryRepository>, medals: Arc<dyn GoldMedalRepository>) -> Self {
        Self { countries, medals }
    }

    /// Build an engine over one store that serves both record sets.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: CountryRepository + GoldMedalRepository + 'static,
    {
        Self {
            countries: store.clone(),
            medals: store,
        }
    }
}
