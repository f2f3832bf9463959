use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use goldmedal_core::{Country, GoldMedal};

use crate::error::StorageError;

/// A complete snapshot of both record sets, in insertion order.
///
/// On disk this is a single JSON document:
/// ```text
/// { "countries": [ {"name": ..., "gdp": ..., "population": ...} ],
///   "medals":    [ {"country": ..., "year": ..., "season": "Summer", ...} ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub countries: Vec<Country>,
    pub medals: Vec<GoldMedal>,
}

impl Dataset {
    /// Parse and validate a dataset document.
    pub fn from_json_str(json: &str) -> Result<Self, StorageError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&json)?;
        info!(
            "Dataset {}: {} countries, {} medals",
            path.display(),
            dataset.countries.len(),
            dataset.medals.len()
        );
        Ok(dataset)
    }

    /// Country names are the identity and must be unique.
    pub fn validate(&self) -> Result<(), StorageError> {
        let mut seen = HashSet::with_capacity(self.countries.len());
        for country in &self.countries {
            if !seen.insert(country.name.as_str()) {
                return Err(StorageError::InvalidData(format!(
                    "duplicate country name: {}",
                    country.name
                )));
            }
        }
        Ok(())
    }
}
