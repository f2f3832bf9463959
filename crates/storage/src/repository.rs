//! Repository traits and the ordering vocabulary shared by every backend.
//!
//! Ordering contract:
//! - text fields compare byte-wise (case-sensitive, no locale);
//! - `season` orders by its stored spelling (`Summer` before `Winter`);
//! - null `gdp`/`population` sort after every value when ascending;
//! - ties keep insertion (primary key) order when ascending;
//! - a descending listing is the exact reverse of the ascending one.

use async_trait::async_trait;

use goldmedal_core::{Country, Gender, GoldMedal, Season};

use crate::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending { Direction::Asc } else { Direction::Desc }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Country columns a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryField {
    Name,
    Gdp,
    Population,
}

/// Medal columns a per-country listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MedalField {
    Year,
    Season,
    City,
    /// Athlete name.
    Name,
    Event,
}

/// Read access to the Country record set.
#[async_trait]
pub trait CountryRepository: Send + Sync {
    /// Exact, case-sensitive lookup by name.
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, StorageError>;

    /// Every country, ordered by `field` in `direction`.
    async fn list_countries(
        &self,
        field: CountryField,
        direction: Direction,
    ) -> Result<Vec<Country>, StorageError>;
}

/// Read access to the GoldMedal record set.
#[async_trait]
pub trait GoldMedalRepository: Send + Sync {
    /// Number of medals whose country exactly matches `country`.
    async fn count_by_country(&self, country: &str) -> Result<u64, StorageError>;

    async fn list_by_country(
        &self,
        country: &str,
        field: MedalField,
        direction: Direction,
    ) -> Result<Vec<GoldMedal>, StorageError>;

    /// The country's medals in one season, year ascending.
    async fn list_by_country_and_season(
        &self,
        country: &str,
        season: Season,
    ) -> Result<Vec<GoldMedal>, StorageError>;

    /// Medals of a season across all countries.
    async fn count_by_season(&self, season: Season) -> Result<u64, StorageError>;

    async fn count_by_country_and_gender(
        &self,
        country: &str,
        gender: Gender,
    ) -> Result<u64, StorageError>;
}
