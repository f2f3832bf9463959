//! Repositories and fixtures shared by the engine tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use goldmedal_core::{Country, Gender, GoldMedal, Season};
use goldmedal_storage::{
    CountryField, CountryRepository, Dataset, Direction, GoldMedalRepository, MedalField,
    MemoryStore, StorageError,
};

use crate::MedalEngine;

pub fn country(name: &str, gdp: Option<f64>, population: Option<i64>) -> Country {
    Country { name: name.into(), gdp, population }
}

pub fn medal(country: &str, year: i32, season: Season, gender: Gender, name: &str) -> GoldMedal {
    GoldMedal {
        country: country.into(),
        year,
        city: format!("City{year}"),
        season,
        name: name.into(),
        gender,
        event: format!("Event {name}"),
    }
}

/// Norway: 2 Summer wins (1998, 1994 inserted out of order), 1 Winter win.
/// Finland: 3 Winter wins, no Summer win. Brazil: 3 Summer wins.
/// Chad: no medal. Filler Summer medals bring the Summer total to 100.
pub fn olympics() -> Dataset {
    let countries = vec![
        country("Norway", Some(400.0), Some(5)),
        country("Finland", Some(270.0), Some(6)),
        country("Chad", Some(11.0), Some(16)),
        country("Brazil", Some(1800.0), Some(210)),
        country("Elsewhere", None, None),
    ];

    let mut medals = vec![
        medal("Norway", 1998, Season::Summer, Gender::Men, "Olsen"),
        medal("Finland", 1952, Season::Winter, Gender::Women, "Hietamies"),
        medal("Norway", 1994, Season::Summer, Gender::Women, "Berg"),
        medal("Finland", 1948, Season::Winter, Gender::Men, "Ruud"),
        medal("Norway", 2002, Season::Winter, Gender::Men, "Bjoerndalen"),
        medal("Finland", 1988, Season::Winter, Gender::Men, "Nykaenen"),
        medal("Brazil", 2016, Season::Summer, Gender::Men, "Neymar"),
        medal("Brazil", 2004, Season::Summer, Gender::Men, "Ferreira"),
        medal("Brazil", 2012, Season::Summer, Gender::Women, "Menezes"),
    ];
    for i in 0..95 {
        medals.push(medal("Elsewhere", 1900 + i, Season::Summer, Gender::Men, "Filler"));
    }

    Dataset { countries, medals }
}

pub fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new(olympics()).expect("fixture is valid"))
}

pub fn engine() -> MedalEngine {
    MedalEngine::from_store(memory_store())
}

/// Forwards to a [`MemoryStore`] and records each accessor called.
pub struct RecordingStore {
    inner: Arc<MemoryStore>,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingStore {
    pub fn new(inner: Arc<MemoryStore>) -> Self {
        Self { inner, calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CountryRepository for RecordingStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, StorageError> {
        self.record("find_by_name");
        self.inner.find_by_name(name).await
    }

    async fn list_countries(
        &self,
        field: CountryField,
        direction: Direction,
    ) -> Result<Vec<Country>, StorageError> {
        self.record("list_countries");
        self.inner.list_countries(field, direction).await
    }
}

#[async_trait]
impl GoldMedalRepository for RecordingStore {
    async fn count_by_country(&self, country: &str) -> Result<u64, StorageError> {
        self.record("count_by_country");
        self.inner.count_by_country(country).await
    }

    async fn list_by_country(
        &self,
        country: &str,
        field: MedalField,
        direction: Direction,
    ) -> Result<Vec<GoldMedal>, StorageError> {
        self.record("list_by_country");
        self.inner.list_by_country(country, field, direction).await
    }

    async fn list_by_country_and_season(
        &self,
        country: &str,
        season: Season,
    ) -> Result<Vec<GoldMedal>, StorageError> {
        self.record("list_by_country_and_season");
        self.inner.list_by_country_and_season(country, season).await
    }

    async fn count_by_season(&self, season: Season) -> Result<u64, StorageError> {
        self.record("count_by_season");
        self.inner.count_by_season(season).await
    }

    async fn count_by_country_and_gender(
        &self,
        country: &str,
        gender: Gender,
    ) -> Result<u64, StorageError> {
        self.record("count_by_country_and_gender");
        self.inner.count_by_country_and_gender(country, gender).await
    }
}

/// Medal repository whose every accessor fails.
pub struct FailingMedals;

fn unavailable() -> StorageError {
    StorageError::InvalidData("medal table unavailable".into())
}

#[async_trait]
impl GoldMedalRepository for FailingMedals {
    async fn count_by_country(&self, _country: &str) -> Result<u64, StorageError> {
        Err(unavailable())
    }

    async fn list_by_country(
        &self,
        _country: &str,
        _field: MedalField,
        _direction: Direction,
    ) -> Result<Vec<GoldMedal>, StorageError> {
        Err(unavailable())
    }

    async fn list_by_country_and_season(
        &self,
        _country: &str,
        _season: Season,
    ) -> Result<Vec<GoldMedal>, StorageError> {
        Err(unavailable())
    }

    async fn count_by_season(&self, _season: Season) -> Result<u64, StorageError> {
        Err(unavailable())
    }

    async fn count_by_country_and_gender(
        &self,
        _country: &str,
        _gender: Gender,
    ) -> Result<u64, StorageError> {
        Err(unavailable())
    }
}

/// Engine whose country lookups work but medal lookups fail.
pub fn failing_engine() -> MedalEngine {
    MedalEngine::new(memory_store(), Arc::new(FailingMedals))
}
