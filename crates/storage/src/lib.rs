//! Data Access Layer over the Country and GoldMedal record sets.
//!
//! Two backends implement the repository traits with identical ordering
//! semantics: [`MemoryStore`] (a loaded JSON dataset) and [`PgStore`]
//! (PostgreSQL via sqlx).

pub mod dataset;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use dataset::Dataset;
pub use error::StorageError;
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use repository::{CountryField, CountryRepository, Direction, GoldMedalRepository, MedalField};
