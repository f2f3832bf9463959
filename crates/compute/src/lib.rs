//! Aggregation and response assembly over the Data Access Layer.
//!
//! [`MedalEngine`] answers the three read-only queries: country summaries,
//! per-country statistics and a country's medal list. It owns no mutable
//! state; every call re-reads the repositories.

mod details;
pub mod engine;
mod medals;
pub mod response;
pub mod sort;
mod summary;

#[cfg(test)]
mod test_support;

pub use details::SeasonStats;
pub use engine::MedalEngine;
pub use response::{
    CountriesResponse, CountryDetails, CountryDetailsResponse, CountryMedalsListResponse,
    CountrySummary,
};
pub use sort::{CountrySortKey, MedalSortKey};
