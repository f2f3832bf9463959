//! Supported sort keys. Parsing is case-insensitive; an unrecognized key
//! parses to `None` and each query applies its own fallback.

use goldmedal_storage::{CountryField, MedalField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountrySortKey {
    Name,
    Gdp,
    Population,
    Medals,
}

impl CountrySortKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "gdp" => Some(Self::Gdp),
            "population" => Some(Self::Population),
            "medals" => Some(Self::Medals),
            _ => None,
        }
    }

    /// Country column the repository orders by, if the key maps to one.
    /// `Medals` is computed after retrieval and has no column.
    pub fn field(&self) -> Option<CountryField> {
        match self {
            Self::Name => Some(CountryField::Name),
            Self::Gdp => Some(CountryField::Gdp),
            Self::Population => Some(CountryField::Population),
            Self::Medals => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MedalSortKey {
    Year,
    Season,
    City,
    Name,
    Event,
}

impl MedalSortKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "year" => Some(Self::Year),
            "season" => Some(Self::Season),
            "city" => Some(Self::City),
            "name" => Some(Self::Name),
            "event" => Some(Self::Event),
            _ => None,
        }
    }

    pub fn field(&self) -> MedalField {
        match self {
            Self::Year => MedalField::Year,
            Self::Season => MedalField::Season,
            Self::City => MedalField::City,
            Self::Name => MedalField::Name,
            Self::Event => MedalField::Event,
        }
    }
}
