use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Olympic Games edition. Variant order follows the stored spelling, so the
/// derived `Ord` agrees with a byte-wise comparison of `"Summer"` and `"Winter"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Summer" => Ok(Season::Summer),
            "Winter" => Ok(Season::Winter),
            other => Err(CoreError::UnknownSeason(other.to_string())),
        }
    }
}

/// Gender category of the event an athlete won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Men" => Ok(Gender::Men),
            "Women" => Ok(Gender::Women),
            other => Err(CoreError::UnknownGender(other.to_string())),
        }
    }
}

/// Reference data for one country. `name` is the identity and matches
/// `GoldMedal::country` exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub gdp: Option<f64>,
    pub population: Option<i64>,
}

/// A single gold-medal award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldMedal {
    pub country: String,
    pub year: i32,
    pub city: String,
    pub season: Season,
    /// Athlete name.
    pub name: String,
    pub gender: Gender,
    pub event: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_parses_exact_spelling_only() {
        assert_eq!("Summer".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!("Winter".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!(
            "summer".parse::<Season>().unwrap_err(),
            CoreError::UnknownSeason("summer".into())
        );
    }

    #[test]
    fn season_order_matches_lexical_order() {
        assert!(Season::Summer < Season::Winter);
        assert!(Season::Summer.as_str() < Season::Winter.as_str());
        assert!(Gender::Men.as_str() < Gender::Women.as_str());
        assert!(Gender::Men < Gender::Women);
    }

    #[test]
    fn gender_rejects_unknown() {
        assert!(matches!("Mixed".parse::<Gender>(), Err(CoreError::UnknownGender(g)) if g == "Mixed"));
    }

    #[test]
    fn medal_json_uses_canonical_spellings() {
        let medal = GoldMedal {
            country: "Norway".into(),
            year: 1994,
            city: "Lillehammer".into(),
            season: Season::Winter,
            name: "Aamodt, Kjetil Andre".into(),
            gender: Gender::Men,
            event: "Super-G".into(),
        };
        let json = serde_json::to_value(&medal).unwrap();
        assert_eq!(json["season"], "Winter");
        assert_eq!(json["gender"], "Men");
        assert_eq!(json["name"], "Aamodt, Kjetil Andre");
    }

    #[test]
    fn country_accepts_missing_economic_data() {
        let country: Country =
            serde_json::from_str(r#"{"name":"Kosovo","gdp":null,"population":null}"#).unwrap();
        assert_eq!(country.gdp, None);
        assert_eq!(country.population, None);
    }
}
