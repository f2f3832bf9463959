use std::cmp::Ordering;

use async_trait::async_trait;

use goldmedal_core::{Country, Gender, GoldMedal, Season};

use crate::dataset::Dataset;
use crate::error::StorageError;
use crate::repository::{CountryField, CountryRepository, Direction, GoldMedalRepository, MedalField};

/// Immutable in-memory backend. Records keep their dataset (insertion)
/// order, which is the tie-break for every ordered listing.
pub struct MemoryStore {
    countries: Vec<Country>,
    medals: Vec<GoldMedal>,
}

impl MemoryStore {
    pub fn new(dataset: Dataset) -> Result<Self, StorageError> {
        dataset.validate()?;
        Ok(Self {
            countries: dataset.countries,
            medals: dataset.medals,
        })
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn medal_count(&self) -> usize {
        self.medals.len()
    }

    fn medals_of<'a>(&'a self, country: &'a str) -> impl Iterator<Item = &'a GoldMedal> + 'a {
        self.medals.iter().filter(move |m| m.country == country)
    }
}

/// Stable ascending sort, reversed wholesale for descending.
fn ordered<T: Clone>(mut rows: Vec<&T>, direction: Direction, cmp: impl Fn(&T, &T) -> Ordering) -> Vec<T> {
    rows.sort_by(|a, b| cmp(*a, *b));
    if direction == Direction::Desc {
        rows.reverse();
    }
    rows.into_iter().cloned().collect()
}

/// Present values first, nulls last.
fn nulls_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_countries(field: CountryField, a: &Country, b: &Country) -> Ordering {
    match field {
        CountryField::Name => a.name.cmp(&b.name),
        CountryField::Gdp => nulls_last(a.gdp, b.gdp, |x, y| x.total_cmp(&y)),
        CountryField::Population => nulls_last(a.population, b.population, |x, y| x.cmp(&y)),
    }
}

fn compare_medals(field: MedalField, a: &GoldMedal, b: &GoldMedal) -> Ordering {
    match field {
        MedalField::Year => a.year.cmp(&b.year),
        MedalField::Season => a.season.as_str().cmp(b.season.as_str()),
        MedalField::City => a.city.cmp(&b.city),
        MedalField::Name => a.name.cmp(&b.name),
        MedalField::Event => a.event.cmp(&b.event),
    }
}

#[async_trait]
impl CountryRepository for MemoryStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, StorageError> {
        Ok(self.countries.iter().find(|c| c.name == name).cloned())
    }

    async fn list_countries(
        &self,
        field: CountryField,
        direction: Direction,
    ) -> Result<Vec<Country>, StorageError> {
        let rows: Vec<&Country> = self.countries.iter().collect();
        Ok(ordered(rows, direction, |a, b| compare_countries(field, a, b)))
    }
}

#[async_trait]
impl GoldMedalRepository for MemoryStore {
    async fn count_by_country(&self, country: &str) -> Result<u64, StorageError> {
        Ok(self.medals_of(country).count() as u64)
    }

    async fn list_by_country(
        &self,
        country: &str,
        field: MedalField,
        direction: Direction,
    ) -> Result<Vec<GoldMedal>, StorageError> {
        let rows: Vec<&GoldMedal> = self.medals_of(country).collect();
        Ok(ordered(rows, direction, |a, b| compare_medals(field, a, b)))
    }

    async fn list_by_country_and_season(
        &self,
        country: &str,
        season: Season,
    ) -> Result<Vec<GoldMedal>, StorageError> {
        let rows: Vec<&GoldMedal> = self.medals_of(country).filter(|m| m.season == season).collect();
        Ok(ordered(rows, Direction::Asc, |a, b| compare_medals(MedalField::Year, a, b)))
    }

    async fn count_by_season(&self, season: Season) -> Result<u64, StorageError> {
        Ok(self.medals.iter().filter(|m| m.season == season).count() as u64)
    }

    async fn count_by_country_and_gender(
        &self,
        country: &str,
        gender: Gender,
    ) -> Result<u64, StorageError> {
        Ok(self.medals_of(country).filter(|m| m.gender == gender).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, gdp: Option<f64>, population: Option<i64>) -> Country {
        Country { name: name.into(), gdp, population }
    }

    fn medal(country: &str, year: i32, season: Season, city: &str, name: &str, event: &str) -> GoldMedal {
        GoldMedal {
            country: country.into(),
            year,
            city: city.into(),
            season,
            name: name.into(),
            gender: Gender::Women,
            event: event.into(),
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::new(Dataset {
            countries: vec![
                country("Sweden", Some(500.0), Some(10)),
                country("austria", None, Some(9)),
                country("Chad", Some(10.0), None),
                country("Brazil", Some(500.0), Some(200)),
            ],
            medals: vec![
                medal("Sweden", 1912, Season::Summer, "Stockholm", "Lindberg", "relay"),
                medal("Sweden", 1994, Season::Winter, "Lillehammer", "Forsberg", "Ice Hockey"),
                medal("Sweden", 1912, Season::Summer, "stockholm", "Andersson", "Swimming"),
                medal("Brazil", 2016, Season::Summer, "Rio", "Neymar", "Football"),
            ],
        })
        .unwrap()
    }

    fn names(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(|c| c.name.as_str()).collect()
    }

    #[tokio::test]
    async fn find_is_exact_and_case_sensitive() {
        let s = store();
        assert!(s.find_by_name("Sweden").await.unwrap().is_some());
        assert!(s.find_by_name("sweden").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn names_order_bytewise() {
        let s = store();
        let asc = s.list_countries(CountryField::Name, Direction::Asc).await.unwrap();
        // Uppercase sorts before lowercase.
        assert_eq!(names(&asc), vec!["Brazil", "Chad", "Sweden", "austria"]);
    }

    #[tokio::test]
    async fn gdp_nulls_last_and_ties_in_insertion_order() {
        let s = store();
        let asc = s.list_countries(CountryField::Gdp, Direction::Asc).await.unwrap();
        assert_eq!(names(&asc), vec!["Chad", "Sweden", "Brazil", "austria"]);
        let desc = s.list_countries(CountryField::Gdp, Direction::Desc).await.unwrap();
        assert_eq!(names(&desc), vec!["austria", "Brazil", "Sweden", "Chad"]);
    }

    #[tokio::test]
    async fn population_desc_reverses_asc() {
        let s = store();
        let mut asc = s.list_countries(CountryField::Population, Direction::Asc).await.unwrap();
        let desc = s.list_countries(CountryField::Population, Direction::Desc).await.unwrap();
        asc.reverse();
        assert_eq!(asc, desc);
        assert_eq!(desc[0].name, "Chad");
    }

    #[tokio::test]
    async fn medal_listing_filters_country_and_orders() {
        let s = store();
        let by_city = s.list_by_country("Sweden", MedalField::City, Direction::Asc).await.unwrap();
        let cities: Vec<_> = by_city.iter().map(|m| m.city.as_str()).collect();
        assert_eq!(cities, vec!["Lillehammer", "Stockholm", "stockholm"]);

        let by_season = s.list_by_country("Sweden", MedalField::Season, Direction::Asc).await.unwrap();
        assert_eq!(by_season.last().unwrap().season, Season::Winter);

        let by_year = s.list_by_country("Sweden", MedalField::Year, Direction::Asc).await.unwrap();
        let athletes: Vec<_> = by_year.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(athletes, vec!["Lindberg", "Andersson", "Forsberg"]);
    }

    #[tokio::test]
    async fn counts() {
        let s = store();
        assert_eq!(s.count_by_country("Sweden").await.unwrap(), 3);
        assert_eq!(s.count_by_country("Chad").await.unwrap(), 0);
        assert_eq!(s.count_by_season(Season::Summer).await.unwrap(), 3);
        assert_eq!(s.count_by_country_and_gender("Sweden", Gender::Men).await.unwrap(), 0);
        assert_eq!(s.count_by_country_and_gender("Sweden", Gender::Women).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn season_listing_is_year_ascending() {
        let s = store();
        let summer = s.list_by_country_and_season("Sweden", Season::Summer).await.unwrap();
        assert_eq!(summer.len(), 2);
        assert!(summer.iter().all(|m| m.season == Season::Summer));
        assert!(s.list_by_country_and_season("Chad", Season::Winter).await.unwrap().is_empty());
    }
}
