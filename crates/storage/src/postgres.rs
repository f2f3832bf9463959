//! PostgreSQL backend.
//!
//! Text columns are ordered with `COLLATE "C"` so comparisons are byte-wise,
//! matching [`MemoryStore`](crate::MemoryStore). Every listing ends with an
//! `id` tie-break in the same direction, so a descending listing is the
//! exact reverse of the ascending one.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use goldmedal_core::config::PostgresConfig;
use goldmedal_core::{Country, Gender, GoldMedal, Season};

use crate::dataset::Dataset;
use crate::error::StorageError;
use crate::repository::{CountryField, CountryRepository, Direction, GoldMedalRepository, MedalField};

const COUNTRY_COLUMNS: &str = "name, gdp, population";
const MEDAL_COLUMNS: &str = "country, year, city, season, name, gender, event";

#[derive(Debug, sqlx::FromRow)]
struct CountryRow {
    name: String,
    gdp: Option<f64>,
    population: Option<i64>,
}

impl From<CountryRow> for Country {
    fn from(row: CountryRow) -> Self {
        Country {
            name: row.name,
            gdp: row.gdp,
            population: row.population,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct MedalRow {
    country: String,
    year: i32,
    city: String,
    season: String,
    name: String,
    gender: String,
    event: String,
}

impl TryFrom<MedalRow> for GoldMedal {
    type Error = StorageError;

    fn try_from(row: MedalRow) -> Result<Self, Self::Error> {
        Ok(GoldMedal {
            country: row.country,
            year: row.year,
            city: row.city,
            season: row.season.parse()?,
            name: row.name,
            gender: row.gender.parse()?,
            event: row.event,
        })
    }
}

fn country_order(field: CountryField, direction: Direction) -> String {
    let dir = direction.as_sql();
    match field {
        CountryField::Name => format!("name COLLATE \"C\" {dir}, id {dir}"),
        CountryField::Gdp => format!("gdp {dir} {}, id {dir}", nulls(direction)),
        CountryField::Population => format!("population {dir} {}, id {dir}", nulls(direction)),
    }
}

fn medal_order(field: MedalField, direction: Direction) -> String {
    let dir = direction.as_sql();
    let column = match field {
        MedalField::Year => "year",
        MedalField::Season => "season COLLATE \"C\"",
        MedalField::City => "city COLLATE \"C\"",
        MedalField::Name => "name COLLATE \"C\"",
        MedalField::Event => "event COLLATE \"C\"",
    };
    format!("{column} {dir}, id {dir}")
}

/// Nulls after every value ascending, before every value descending.
fn nulls(direction: Direction) -> &'static str {
    match direction {
        Direction::Asc => "NULLS LAST",
        Direction::Desc => "NULLS FIRST",
    }
}

fn decode_medals(rows: Vec<MedalRow>) -> Result<Vec<GoldMedal>, StorageError> {
    rows.into_iter().map(GoldMedal::try_from).collect()
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool and apply the schema migrations.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url())
            .await?;
        info!("PostgreSQL connected: {}", config.host);
        sqlx::migrate!("../../migrations").run(&pool).await?;
        info!("Database migrations applied successfully");
        Ok(Self { pool })
    }

    /// Replace both tables with `dataset` in a single transaction.
    pub async fn import(&self, dataset: &Dataset) -> Result<(), StorageError> {
        dataset.validate()?;
        let mut tx = self.pool.begin().await?;

        sqlx::query("TRUNCATE gold_medals, countries RESTART IDENTITY")
            .execute(&mut *tx)
            .await?;

        for country in &dataset.countries {
            sqlx::query("INSERT INTO countries (name, gdp, population) VALUES ($1, $2, $3)")
                .bind(&country.name)
                .bind(country.gdp)
                .bind(country.population)
                .execute(&mut *tx)
                .await?;
        }

        for medal in &dataset.medals {
            sqlx::query(
                "INSERT INTO gold_medals (country, year, city, season, name, gender, event)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(&medal.country)
            .bind(medal.year)
            .bind(&medal.city)
            .bind(medal.season.as_str())
            .bind(&medal.name)
            .bind(medal.gender.as_str())
            .bind(&medal.event)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!(
            "Imported {} countries and {} medals",
            dataset.countries.len(),
            dataset.medals.len()
        );
        Ok(())
    }
}

#[async_trait]
impl CountryRepository for PgStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Country>, StorageError> {
        let row = sqlx::query_as::<_, CountryRow>(&format!(
            "SELECT {COUNTRY_COLUMNS} FROM countries WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Country::from))
    }

    async fn list_countries(
        &self,
        field: CountryField,
        direction: Direction,
    ) -> Result<Vec<Country>, StorageError> {
        let rows = sqlx::query_as::<_, CountryRow>(&format!(
            "SELECT {COUNTRY_COLUMNS} FROM countries ORDER BY {}",
            country_order(field, direction)
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Country::from).collect())
    }
}

#[async_trait]
impl GoldMedalRepository for PgStore {
    async fn count_by_country(&self, country: &str) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gold_medals WHERE country = $1")
            .bind(country)
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn list_by_country(
        &self,
        country: &str,
        field: MedalField,
        direction: Direction,
    ) -> Result<Vec<GoldMedal>, StorageError> {
        let rows = sqlx::query_as::<_, MedalRow>(&format!(
            "SELECT {MEDAL_COLUMNS} FROM gold_medals WHERE country = $1 ORDER BY {}",
            medal_order(field, direction)
        ))
        .bind(country)
        .fetch_all(&self.pool)
        .await?;
        decode_medals(rows)
    }

    async fn list_by_country_and_season(
        &self,
        country: &str,
        season: Season,
    ) -> Result<Vec<GoldMedal>, StorageError> {
        let rows = sqlx::query_as::<_, MedalRow>(&format!(
            "SELECT {MEDAL_COLUMNS} FROM gold_medals WHERE country = $1 AND season = $2 ORDER BY {}",
            medal_order(MedalField::Year, Direction::Asc)
        ))
        .bind(country)
        .bind(season.as_str())
        .fetch_all(&self.pool)
        .await?;
        decode_medals(rows)
    }

    async fn count_by_season(&self, season: Season) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM gold_medals WHERE season = $1")
            .bind(season.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    async fn count_by_country_and_gender(
        &self,
        country: &str,
        gender: Gender,
    ) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM gold_medals WHERE country = $1 AND gender = $2",
        )
        .bind(country)
        .bind(gender.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(count as u64)
    }
}
