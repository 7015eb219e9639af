use std::path::Path;

use thiserror::Error;

use crate::data::models::{Country, Dataset, RawCountry, RawYear, YearRecord};
use crate::domain::Continent;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset is not a valid JSON array of year records: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset contains no year records")]
    Empty,
}

/// Read and clean the yearly dataset. Any failure here is fatal to
/// startup; there is no retry.
pub async fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let raw = tokio::fs::read_to_string(path).await?;
    parse_dataset(&raw)
}

/// Parse the raw JSON payload into a `Dataset`, dropping incomplete
/// country rows rather than flagging them.
pub fn parse_dataset(raw: &str) -> Result<Dataset, LoadError> {
    let years: Vec<RawYear> = serde_json::from_str(raw)?;

    if years.is_empty() {
        return Err(LoadError::Empty);
    }

    let years = years
        .into_iter()
        .map(|year| YearRecord {
            year: year.year,
            countries: year.countries.into_iter().filter_map(clean_country).collect(),
        })
        .collect();

    Ok(Dataset::new(years))
}

// A row survives only with all three measures present and an income the
// log scale can take. Unknown continents have no color and are dropped too.
fn clean_country(raw: RawCountry) -> Option<Country> {
    let income = raw.income?;
    let life_exp = raw.life_exp?;
    let population = raw.population?;

    if income <= 0.0 {
        return None;
    }

    let continent = Continent::parse(&raw.continent)?;

    Some(Country {
        country: raw.country,
        continent,
        income,
        life_exp,
        population,
    })
}
