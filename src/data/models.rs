use serde::Deserialize;

use crate::domain::Continent;

/// A country entry exactly as it appears in the input file. Any of the
/// three measures may be missing; the loader decides what survives.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCountry {
    pub country: String,
    pub continent: String,
    pub income: Option<f64>,
    pub life_exp: Option<f64>,
    pub population: Option<f64>,
}

/// One year object from the input file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawYear {
    pub year: i32,
    pub countries: Vec<RawCountry>,
}

/// A country row that passed the load-time filter. All measures present.
#[derive(Debug, Clone, PartialEq)]
pub struct Country {
    pub country: String,
    pub continent: Continent,
    pub income: f64,
    pub life_exp: f64,
    pub population: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearRecord {
    pub year: i32,
    pub countries: Vec<Country>,
}

/// The cleaned dataset: an ordered, cyclic sequence of year records.
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    years: Vec<YearRecord>,
}

impl Dataset {
    pub fn new(years: Vec<YearRecord>) -> Self {
        Self { years }
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn year(&self, index: usize) -> &YearRecord {
        &self.years[index % self.years.len()]
    }

    pub fn years(&self) -> &[YearRecord] {
        &self.years
    }
}
