use crate::domain::country::{Country, MAX_CITIES};
use crate::domain::point::Point;
use crate::utils::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML description of a country, e.g.
///
/// ```toml
/// name = "Atlantis"
///
/// [[cities]]
/// name = "Alpha"
/// center = { x = 0.0, y = 0.0 }
/// station = { x = 1.0, y = 1.0 }
/// residents = 10
/// neighborhoods = 2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryFile {
    pub name: String,
    #[serde(default)]
    pub cities: Vec<CityEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityEntry {
    pub name: String,
    pub center: Point,
    pub station: Point,
    #[serde(default)]
    pub residents: i64,
    #[serde(default = "default_neighborhoods")]
    pub neighborhoods: i32,
}

fn default_neighborhoods() -> i32 {
    1
}

impl CountryFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AtlasError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CountryFile = toml::from_str(content)?;
        Ok(file)
    }

    /// Builds the `Country`, feeding every entry through `add_city` so the
    /// clamping and capacity rules apply to file input too.
    pub fn build_country(&self) -> Result<Country> {
        let mut country = Country::new(&self.name);
        for city in &self.cities {
            let added = country.add_city(
                &city.name,
                city.center.x,
                city.center.y,
                city.station.x,
                city.station.y,
                city.residents,
                city.neighborhoods,
            );
            if !added {
                return Err(AtlasError::ConfigError {
                    field: "cities".to_string(),
                    message: format!("country file holds more than {MAX_CITIES} cities"),
                });
            }
        }
        tracing::debug!(
            country = %country.name(),
            cities = country.len(),
            "country loaded from file"
        );
        Ok(country)
    }
}
