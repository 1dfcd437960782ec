pub mod config;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, Command, CountryFile};
pub use domain::city::City;
pub use domain::country::{Country, MAX_CITIES};
pub use domain::point::Point;
pub use utils::error::{AtlasError, Result};
