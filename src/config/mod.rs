pub mod cli;
pub mod toml_config;

pub use cli::{CliConfig, Command};
pub use toml_config::CountryFile;
