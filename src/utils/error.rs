use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in field '{field}': {message}")]
    ConfigError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, AtlasError>;
