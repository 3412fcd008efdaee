use thiserror::Error;

/// Errors raised outside of the calculation path.
///
/// Computing times never fails: unsolvable geometry degrades single entries
/// to [`INVALID_TIME`](crate::INVALID_TIME). These errors cover name lookups,
/// configuration loading and location validation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown calculation method: {0}")]
    UnknownMethod(String),
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),
    #[error("Unknown time name: {0}")]
    UnknownTimeName(String),
    #[error("Unknown time format: {0}")]
    UnknownTimeFormat(String),
    #[error("Invalid location: latitude {latitude}, longitude {longitude}")]
    InvalidLocation { latitude: f64, longitude: f64 },
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
