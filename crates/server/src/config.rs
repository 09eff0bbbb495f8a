use ecobici::shared::geo::{Coordinate, InvalidCoordinate};
use std::{env, path::PathBuf};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

/// Distances are measured from here unless a request says otherwise.
pub const DEFAULT_REFERENCE: Coordinate = Coordinate {
    latitude: 19.4329043,
    longitude: -99.1355819,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ECOBICI_PORT must be a port number, got `{0}`")]
    Port(String),
    #[error("ECOBICI_REFERENCE: {0}")]
    Reference(#[from] InvalidCoordinate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Station feed to serve instead of the bundled one.
    pub data_path: Option<PathBuf>,
    pub reference: Coordinate,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: None,
            reference: DEFAULT_REFERENCE,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(port) = lookup("ECOBICI_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::Port(port))?;
        }
        if let Some(path) = lookup("ECOBICI_DATA_PATH") {
            config.data_path = Some(path.into());
        }
        if let Some(reference) = lookup("ECOBICI_REFERENCE") {
            config.reference = reference.parse()?;
        }
        Ok(config)
    }
}
