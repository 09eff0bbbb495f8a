use std::{collections::HashSet, fs, io, path::PathBuf, sync::Arc};
use thiserror::Error;
use tracing::warn;

mod config;
pub mod models;
pub use config::*;
use models::*;

use crate::repository::Station;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Could not parse station feed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Station feed contains no stations")]
    Empty,
}

/// Failure of a station load.
pub type LoadError = Error;

#[derive(Debug, Default, Clone)]
pub struct Feed {
    source: Source,
}

impl Feed {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.source = Source::Path(path.into());
        self
    }

    pub fn from_bytes<B: Into<Arc<[u8]>>>(mut self, bytes: B) -> Self {
        self.source = Source::Bytes(bytes.into());
        self
    }

    /// Decodes every station of the feed.
    pub fn stations(&self) -> Result<Vec<Station>, self::Error> {
        match &self.source {
            Source::Embedded => from_str(EMBEDDED_STATIONS),
            Source::Path(path) => {
                let bytes = fs::read(path)?;
                from_slice(&bytes)
            }
            Source::Bytes(bytes) => from_slice(bytes),
        }
    }

    pub fn stream_stations<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, Station)),
    {
        self.stations()?.into_iter().enumerate().for_each(f);
        Ok(())
    }
}

/// Loads the stations bundled with the library.
pub fn load() -> Result<Vec<Station>, LoadError> {
    Feed::new().stations()
}

pub fn from_str(json: &str) -> Result<Vec<Station>, self::Error> {
    from_slice(json.as_bytes())
}

pub fn from_slice(bytes: &[u8]) -> Result<Vec<Station>, self::Error> {
    let records: Vec<FeedStation> = serde_json::from_slice(bytes)?;
    if records.is_empty() {
        return Err(self::Error::Empty);
    }

    let mut seen = HashSet::with_capacity(records.len());
    for record in records.iter() {
        if !seen.insert(record.id) {
            warn!("Station id {} appears more than once in the feed", record.id);
        }
    }

    Ok(records.into_iter().map(Station::from).collect())
}
