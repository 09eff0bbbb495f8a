use std::collections::HashMap;

mod models;
mod nearby;
mod source;
pub use models::*;
pub use nearby::*;

use crate::{feed, shared::geo::Coordinate};

type IdToIndex = HashMap<u32, u32>;

/// One load of the station feed plus the reference point it was measured from.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub stations: Box<[Station]>,
    station_lookup: IdToIndex,
    reference: Option<Coordinate>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    /// Measures every station from `reference`.
    pub fn with_reference(mut self, reference: Coordinate) -> Self {
        self.annotate(reference);
        self
    }

    pub fn annotate(&mut self, reference: Coordinate) {
        annotate(&reference, &mut self.stations);
        self.reference = Some(reference);
    }

    /// Drops the current stations and loads them again from `feed`.
    /// The reference point, if any, is applied to the new stations.
    pub fn reload(&mut self, feed: &feed::Feed) -> Result<(), feed::Error> {
        let reference = self.reference;
        let mut repository = Self::new().load_feed(feed)?;
        if let Some(reference) = reference {
            repository.annotate(reference);
        }
        *self = repository;
        Ok(())
    }

    pub fn reference(&self) -> Option<Coordinate> {
        self.reference
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn station_by_id(&self, id: u32) -> Option<&Station> {
        self.station_lookup
            .get(&id)
            .map(|index| &self.stations[*index as usize])
    }

    /// Returns the stations within the filter radius in the filter order.
    pub fn near(&self, filter: &Filter) -> Vec<&Station> {
        let mut stations: Vec<&Station> = self
            .stations
            .iter()
            .filter(|station| station.is_within(filter.radius))
            .collect();
        nearby::sort_stations(&mut stations, filter.order);
        stations
    }
}
