use crate::{
    feed::{self, Feed},
    repository::{Repository, Station},
};
use std::{collections::HashMap, time::Instant};
use tracing::debug;

impl Repository {
    pub fn load_feed(mut self, feed: &Feed) -> Result<Self, feed::Error> {
        debug!("Loading stations...");
        let now = Instant::now();
        let mut station_lookup: HashMap<u32, u32> = HashMap::new();
        let mut stations: Vec<Station> = Vec::new();
        feed.stream_stations(|(i, station)| {
            // First occurrence wins for duplicated ids
            station_lookup.entry(station.id).or_insert(i as u32);
            stations.push(station);
        })?;
        self.stations = stations.into();
        self.station_lookup = station_lookup;
        self.reference = None;
        debug!(
            "Loading {} stations took {:?}",
            self.stations.len(),
            now.elapsed()
        );
        Ok(self)
    }
}
