use std::{fmt::Display, str::FromStr, sync::Arc};

use thiserror::Error;

use crate::{
    feed::models::FeedStation,
    shared::geo::{Coordinate, Distance},
};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Station {
    pub id: u32,
    pub name: Arc<str>,
    pub district: Arc<str>,
    pub address: Arc<str>,
    pub address_number: Arc<str>,
    pub status: Arc<str>,
    pub station_type: Arc<str>,
    pub coordinate: Coordinate,
    pub bikes: u32,
    pub slots: u32,
    pub zip: u32,
    // Comma separated station ids, kept as the feed wrote them
    pub nearby_stations: Arc<str>,
    /// Distance from the current reference point, `None` until annotated.
    pub distance: Option<Distance>,
}

impl Station {
    pub fn is_within(&self, radius: Distance) -> bool {
        self.distance.is_some_and(|distance| distance <= radius)
    }

    /// Ids listed in `nearby_stations`, skipping anything that is not a number.
    pub fn nearby_station_ids(&self) -> Vec<u32> {
        self.nearby_stations
            .split(',')
            .filter_map(|id| id.trim().parse().ok())
            .collect()
    }
}

impl From<FeedStation> for Station {
    fn from(value: FeedStation) -> Self {
        Self {
            id: value.id,
            name: value.name.into(),
            district: value.district.into(),
            address: value.address.into(),
            address_number: value.address_number.into(),
            status: value.status.into(),
            station_type: value.station_type.into(),
            coordinate: Coordinate {
                latitude: value.lat,
                longitude: value.lon,
            },
            bikes: value.bikes,
            slots: value.slots,
            zip: value.zip,
            nearby_stations: value.nearby_stations.into(),
            distance: None,
        }
    }
}

/// Sort key applied to the nearby station list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderBy {
    /// Ascending id.
    Id,
    /// Nearest first.
    #[default]
    Distance,
    /// Most bikes first.
    Bikes,
    /// Fewest free slots first.
    Slots,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown order `{0}`, expected one of id, distance, bikes, slots")]
pub struct UnknownOrder(pub String);

impl FromStr for OrderBy {
    type Err = UnknownOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "distance" => Ok(Self::Distance),
            "bikes" => Ok(Self::Bikes),
            "slots" => Ok(Self::Slots),
            _ => Err(UnknownOrder(s.to_string())),
        }
    }
}

impl Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderBy::Id => "id",
            OrderBy::Distance => "distance",
            OrderBy::Bikes => "bikes",
            OrderBy::Slots => "slots",
        };
        f.write_str(name)
    }
}
