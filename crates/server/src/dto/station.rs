use ecobici::{
    repository::{OrderBy, Station},
    shared::geo::Coordinate,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationDto {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub district: String,
    pub status: String,
    pub bikes: u32,
    pub slots: u32,
    pub coordinate: Coordinate,
    // Kilometers rounded up to two decimals
    pub distance_km: Option<f64>,
}

impl StationDto {
    pub fn from(station: &Station) -> Self {
        Self {
            id: station.id,
            name: station.name.to_string(),
            address: station.address.to_string(),
            district: station.district.to_string(),
            status: station.status.to_string(),
            bikes: station.bikes,
            slots: station.slots,
            coordinate: station.coordinate,
            distance_km: station
                .distance
                .map(|distance| distance.as_kilometers_ceil(2)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyDto {
    pub count: usize,
    pub radius_km: f64,
    pub order: String,
    pub reference: Coordinate,
    pub stations: Vec<StationDto>,
}

impl NearbyDto {
    pub fn from(stations: &[Station], radius_km: f64, order: OrderBy, reference: Coordinate) -> Self {
        Self {
            count: stations.len(),
            radius_km,
            order: order.to_string(),
            reference,
            stations: stations.iter().map(StationDto::from).collect(),
        }
    }
}
