use serde::{Deserialize, Serialize};

/// One record of the station feed, exactly as it appears in the JSON payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedStation {
    pub id: u32,
    pub district: String,
    pub lon: f64,
    pub lat: f64,
    pub bikes: u32,
    pub slots: u32,
    pub zip: u32,
    pub address: String,
    pub address_number: String,
    pub nearby_stations: String,
    pub status: String,
    pub name: String,
    pub station_type: String,
}
