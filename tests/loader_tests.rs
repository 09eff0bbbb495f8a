use ecobici::feed::{self, Feed, LoadError};

const TWO_STATIONS: &str = r#"[
  {
    "id": 7,
    "district": "Centro",
    "lon": -99.1372,
    "lat": 19.4271,
    "bikes": 2,
    "slots": 13,
    "zip": 6090,
    "address": "Isabel la Católica",
    "addressNumber": "82",
    "nearbyStations": "6,8",
    "status": "OPN",
    "name": "Isabel la Católica - Regina",
    "stationType": "BIKE"
  },
  {
    "id": 3,
    "district": "Centro",
    "lon": -99.13425,
    "lat": 19.43047,
    "bikes": 11,
    "slots": 9,
    "zip": 6000,
    "address": "Av. 20 de Noviembre",
    "addressNumber": "8",
    "nearbyStations": "",
    "status": "CLS",
    "name": "20 de Noviembre - Venustiano Carranza",
    "stationType": "BIKE",
    "extra": true
  }
]"#;

#[test]
fn load_embedded_test() {
    let stations = feed::load().unwrap();
    if stations.is_empty() {
        panic!("stations should not be empty");
    }
    for station in stations.iter() {
        if station.name.is_empty() {
            panic!("name should never be empty");
        }
        if station.address.is_empty() {
            panic!("address should never be empty");
        }
        if station.distance.is_some() {
            panic!("distance should not be set before annotation");
        }
    }
}

#[test]
fn records_keep_feed_order_and_fields() {
    let stations = feed::from_str(TWO_STATIONS).unwrap();
    assert_eq!(stations.len(), 2);

    let first = &stations[0];
    assert_eq!(first.id, 7);
    assert_eq!(&*first.district, "Centro");
    assert_eq!(first.coordinate.latitude, 19.4271);
    assert_eq!(first.coordinate.longitude, -99.1372);
    assert_eq!(first.bikes, 2);
    assert_eq!(first.slots, 13);
    assert_eq!(first.zip, 6090);
    assert_eq!(&*first.address, "Isabel la Católica");
    assert_eq!(&*first.address_number, "82");
    assert_eq!(&*first.nearby_stations, "6,8");
    assert_eq!(&*first.status, "OPN");
    assert_eq!(&*first.name, "Isabel la Católica - Regina");
    assert_eq!(&*first.station_type, "BIKE");

    assert_eq!(stations[1].id, 3);
    assert_eq!(&*stations[1].status, "CLS");
}

#[test]
fn load_from_bytes_test() {
    let feed = Feed::new().from_bytes(TWO_STATIONS.as_bytes());
    assert_eq!(feed.stations().unwrap().len(), 2);
}

#[test]
fn empty_feed_test() {
    assert!(matches!(feed::from_str("[]"), Err(LoadError::Empty)));
}

#[test]
fn malformed_feed_test() {
    assert!(matches!(feed::from_str("[{"), Err(LoadError::Parse(_))));
}

#[test]
fn wrong_shape_test() {
    let missing_fields = r#"[{ "id": 1, "name": "Bolívar" }]"#;
    assert!(matches!(
        feed::from_str(missing_fields),
        Err(LoadError::Parse(_))
    ));
}

#[test]
fn negative_bikes_test() {
    let json = TWO_STATIONS.replacen("\"bikes\": 2", "\"bikes\": -2", 1);
    assert!(matches!(feed::from_str(&json), Err(LoadError::Parse(_))));
}

#[test]
fn load_from_path_test() {
    let path = format!("{}/data/bikes.json", env!("CARGO_MANIFEST_DIR"));
    let from_path = Feed::new().from_path(path).stations().unwrap();
    assert_eq!(from_path, feed::load().unwrap());
}
