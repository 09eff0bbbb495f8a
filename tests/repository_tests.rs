use ecobici::prelude::*;

const ZOCALO: Coordinate = Coordinate {
    latitude: 19.4329043,
    longitude: -99.1355819,
};

fn repository() -> Repository {
    Repository::new()
        .load_feed(&Feed::new())
        .unwrap()
        .with_reference(ZOCALO)
}

fn ids(stations: &[&Station]) -> Vec<u32> {
    stations.iter().map(|station| station.id).collect()
}

#[test]
fn near_default_filter_test() {
    let repository = repository();
    let nearby = repository.near(&Filter::default());
    assert_eq!(ids(&nearby), vec![4, 3, 1, 2, 6, 5, 7, 8]);
}

#[test]
fn near_each_order_test() {
    let repository = repository();
    let filter = Filter::default();

    let by_id = repository.near(&filter.with_order(OrderBy::Id));
    assert_eq!(ids(&by_id), vec![1, 2, 3, 4, 5, 6, 7, 8]);

    let by_bikes = repository.near(&filter.with_order(OrderBy::Bikes));
    assert_eq!(ids(&by_bikes), vec![8, 6, 3, 5, 1, 4, 7, 2]);

    let by_slots = repository.near(&filter.with_order(OrderBy::Slots));
    assert_eq!(ids(&by_slots), vec![8, 6, 5, 3, 7, 1, 4, 2]);
}

#[test]
fn near_wider_radius_test() {
    let repository = repository();
    let filter = Filter::default().with_order(OrderBy::Id);
    assert_eq!(repository.near(&filter.with_radius_km(2)).len(), 13);
    assert_eq!(repository.near(&filter.with_radius_km(3)).len(), 14);
    assert_eq!(repository.near(&filter.with_radius_km(10)).len(), 18);
}

#[test]
fn near_matches_pipeline_test() {
    let repository = repository();
    let filter = Filter::default()
        .with_radius_km(4)
        .with_order(OrderBy::Bikes);
    let from_repository: Vec<Station> = repository
        .near(&filter)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(from_repository, filter.apply(&repository.stations));
}

#[test]
fn near_before_annotation_is_empty() {
    let repository = Repository::new().load_feed(&Feed::new()).unwrap();
    assert!(repository.reference().is_none());
    assert!(repository.near(&Filter::default()).is_empty());
}

#[test]
fn station_by_id_test() {
    let repository = repository();
    let station = repository.station_by_id(8).unwrap();
    assert_eq!(&*station.name, "Bellas Artes");
    assert_eq!(station.nearby_station_ids(), vec![1, 9]);
    assert!(repository.station_by_id(404).is_none());
}

#[test]
fn reload_keeps_reference_test() {
    let mut repository = repository();
    let json = r#"[{
        "id": 99, "district": "Centro", "lon": -99.1356, "lat": 19.4330,
        "bikes": 1, "slots": 1, "zip": 6000, "address": "Plaza de la Constitución",
        "addressNumber": "1", "nearbyStations": "", "status": "OPN",
        "name": "Zócalo", "stationType": "BIKE"
    }]"#;
    repository
        .reload(&Feed::new().from_bytes(json.as_bytes()))
        .unwrap();

    assert_eq!(repository.len(), 1);
    assert_eq!(repository.reference(), Some(ZOCALO));
    assert!(repository.station_by_id(1).is_none());
    assert_eq!(ids(&repository.near(&Filter::default())), vec![99]);
}

#[test]
fn failed_reload_keeps_stations_test() {
    let mut repository = repository();
    let result = repository.reload(&Feed::new().from_bytes(b"[]".as_slice()));
    assert!(matches!(result, Err(LoadError::Empty)));
    assert_eq!(repository.len(), 18);
}
