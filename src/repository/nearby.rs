use std::{borrow::Borrow, cmp::Reverse};

use rayon::prelude::*;

use crate::{
    repository::{OrderBy, Station},
    shared::geo::{Coordinate, Distance},
};

/// Smallest radius the nearby list can be narrowed to.
pub const MIN_RADIUS: Distance = Distance::from_meters(1000.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    pub radius: Distance,
    pub order: OrderBy,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            radius: MIN_RADIUS,
            order: OrderBy::default(),
        }
    }
}

impl Filter {
    pub fn new(radius: Distance, order: OrderBy) -> Self {
        Self { radius, order }
    }

    /// Radius in whole kilometers, anything below one counts as one.
    pub fn with_radius_km(mut self, kilometers: u32) -> Self {
        self.radius = Distance::from_kilometers(kilometers.max(1) as f64);
        self
    }

    pub fn with_order(mut self, order: OrderBy) -> Self {
        self.order = order;
        self
    }

    pub fn apply(&self, stations: &[Station]) -> Vec<Station> {
        filter_and_sort(stations, self.radius, self.order)
    }
}

/// Stores on every station its distance from `reference`.
pub fn annotate(reference: &Coordinate, stations: &mut [Station]) {
    stations
        .par_iter_mut()
        .for_each(|station| station.distance = Some(reference.distance(&station.coordinate)));
}

/// Stations no further than `radius` from the reference, ordered by `order`.
pub fn filter_and_sort(stations: &[Station], radius: Distance, order: OrderBy) -> Vec<Station> {
    let mut nearby: Vec<Station> = stations
        .iter()
        .filter(|station| station.is_within(radius))
        .cloned()
        .collect();
    sort_stations(&mut nearby, order);
    nearby
}

pub(crate) fn sort_stations<T: Borrow<Station>>(stations: &mut [T], order: OrderBy) {
    match order {
        OrderBy::Id => stations.sort_by_key(|station| station.borrow().id),
        OrderBy::Distance => stations.sort_by(|a, b| {
            distance_key(a.borrow()).total_cmp(&distance_key(b.borrow()))
        }),
        OrderBy::Bikes => stations.sort_by_key(|station| Reverse(station.borrow().bikes)),
        OrderBy::Slots => stations.sort_by_key(|station| station.borrow().slots),
    }
}

fn distance_key(station: &Station) -> f64 {
    station
        .distance
        .map(|distance| distance.as_meters())
        .unwrap_or(f64::INFINITY)
}
