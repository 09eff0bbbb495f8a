use std::{
    cmp,
    fmt::Display,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean earth radius used by the haversine formula.
pub(crate) const EARTH_RADIUS: Distance = Distance::from_kilometers(6371.0);

#[derive(Debug, Clone, Copy, Default)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 < 1000.0 {
            write!(f, "{:.0} m", self.0)
        } else {
            write!(f, "{:.2} km", self.as_kilometers())
        }
    }
}

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }

    /// Kilometers rounded towards positive infinity at the given number of
    /// decimals, the way distances are shown next to a station.
    pub fn as_kilometers_ceil(&self, decimals: i32) -> f64 {
        let scale = 10f64.powi(decimals);
        (self.0 / (1000.0 / scale)).ceil() / scale
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid coordinate `{0}`, expected `latitude,longitude`")]
pub struct InvalidCoordinate(pub String);

/// Parses `latitude,longitude` in degrees.
impl FromStr for Coordinate {
    type Err = InvalidCoordinate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidCoordinate(s.to_string());
        let (latitude, longitude) = s.split_once(',').ok_or_else(invalid)?;
        let latitude: f64 = latitude.trim().parse().map_err(|_| invalid())?;
        let longitude: f64 = longitude.trim().parse().map_err(|_| invalid())?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl Coordinate {
    /// Great-circle distance between two points.
    pub fn distance(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::sin(dist_lon / 2.0)
                * f64::sin(dist_lon / 2.0);
        // Rounding can push `a` past 1 near antipodes
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_meters(EARTH_RADIUS.as_meters() * c)
    }
}

#[test]
fn distance_test() {
    let coord_a = Coordinate {
        latitude: 48.85800943005911,
        longitude: 2.3514350059357927,
    };

    let coord_b = Coordinate {
        latitude: 51.5052389927712,
        longitude: -0.12495407345099824,
    };
    let d = coord_a.distance(&coord_b);
    assert!((d.as_kilometers() - 343.08).abs() < 0.5);
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_cmp_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(0.5);
    assert!(dist_a > dist_b)
}

#[test]
fn kilometers_round_up_test() {
    assert_eq!(Distance::from_meters(1234.0).as_kilometers_ceil(2), 1.24);
    assert_eq!(Distance::from_meters(1200.0).as_kilometers_ceil(2), 1.2);
}

#[test]
fn distance_display_test() {
    assert_eq!(Distance::from_meters(200.4).to_string(), "200 m");
    assert_eq!(Distance::from_meters(1500.0).to_string(), "1.50 km");
}

#[test]
fn coordinate_parse_test() {
    let coordinate: Coordinate = "19.4329043, -99.1355819".parse().unwrap();
    assert_eq!(coordinate, Coordinate::from((19.4329043, -99.1355819)));
    assert!("19.43".parse::<Coordinate>().is_err());
    assert!("north,west".parse::<Coordinate>().is_err());
}
