use crate::constants::EARTH_RADIUS_METERS;
use crate::meters::Meters;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,

    /// Meters above sea level, if the point was sampled from an elevation model
    pub elevation: Option<f64>,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint {
            lat,
            lng,
            elevation: None,
        }
    }

    pub fn with_elevation(lat: f64, lng: f64, elevation: f64) -> Self {
        GeoPoint {
            lat,
            lng,
            elevation: Some(elevation),
        }
    }

    /// Elevation if present and usable, a NaN sample counts as missing
    pub fn elevation(&self) -> Option<f64> {
        self.elevation.filter(|elevation| !elevation.is_nan())
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> Meters {
        Meters::new(haversine_distance(self.lat, self.lng, other.lat, other.lng))
    }
}

pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lon1_rad = lon1.to_radians();
    let lat2_rad = lat2.to_radians();
    let lon2_rad = lon2.to_radians();

    let delta_lat = lat2_rad - lat1_rad;
    let delta_lon = lon2_rad - lon1_rad;

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}
