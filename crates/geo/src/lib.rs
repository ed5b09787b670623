//! Geospatial primitives for the store locator.
//!
//! This crate provides:
//! - The [`Coordinate`] value type (decimal degrees)
//! - Haversine great-circle distance calculations
//!
//! # Example
//!
//! ```
//! use storefinder_geo::{haversine_distance, Coordinate};
//!
//! let nida = Coordinate::new(13.771447, 100.654466);
//! let lotus = Coordinate::new(13.768142, 100.643965);
//!
//! let distance_km = haversine_distance(&nida, &lotus);
//! assert!((distance_km - 1.20).abs() < 0.05);
//! ```

mod haversine;

pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// No range checking is performed here; distance calculations accept
    /// whatever they are given and out-of-range values propagate as NaN
    /// or meaningless results. Use [`Coordinate::is_valid`] when input
    /// comes from an untrusted source.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if the coordinate has in-range values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}
