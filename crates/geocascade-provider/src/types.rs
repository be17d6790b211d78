//! Common types shared by the geocoder trait and its implementations.

/// A latitude/longitude pair in degrees.
///
/// No range validation is performed; values are taken as the provider
/// returned them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
