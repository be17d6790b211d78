//! Vendor response shapes and coordinate extraction.
//!
//! Every provider answers with one of a handful of JSON layouts. Each
//! [`ResponseFormat`] variant knows how to decode its layout, apply the
//! vendor's success predicate and pull out the first candidate.

use crate::error::GeocodeError;
use crate::types::Coordinates;
use serde::Deserialize;

/// The JSON layout a provider responds with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// `{"status": "OK", "results": [{"geometry": {"location": {"lat", "lng"}}}]}`
    Google,
    /// Top-level array of `{"lat": "..", "lon": ".."}` with string coordinates.
    Nominatim,
    /// `{"data": [{"latitude", "longitude"}]}`
    Positionstack,
    /// `{"results": [{"geometry": {"lat", "lng"}}]}`
    OpenCage,
    /// `{"info": {"statuscode": 0}, "results": [{"locations": [{"latLng": {..}}]}]}`
    MapQuest,
}

impl ResponseFormat {
    /// Decode a response body and extract the first location.
    pub fn extract(self, body: &str) -> Result<Coordinates, GeocodeError> {
        match self {
            Self::Google => {
                let resp: GoogleResponse = serde_json::from_str(body)?;
                match resp.results.first() {
                    Some(first) if resp.status == "OK" => Ok(first.geometry.location.into()),
                    _ => Err(GeocodeError::VendorStatus {
                        status: resp.status,
                    }),
                }
            }
            Self::Nominatim => {
                let resp: Vec<NominatimPlace> = serde_json::from_str(body)?;
                let first = resp.first().ok_or(GeocodeError::NoResults)?;
                Ok(Coordinates::new(
                    parse_lenient(&first.lat),
                    parse_lenient(&first.lon),
                ))
            }
            Self::Positionstack => {
                let resp: PositionstackResponse = serde_json::from_str(body)?;
                let first = resp.data.first().ok_or(GeocodeError::NoResults)?;
                Ok(Coordinates::new(first.latitude, first.longitude))
            }
            Self::OpenCage => {
                let resp: OpenCageResponse = serde_json::from_str(body)?;
                let first = resp.results.first().ok_or(GeocodeError::NoResults)?;
                Ok(first.geometry.into())
            }
            Self::MapQuest => {
                let resp: MapQuestResponse = serde_json::from_str(body)?;
                if resp.info.statuscode != 0 {
                    return Err(GeocodeError::VendorStatus {
                        status: resp.info.statuscode.to_string(),
                    });
                }
                let location = resp
                    .results
                    .first()
                    .and_then(|result| result.locations.first())
                    .ok_or(GeocodeError::NoResults)?;
                Ok(location.lat_lng.into())
            }
        }
    }
}

/// Best-effort numeric conversion for vendors that send coordinates as
/// strings. Malformed input yields `0.0` rather than an error.
pub(crate) fn parse_lenient(value: &str) -> f64 {
    value.parse().unwrap_or(0.0)
}

// — Vendor response types for deserialization —

#[derive(Debug, Clone, Copy, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl From<LatLng> for Coordinates {
    fn from(value: LatLng) -> Self {
        Coordinates::new(value.lat, value.lng)
    }
}

#[derive(Debug, Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    results: Vec<GoogleResult>,
    #[serde(default)]
    status: String,
}

#[derive(Debug, Deserialize)]
struct GoogleResult {
    geometry: GoogleGeometry,
}

#[derive(Debug, Deserialize)]
struct GoogleGeometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    #[serde(default)]
    lat: String,
    #[serde(default)]
    lon: String,
}

#[derive(Debug, Deserialize)]
struct PositionstackResponse {
    #[serde(default)]
    data: Vec<PositionstackPlace>,
}

#[derive(Debug, Deserialize)]
struct PositionstackPlace {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct OpenCageResponse {
    #[serde(default)]
    results: Vec<OpenCageResult>,
}

#[derive(Debug, Deserialize)]
struct OpenCageResult {
    geometry: LatLng,
}

#[derive(Debug, Deserialize)]
struct MapQuestResponse {
    #[serde(default)]
    results: Vec<MapQuestResult>,
    #[serde(default)]
    info: MapQuestInfo,
}

#[derive(Debug, Default, Deserialize)]
struct MapQuestInfo {
    #[serde(default)]
    statuscode: i64,
}

#[derive(Debug, Deserialize)]
struct MapQuestResult {
    #[serde(default)]
    locations: Vec<MapQuestLocation>,
}

#[derive(Debug, Deserialize)]
struct MapQuestLocation {
    #[serde(rename = "latLng")]
    lat_lng: LatLng,
}
