//! Final result type emitted on a successful resolution.

use serde::Serialize;

/// The single value emitted by a successful run.
///
/// `provider` is always the provider that produced the coordinates, which
/// is not necessarily the one that was requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResult {
    pub provider: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeocodeResult {
    /// Render as indented JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
