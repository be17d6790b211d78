//! OpenCage geocoding API.

use crate::providers::format::ResponseFormat;
use crate::providers::rest::{CredentialParam, ProviderSpec, RestGeocoder};

pub const OPENCAGE: ProviderSpec = ProviderSpec {
    name: "opencage",
    endpoint: "https://api.opencagedata.com/geocode/v1/json",
    credential: Some(CredentialParam {
        var: "OPENCAGE_KEY",
        param: "key",
    }),
    address_param: "q",
    params: &[("limit", "1")],
    headers: &[],
    format: ResponseFormat::OpenCage,
};

/// Create an OpenCage geocoder.
///
/// Set the `OPENCAGE_KEY` environment variable.
pub fn new_opencage_provider() -> RestGeocoder {
    RestGeocoder::new(OPENCAGE)
}
