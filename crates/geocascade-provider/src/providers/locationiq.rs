//! LocationIQ search (Nominatim-compatible response).

use crate::providers::format::ResponseFormat;
use crate::providers::rest::{CredentialParam, ProviderSpec, RestGeocoder};

pub const LOCATIONIQ: ProviderSpec = ProviderSpec {
    name: "locationiq",
    endpoint: "https://us1.locationiq.com/v1/search.php",
    credential: Some(CredentialParam {
        var: "LOCATIONIQ_KEY",
        param: "key",
    }),
    address_param: "q",
    params: &[("format", "json"), ("limit", "1")],
    headers: &[],
    format: ResponseFormat::Nominatim,
};

/// Create a LocationIQ geocoder.
///
/// Set the `LOCATIONIQ_KEY` environment variable.
pub fn new_locationiq_provider() -> RestGeocoder {
    RestGeocoder::new(LOCATIONIQ)
}
