//! MapQuest geocoding API.

use crate::providers::format::ResponseFormat;
use crate::providers::rest::{CredentialParam, ProviderSpec, RestGeocoder};

pub const MAPQUEST: ProviderSpec = ProviderSpec {
    name: "mapquest",
    endpoint: "http://www.mapquestapi.com/geocoding/v1/address",
    credential: Some(CredentialParam {
        var: "MAPQUEST_KEY",
        param: "key",
    }),
    address_param: "location",
    params: &[],
    headers: &[],
    format: ResponseFormat::MapQuest,
};

/// Create a MapQuest geocoder.
///
/// Set the `MAPQUEST_KEY` environment variable.
pub fn new_mapquest_provider() -> RestGeocoder {
    RestGeocoder::new(MAPQUEST)
}
