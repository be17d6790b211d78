//! positionstack forward geocoding.

use crate::providers::format::ResponseFormat;
use crate::providers::rest::{CredentialParam, ProviderSpec, RestGeocoder};

pub const POSITIONSTACK: ProviderSpec = ProviderSpec {
    name: "positionstack",
    endpoint: "http://api.positionstack.com/v1/forward",
    credential: Some(CredentialParam {
        var: "POSITIONSTACK_KEY",
        param: "access_key",
    }),
    address_param: "query",
    params: &[("limit", "1")],
    headers: &[],
    format: ResponseFormat::Positionstack,
};

/// Create a positionstack geocoder.
///
/// Set the `POSITIONSTACK_KEY` environment variable.
pub fn new_positionstack_provider() -> RestGeocoder {
    RestGeocoder::new(POSITIONSTACK)
}
