//! Google Maps Geocoding API.

use crate::providers::format::ResponseFormat;
use crate::providers::rest::{CredentialParam, ProviderSpec, RestGeocoder};

pub const GOOGLE: ProviderSpec = ProviderSpec {
    name: "google",
    endpoint: "https://maps.googleapis.com/maps/api/geocode/json",
    credential: Some(CredentialParam {
        var: "GOOGLE_API_KEY",
        param: "key",
    }),
    address_param: "address",
    params: &[],
    headers: &[],
    format: ResponseFormat::Google,
};

/// Create a Google geocoder.
///
/// Set the `GOOGLE_API_KEY` environment variable.
pub fn new_google_provider() -> RestGeocoder {
    RestGeocoder::new(GOOGLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticCredentials;
    use crate::traits::Geocoder;
    use crate::types::Coordinates;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_google_provider_name() {
        let p = new_google_provider();
        assert_eq!(p.name(), "google");
        assert_eq!(p.credential_var(), Some("GOOGLE_API_KEY"));
    }

    #[tokio::test]
    async fn test_google_request_and_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("address", "Eiffel Tower"))
            .and(query_param("key", "g-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"results":[{"geometry":{"location":{"lat":48.8583701,"lng":2.2944813}}}],"status":"OK"}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let p = RestGeocoder::with_endpoint(GOOGLE, server.uri());
        let creds = StaticCredentials::new().with("GOOGLE_API_KEY", "g-key");
        let coords = p.geocode("Eiffel Tower", &creds).await.unwrap();
        assert_eq!(coords, Coordinates::new(48.8583701, 2.2944813));
    }
}
