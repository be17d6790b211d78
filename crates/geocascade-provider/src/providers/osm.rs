//! OpenStreetMap Nominatim. Needs no API key, but the usage policy requires
//! an identifying `User-Agent`.

use crate::providers::format::ResponseFormat;
use crate::providers::rest::{ProviderSpec, RestGeocoder};

pub const USER_AGENT: &str = concat!("geocascade/", env!("CARGO_PKG_VERSION"));

pub const OSM: ProviderSpec = ProviderSpec {
    name: "osm",
    endpoint: "https://nominatim.openstreetmap.org/search",
    credential: None,
    address_param: "q",
    params: &[("format", "json"), ("limit", "1")],
    headers: &[("User-Agent", USER_AGENT)],
    format: ResponseFormat::Nominatim,
};

/// Create a Nominatim geocoder.
pub fn new_osm_provider() -> RestGeocoder {
    RestGeocoder::new(OSM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticCredentials;
    use crate::traits::Geocoder;
    use crate::types::Coordinates;
    use wiremock::matchers::{header, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_osm_needs_no_credential() {
        let p = new_osm_provider();
        assert_eq!(p.name(), "osm");
        assert!(!p.requires_credential());
    }

    #[tokio::test]
    async fn test_osm_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "1600 Amphitheatre Parkway"))
            .and(query_param("format", "json"))
            .and(query_param("limit", "1"))
            .and(header("User-Agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"lat":"37.4224857","lon":"-122.0855846","display_name":"Google Building 41"}]"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let p = RestGeocoder::with_endpoint(OSM, server.uri());
        let coords = p
            .geocode("1600 Amphitheatre Parkway", &StaticCredentials::new())
            .await
            .unwrap();
        assert_eq!(coords, Coordinates::new(37.4224857, -122.0855846));
    }
}
