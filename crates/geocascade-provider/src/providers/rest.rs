//! Generic REST geocoder.
//!
//! Every supported vendor is a single GET request with query parameters and
//! a JSON body, so one implementation driven by a [`ProviderSpec`] covers
//! them all. Adding a vendor is a new spec, not new control flow.

use crate::credentials::CredentialSource;
use crate::error::GeocodeError;
use crate::providers::format::ResponseFormat;
use crate::traits::Geocoder;
use crate::types::Coordinates;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::debug;

/// Where a provider's API key comes from and how it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialParam {
    /// Credential name, e.g. `GOOGLE_API_KEY`.
    pub var: &'static str,
    /// Query parameter carrying the key.
    pub param: &'static str,
}

/// Static description of one geocoding vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderSpec {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub credential: Option<CredentialParam>,
    /// Query parameter carrying the address.
    pub address_param: &'static str,
    /// Fixed query parameters sent on every request.
    pub params: &'static [(&'static str, &'static str)],
    pub headers: &'static [(&'static str, &'static str)],
    pub format: ResponseFormat,
}

/// A geocoder that speaks plain GET + JSON, configured by a [`ProviderSpec`].
pub struct RestGeocoder {
    spec: ProviderSpec,
    endpoint: String,
    client: Client,
}

impl RestGeocoder {
    /// Create a geocoder against the vendor's real endpoint.
    pub fn new(spec: ProviderSpec) -> Self {
        Self::with_endpoint(spec, spec.endpoint)
    }

    /// Create a geocoder against a different base URL (e.g. a mock server).
    pub fn with_endpoint(spec: ProviderSpec, endpoint: impl Into<String>) -> Self {
        Self {
            spec,
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn spec(&self) -> &ProviderSpec {
        &self.spec
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the GET request for an address.
    fn build_request(&self, address: &str, api_key: Option<&str>) -> RequestBuilder {
        let mut query: Vec<(&str, &str)> = Vec::with_capacity(self.spec.params.len() + 2);
        query.push((self.spec.address_param, address));
        if let (Some(credential), Some(key)) = (self.spec.credential, api_key) {
            query.push((credential.param, key));
        }
        query.extend_from_slice(self.spec.params);

        let mut request = self.client.get(&self.endpoint).query(&query);
        for (name, value) in self.spec.headers {
            request = request.header(*name, *value);
        }
        request
    }
}

#[async_trait]
impl Geocoder for RestGeocoder {
    fn name(&self) -> &str {
        self.spec.name
    }

    fn credential_var(&self) -> Option<&str> {
        self.spec.credential.map(|credential| credential.var)
    }

    async fn geocode(
        &self,
        address: &str,
        credentials: &dyn CredentialSource,
    ) -> Result<Coordinates, GeocodeError> {
        let api_key = match self.spec.credential {
            Some(credential) => Some(credentials.get(credential.var).ok_or_else(|| {
                GeocodeError::CredentialMissing {
                    var: credential.var.to_string(),
                }
            })?),
            None => None,
        };

        debug!(provider = self.spec.name, endpoint = %self.endpoint, "sending geocode request");

        let response = self
            .build_request(address, api_key.as_deref())
            .send()
            .await
            .map_err(GeocodeError::Transport)?;

        // The body decides success; vendors report errors in-band.
        let status = response.status();
        let body = response.text().await.map_err(GeocodeError::Transport)?;
        debug!(provider = self.spec.name, %status, bytes = body.len(), "received geocode response");

        self.spec.format.extract(&body)
    }
}
