//! Geocoder trait definition.

use crate::credentials::CredentialSource;
use crate::error::GeocodeError;
use crate::types::Coordinates;
use async_trait::async_trait;

/// Trait for geocoding provider implementations.
///
/// Geocoders handle communication with one vendor API (Google, Nominatim,
/// etc.) and normalize its response into a single [`Coordinates`] value.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Provider name (e.g., "google", "osm"). Unique within a registry.
    fn name(&self) -> &str;

    /// Name of the credential this provider reads, if it needs one.
    fn credential_var(&self) -> Option<&str>;

    /// Whether this provider needs an API key.
    fn requires_credential(&self) -> bool {
        self.credential_var().is_some()
    }

    /// Resolve an address to the first candidate location.
    ///
    /// Credentials are looked up at call time. A missing credential fails
    /// with [`GeocodeError::CredentialMissing`] without touching the network.
    async fn geocode(
        &self,
        address: &str,
        credentials: &dyn CredentialSource,
    ) -> Result<Coordinates, GeocodeError>;
}

// Compile-time check: Geocoder must be object-safe
const _: () = {
    fn _assert_object_safe(_: &dyn Geocoder) {}
};
