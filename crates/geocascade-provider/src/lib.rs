//! geocascade-provider: geocoding vendor abstraction and implementations.

pub mod credentials;
mod error;
pub mod providers;
pub mod traits;
pub mod types;

pub use credentials::{CredentialSource, EnvCredentials, StaticCredentials};
pub use error::GeocodeError;
pub use providers::format::ResponseFormat;
pub use providers::google::new_google_provider;
pub use providers::locationiq::new_locationiq_provider;
pub use providers::mapquest::new_mapquest_provider;
pub use providers::opencage::new_opencage_provider;
pub use providers::osm::new_osm_provider;
pub use providers::positionstack::new_positionstack_provider;
pub use providers::rest::{CredentialParam, ProviderSpec, RestGeocoder};
pub use providers::{BUILTIN_PROVIDERS, DEFAULT_PROVIDER};
pub use traits::Geocoder;
pub use types::Coordinates;
